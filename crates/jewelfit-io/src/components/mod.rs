//! Dioxus UI components for jewelfit.
//!
//! Provides the page header, the view tabs, the customization panel and
//! the two try-on views with their upload prompt and SVG renderers.

mod customization_panel;
mod header;
mod photo_mode;
mod scene_view;
mod tab_navigation;
mod three_d_mode;
mod upload;

pub use customization_panel::CustomizationPanel;
pub use header::Header;
pub use photo_mode::PhotoMode;
pub use scene_view::{SceneView, SpriteView};
pub use tab_navigation::TabNavigation;
pub use three_d_mode::ThreeDMode;
pub use upload::UploadPrompt;
