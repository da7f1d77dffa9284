//! jewelfit-core: Try-on state and scene composition (sans-IO).
//!
//! Holds everything the try-on page decides without touching the browser:
//! the selection model, the photo overlay and camera state machines, the
//! idle spin, upload staleness tracking, the overlay sprite and the 3D
//! scene composer that turns a selection into depth-sorted 2D shapes.
//!
//! This crate has **no I/O dependencies**. Browser interaction (file
//! reads, Blob URLs, downloads, rendering) lives in `jewelfit-io`.

pub mod camera;
pub mod hull;
pub mod overlay;
pub mod scene;
pub mod selection;
pub mod shape;
pub mod spin;
pub mod sprite;
pub mod upload;

pub use camera::CameraState;
pub use overlay::{hue_filter, Bounds, OverlayState, Position};
pub use scene::{Scene, SceneSummary, Viewport};
pub use selection::{Gemstone, JewelryType, Material, ParseSelectionError, Selection, ViewMode};
pub use shape::{Rgb, Shape};
pub use spin::SpinState;
pub use sprite::{overlay_sprite, SPRITE_SIZE};
pub use upload::{sniff_mime_type, UploadGate, UploadTicket};
