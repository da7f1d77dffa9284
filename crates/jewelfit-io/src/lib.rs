//! jewelfit-io: Browser I/O and Dioxus component library.
//!
//! Handles photo uploads as Blob URLs, snapshot downloads, and provides
//! the UI components for the jewelfit web application.

pub mod components;
pub mod download;
pub mod image_url;

pub use components::{
    CustomizationPanel, Header, PhotoMode, SceneView, SpriteView, TabNavigation, ThreeDMode,
    UploadPrompt,
};
pub use image_url::{ImageUrlError, UploadedImage};
