//! Blob URLs for uploaded photos.
//!
//! The photo view never decodes uploads itself. File bytes are wrapped in
//! a `Blob` and handed to an `<img>` through an object URL, so the
//! browser's own decoder decides what can be shown.

use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur while turning file bytes into a Blob URL.
#[derive(Debug, thiserror::Error)]
pub enum ImageUrlError {
    /// The file was empty.
    #[error("uploaded file is empty")]
    Empty,

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for ImageUrlError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// A displayable uploaded photo.
///
/// Owns the object URL until it is passed to [`revoke_blob_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub url: String,
}

/// Wrap `bytes` in a Blob and return an object URL for it.
///
/// When `mime_type` is `None` the Blob is untyped and the browser sniffs
/// the content itself. The returned URL must be revoked via
/// [`revoke_blob_url`] when no longer needed.
///
/// # Errors
///
/// Returns [`ImageUrlError::Empty`] for an empty file.
/// Returns [`ImageUrlError::JsError`] if Blob or URL creation fails.
pub fn bytes_to_blob_url(bytes: &[u8], mime_type: Option<&str>) -> Result<String, ImageUrlError> {
    if bytes.is_empty() {
        return Err(ImageUrlError::Empty);
    }

    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    if let Some(mime_type) = mime_type {
        opts.set_type(mime_type);
    }
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    Ok(web_sys::Url::create_object_url_with_blob(&blob)?)
}

/// Revoke a Blob URL previously created by [`bytes_to_blob_url`].
///
/// Best-effort: failures are silently ignored since the URL may have
/// already been revoked.
pub fn revoke_blob_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
