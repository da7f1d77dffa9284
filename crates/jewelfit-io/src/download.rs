//! Snapshot downloads via Blob URLs.
//!
//! Downloads are triggered by wrapping the document text in a `Blob` and
//! clicking a temporary `<a download>` element pointing at its object URL.
//! Requires a browser environment (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

use jewelfit_core::{Scene, Selection};
use jewelfit_export::SvgMetadata;

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// MIME type of SVG snapshots.
pub const SVG_MIME_TYPE: &str = "image/svg+xml";

/// File name of the snapshot for `selection`.
#[must_use]
pub fn snapshot_file_name(selection: &Selection) -> String {
    format!("{}.svg", selection.slug())
}

/// Compose the current frame and download it as an SVG snapshot.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if the browser refuses the download.
pub fn download_snapshot(scene: &Scene, selection: &Selection) -> Result<(), DownloadError> {
    let title = selection.to_string();
    let svg = jewelfit_export::to_svg(
        scene,
        &SvgMetadata {
            title: Some(&title),
            description: Some("Virtual JewelFit 3D snapshot"),
        },
    );
    let file_name = snapshot_file_name(selection);
    log::debug!("downloading snapshot {file_name} ({} bytes)", svg.len());
    trigger_download(&svg, &file_name, SVG_MIME_TYPE)
}

/// Save `data` to the user's downloads as `filename`.
///
/// Wraps the text in a `Blob`, points a detached `<a download>` at a
/// temporary object URL and clicks it. The URL is revoked afterwards.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if the page has no document or body,
/// or if creating the `Blob`, its URL or the anchor fails.
pub fn trigger_download(data: &str, filename: &str, mime_type: &str) -> Result<(), DownloadError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| DownloadError::JsError("no document to download from".into()))?;
    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("document has no body".into()))?;

    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(
        &js_sys::Array::of1(&JsValue::from_str(data)),
        &options,
    )?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let link = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| DownloadError::JsError("<a> is not an anchor element".into()))?;
    link.set_href(&url);
    link.set_download(filename);
    body.append_child(&link)?;
    link.click();

    // Best effort once the click has gone through.
    link.remove();
    if let Err(e) = web_sys::Url::revoke_object_url(&url) {
        log::debug!("could not revoke snapshot URL: {e:?}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use jewelfit_core::{Gemstone, JewelryType, Material};

    use super::*;

    #[test]
    fn snapshot_name_spells_out_the_selection() {
        let selection = Selection::new(JewelryType::Ring, Material::RoseGold, Gemstone::Diamond);
        assert_eq!(
            snapshot_file_name(&selection),
            "jewelfit-ring-rose-gold-diamond.svg"
        );
    }

    #[test]
    fn default_snapshot_name() {
        assert_eq!(
            snapshot_file_name(&Selection::default()),
            "jewelfit-earrings-gold-ruby.svg"
        );
    }
}
