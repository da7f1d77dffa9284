//! Upload bookkeeping: stale-result detection and MIME sniffing.
//!
//! Reading a picked file is asynchronous. Each read is issued a
//! [`UploadTicket`] by an [`UploadGate`]; by the time the bytes arrive a
//! newer upload may have started or the photo view may have been torn
//! down, and the result must then be dropped instead of applied.

use image::ImageFormat;

use crate::overlay::OverlayState;

/// Proof that an upload was started at a particular generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket(u64);

/// Issues upload tickets and decides whether a finished upload still counts.
#[derive(Debug, Default)]
pub struct UploadGate {
    generation: u64,
}

impl UploadGate {
    #[must_use]
    pub const fn new() -> Self {
        Self { generation: 0 }
    }

    /// Start a new upload, invalidating every ticket issued before it.
    #[must_use = "the ticket is needed to apply the upload result"]
    pub const fn begin_upload(&mut self) -> UploadTicket {
        self.generation = self.generation.wrapping_add(1);
        UploadTicket(self.generation)
    }

    /// Invalidate all outstanding tickets without starting a new upload.
    pub const fn cancel_uploads(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Whether `ticket` belongs to the most recent, uncancelled upload.
    #[must_use]
    pub const fn is_current(&self, ticket: UploadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply a finished upload to `overlay` if `ticket` is still current.
    ///
    /// On success returns the photo it replaced, if any. A stale result is
    /// not applied and comes back as `Err` so the caller can release it.
    ///
    /// # Errors
    ///
    /// Returns `Err(image)` when a newer upload started or
    /// [`cancel_uploads`](Self::cancel_uploads) ran after `ticket` was issued.
    pub fn finish_upload<I>(
        &self,
        ticket: UploadTicket,
        overlay: &mut OverlayState<I>,
        image: I,
    ) -> Result<Option<I>, I> {
        if self.is_current(ticket) {
            Ok(overlay.replace_image(image))
        } else {
            Err(image)
        }
    }
}

/// Best-effort MIME type for an uploaded image.
///
/// Sniffs the magic bytes first, then falls back to the file extension.
/// Returns `None` when neither is recognized; the browser still gets the
/// bytes and decides for itself whether it can display them.
#[must_use]
pub fn sniff_mime_type(bytes: &[u8], file_name: &str) -> Option<&'static str> {
    image::guess_format(bytes)
        .ok()
        .or_else(|| {
            file_name
                .rsplit_once('.')
                .and_then(|(_, ext)| ImageFormat::from_extension(ext))
        })
        .map(|format| format.to_mime_type())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The 8-byte PNG signature followed by the start of an IHDR chunk.
    const PNG_MAGIC: &[u8] = &[
        0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13, b'I', b'H', b'D', b'R',
    ];

    #[test]
    fn latest_ticket_is_current() {
        let mut gate = UploadGate::new();
        let first = gate.begin_upload();
        assert!(gate.is_current(first));
        let second = gate.begin_upload();
        assert!(!gate.is_current(first), "older upload must be stale");
        assert!(gate.is_current(second));
    }

    #[test]
    fn cancel_invalidates_outstanding_ticket() {
        let mut gate = UploadGate::new();
        let ticket = gate.begin_upload();
        gate.cancel_uploads();
        assert!(!gate.is_current(ticket));
        // A fresh upload after cancelling works normally.
        let next = gate.begin_upload();
        assert!(gate.is_current(next));
    }

    #[test]
    fn stale_finish_is_handed_back() {
        let mut gate = UploadGate::new();
        let mut overlay = OverlayState::new();
        let slow = gate.begin_upload();
        let fast = gate.begin_upload();

        assert_eq!(gate.finish_upload(fast, &mut overlay, "fast"), Ok(None));
        assert_eq!(gate.finish_upload(slow, &mut overlay, "slow"), Err("slow"));
        assert_eq!(overlay.image(), Some(&"fast"));
    }

    #[test]
    fn current_finish_returns_replaced_photo() {
        let mut gate = UploadGate::new();
        let mut overlay = OverlayState::new();
        let first = gate.begin_upload();
        assert_eq!(gate.finish_upload(first, &mut overlay, "first"), Ok(None));
        let second = gate.begin_upload();
        assert_eq!(
            gate.finish_upload(second, &mut overlay, "second"),
            Ok(Some("first"))
        );
        assert_eq!(overlay.image(), Some(&"second"));
    }

    #[test]
    fn mime_type_from_extension_alone() {
        assert_eq!(sniff_mime_type(&[0, 1, 2], "shot.png"), Some("image/png"));
    }

    #[test]
    fn sniffs_png_from_magic_bytes() {
        // The extension is wrong on purpose: bytes win.
        assert_eq!(sniff_mime_type(PNG_MAGIC, "photo.jpg"), Some("image/png"));
    }

    #[test]
    fn falls_back_to_extension() {
        assert_eq!(sniff_mime_type(b"not an image", "me.JPEG"), Some("image/jpeg"));
        assert_eq!(sniff_mime_type(b"???", "me.webp"), Some("image/webp"));
    }

    #[test]
    fn unknown_input_has_no_mime_type() {
        assert_eq!(sniff_mime_type(b"plain text", "notes.txt"), None);
        assert_eq!(sniff_mime_type(&[], "no-extension"), None);
    }
}
