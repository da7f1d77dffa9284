//! jewelfit-export: Pure snapshot serializers (sans-IO)
//!
//! Converts composed scenes into output formats. Currently supports SVG.

pub mod svg;

pub use svg::{OUTLINE_WIDTH, SvgMetadata, outline_color, to_svg};
