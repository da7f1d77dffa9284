//! Flat 2D shapes shared by the scene composer and the overlay sprites.
//!
//! Everything the UI draws is one of three primitives in screen space:
//! filled circles, filled convex polygons, and round-capped strokes.
//! Renderers (inline SVG in the browser, the `svg` crate for snapshots)
//! only need to understand these.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An sRGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Blend toward white by `amount` (0.0 = unchanged, 1.0 = white).
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        self.mix(Self::new(255, 255, 255), amount)
    }

    /// Blend toward black by `amount` (0.0 = unchanged, 1.0 = black).
    #[must_use]
    pub fn darken(self, amount: f32) -> Self {
        self.mix(Self::new(0, 0, 0), amount)
    }

    fn mix(self, other: Self, amount: f32) -> Self {
        let t = amount.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| {
            let v = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                v.round().clamp(0.0, 255.0) as u8
            }
        };
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A screen-space shape, ready to draw.
///
/// Coordinates are in the pixel space of whatever viewport produced the
/// shape, with the origin at the top-left and `y` pointing down.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A filled disc.
    Circle { center: Vec2, radius: f32, fill: Rgb },
    /// A filled convex polygon, vertices in order.
    Polygon { points: Vec<Vec2>, fill: Rgb },
    /// A straight segment with round caps.
    Stroke {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgb,
    },
}

impl Shape {
    /// Short lowercase name of the variant, used in summaries.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Circle { .. } => "circle",
            Self::Polygon { .. } => "polygon",
            Self::Stroke { .. } => "stroke",
        }
    }

    /// The color this shape is painted with.
    #[must_use]
    pub const fn color(&self) -> Rgb {
        match self {
            Self::Circle { fill, .. } | Self::Polygon { fill, .. } => *fill,
            Self::Stroke { color, .. } => *color,
        }
    }
}

/// Format polygon vertices as an SVG `points` attribute (`"x,y x,y ..."`).
///
/// Coordinates are rounded to two decimals, which is well below a pixel.
#[must_use]
pub fn polygon_points_attr(points: &[Vec2]) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(points.len() * 12);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:.2},{:.2}", p.x, p.y);
    }
    out
}
