//! SVG export serializer.
//!
//! Converts a composed [`Scene`] into a standalone SVG document using the
//! [`svg`] crate for document construction and XML escaping.
//!
//! The document is sized to the scene's viewport, starts with a
//! background `<rect>` and then emits exactly one element per shape, in
//! draw order: `<circle>` for circles, `<polygon>` for polygons and
//! `<line>` (round caps) for strokes.
//!
//! Optional [`SvgMetadata`] embeds `<title>` and `<desc>` elements so
//! downloaded snapshots identify the selection they show.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use svg::Document;
use svg::node::Text;
use svg::node::element::{Circle, Description, Line, Polygon, Rectangle, Title};

use jewelfit_core::shape::polygon_points_attr;
use jewelfit_core::{Rgb, Scene, Shape};

/// How much darker polygon outlines are than their fill.
pub const OUTLINE_DARKEN: f32 = 0.2;

/// Polygon outline width in pixels.
pub const OUTLINE_WIDTH: f32 = 1.0;

/// Metadata to embed in the SVG document.
///
/// Both fields are optional. When present, a `<title>` and/or `<desc>`
/// element is emitted immediately after the opening `<svg>` tag.
#[derive(Debug, Clone, Default)]
pub struct SvgMetadata<'a> {
    /// Document title, emitted as `<title>`.
    ///
    /// Typically the selection, e.g. "Gold Earrings with Ruby".
    pub title: Option<&'a str>,

    /// Document description, emitted as `<desc>`.
    pub description: Option<&'a str>,
}

/// Outline color used for a polygon filled with `fill`.
#[must_use]
pub fn outline_color(fill: Rgb) -> Rgb {
    fill.darken(OUTLINE_DARKEN)
}

fn circle(center: glam::Vec2, radius: f32, fill: Rgb) -> Circle {
    Circle::new()
        .set("cx", center.x)
        .set("cy", center.y)
        .set("r", radius)
        .set("fill", fill.to_string())
}

/// Serialize a scene into an SVG document string.
///
/// # Examples
///
/// ```
/// use jewelfit_core::{CameraState, Scene, Selection, Viewport};
/// use jewelfit_export::{SvgMetadata, to_svg};
///
/// let selection = Selection::default();
/// let scene = Scene::compose(&selection, &CameraState::new(), 0.0, Viewport::PREVIEW);
/// let title = selection.to_string();
/// let metadata = SvgMetadata {
///     title: Some(&title),
///     ..SvgMetadata::default()
/// };
/// let svg = to_svg(&scene, &metadata);
/// assert!(svg.contains("<title>Gold Earrings with Ruby</title>"));
/// assert!(svg.contains("<circle"));
/// ```
#[must_use]
pub fn to_svg(scene: &Scene, metadata: &SvgMetadata<'_>) -> String {
    let w = scene.viewport.width;
    let h = scene.viewport.height;
    let mut doc = Document::new()
        .set("width", w)
        .set("height", h)
        .set("viewBox", (0, 0, w, h));

    if let Some(title) = metadata.title {
        doc = doc.add(Title::new(title));
    }

    if let Some(description) = metadata.description {
        doc = doc.add(Description::new().add(Text::new(description)));
    }

    doc = doc.add(
        Rectangle::new()
            .set("width", "100%")
            .set("height", "100%")
            .set("fill", scene.background.to_string()),
    );

    for shape in &scene.shapes {
        doc = match shape {
            Shape::Circle {
                center,
                radius,
                fill,
            } => doc.add(circle(*center, *radius, *fill)),
            Shape::Polygon { points, fill } => doc.add(
                Polygon::new()
                    .set("points", polygon_points_attr(points))
                    .set("fill", fill.to_string())
                    .set("stroke", outline_color(*fill).to_string())
                    .set("stroke-width", OUTLINE_WIDTH)
                    .set("stroke-linejoin", "round"),
            ),
            Shape::Stroke {
                from,
                to,
                width,
                color,
            } => doc.add(
                Line::new()
                    .set("x1", from.x)
                    .set("y1", from.y)
                    .set("x2", to.x)
                    .set("y2", to.y)
                    .set("stroke", color.to_string())
                    .set("stroke-width", *width)
                    .set("stroke-linecap", "round"),
            ),
        };
    }

    // The svg crate omits the XML declaration, so we prepend it.
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{doc}\n")
}
