//! Inline SVG rendering of composed shapes.

use dioxus::prelude::*;
use jewelfit_core::shape::polygon_points_attr;
use jewelfit_core::{JewelryType, SPRITE_SIZE, Scene, Shape, overlay_sprite};
use jewelfit_export::{OUTLINE_WIDTH, outline_color};

/// Render one shape as an SVG element.
///
/// Attributes match the snapshot serializer so the live view and a
/// downloaded snapshot look the same.
pub(crate) fn render_shape(shape: &Shape) -> Element {
    match shape {
        Shape::Circle {
            center,
            radius,
            fill,
        } => rsx! {
            circle {
                cx: "{center.x}",
                cy: "{center.y}",
                r: "{radius}",
                fill: "{fill}",
            }
        },
        Shape::Polygon { points, fill } => {
            let points = polygon_points_attr(points);
            let outline = outline_color(*fill);
            rsx! {
                polygon {
                    points: "{points}",
                    fill: "{fill}",
                    stroke: "{outline}",
                    stroke_width: "{OUTLINE_WIDTH}",
                    stroke_linejoin: "round",
                }
            }
        }
        Shape::Stroke {
            from,
            to,
            width,
            color,
        } => rsx! {
            line {
                x1: "{from.x}",
                y1: "{from.y}",
                x2: "{to.x}",
                y2: "{to.y}",
                stroke: "{color}",
                stroke_width: "{width}",
                stroke_linecap: "round",
            }
        },
    }
}

/// Props for the [`SceneView`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SceneViewProps {
    /// The frame to draw.
    scene: Scene,
}

/// Draws a composed 3D frame. The SVG scales to its container width.
#[component]
pub fn SceneView(props: SceneViewProps) -> Element {
    let w = props.scene.viewport.width;
    let h = props.scene.viewport.height;
    let background = props.scene.background;

    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 {w} {h}",
            class: "scene-canvas",
            "preserveAspectRatio": "xMidYMid meet",

            rect { width: "100%", height: "100%", fill: "{background}" }
            for shape in props.scene.shapes.iter() {
                {render_shape(shape)}
            }
        }
    }
}

/// Props for the [`SpriteView`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SpriteViewProps {
    jewelry_type: JewelryType,
}

/// The untinted overlay sprite for a jewelry type.
#[component]
pub fn SpriteView(props: SpriteViewProps) -> Element {
    let shapes = overlay_sprite(props.jewelry_type);
    let label = props.jewelry_type.label();

    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 {SPRITE_SIZE} {SPRITE_SIZE}",
            class: "sprite-canvas",
            "role": "img",
            "aria-label": "{label} overlay",

            for shape in shapes.iter() {
                {render_shape(shape)}
            }
        }
    }
}
