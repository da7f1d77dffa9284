//! Scene composition for the 3D preview.
//!
//! The scene is a fixed human bust plus the selected jewelry, built from a
//! handful of primitives. [`Scene::compose`] places them in world space,
//! projects them through the [`CameraState`] and flattens the result into
//! [`Shape`]s sorted far-to-near, so drawing them in order (painter's
//! algorithm) gives a plausible picture without a depth buffer.
//!
//! Tori are emitted as many short strokes, each sorted on its own, so the
//! front half of a spinning ring passes in front of the bust while the
//! back half is hidden behind it.

use std::collections::BTreeMap;

use glam::{Mat3, Mat4, Vec2, Vec3};
use serde::Serialize;

use crate::camera::CameraState;
use crate::hull::convex_hull;
use crate::selection::{JewelryType, Selection};
use crate::shape::{Rgb, Shape};

/// World-space origin of the jewelry group.
pub const JEWELRY_ORIGIN: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Bust skin tone.
pub const SKIN: Rgb = Rgb::from_hex(0xFD_BC_B4);

/// Shoulder garment color.
pub const GARMENT: Rgb = Rgb::from_hex(0xE6_E6_FA);

/// Backdrop behind the scene.
pub const BACKGROUND: Rgb = Rgb::from_hex(0xF7_F3_EC);

/// Strokes per torus.
const TORUS_SEGMENTS: usize = 64;

/// Samples per circular rim when building frustum silhouettes.
const RIM_SAMPLES: usize = 24;

/// How much the far half of a torus is darkened.
const TORUS_BACK_SHADE: f32 = 0.18;

/// Geometry of a single mesh, centered on its own origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere {
        radius: f32,
    },
    /// Ring lying in the local XY plane, around the local Z axis.
    Torus {
        major_radius: f32,
        minor_radius: f32,
    },
    /// Truncated cone along the local Y axis.
    Frustum {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
    },
    Cuboid {
        size: Vec3,
    },
}

/// A primitive placed in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mesh {
    pub primitive: Primitive,
    /// World-space center.
    pub position: Vec3,
    pub color: Rgb,
    /// Whether the idle animation rotates this mesh about its local Y axis.
    pub spins: bool,
}

impl Mesh {
    const fn fixed(primitive: Primitive, position: Vec3, color: Rgb) -> Self {
        Self {
            primitive,
            position,
            color,
            spins: false,
        }
    }

    const fn spinning(primitive: Primitive, position: Vec3, color: Rgb) -> Self {
        Self {
            primitive,
            position,
            color,
            spins: true,
        }
    }
}

/// The generic bust the jewelry is shown on.
#[must_use]
pub fn bust() -> Vec<Mesh> {
    vec![
        Mesh::fixed(
            Primitive::Frustum {
                radius_top: 1.2,
                radius_bottom: 1.8,
                height: 3.0,
            },
            Vec3::ZERO,
            SKIN,
        ),
        Mesh::fixed(
            Primitive::Sphere { radius: 1.0 },
            Vec3::new(0.0, 2.0, 0.0),
            SKIN,
        ),
        Mesh::fixed(
            Primitive::Cuboid {
                size: Vec3::new(3.0, 1.0, 1.5),
            },
            Vec3::new(0.0, -1.0, 0.0),
            GARMENT,
        ),
    ]
}

/// Meshes for the selected piece, in world space.
#[must_use]
pub fn jewelry(selection: &Selection) -> Vec<Mesh> {
    let metal = selection.material.color();
    let gem = selection.gemstone.color();
    let at = |x: f32, y: f32| JEWELRY_ORIGIN + Vec3::new(x, y, 0.0);

    match selection.jewelry_type {
        JewelryType::Ring => vec![
            Mesh::spinning(
                Primitive::Torus {
                    major_radius: 1.0,
                    minor_radius: 0.2,
                },
                at(0.0, 0.0),
                metal,
            ),
            Mesh::fixed(Primitive::Sphere { radius: 0.3 }, at(0.0, 0.0), gem),
        ],
        JewelryType::Necklace => vec![
            Mesh::spinning(
                Primitive::Torus {
                    major_radius: 2.0,
                    minor_radius: 0.05,
                },
                at(0.0, 0.0),
                metal,
            ),
            Mesh::fixed(Primitive::Sphere { radius: 0.2 }, at(0.0, -1.5), gem),
        ],
        JewelryType::Earrings => vec![
            Mesh::spinning(Primitive::Sphere { radius: 0.2 }, at(-1.5, 0.0), metal),
            Mesh::fixed(Primitive::Sphere { radius: 0.15 }, at(-1.5, -0.5), gem),
            Mesh::spinning(Primitive::Sphere { radius: 0.2 }, at(1.5, 0.0), metal),
            Mesh::fixed(Primitive::Sphere { radius: 0.15 }, at(1.5, -0.5), gem),
        ],
    }
}

/// Pixel size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Size used by the web preview and the CLI default.
    pub const PREVIEW: Self = Self::new(800.0, 500.0);

    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

/// World-to-screen mapping for one frame.
struct Projector {
    view: Mat4,
    view_proj: Mat4,
    viewport: Viewport,
    focal: f32,
}

impl Projector {
    fn new(camera: &CameraState, viewport: Viewport) -> Self {
        let view = camera.view();
        Self {
            view,
            view_proj: camera.projection(viewport.aspect()) * view,
            viewport,
            focal: camera.focal_length(viewport.height),
        }
    }

    /// Distance in front of the eye along the view direction.
    fn depth(&self, world: Vec3) -> f32 {
        -self.view.transform_point3(world).z
    }

    /// Screen position and depth, or `None` behind the near plane.
    fn project(&self, world: Vec3) -> Option<(Vec2, f32)> {
        let depth = self.depth(world);
        if depth <= CameraState::NEAR {
            return None;
        }
        let ndc = self.view_proj.project_point3(world);
        let screen = Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.width,
            (1.0 - ndc.y) * 0.5 * self.viewport.height,
        );
        Some((screen, depth))
    }

    /// On-screen size of `world_size` at `depth`.
    fn scale_at(&self, world_size: f32, depth: f32) -> f32 {
        world_size * self.focal / depth
    }
}

/// Shapes that must be drawn together at one depth.
struct Item {
    depth: f32,
    shapes: Vec<Shape>,
}

fn sphere_items(p: &Projector, center: Vec3, radius: f32, color: Rgb, out: &mut Vec<Item>) {
    let Some((screen, depth)) = p.project(center) else {
        return;
    };
    let r = p.scale_at(radius, depth);
    // A soft highlight up and to the left reads as a light source.
    let highlight = Shape::Circle {
        center: screen - Vec2::splat(r * 0.35),
        radius: r * 0.35,
        fill: color.lighten(0.45),
    };
    out.push(Item {
        depth,
        shapes: vec![
            Shape::Circle {
                center: screen,
                radius: r,
                fill: color,
            },
            highlight,
        ],
    });
}

#[allow(clippy::too_many_arguments)]
fn torus_items(
    p: &Projector,
    center: Vec3,
    rotation: Mat3,
    major_radius: f32,
    minor_radius: f32,
    color: Rgb,
    out: &mut Vec<Item>,
) {
    let center_depth = p.depth(center);
    #[allow(clippy::cast_precision_loss)]
    let ring = |i: usize| {
        let theta = std::f32::consts::TAU * (i % TORUS_SEGMENTS) as f32 / TORUS_SEGMENTS as f32;
        center + rotation * Vec3::new(major_radius * theta.cos(), major_radius * theta.sin(), 0.0)
    };

    for i in 0..TORUS_SEGMENTS {
        let (a, b) = (ring(i), ring(i + 1));
        let (Some((from, _)), Some((to, _))) = (p.project(a), p.project(b)) else {
            continue;
        };
        let depth = p.depth((a + b) * 0.5);
        let shade = if depth > center_depth {
            color.darken(TORUS_BACK_SHADE)
        } else {
            color
        };
        out.push(Item {
            depth,
            shapes: vec![Shape::Stroke {
                from,
                to,
                width: p.scale_at(minor_radius * 2.0, depth),
                color: shade,
            }],
        });
    }
}

/// Flat silhouette of a convex solid given world-space sample points.
fn hull_item(p: &Projector, center: Vec3, samples: &[Vec3], color: Rgb, out: &mut Vec<Item>) {
    let mut screen = Vec::with_capacity(samples.len());
    for &s in samples {
        let Some((point, _)) = p.project(s) else {
            // Partially behind the eye; skip rather than draw a wrong outline.
            return;
        };
        screen.push(point);
    }
    let points = convex_hull(&screen);
    if points.len() < 3 {
        return;
    }
    out.push(Item {
        depth: p.depth(center),
        shapes: vec![Shape::Polygon {
            points,
            fill: color,
        }],
    });
}

fn frustum_samples(center: Vec3, radius_top: f32, radius_bottom: f32, height: f32) -> Vec<Vec3> {
    let half = height / 2.0;
    let mut samples = Vec::with_capacity(RIM_SAMPLES * 2);
    for i in 0..RIM_SAMPLES {
        #[allow(clippy::cast_precision_loss)]
        let theta = std::f32::consts::TAU * i as f32 / RIM_SAMPLES as f32;
        let (sin, cos) = theta.sin_cos();
        samples.push(center + Vec3::new(radius_top * cos, half, radius_top * sin));
        samples.push(center + Vec3::new(radius_bottom * cos, -half, radius_bottom * sin));
    }
    samples
}

fn cuboid_samples(center: Vec3, size: Vec3) -> Vec<Vec3> {
    let h = size / 2.0;
    let mut corners = Vec::with_capacity(8);
    for sx in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            for sz in [-1.0, 1.0] {
                corners.push(center + Vec3::new(sx * h.x, sy * h.y, sz * h.z));
            }
        }
    }
    corners
}

fn mesh_items(p: &Projector, mesh: &Mesh, angle: f32, out: &mut Vec<Item>) {
    let rotation = if mesh.spins {
        Mat3::from_rotation_y(angle)
    } else {
        Mat3::IDENTITY
    };
    match mesh.primitive {
        // A sphere looks the same however it is rotated.
        Primitive::Sphere { radius } => sphere_items(p, mesh.position, radius, mesh.color, out),
        Primitive::Torus {
            major_radius,
            minor_radius,
        } => torus_items(
            p,
            mesh.position,
            rotation,
            major_radius,
            minor_radius,
            mesh.color,
            out,
        ),
        Primitive::Frustum {
            radius_top,
            radius_bottom,
            height,
        } => {
            let samples: Vec<Vec3> =
                frustum_samples(Vec3::ZERO, radius_top, radius_bottom, height)
                    .into_iter()
                    .map(|s| mesh.position + rotation * s)
                    .collect();
            hull_item(p, mesh.position, &samples, mesh.color, out);
        }
        Primitive::Cuboid { size } => {
            let samples: Vec<Vec3> = cuboid_samples(Vec3::ZERO, size)
                .into_iter()
                .map(|s| mesh.position + rotation * s)
                .collect();
            hull_item(p, mesh.position, &samples, mesh.color, out);
        }
    }
}

/// Every item of the frame, sorted far-to-near.
fn compose_items(
    selection: &Selection,
    camera: &CameraState,
    angle: f32,
    viewport: Viewport,
) -> Vec<Item> {
    let projector = Projector::new(camera, viewport);
    let mut items = Vec::new();
    for mesh in bust().iter().chain(jewelry(selection).iter()) {
        mesh_items(&projector, mesh, angle, &mut items);
    }
    // Stable, so equal depths keep bust-then-jewelry order.
    items.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    items
}

/// One rendered frame of the 3D preview.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    pub background: Rgb,
    /// Shapes in draw order (far to near).
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Compose the bust and `selection` as seen by `camera`, with the
    /// spinning meshes rotated by `angle` radians.
    #[must_use]
    pub fn compose(
        selection: &Selection,
        camera: &CameraState,
        angle: f32,
        viewport: Viewport,
    ) -> Self {
        let shapes = compose_items(selection, camera, angle, viewport)
            .into_iter()
            .flat_map(|item| item.shapes)
            .collect();
        Self {
            viewport,
            background: BACKGROUND,
            shapes,
        }
    }

    /// Number of shapes of each kind.
    #[must_use]
    pub fn kind_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for shape in &self.shapes {
            *counts.entry(shape.kind()).or_insert(0) += 1;
        }
        counts
    }
}

/// Machine-readable description of a composed frame.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSummary {
    pub selection: Selection,
    pub camera_distance: f32,
    pub angle: f32,
    pub viewport: Viewport,
    pub shape_count: usize,
    pub kinds: BTreeMap<&'static str, usize>,
}

impl SceneSummary {
    #[must_use]
    pub fn new(scene: &Scene, selection: Selection, camera: &CameraState, angle: f32) -> Self {
        Self {
            selection,
            camera_distance: camera.distance(),
            angle,
            viewport: scene.viewport,
            shape_count: scene.shapes.len(),
            kinds: scene.kind_counts(),
        }
    }
}
