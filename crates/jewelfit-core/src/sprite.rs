//! The 2D overlay sprite placed on an uploaded photo.
//!
//! Sprites are drawn in gold tones only; the photo view tints them per
//! material with [`hue_filter`](crate::overlay::hue_filter).

use glam::Vec2;

use crate::selection::JewelryType;
use crate::shape::{Rgb, Shape};

/// Side length of the square sprite box, in sprite units.
pub const SPRITE_SIZE: f32 = 80.0;

const GOLD: Rgb = Rgb::from_hex(0xFF_D7_00);
const GOLD_DEEP: Rgb = Rgb::from_hex(0xC9_A2_27);
const SPARKLE: Rgb = Rgb::from_hex(0xFF_FF_FF);

/// Points on a circular arc from `start` to `end` radians, inclusive.
fn arc(center: Vec2, radius: f32, start: f32, end: f32, steps: usize) -> Vec<Vec2> {
    (0..=steps)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = start + (end - start) * i as f32 / steps as f32;
            center + radius * Vec2::new(t.cos(), t.sin())
        })
        .collect()
}

fn polyline(points: &[Vec2], width: f32, color: Rgb, out: &mut Vec<Shape>) {
    out.extend(points.windows(2).map(|w| Shape::Stroke {
        from: w[0],
        to: w[1],
        width,
        color,
    }));
}

fn gem(center: Vec2, radius: f32, out: &mut Vec<Shape>) {
    out.push(Shape::Circle {
        center,
        radius,
        fill: GOLD_DEEP,
    });
    out.push(Shape::Circle {
        center: center - Vec2::splat(radius * 0.3),
        radius: radius * 0.3,
        fill: SPARKLE,
    });
}

fn earrings() -> Vec<Shape> {
    let mut out = Vec::new();
    for x in [22.0, 58.0] {
        out.push(Shape::Circle {
            center: Vec2::new(x, 26.0),
            radius: 7.0,
            fill: GOLD,
        });
        polyline(
            &[Vec2::new(x, 33.0), Vec2::new(x, 44.0)],
            2.0,
            GOLD_DEEP,
            &mut out,
        );
        gem(Vec2::new(x, 51.0), 6.0, &mut out);
    }
    out
}

fn necklace() -> Vec<Shape> {
    use std::f32::consts::PI;
    let mut out = Vec::new();
    // Chain hangs as the lower half of a circle.
    let chain = arc(Vec2::new(40.0, 14.0), 30.0, 0.15 * PI, 0.85 * PI, 24);
    polyline(&chain, 2.5, GOLD, &mut out);
    polyline(
        &[Vec2::new(40.0, 44.0), Vec2::new(40.0, 52.0)],
        2.0,
        GOLD_DEEP,
        &mut out,
    );
    gem(Vec2::new(40.0, 60.0), 8.0, &mut out);
    out
}

fn ring() -> Vec<Shape> {
    use std::f32::consts::TAU;
    let mut out = Vec::new();
    let band = arc(Vec2::new(40.0, 48.0), 20.0, 0.0, TAU, 40);
    polyline(&band, 6.0, GOLD, &mut out);
    out.push(Shape::Circle {
        center: Vec2::new(40.0, 26.0),
        radius: 4.0,
        fill: GOLD,
    });
    gem(Vec2::new(40.0, 20.0), 9.0, &mut out);
    out
}

/// Shapes of the overlay sprite for `jewelry`, inside a
/// [`SPRITE_SIZE`]-square box with the origin at its top-left corner.
#[must_use]
pub fn overlay_sprite(jewelry: JewelryType) -> Vec<Shape> {
    match jewelry {
        JewelryType::Earrings => earrings(),
        JewelryType::Necklace => necklace(),
        JewelryType::Ring => ring(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(shape: &Shape) -> (Vec2, Vec2) {
        match shape {
            Shape::Circle { center, radius, .. } => {
                (*center - Vec2::splat(*radius), *center + Vec2::splat(*radius))
            }
            Shape::Polygon { points, .. } => points.iter().fold(
                (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
                |(lo, hi), p| (lo.min(*p), hi.max(*p)),
            ),
            Shape::Stroke { from, to, width, .. } => {
                let pad = Vec2::splat(width / 2.0);
                (from.min(*to) - pad, from.max(*to) + pad)
            }
        }
    }

    #[test]
    fn sprites_fit_in_their_box() {
        for jewelry in JewelryType::ALL {
            let shapes = overlay_sprite(jewelry);
            assert!(!shapes.is_empty(), "{jewelry} has no sprite");
            for shape in &shapes {
                let (lo, hi) = bounds(shape);
                assert!(lo.x >= 0.0 && lo.y >= 0.0, "{jewelry}: {shape:?} leaves the box");
                assert!(
                    hi.x <= SPRITE_SIZE && hi.y <= SPRITE_SIZE,
                    "{jewelry}: {shape:?} leaves the box"
                );
            }
        }
    }

    #[test]
    fn sprites_are_distinct_per_type() {
        let e = overlay_sprite(JewelryType::Earrings);
        let n = overlay_sprite(JewelryType::Necklace);
        let r = overlay_sprite(JewelryType::Ring);
        assert_ne!(e, n);
        assert_ne!(n, r);
        assert_ne!(e, r);
    }

    #[test]
    fn earrings_are_a_mirrored_pair() {
        let shapes = overlay_sprite(JewelryType::Earrings);
        let (left, right): (Vec<_>, Vec<_>) = shapes
            .iter()
            .map(|s| bounds(s).0.x)
            .partition(|x| *x < SPRITE_SIZE / 2.0);
        assert_eq!(left.len(), right.len());
    }

    #[test]
    fn sprites_use_gold_tones() {
        for jewelry in JewelryType::ALL {
            let shapes = overlay_sprite(jewelry);
            assert!(shapes.iter().any(|s| s.color() == GOLD));
        }
    }
}
