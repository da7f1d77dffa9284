//! 2D convex hull (Andrew's monotone chain).
//!
//! Projecting a convex solid and taking the hull of its projected sample
//! points gives its silhouette, which is how frustums and boxes become
//! flat polygons.

use glam::Vec2;

/// Z component of `(a - o) × (b - o)`; positive for a left turn.
fn cross(o: Vec2, a: Vec2, b: Vec2) -> f32 {
    (a - o).perp_dot(b - o)
}

/// Convex hull of `points`, counter-clockwise in a y-up frame.
///
/// Collinear points on the boundary are dropped. Fewer than three
/// distinct points are returned as-is (deduplicated and sorted).
#[must_use]
pub fn convex_hull(points: &[Vec2]) -> Vec<Vec2> {
    let mut pts: Vec<Vec2> = points.iter().copied().filter(|p| p.is_finite()).collect();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }

    let mut lower: Vec<Vec2> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Vec2> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    // The last point of each chain is the first point of the other.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_with_interior_point() {
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(0.5, 0.5),
        ];
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&Vec2::new(0.5, 0.5)));
    }

    #[test]
    fn collinear_edge_points_are_dropped() {
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(1.0, 2.0),
        ];
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 3);
        assert!(!hull.contains(&Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn hull_is_counter_clockwise() {
        let pts = [
            Vec2::new(3.0, 0.0),
            Vec2::new(0.0, 3.0),
            Vec2::new(-3.0, 0.0),
            Vec2::new(0.0, -3.0),
        ];
        let hull = convex_hull(&pts);
        let twice_area: f32 = hull
            .iter()
            .zip(hull.iter().cycle().skip(1))
            .map(|(a, b)| a.perp_dot(*b))
            .sum();
        assert!(twice_area > 0.0, "expected CCW winding, got {twice_area}");
        assert!((twice_area / 2.0 - 18.0).abs() < 1e-5);
    }

    #[test]
    fn degenerate_inputs_pass_through() {
        assert!(convex_hull(&[]).is_empty());
        let one = [Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)];
        assert_eq!(convex_hull(&one), vec![Vec2::new(1.0, 1.0)]);
        let nan = [Vec2::new(f32::NAN, 0.0), Vec2::new(0.0, 0.0)];
        assert_eq!(convex_hull(&nan), vec![Vec2::new(0.0, 0.0)]);
    }
}
