//! 3D preview camera.
//!
//! The camera sits in front of the bust at a fixed height and looks at
//! the jewelry's focal point. Only its distance is user-controlled, and
//! that distance is always kept within `[MIN_DISTANCE, MAX_DISTANCE]`.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Camera distance state for the 3D preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    distance: f32,
}

impl CameraState {
    /// Closest the camera may get.
    pub const MIN_DISTANCE: f32 = 3.0;
    /// Farthest the camera may get.
    pub const MAX_DISTANCE: f32 = 15.0;
    /// Distance used initially and on reset.
    pub const DEFAULT_DISTANCE: f32 = 8.0;
    /// Change per zoom step.
    pub const ZOOM_STEP: f32 = 1.0;
    /// Eye height above the scene origin.
    pub const EYE_HEIGHT: f32 = 2.0;
    /// Point the camera looks at (the jewelry group's origin).
    pub const TARGET: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    /// Vertical field of view.
    pub const FOV_Y_DEGREES: f32 = 50.0;
    /// Near clip plane distance.
    pub const NEAR: f32 = 0.1;
    /// Far clip plane distance.
    pub const FAR: f32 = 100.0;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            distance: Self::DEFAULT_DISTANCE,
        }
    }

    /// A camera at `distance`, clamped into the allowed range.
    ///
    /// Non-finite input falls back to the default distance.
    #[must_use]
    pub fn at_distance(distance: f32) -> Self {
        let distance = if distance.is_finite() {
            distance.clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE)
        } else {
            Self::DEFAULT_DISTANCE
        };
        Self { distance }
    }

    #[must_use]
    pub const fn distance(&self) -> f32 {
        self.distance
    }

    /// Move one step closer, stopping at [`MIN_DISTANCE`](Self::MIN_DISTANCE).
    pub fn zoom_in(&mut self) {
        self.distance = (self.distance - Self::ZOOM_STEP).max(Self::MIN_DISTANCE);
    }

    /// Move one step away, stopping at [`MAX_DISTANCE`](Self::MAX_DISTANCE).
    pub fn zoom_out(&mut self) {
        self.distance = (self.distance + Self::ZOOM_STEP).min(Self::MAX_DISTANCE);
    }

    /// Return to the default distance.
    pub const fn reset_view(&mut self) {
        self.distance = Self::DEFAULT_DISTANCE;
    }

    /// World-space eye position.
    #[must_use]
    pub const fn eye(&self) -> Vec3 {
        Vec3::new(0.0, Self::EYE_HEIGHT, self.distance)
    }

    /// World-to-view transform.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Self::TARGET, Vec3::Y)
    }

    /// View-to-clip transform for a viewport of the given aspect ratio.
    #[must_use]
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(
            Self::FOV_Y_DEGREES.to_radians(),
            aspect,
            Self::NEAR,
            Self::FAR,
        )
    }

    /// Pixels per world unit at unit depth for a viewport `height` pixels tall.
    #[must_use]
    pub fn focal_length(&self, height: f32) -> f32 {
        height / 2.0 / (Self::FOV_Y_DEGREES.to_radians() / 2.0).tan()
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn zoom_in_floors_at_three() {
        let mut cam = CameraState::new();
        for _ in 0..6 {
            cam.zoom_in();
        }
        // 8 - 6 would be 2; the floor holds it at 3.
        assert!(approx(cam.distance(), 3.0));
        for _ in 0..10 {
            cam.zoom_in();
            assert!(cam.distance() >= CameraState::MIN_DISTANCE);
        }
    }

    #[test]
    fn zoom_out_caps_at_fifteen() {
        let mut cam = CameraState::new();
        for _ in 0..20 {
            cam.zoom_out();
            assert!(cam.distance() <= CameraState::MAX_DISTANCE);
        }
        assert!(approx(cam.distance(), 15.0));
    }

    #[test]
    fn reset_view_returns_to_eight() {
        let mut cam = CameraState::at_distance(14.0);
        cam.zoom_in();
        cam.reset_view();
        assert!(approx(cam.distance(), 8.0));
    }

    #[test]
    fn at_distance_clamps_and_rejects_nan() {
        assert!(approx(CameraState::at_distance(0.5).distance(), 3.0));
        assert!(approx(CameraState::at_distance(99.0).distance(), 15.0));
        assert!(approx(CameraState::at_distance(f32::NAN).distance(), 8.0));
        assert!(approx(CameraState::at_distance(6.5).distance(), 6.5));
    }

    #[test]
    fn target_projects_to_view_center() {
        let cam = CameraState::new();
        let clip = cam.projection(1.6) * cam.view() * CameraState::TARGET.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5, "target x should be centered, got {}", ndc.x);
        assert!(ndc.y.abs() < 1e-5, "target y should be centered, got {}", ndc.y);
    }

    #[test]
    fn eye_moves_with_distance() {
        let mut cam = CameraState::new();
        cam.zoom_out();
        assert_eq!(cam.eye(), Vec3::new(0.0, 2.0, 9.0));
    }
}
