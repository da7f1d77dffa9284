//! Idle rotation of the 3D jewelry.

use std::f32::consts::TAU;

/// Rotation angle of the spinning jewelry meshes, advanced once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpinState {
    angle: f32,
}

impl SpinState {
    /// Radians added per frame.
    pub const STEP: f32 = 0.005;
    /// Frame period of the idle animation, in milliseconds (~60 fps).
    pub const FRAME_INTERVAL_MS: u32 = 16;

    #[must_use]
    pub const fn new() -> Self {
        Self { angle: 0.0 }
    }

    /// Current angle in radians, always in `[0, 2π)`.
    #[must_use]
    pub const fn angle(&self) -> f32 {
        self.angle
    }

    /// Advance by one frame.
    pub fn tick(&mut self) {
        self.advance(1);
    }

    /// Advance by `frames` frames at once.
    pub fn advance(&mut self, frames: u32) {
        let turn = std::f64::consts::TAU;
        let delta = (f64::from(Self::STEP) * f64::from(frames)).rem_euclid(turn);
        #[allow(clippy::cast_possible_truncation)]
        let angle = (f64::from(self.angle) + delta).rem_euclid(turn) as f32;
        // Narrowing can round up to exactly 2π.
        self.angle = if angle >= TAU { 0.0 } else { angle };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_adds_one_step() {
        let mut spin = SpinState::new();
        spin.tick();
        assert!((spin.angle() - 0.005).abs() < 1e-7);
        spin.tick();
        assert!((spin.angle() - 0.010).abs() < 1e-7);
    }

    #[test]
    fn angle_stays_in_range_over_many_frames() {
        let mut spin = SpinState::new();
        for _ in 0..5_000 {
            spin.tick();
            assert!((0.0..TAU).contains(&spin.angle()), "angle {}", spin.angle());
        }
    }

    #[test]
    fn advance_handles_huge_frame_counts() {
        let mut spin = SpinState::new();
        spin.advance(u32::MAX);
        assert!((0.0..TAU).contains(&spin.angle()));
    }

    #[test]
    fn advance_matches_repeated_ticks() {
        let mut a = SpinState::new();
        let mut b = SpinState::new();
        a.advance(300);
        for _ in 0..300 {
            b.tick();
        }
        assert!((a.angle() - b.angle()).abs() < 1e-3);
    }
}
