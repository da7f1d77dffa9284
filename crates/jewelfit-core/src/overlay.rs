//! Photo overlay interaction state.
//!
//! Tracks the uploaded photo, where the jewelry sprite sits on it (as a
//! percentage of the container on each axis) and how large it is drawn.
//! All inputs are clamped so the state can never leave its valid range.

use crate::selection::Material;

/// Overlay position as percent offsets within the photo container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Percent from the left edge, in `[0, 100]`.
    pub x: f64,
    /// Percent from the top edge, in `[0, 100]`.
    pub y: f64,
}

impl Position {
    /// Create a position from percent offsets.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A container's bounding box in client (viewport) pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Left edge, in client pixels.
    pub left: f64,
    /// Top edge, in client pixels.
    pub top: f64,
    /// Width in pixels; non-positive means the container is not laid out.
    pub width: f64,
    /// Height in pixels; non-positive means the container is not laid out.
    pub height: f64,
}

impl Bounds {
    /// Create bounds from the top-left corner and size.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Pointer position relative to these bounds, in percent, unclamped.
    ///
    /// Returns `None` for empty bounds or non-finite input, where no
    /// meaningful fraction exists.
    #[must_use]
    pub fn percent_of(&self, client_x: f64, client_y: f64) -> Option<Position> {
        let usable = self.width > 0.0
            && self.height > 0.0
            && self.width.is_finite()
            && self.height.is_finite();
        if !usable {
            return None;
        }
        let x = (client_x - self.left) / self.width * 100.0;
        let y = (client_y - self.top) / self.height * 100.0;
        (x.is_finite() && y.is_finite()).then_some(Position::new(x, y))
    }
}

/// Interaction state of the photo overlay.
///
/// Generic over the image handle `I` so this type stays free of browser
/// APIs; the web front-end stores a Blob URL wrapper here.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState<I> {
    image: Option<I>,
    position: Position,
    scale: f64,
    dragging: bool,
}

impl<I> OverlayState<I> {
    /// Lowest percent offset on either axis.
    pub const POSITION_MIN: f64 = 0.0;
    /// Highest percent offset on either axis.
    pub const POSITION_MAX: f64 = 100.0;
    /// Centered position used initially and on reset.
    pub const DEFAULT_POSITION: Position = Position::new(50.0, 50.0);
    /// Scale used initially and on reset.
    pub const DEFAULT_SCALE: f64 = 1.0;
    /// Smallest scale reachable with [`shrink`](Self::shrink).
    pub const MIN_SCALE: f64 = 0.5;
    /// Largest scale reachable with [`grow`](Self::grow).
    pub const MAX_SCALE: f64 = 2.0;
    /// Amount added or removed per grow/shrink step.
    pub const SCALE_STEP: f64 = 0.2;

    /// Empty overlay: no photo, centered, unit scale.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            image: None,
            position: Self::DEFAULT_POSITION,
            scale: Self::DEFAULT_SCALE,
            dragging: false,
        }
    }

    #[must_use]
    pub const fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Install a newly decoded photo, keeping position and scale.
    ///
    /// Returns the photo it replaced so the caller can release it.
    pub fn replace_image(&mut self, image: I) -> Option<I> {
        self.image.replace(image)
    }

    /// Start dragging the sprite.
    pub const fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Stop dragging. Harmless when no drag is active.
    pub const fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Move the sprite under the pointer while a drag is active.
    ///
    /// Each axis is clamped independently to `[0, 100]`. Returns `true` if
    /// the position was updated; moves outside a drag, and moves against
    /// degenerate bounds, are ignored.
    pub fn update_pointer(&mut self, client_x: f64, client_y: f64, bounds: Bounds) -> bool {
        if !self.dragging {
            return false;
        }
        let Some(raw) = bounds.percent_of(client_x, client_y) else {
            return false;
        };
        self.position = Position::new(
            raw.x.clamp(Self::POSITION_MIN, Self::POSITION_MAX),
            raw.y.clamp(Self::POSITION_MIN, Self::POSITION_MAX),
        );
        true
    }

    /// Center the sprite and restore unit scale in one step.
    pub const fn reset_position(&mut self) {
        self.position = Self::DEFAULT_POSITION;
        self.scale = Self::DEFAULT_SCALE;
    }

    /// Enlarge by one step, never beyond [`MAX_SCALE`](Self::MAX_SCALE).
    pub fn grow(&mut self) {
        self.scale = (self.scale + Self::SCALE_STEP).min(Self::MAX_SCALE);
    }

    /// Shrink by one step, never below [`MIN_SCALE`](Self::MIN_SCALE).
    pub fn shrink(&mut self) {
        self.scale = (self.scale - Self::SCALE_STEP).max(Self::MIN_SCALE);
    }
}

impl<I: PartialEq> OverlayState<I> {
    /// Drop the current photo if it is `image`, returning it.
    ///
    /// Used when the browser fails to render a photo: a failure reported
    /// for an image that has already been replaced is ignored.
    pub fn discard_image(&mut self, image: &I) -> Option<I> {
        if self.image.as_ref() == Some(image) {
            self.dragging = false;
            self.image.take()
        } else {
            None
        }
    }
}

impl<I> Default for OverlayState<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// CSS `filter` value tinting the overlay sprite for `material`.
#[must_use]
pub fn hue_filter(material: Material) -> String {
    format!("hue-rotate({}deg)", material.overlay_hue_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    type State = OverlayState<&'static str>;

    const BOX: Bounds = Bounds::new(100.0, 200.0, 400.0, 300.0);

    #[test]
    fn starts_centered_at_unit_scale() {
        let s = State::new();
        assert_eq!(s.position(), Position::new(50.0, 50.0));
        assert!((s.scale() - 1.0).abs() < f64::EPSILON);
        assert!(s.image().is_none());
        assert!(!s.is_dragging());
    }

    #[test]
    fn pointer_maps_to_percent_of_bounds() {
        let mut s = State::new();
        s.begin_drag();
        assert!(s.update_pointer(200.0, 275.0, BOX));
        assert_eq!(s.position(), Position::new(25.0, 25.0));
    }

    #[test]
    fn pointer_outside_bounds_is_clamped_per_axis() {
        let mut s = State::new();
        s.begin_drag();
        // 120% across, -10% down.
        s.update_pointer(100.0 + 480.0, 200.0 - 30.0, BOX);
        assert_eq!(s.position(), Position::new(100.0, 0.0));

        for (x, y) in [(-1e9, 1e9), (1e9, -1e9), (0.0, 0.0), (5000.0, 5000.0)] {
            s.update_pointer(x, y, BOX);
            let p = s.position();
            assert!((0.0..=100.0).contains(&p.x), "x out of range: {}", p.x);
            assert!((0.0..=100.0).contains(&p.y), "y out of range: {}", p.y);
        }
    }

    #[test]
    fn each_move_uses_the_bounds_it_is_given() {
        let mut s = State::new();
        s.begin_drag();
        assert!(s.update_pointer(300.0, 350.0, BOX));
        assert_eq!(s.position(), Position::new(50.0, 50.0));

        // The page scrolled 150px mid-drag: the same client point is now
        // at the container's top edge.
        let scrolled = Bounds::new(100.0, 350.0, 400.0, 300.0);
        assert!(s.update_pointer(300.0, 350.0, scrolled));
        assert_eq!(s.position(), Position::new(50.0, 0.0));
    }

    #[test]
    fn moves_without_drag_are_ignored() {
        let mut s = State::new();
        assert!(!s.update_pointer(200.0, 275.0, BOX));
        assert_eq!(s.position(), State::DEFAULT_POSITION);

        s.begin_drag();
        s.end_drag();
        assert!(!s.update_pointer(200.0, 275.0, BOX));
        assert_eq!(s.position(), State::DEFAULT_POSITION);
    }

    #[test]
    fn degenerate_bounds_are_ignored() {
        let mut s = State::new();
        s.begin_drag();
        assert!(!s.update_pointer(10.0, 10.0, Bounds::new(0.0, 0.0, 0.0, 300.0)));
        assert!(!s.update_pointer(10.0, 10.0, Bounds::new(0.0, 0.0, 300.0, -1.0)));
        assert!(!s.update_pointer(f64::NAN, 10.0, BOX));
        assert_eq!(s.position(), State::DEFAULT_POSITION);
    }

    #[test]
    fn grow_caps_at_two() {
        let mut s = State::new();
        for _ in 0..20 {
            s.grow();
            assert!(s.scale() <= State::MAX_SCALE);
        }
        assert!((s.scale() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn shrink_floors_at_half() {
        let mut s = State::new();
        for _ in 0..3 {
            s.shrink();
        }
        // 1.0 - 3 * 0.2 would be 0.4; the floor holds it at 0.5.
        assert!((s.scale() - 0.5).abs() < f64::EPSILON);
        for _ in 0..20 {
            s.shrink();
            assert!(s.scale() >= State::MIN_SCALE);
        }
    }

    #[test]
    fn reset_restores_position_and_scale_together() {
        let mut s = State::new();
        s.begin_drag();
        s.update_pointer(0.0, 0.0, BOX);
        s.grow();
        s.grow();
        s.reset_position();
        assert_eq!(s.position(), Position::new(50.0, 50.0));
        assert!((s.scale() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn replacing_image_keeps_layout_and_returns_previous() {
        let mut s = State::new();
        s.begin_drag();
        s.update_pointer(200.0, 275.0, BOX);
        s.shrink();
        assert_eq!(s.replace_image("first"), None);
        assert_eq!(s.replace_image("second"), Some("first"));
        assert_eq!(s.image(), Some(&"second"));
        assert_eq!(s.position(), Position::new(25.0, 25.0));
        assert!((s.scale() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn discard_only_drops_the_matching_image() {
        let mut s = State::new();
        s.replace_image("current");
        assert_eq!(s.discard_image(&"old"), None);
        assert_eq!(s.image(), Some(&"current"));
        assert_eq!(s.discard_image(&"current"), Some("current"));
        assert!(s.image().is_none());
    }

    #[test]
    fn hue_filter_matches_material() {
        assert_eq!(hue_filter(Material::Silver), "hue-rotate(0deg)");
        assert_eq!(hue_filter(Material::RoseGold), "hue-rotate(15deg)");
        assert_eq!(hue_filter(Material::Gold), "hue-rotate(45deg)");
    }
}
