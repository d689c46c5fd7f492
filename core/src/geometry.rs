//! Axis-aligned rectangle footprints and the shared collision test.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle expressed in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    /// Creates a rectangle from its upper-left corner and dimensions.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Horizontal position of the left edge.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical position of the top edge.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Width of the rectangle.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height of the rectangle.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Horizontal position of the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Vertical position of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Position of the rectangle's center.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict AABB overlap test. Rectangles that merely share an edge do
    /// not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Frame dimensions of one cell on a loaded sprite sheet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameSize {
    width: f32,
    height: f32,
}

impl FrameSize {
    /// Creates a frame size descriptor.
    ///
    /// Returns `None` when either dimension is non-finite or non-positive,
    /// so a half-configured sheet never produces a degenerate footprint.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Option<Self> {
        if width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0 {
            Some(Self { width, height })
        } else {
            None
        }
    }

    /// Width of one sprite frame.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height of one sprite frame.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }
}

/// Capability implemented by every entity kind that participates in
/// collision queries.
///
/// The returned rectangle uses the sprite frame dimensions when a sheet is
/// configured and the declared collision-box sizes otherwise; both are
/// guaranteed positive.
pub trait Footprint {
    /// Effective collision rectangle for the current tick.
    fn footprint(&self) -> Rect;
}

/// Reports whether two entities' effective rectangles overlap.
///
/// Pure and symmetric: `collides(a, b) == collides(b, a)` for all pairs.
#[must_use]
pub fn collides<A, B>(a: &A, b: &B) -> bool
where
    A: Footprint + ?Sized,
    B: Footprint + ?Sized,
{
    a.footprint().overlaps(&b.footprint())
}

#[cfg(test)]
mod tests {
    use super::{collides, FrameSize, Footprint, Rect};

    struct Box(Rect);

    impl Footprint for Box {
        fn footprint(&self) -> Rect {
            self.0
        }
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let a = Box(Rect::new(0.0, 0.0, 50.0, 50.0));
        let b = Box(Rect::new(50.0, 0.0, 50.0, 50.0));
        assert!(!collides(&a, &b));
        assert!(!collides(&b, &a));
    }

    #[test]
    fn one_unit_overlap_collides() {
        let a = Box(Rect::new(0.0, 0.0, 50.0, 50.0));
        let b = Box(Rect::new(49.0, 0.0, 50.0, 50.0));
        assert!(collides(&a, &b));
        assert!(collides(&b, &a));
    }

    #[test]
    fn collision_is_symmetric_for_nested_rectangles() {
        let outer = Box(Rect::new(0.0, 0.0, 100.0, 100.0));
        let inner = Box(Rect::new(25.0, 25.0, 10.0, 10.0));
        assert_eq!(collides(&outer, &inner), collides(&inner, &outer));
        assert!(collides(&outer, &inner));
    }

    #[test]
    fn vertical_separation_prevents_collision() {
        let a = Box(Rect::new(0.0, 0.0, 50.0, 50.0));
        let b = Box(Rect::new(0.0, 50.0, 50.0, 50.0));
        assert!(!collides(&a, &b));
    }

    #[test]
    fn frame_size_rejects_degenerate_dimensions() {
        assert!(FrameSize::new(0.0, 10.0).is_none());
        assert!(FrameSize::new(10.0, -1.0).is_none());
        assert!(FrameSize::new(f32::NAN, 10.0).is_none());
        assert!(FrameSize::new(64.0, 64.0).is_some());
    }

    #[test]
    fn rect_center_is_midpoint() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.center(), (25.0, 40.0));
    }
}
