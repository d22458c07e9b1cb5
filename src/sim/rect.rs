//! Axis-aligned bounding boxes in screen space (y grows downward)

use glam::Vec2;

/// A rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict horizontal containment: `other` lies inside our span with no
    /// shared edge.
    pub fn contains_span_x(&self, other: &Rect) -> bool {
        other.left() > self.left() && other.right() < self.right()
    }

    /// Whether the horizontal span fits inside `[0, width]`
    pub fn within_width(&self, width: f32) -> bool {
        self.left() >= 0.0 && self.right() <= width
    }
}
