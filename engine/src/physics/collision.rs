//! Collision detection module
//!
//! Axis-aligned rectangles in screen-style coordinates (y grows downward),
//! plus the small set of overlap helpers the resolver and combat code need.
//!
//! # Overlap Semantics
//!
//! Overlap is strict: two rectangles that only share an edge do not collide.
//! Point containment is half-open: the left/top edges are inside, the
//! right/bottom edges are outside. A body resting exactly on a tile
//! (`body.bottom() == tile.top()`) therefore does not overlap it until gravity
//! pushes it down on the next step.
//!
//! # Example
//!
//! ```ignore
//! use eldoria_engine::physics::collision::Rect;
//! use glam::Vec2;
//!
//! let tile = Rect::new(Vec2::new(0.0, 32.0), Vec2::splat(32.0));
//! let body = Rect::new(Vec2::new(8.0, 0.0), Vec2::new(32.0, 32.0));
//! assert!(!body.overlaps(&tile)); // touching only
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle defined by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner in world space (pixels)
    pub pos: Vec2,
    /// Width and height (pixels)
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Build a rect from explicit edges.
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    /// Build a rect of `size` centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size * 0.5, size)
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x;
    }

    pub fn set_top(&mut self, y: f32) {
        self.pos.y = y;
    }

    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    /// Strict overlap test; shared edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Half-open point test: `[left, right) x [top, bottom)`.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Grow the rect by `amount` in total on each axis, keeping the center fixed.
    pub fn inflate(&self, amount: Vec2) -> Rect {
        Rect::new(self.pos - amount * 0.5, self.size + amount)
    }

    /// Smallest rect covering both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let min = self.pos.min(other.pos);
        let max = Vec2::new(self.right(), self.bottom()).max(Vec2::new(other.right(), other.bottom()));
        Rect::new(min, max - min)
    }
}

/// Dominant-axis contact normal pointing from `stationary` towards `moving`.
///
/// Returns one of the four unit axis vectors.
pub fn collision_normal(moving: &Rect, stationary: &Rect) -> Vec2 {
    let d = moving.center() - stationary.center();
    if d.x.abs() > d.y.abs() {
        Vec2::new(d.x.signum(), 0.0)
    } else if d.y >= 0.0 {
        Vec2::Y
    } else {
        Vec2::NEG_Y
    }
}
