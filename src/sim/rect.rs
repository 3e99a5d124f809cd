//! Axis-aligned rectangle geometry for every entity body
//!
//! Screen coordinates: x grows right, y grows down, `pos` is the top-left
//! corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (always positive)
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Build a rectangle of `size` centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Move so that the center lands on `center`, keeping the size
    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size / 2.0;
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// True when `other` lies entirely inside this rectangle (edges included)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// Same center, each side scaled by `ratio`
    pub fn scaled(&self, ratio: f32) -> Rect {
        Rect::from_center(self.center(), self.size * ratio)
    }

    /// Shift this rectangle the minimum distance needed to lie inside
    /// `bounds`; each axis is clamped independently. If the rectangle is
    /// larger than `bounds` on an axis it is pinned to the low edge.
    pub fn clamp_inside(&mut self, bounds: &Rect) {
        let max = (bounds.pos + bounds.size - self.size).max(bounds.pos);
        self.pos = self.pos.clamp(bounds.pos, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_edges_and_center() {
        let r = rect(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_intersects_strict() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&rect(5.0, 5.0, 10.0, 10.0)));
        // Shared edge is not an overlap
        assert!(!a.intersects(&rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&rect(0.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_scaled_keeps_center() {
        let r = rect(0.0, 0.0, 100.0, 50.0);
        let s = r.scaled(0.8);
        assert_eq!(s.center(), r.center());
        assert!((s.size.x - 80.0).abs() < 1e-4);
        assert!((s.size.y - 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_clamp_inside() {
        let bounds = rect(0.0, 0.0, 800.0, 600.0);

        let mut r = rect(-20.0, 590.0, 50.0, 50.0);
        r.clamp_inside(&bounds);
        assert_eq!(r.pos, Vec2::new(0.0, 550.0));
        assert!(bounds.contains_rect(&r));

        let mut inside = rect(100.0, 100.0, 50.0, 50.0);
        inside.clamp_inside(&bounds);
        assert_eq!(inside.pos, Vec2::new(100.0, 100.0));
    }
}
