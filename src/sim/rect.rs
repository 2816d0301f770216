//! Axis-aligned rectangle geometry for bricks and the paddle
//!
//! Coordinates are canvas pixels: origin top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strictly inside on both axes; points on an edge do not count
    pub fn contains_point_strict(&self, p: Vec2) -> bool {
        self.spans_x_strict(p.x) && p.y > self.y && p.y < self.bottom()
    }

    /// Strictly between the left and right edges
    pub fn spans_x_strict(&self, x: f32) -> bool {
        x > self.x && x < self.right()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(30.0, 30.0, 75.0, 20.0);
        assert_eq!(r.right(), 105.0);
        assert_eq!(r.bottom(), 50.0);
        assert_eq!(r.center(), Vec2::new(67.5, 40.0));
    }

    #[test]
    fn test_contains_point_strict() {
        let r = Rect::new(30.0, 30.0, 75.0, 20.0);
        assert!(r.contains_point_strict(Vec2::new(31.0, 31.0)));
        assert!(r.contains_point_strict(r.center()));
        // Edges are excluded
        assert!(!r.contains_point_strict(Vec2::new(30.0, 40.0)));
        assert!(!r.contains_point_strict(Vec2::new(105.0, 40.0)));
        assert!(!r.contains_point_strict(Vec2::new(60.0, 30.0)));
        assert!(!r.contains_point_strict(Vec2::new(60.0, 50.0)));
        assert!(!r.contains_point_strict(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_spans_x_strict() {
        let r = Rect::new(10.0, 0.0, 20.0, 5.0);
        assert!(r.spans_x_strict(20.0));
        assert!(!r.spans_x_strict(10.0));
        assert!(!r.spans_x_strict(30.0));
        assert!(!r.spans_x_strict(-5.0));
    }
}
