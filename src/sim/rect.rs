//! Axis-aligned rectangles
//!
//! Every entity footprint, and the transient hammer hitbox, is a `Rect` in
//! top-left-origin canvas pixels.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size centered on `center`
    pub fn centered_at(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap test; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// True once the rect has fully left the canvas on any side
    pub fn is_off_canvas(&self) -> bool {
        self.y <= -self.h
            || self.y >= CANVAS_HEIGHT + self.h
            || self.x <= -self.w
            || self.x >= CANVAS_WIDTH + self.w
    }

    /// True once the top edge has passed the bottom of the canvas
    #[inline]
    pub fn is_below_canvas(&self) -> bool {
        self.y >= CANVAS_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 2.0, 2.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_centered_at() {
        let r = Rect::centered_at(Vec2::new(50.0, 20.0), 10.0, 4.0);
        assert_eq!(r, Rect::new(45.0, 18.0, 10.0, 4.0));
        assert_eq!(r.center(), Vec2::new(50.0, 20.0));
    }

    #[test]
    fn test_off_canvas() {
        assert!(!Rect::new(0.0, 0.0, 4.0, 8.0).is_off_canvas());
        assert!(!Rect::new(10.0, -7.0, 4.0, 8.0).is_off_canvas());
        assert!(Rect::new(10.0, -8.0, 4.0, 8.0).is_off_canvas());
        assert!(Rect::new(-4.0, 10.0, 4.0, 8.0).is_off_canvas());
        assert!(Rect::new(CANVAS_WIDTH + 4.0, 10.0, 4.0, 8.0).is_off_canvas());
        assert!(Rect::new(10.0, CANVAS_HEIGHT + 8.0, 4.0, 8.0).is_off_canvas());
    }
}
