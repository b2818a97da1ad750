//! Axis-aligned rectangle geometry
//!
//! Screen coordinates: origin at the arena's top-left corner, +y pointing
//! down. Rectangles are anchored at their top-left corner.

use glam::Vec2;

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Rectangle whose midpoint lands on `center`
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

    /// Midpoint
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Move so the midpoint lands on `center`
    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size / 2.0;
    }

    /// Strict overlap test (rectangles sharing only an edge do not overlap)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Minimum translation vector that pushes `other` out of `self`, along
    /// the axis of least penetration. `None` when there is no overlap.
    pub fn push_out(&self, other: &Rect) -> Option<Vec2> {
        if !self.overlaps(other) {
            return None;
        }

        // Penetration depth toward each side of self
        let from_left = other.right() - self.left();
        let from_right = self.right() - other.left();
        let from_top = other.bottom() - self.top();
        let from_bottom = self.bottom() - other.top();

        let x = if from_left < from_right {
            -from_left
        } else {
            from_right
        };
        let y = if from_top < from_bottom {
            -from_top
        } else {
            from_bottom
        };

        if x.abs() < y.abs() {
            Some(Vec2::new(x, 0.0))
        } else {
            Some(Vec2::new(0.0, y))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center_round_trip() {
        let rect = Rect::from_center(Vec2::new(50.0, 40.0), Vec2::new(20.0, 10.0));
        assert_eq!(rect.pos, Vec2::new(40.0, 35.0));
        assert_eq!(rect.center(), Vec2::new(50.0, 40.0));
    }

    #[test]
    fn test_overlaps() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        let c = Rect::new(Vec2::new(20.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_shared_edge_does_not_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_push_out_picks_least_penetration_axis() {
        let brick = Rect::new(Vec2::new(100.0, 100.0), Vec2::new(80.0, 20.0));
        // Ball coming from the left: 2px deep horizontally, 15px vertically
        let ball = Rect::new(Vec2::new(82.0, 95.0), Vec2::new(20.0, 20.0));
        assert_eq!(brick.push_out(&ball), Some(Vec2::new(-2.0, 0.0)));

        // Ball dropping onto the top edge: 3px deep vertically
        let ball = Rect::new(Vec2::new(120.0, 83.0), Vec2::new(20.0, 20.0));
        assert_eq!(brick.push_out(&ball), Some(Vec2::new(0.0, -3.0)));
    }

    #[test]
    fn test_push_out_none_when_apart() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(50.0, 50.0), Vec2::new(10.0, 10.0));
        assert_eq!(a.push_out(&b), None);
    }
}
