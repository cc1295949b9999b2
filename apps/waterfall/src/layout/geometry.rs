//! Geometry primitives shared by the layout engine and the spatial index.
//!
//! All values are logical points in content coordinates: the origin is the
//! top-left corner of the scrollable content and y grows downward.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Point / Size
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width/height pair. Used both for intrinsic item sizes supplied by the host
/// and for the viewport and content sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rect
// ────────────────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle. Width and height are expected to be non-negative;
/// negative extents produced by a misbehaving item source are not normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// True when the two rectangles overlap.
    ///
    /// Rectangles with positive extent that only touch along an edge do not
    /// intersect. On an axis where either rectangle has zero extent the bounds
    /// are inclusive, so a zero-height frame lying on `other`'s top or bottom
    /// edge still intersects it.
    pub fn intersects(&self, other: &Rect) -> bool {
        spans_overlap(self.min_x(), self.max_x(), other.min_x(), other.max_x())
            && spans_overlap(self.min_y(), self.max_y(), other.min_y(), other.max_y())
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let min_x = self.min_x().min(other.min_x());
        let min_y = self.min_y().min(other.min_y());
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

fn spans_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    if a_max > a_min && b_max > b_min {
        a_min < b_max && b_min < a_max
    } else {
        a_min <= b_max && b_min <= a_max
    }
}

// ────────────────────────────────────────────────────────────────────────────
// EdgeInsets
// ────────────────────────────────────────────────────────────────────────────

/// Insets applied around a section, or around its header/footer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_edge_touching_is_false() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_intersects_zero_sized_rect_inside() {
        let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
        let dot = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert!(outer.intersects(&dot));
    }

    #[test]
    fn test_intersects_zero_height_rect_on_edge() {
        let query = Rect::new(0.0, 0.0, 300.0, 145.0);
        let on_top = Rect::new(0.0, 0.0, 145.0, 0.0);
        let on_bottom = Rect::new(10.0, 145.0, 50.0, 0.0);
        let below = Rect::new(10.0, 145.5, 50.0, 0.0);
        assert!(on_top.intersects(&query));
        assert!(query.intersects(&on_top));
        assert!(on_bottom.intersects(&query));
        assert!(!below.intersects(&query));
    }

    #[test]
    fn test_intersects_zero_width_rect_outside_is_false() {
        let query = Rect::new(0.0, 0.0, 100.0, 100.0);
        let beside = Rect::new(150.0, 10.0, 0.0, 20.0);
        assert!(!beside.intersects(&query));
    }

    #[test]
    fn test_union_covers_both() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 30.0, 5.0, 5.0);
        assert_eq!(a.union(&b), Rect::new(0.0, 0.0, 25.0, 35.0));
    }

    #[test]
    fn test_union_with_contained_rect_is_outer() {
        let outer = Rect::new(-5.0, -5.0, 50.0, 50.0);
        let inner = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(outer.union(&inner), outer);
    }

    #[test]
    fn test_edge_insets_horizontal() {
        let insets = EdgeInsets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(insets.horizontal(), 6.0);
        assert_eq!(EdgeInsets::uniform(10.0).horizontal(), 20.0);
    }
}
