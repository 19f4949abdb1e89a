// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Utilities shared by the rasterizer: inclusive bounding boxes and span clipping.
//! Some primitive algorithms: shape.rs

use std::cmp::{max, min};
use std::ops::Range;

pub mod shape;

/// Inclusive box, `x0 <= x1` and `y0 <= y1` once built through `from_corners`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BBox {
    /// Corners may come in any order.
    pub fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> BBox {
        BBox {
            x0: min(x0, x1),
            y0: min(y0, y1),
            x1: max(x0, x1),
            y1: max(y0, y1),
        }
    }

    /// Box spanning (x, y) to (x + w, y + h), both ends included.
    pub fn from_origin_size(x: i32, y: i32, w: i32, h: i32) -> BBox {
        BBox::from_corners(x, y, x.saturating_add(w), y.saturating_add(h))
    }

    /// Fully within [0, width) x [0, height)
    pub fn inside(self, width: i32, height: i32) -> bool {
        self.x0 >= 0 && self.x1 < width && self.y0 >= 0 && self.y1 < height
    }

    /// No cell shared with [0, width) x [0, height)
    pub fn outside(self, width: i32, height: i32) -> bool {
        self.x1 < 0 || self.x0 >= width || self.y1 < 0 || self.y0 >= height
    }
}

/// Part of [start, start + len) that lies in [0, limit). Empty when len <= 0.
pub fn clip_span(start: i64, len: i64, limit: i32) -> Range<i32> {
    let lo = start.max(0);
    let hi = start.saturating_add(len.max(0)).min(limit as i64);
    if lo >= hi {
        0..0
    } else {
        lo as i32..hi as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_normalised() {
        let b = BBox::from_corners(7, -2, 3, 5);
        assert_eq!(b, BBox { x0: 3, y0: -2, x1: 7, y1: 5 });
    }

    #[test]
    fn test_origin_size_saturates() {
        let b = BBox::from_origin_size(i32::MAX - 1, 0, 10, 1);
        assert_eq!(b.x1, i32::MAX);
        let b = BBox::from_origin_size(4, 4, -3, 0);
        assert_eq!(b, BBox { x0: 1, y0: 4, x1: 4, y1: 4 });
    }

    #[test]
    fn test_inside_outside() {
        let b = BBox::from_corners(0, 0, 9, 9);
        assert!(b.inside(10, 10));
        assert!(!b.outside(10, 10));

        let b = BBox::from_corners(0, 0, 10, 9);
        assert!(!b.inside(10, 10));
        assert!(!b.outside(10, 10));

        assert!(BBox::from_corners(-5, 2, -1, 3).outside(10, 10));
        assert!(BBox::from_corners(2, 10, 3, 20).outside(10, 10));
    }

    #[test]
    fn test_clip_span() {
        assert_eq!(clip_span(2, 3, 10), 2..5);
        assert_eq!(clip_span(-4, 6, 10), 0..2);
        assert_eq!(clip_span(8, 5, 10), 8..10);
        assert_eq!(clip_span(-5, 100, 10), 0..10);
        assert!(clip_span(10, 3, 10).is_empty());
        assert!(clip_span(-3, 3, 10).is_empty());
        assert!(clip_span(1, 0, 10).is_empty());
        assert!(clip_span(1, -4, 10).is_empty());
        assert_eq!(clip_span(i32::MIN as i64, 1 << 40, 7), 0..7);
    }
}
