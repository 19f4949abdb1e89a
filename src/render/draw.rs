// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Geometric primitives: pixels, horizontal/vertical lines, bresenham lines and filled
//! rects. Each call classifies its bounding box once (see `writer`) and then streams
//! every pixel through the chosen writer. Axis-aligned primitives only walk the part of
//! their range that lies on the image.

use crate::render::image::IndexedImage;
use crate::util::{clip_span, shape::Bresenham, BBox};

impl IndexedImage {
    /// Sets one pixel, dropped if off the image.
    pub fn draw_pixel(&mut self, color: u8, x: i32, y: i32) {
        if let Some(px) = self.select_writer(x, y, x, y) {
            px.put(self, color, x, y);
        }
    }

    /// Vertical line at column `x` from `y0` to `y1`, both ends included, either order.
    pub fn draw_v_line(&mut self, color: u8, y0: i32, y1: i32, x: i32) {
        let Some(px) = self.select_writer(x, y0, x, y1) else {
            return;
        };
        let (lo, hi) = (y0.min(y1) as i64, y0.max(y1) as i64);
        for row in clip_span(lo, hi - lo + 1, self.height()) {
            px.put(self, color, x, row);
        }
    }

    /// Horizontal line on row `y` from `x0` to `x1`, both ends included, either order.
    pub fn draw_h_line(&mut self, color: u8, x0: i32, x1: i32, y: i32) {
        let Some(px) = self.select_writer(x0, y, x1, y) else {
            return;
        };
        let (lo, hi) = (x0.min(x1) as i64, x0.max(x1) as i64);
        for col in clip_span(lo, hi - lo + 1, self.width()) {
            px.put(self, color, col, y);
        }
    }

    /// Line from (x0, y0) to (x1, y1), both ends included.
    pub fn draw_line(&mut self, color: u8, x0: i32, y0: i32, x1: i32, y1: i32) {
        let Some(px) = self.select_writer(x0, y0, x1, y1) else {
            return;
        };
        for (x, y) in Bresenham::new(x0, y0, x1, y1) {
            px.put(self, color, x, y);
        }
    }

    /// Fills columns [x, x + w) of rows [y, y + h). Nothing is drawn when w or h <= 0.
    pub fn fill_rect(&mut self, color: u8, x: i32, y: i32, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            return;
        }
        let Some(px) = self.select_writer_for(BBox::from_origin_size(x, y, w, h)) else {
            return;
        };
        let cols = clip_span(x as i64, w as i64, self.width());
        for row in clip_span(y as i64, h as i64, self.height()) {
            for col in cols.clone() {
                px.put(self, color, col, row);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(img: &IndexedImage) -> Vec<(i32, i32)> {
        let mut v = vec![];
        for y in 0..img.height() {
            for x in 0..img.width() {
                if img.get_pixel(x, y) != Some(0) {
                    v.push((x, y));
                }
            }
        }
        v
    }

    #[test]
    fn test_h_line_exact() {
        let mut img = IndexedImage::new(10, 10).unwrap();
        img.draw_h_line(3, 2, 5, 1);
        assert_eq!(lit(&img), vec![(2, 1), (3, 1), (4, 1), (5, 1)]);
        assert!((2..=5).all(|x| img.get_pixel(x, 1) == Some(3)));
    }

    #[test]
    fn test_h_line_reversed_and_clipped() {
        let mut img = IndexedImage::new(4, 2).unwrap();
        img.draw_h_line(1, 6, -3, 0);
        assert_eq!(lit(&img), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn test_v_line() {
        let mut img = IndexedImage::new(3, 5).unwrap();
        img.draw_v_line(2, 3, 1, 1);
        assert_eq!(lit(&img), vec![(1, 1), (1, 2), (1, 3)]);
        img.draw_v_line(2, -4, 100, 2);
        assert_eq!(lit(&img).len(), 3 + 5);
    }

    #[test]
    fn test_lines_outside_draw_nothing() {
        let mut img = IndexedImage::new(5, 5).unwrap();
        img.draw_h_line(1, 0, 4, 5);
        img.draw_v_line(1, 0, 4, -1);
        img.draw_line(1, -10, -10, -1, 40);
        img.draw_pixel(1, 5, 5);
        assert!(lit(&img).is_empty());
    }

    #[test]
    fn test_degenerate_line_one_pixel() {
        let mut img = IndexedImage::new(5, 5).unwrap();
        img.draw_line(4, 2, 3, 2, 3);
        assert_eq!(lit(&img), vec![(2, 3)]);
    }

    #[test]
    fn test_line_crossing_edge() {
        let mut img = IndexedImage::new(4, 4).unwrap();
        img.draw_line(1, -2, -2, 5, 5);
        assert_eq!(lit(&img), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_line_endpoints_inclusive() {
        let mut img = IndexedImage::new(10, 4).unwrap();
        img.draw_line(6, 0, 0, 9, 3);
        assert_eq!(img.get_pixel(0, 0), Some(6));
        assert_eq!(img.get_pixel(9, 3), Some(6));
        assert_eq!(lit(&img).len(), 10);
    }

    #[test]
    fn test_fill_rect() {
        let mut img = IndexedImage::new(6, 6).unwrap();
        img.fill_rect(2, 1, 2, 3, 2);
        assert_eq!(lit(&img), vec![(1, 2), (2, 2), (3, 2), (1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn test_fill_rect_touching_edge_is_clipped() {
        let mut img = IndexedImage::new(4, 4).unwrap();
        img.fill_rect(1, 0, 0, 4, 4);
        assert!(img.pixels().iter().all(|&p| p == 1));
        img.fill_rect(2, 2, 2, 10, 10);
        assert_eq!(img.get_pixel(3, 3), Some(2));
        assert_eq!(img.get_pixel(1, 3), Some(1));
    }

    #[test]
    fn test_fill_rect_empty() {
        let mut img = IndexedImage::new(4, 4).unwrap();
        img.fill_rect(1, 1, 1, 0, 3);
        img.fill_rect(1, 1, 1, 3, -2);
        img.fill_rect(1, 3, 3, -2, -2);
        assert!(lit(&img).is_empty());
    }

    #[test]
    fn test_huge_spans_clip_to_image() {
        let mut img = IndexedImage::new(4, 3).unwrap();
        img.draw_h_line(1, i32::MIN, i32::MAX, 1);
        assert_eq!(lit(&img), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
        img.draw_v_line(2, i32::MAX, i32::MIN, 0);
        assert_eq!(img.get_pixel(0, 0), Some(2));
        assert_eq!(img.get_pixel(0, 2), Some(2));

        img.fill_rect(5, -2_000_000_000, -2_000_000_000, i32::MAX, i32::MAX);
        assert!(img.pixels().iter().all(|&p| p == 5));
        img.fill_rect(6, 2, 1, i32::MAX, i32::MAX);
        assert_eq!(lit(&img).len(), 12);
        assert_eq!(img.get_pixel(1, 2), Some(5));
        assert_eq!(img.get_pixel(2, 1), Some(6));
        assert_eq!(img.get_pixel(3, 2), Some(6));
        assert_eq!(img.get_pixel(3, 0), Some(5));
    }
}
