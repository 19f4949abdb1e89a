// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Pixel writer selection.
//!
//! A primitive's bounding box is tested against the image once, before any pixel is
//! written:
//! - box fully inside [0, width) x [0, height): `PixelWriter::Direct`, no per-pixel test
//! - box fully outside on either axis: `None`, the primitive draws nothing
//! - otherwise `PixelWriter::Clipped`, each write is tested and dropped if off the image

use crate::render::image::IndexedImage;
use crate::util::BBox;

/// How a primitive stores its pixels, chosen once per call by `select_writer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelWriter {
    /// Every pixel is known to be on the image.
    Direct,
    /// Pixels off the image are dropped.
    Clipped,
}

impl PixelWriter {
    /// Stores `color` at (x, y). `Direct` requires (x, y) to be on the image.
    #[inline]
    pub fn put(self, img: &mut IndexedImage, color: u8, x: i32, y: i32) {
        match self {
            PixelWriter::Direct => img.set_unchecked(color, x, y),
            PixelWriter::Clipped => {
                if img.contains(x, y) {
                    img.set_unchecked(color, x, y);
                }
            }
        }
    }
}

impl IndexedImage {
    /// Picks the writer for a primitive covering (x0, y0) to (x1, y1), ends included.
    /// Corners may be given in any order.
    pub fn select_writer(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Option<PixelWriter> {
        self.select_writer_for(BBox::from_corners(x0, y0, x1, y1))
    }

    /// `select_writer` for an already normalised box.
    pub fn select_writer_for(&self, bbox: BBox) -> Option<PixelWriter> {
        if bbox.inside(self.width(), self.height()) {
            Some(PixelWriter::Direct)
        } else if bbox.outside(self.width(), self.height()) {
            None
        } else {
            Some(PixelWriter::Clipped)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let img = IndexedImage::new(10, 8).unwrap();
        assert_eq!(img.select_writer(0, 0, 9, 7), Some(PixelWriter::Direct));
        assert_eq!(img.select_writer(9, 7, 0, 0), Some(PixelWriter::Direct));
        assert_eq!(img.select_writer(0, 0, 10, 7), Some(PixelWriter::Clipped));
        assert_eq!(img.select_writer(-1, 3, 2, 3), Some(PixelWriter::Clipped));
        assert_eq!(img.select_writer(-20, -20, 30, 30), Some(PixelWriter::Clipped));
        assert_eq!(img.select_writer(10, 0, 12, 7), None);
        assert_eq!(img.select_writer(0, -5, 9, -1), None);
        assert_eq!(img.select_writer(3, 8, 3, 100), None);
    }

    #[test]
    fn test_clipped_drops_offimage() {
        let mut img = IndexedImage::new(2, 2).unwrap();
        PixelWriter::Clipped.put(&mut img, 7, 2, 0);
        PixelWriter::Clipped.put(&mut img, 7, -1, 1);
        PixelWriter::Clipped.put(&mut img, 7, 1, 1);
        assert_eq!(img.pixels(), &[0, 0, 0, 7]);
    }
}
