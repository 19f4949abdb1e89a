// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! IndexedImage is the drawing target: a palette plus a width * height byte vector,
//! one palette index per pixel, rows stored top to bottom.
//!
//! $ pixels()   -> width * height bytes, row-major
//! $ palette()  -> palette().as_bytes(), 3 bytes per entry
//!
//! Those two slices are what an indexed-colour encoder (GIF) takes for one frame.
//! The drawing primitives live in `draw` and `text`.

use crate::render::palette::{Palette, PaletteError};
use log::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageError {
    /// Width or height is zero
    ZeroSize { width: usize, height: usize },
    /// A side exceeds i32::MAX or width * height exceeds isize::MAX
    TooLarge { width: usize, height: usize },
    /// The pixel buffer could not be allocated
    OutOfMemory(usize),
}

impl std::fmt::Display for ImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageError::ZeroSize { width, height } => {
                write!(f, "Zero sized image: {}x{}", width, height)
            }
            ImageError::TooLarge { width, height } => {
                write!(f, "Image too large: {}x{}", width, height)
            }
            ImageError::OutOfMemory(size) => {
                write!(f, "Out of memory allocating {} pixel bytes", size)
            }
        }
    }
}

impl std::error::Error for ImageError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    palette: Palette,
    width: i32,
    height: i32,
    size: usize,
    data: Vec<u8>,
}

impl IndexedImage {
    /// Allocates a width * height image with an empty palette, every pixel set to index 0.
    pub fn new(width: usize, height: usize) -> Result<IndexedImage, ImageError> {
        if width == 0 || height == 0 {
            warn!("IndexedImage::new rejected {}x{}: zero size", width, height);
            return Err(ImageError::ZeroSize { width, height });
        }
        let size = match width.checked_mul(height) {
            Some(s) if width <= i32::MAX as usize
                && height <= i32::MAX as usize
                && s <= isize::MAX as usize =>
            {
                s
            }
            _ => {
                warn!("IndexedImage::new rejected {}x{}: too large", width, height);
                return Err(ImageError::TooLarge { width, height });
            }
        };

        let mut data = Vec::new();
        if data.try_reserve_exact(size).is_err() {
            warn!("IndexedImage::new out of memory for {} bytes", size);
            return Err(ImageError::OutOfMemory(size));
        }
        data.resize(size, 0);
        debug!("IndexedImage::new {}x{} ({} bytes)", width, height, size);

        Ok(IndexedImage {
            palette: Palette::new(),
            width: width as i32,
            height: height as i32,
            size,
            data,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Pixel buffer length in bytes, always width * height
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette index at (x, y), `None` off the image.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u8> {
        if self.contains(x, y) {
            Some(self.data[self.index_of(x, y)])
        } else {
            None
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Adds a colour to the palette, see `Palette::add`.
    pub fn palette_add(&mut self, r: u8, g: u8, b: u8) -> Result<u8, PaletteError> {
        self.palette.add(r, g, b).inspect_err(|e| warn!("palette_add: {}", e))
    }

    /// Adds a blend of two palette entries, see `Palette::add_blend`.
    pub fn palette_add_blend(&mut self, idx0: u8, idx1: u8, pos: u8) -> Result<u8, PaletteError> {
        self.palette
            .add_blend(idx0, idx1, pos)
            .inspect_err(|e| warn!("palette_add_blend: {}", e))
    }

    /// Sets every pixel to `color`.
    pub fn clear(&mut self, color: u8) {
        self.data.fill(color);
    }

    pub(crate) fn index_of(&self, x: i32, y: i32) -> usize {
        debug_assert!(
            self.contains(x, y),
            "index_of: ({}, {}) outside {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Writes without clipping, the caller has already proven (x, y) is on the image.
    #[inline]
    pub(crate) fn set_unchecked(&mut self, color: u8, x: i32, y: i32) {
        let i = self.index_of(x, y);
        self.data[i] = color;
    }
}
