// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! pixel_raster draws into 8-bit palette-indexed images.
//!
//! An `IndexedImage` owns a flat, row-major buffer of palette indices and a palette of at
//! most 256 RGB entries. Lines, filled rects and an 8px bitmap font are rasterized straight
//! into the buffer, clipped against the image bounds. The buffer and palette bytes are laid
//! out the way a GIF encoder consumes them, so the caller can hand them over as one frame.
//!
//! Every primitive classifies its bounding box once before drawing:
//! fully inside the image uses the unchecked writer, fully outside draws nothing,
//! anything straddling the edge checks each pixel.
//!
//! ```
//! use pixel_raster::render::IndexedImage;
//!
//! let mut img = IndexedImage::new(64, 16).unwrap();
//! let black = img.palette_add(0, 0, 0).unwrap();
//! let white = img.palette_add(255, 255, 255).unwrap();
//! let grey = img.palette_add_blend(black, white, 128).unwrap();
//! img.clear(black);
//! img.draw_line(grey, 0, 15, 63, 0);
//! let advance = img.draw_text(white, "hello", 1, 2, 4);
//! assert_eq!(advance, pixel_raster::render::text_width("hello", 1));
//! ```

/// canvas presets loaded from json: size, palette, blend ramps, background
pub mod config;

/// log4rs / wasm-logger setup for the log facade
pub mod log;

/// Render module.
/// palette: append-only rgb palette with blend interpolation.
/// image: indexed pixel buffer.
/// writer: per-primitive pixel writer selection (direct, clipped or skip).
/// draw: pixels, lines and filled rects.
/// font: static 8px glyph table.
/// text: glyph blitting with independent x/y scale.
pub mod render;

/// bounding boxes and shape algorithms (bresenham)
pub mod util;

pub use config::{CanvasConfig, ConfigError};
pub use render::{IndexedImage, ImageError, Palette, PaletteError, Rgb};
