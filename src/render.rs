// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Render module
//!
//! Rasterizes into a palette-indexed image.
//!
//! ## Submodules
//! - `palette`: append-only RGB palette, up to 256 entries
//! - `image`: the indexed pixel buffer and its lifecycle
//! - `writer`: bounding box classification, picks the pixel writer for a primitive
//! - `draw`: pixels, horizontal/vertical/bresenham lines, filled rects
//! - `font`: static 8px glyph table
//! - `text`: scaled glyph blitting and text metrics

pub mod draw;
pub mod font;
pub mod image;
pub mod palette;
pub mod text;
pub mod writer;

pub use font::{glyph_for, Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use image::{ImageError, IndexedImage};
pub use palette::{Palette, PaletteError, Rgb, PALETTE_MAX};
pub use text::{text_height, text_width};
pub use writer::PixelWriter;
