// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Text rendering with the 8px font.
//!
//! Each glyph bit becomes a scale_x * scale_y block, cut down to the part on the image
//! before it is written. The returned advance does not depend
//! on clipping, so text laid out partly or fully off the image still moves the pen by the
//! same amount as `text_width` reports.
//!
//! Strings end at their last char or at the first NUL, whichever comes first.

use crate::render::font::{glyph_for, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::render::image::IndexedImage;
use crate::util::{clip_span, BBox};

impl IndexedImage {
    /// Draws `ch` with its top-left corner at (x, y) and returns its scaled advance.
    /// Characters with no glyph, or an empty one, draw nothing and return 0.
    pub fn draw_char_scaled(
        &mut self,
        color: u8,
        ch: char,
        scale_x: i32,
        scale_y: i32,
        x: i32,
        y: i32,
    ) -> i32 {
        let glyph = match glyph_for(ch) {
            Some(g) if g.advance != 0 => g,
            _ => return 0,
        };
        let advance = glyph.advance.saturating_mul(scale_x);
        let bbox = BBox::from_corners(
            x,
            y,
            x.saturating_add(advance),
            y.saturating_add((GLYPH_HEIGHT as i32).saturating_mul(scale_y)),
        );
        let Some(px) = self.select_writer_for(bbox) else {
            return advance;
        };

        let (sx, sy) = (scale_x as i64, scale_y as i64);
        for (row, bits) in glyph.rows.into_iter().enumerate() {
            let rows = clip_span(y as i64 + row as i64 * sy, sy, self.height());
            if bits == 0 || rows.is_empty() {
                continue;
            }
            for col in 0..GLYPH_WIDTH {
                if bits & (0x80 >> col) == 0 {
                    continue;
                }
                let cols = clip_span(x as i64 + col as i64 * sx, sx, self.width());
                for cy in rows.clone() {
                    for cx in cols.clone() {
                        px.put(self, color, cx, cy);
                    }
                }
            }
        }
        advance
    }

    pub fn draw_char(&mut self, color: u8, ch: char, scale: i32, x: i32, y: i32) -> i32 {
        self.draw_char_scaled(color, ch, scale, scale, x, y)
    }

    /// Draws `text` left to right from (x, y), returns the total advance.
    pub fn draw_text(&mut self, color: u8, text: &str, scale: i32, x: i32, y: i32) -> i32 {
        self.draw_chars(color, text.chars(), scale, x, y)
    }

    /// `draw_text` over any char sequence, used for byte strings coming through ffi.
    pub fn draw_chars<I>(&mut self, color: u8, chars: I, scale: i32, x: i32, y: i32) -> i32
    where
        I: IntoIterator<Item = char>,
    {
        let mut advance = 0i32;
        for ch in chars.into_iter().take_while(|&c| c != '\0') {
            let step = self.draw_char(color, ch, scale, x.saturating_add(advance), y);
            advance = advance.saturating_add(step);
        }
        advance
    }
}

/// Width of `text` at `scale` without drawing it.
pub fn text_width(text: &str, scale: i32) -> i32 {
    chars_width(text.chars(), scale)
}

pub fn chars_width<I>(chars: I, scale: i32) -> i32
where
    I: IntoIterator<Item = char>,
{
    chars
        .into_iter()
        .take_while(|&c| c != '\0')
        .filter_map(glyph_for)
        .fold(0i32, |acc, g| acc.saturating_add(g.advance.saturating_mul(scale)))
}

pub fn text_height(scale: i32) -> i32 {
    (GLYPH_HEIGHT as i32).saturating_mul(scale)
}
