// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Palette keeps up to 256 RGB entries in insertion order.
//!
//! Entries are never changed or removed, only appended. The backing store is a flat
//! `[u8; 768]` so `as_bytes` can hand the used part straight to an encoder as
//! `r, g, b, r, g, b, ...`.

use serde::{Deserialize, Serialize};

/// Maximum number of palette entries.
pub const PALETTE_MAX: usize = 256;

/// Number of colour channels per entry.
pub const CHANNEL_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Rgb::new(c[0], c[1], c[2])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    /// All 256 slots are taken
    Full,
}

impl std::fmt::Display for PaletteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaletteError::Full => write!(f, "Palette full: {} entries in use", PALETTE_MAX),
        }
    }
}

impl std::error::Error for PaletteError {}

#[derive(Clone, PartialEq, Eq)]
pub struct Palette {
    data: [u8; CHANNEL_COUNT * PALETTE_MAX],
    count: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Palette").field("count", &self.count).finish()
    }
}

impl Palette {
    pub fn new() -> Self {
        Self {
            data: [0; CHANNEL_COUNT * PALETTE_MAX],
            count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count >= PALETTE_MAX
    }

    /// Entry at `idx`, `None` past the last added entry.
    pub fn get(&self, idx: u8) -> Option<Rgb> {
        if (idx as usize) < self.count {
            Some(self.slot(idx))
        } else {
            None
        }
    }

    /// Used part of the palette, 3 bytes per entry.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..CHANNEL_COUNT * self.count]
    }

    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.as_bytes()
            .chunks_exact(CHANNEL_COUNT)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
    }

    /// Appends a colour and returns its index.
    pub fn add(&mut self, r: u8, g: u8, b: u8) -> Result<u8, PaletteError> {
        if self.is_full() {
            return Err(PaletteError::Full);
        }
        let idx = self.count;
        let off = CHANNEL_COUNT * idx;
        self.data[off] = r;
        self.data[off + 1] = g;
        self.data[off + 2] = b;
        self.count += 1;
        Ok(idx as u8)
    }

    /// Appends the colour `pos/255` of the way from entry `idx0` to entry `idx1`.
    ///
    /// `pos` 0 is exactly `idx0`, 255 is exactly `idx1`. Each channel steps from the first
    /// colour by the truncated `|delta| * pos / 255`, so the result is biased toward `idx0`
    /// and `blend(a, b, p)` is not always `blend(b, a, 255 - p)`.
    ///
    /// The indices are not checked against the number of entries: a slot that was never
    /// added reads as black.
    pub fn add_blend(&mut self, idx0: u8, idx1: u8, pos: u8) -> Result<u8, PaletteError> {
        let c0 = self.slot(idx0);
        let c1 = self.slot(idx1);
        self.add(
            blend_channel(c0.r, c1.r, pos),
            blend_channel(c0.g, c1.g, pos),
            blend_channel(c0.b, c1.b, pos),
        )
    }

    fn slot(&self, idx: u8) -> Rgb {
        let off = CHANNEL_COUNT * idx as usize;
        Rgb::new(self.data[off], self.data[off + 1], self.data[off + 2])
    }
}

fn blend_channel(c0: u8, c1: u8, pos: u8) -> u8 {
    let (c0, c1, pos) = (c0 as u32, c1 as u32, pos as u32);
    let v = if c0 <= c1 {
        c0 + (c1 - c0) * pos / 255
    } else {
        c0 - (c0 - c1) * pos / 255
    };
    v as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_indices_in_order() {
        let mut p = Palette::new();
        assert!(p.is_empty());
        assert_eq!(p.add(1, 2, 3), Ok(0));
        assert_eq!(p.add(4, 5, 6), Ok(1));
        assert_eq!(p.len(), 2);
        assert_eq!(p.get(1), Some(Rgb::new(4, 5, 6)));
        assert_eq!(p.get(2), None);
        assert_eq!(p.as_bytes(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_full_palette_rejects() {
        let mut p = Palette::new();
        for i in 0..PALETTE_MAX {
            assert_eq!(p.add(i as u8, 0, 0), Ok(i as u8));
        }
        assert!(p.is_full());
        assert_eq!(p.add(9, 9, 9), Err(PaletteError::Full));
        assert_eq!(p.add_blend(0, 1, 10), Err(PaletteError::Full));
        assert_eq!(p.len(), PALETTE_MAX);
        assert_eq!(p.get(255), Some(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn test_blend_endpoints_exact() {
        let mut p = Palette::new();
        let a = p.add(10, 200, 77).unwrap();
        let b = p.add(250, 3, 77).unwrap();
        let lo = p.add_blend(a, b, 0).unwrap();
        let hi = p.add_blend(a, b, 255).unwrap();
        assert_eq!(p.get(lo), p.get(a));
        assert_eq!(p.get(hi), p.get(b));
    }

    #[test]
    fn test_blend_truncates_toward_first() {
        let mut p = Palette::new();
        let a = p.add(0, 255, 100).unwrap();
        let b = p.add(255, 0, 101).unwrap();
        let m = p.add_blend(a, b, 128).unwrap();
        // 255 * 128 / 255 = 128 up, 255 - 128 down, 1 * 128 / 255 = 0
        assert_eq!(p.get(m), Some(Rgb::new(128, 127, 100)));
        let n = p.add_blend(b, a, 127).unwrap();
        assert_eq!(p.get(n), Some(Rgb::new(128, 127, 101)));
    }

    #[test]
    fn test_blend_unset_slot_reads_black() {
        let mut p = Palette::new();
        let a = p.add(200, 200, 200).unwrap();
        let m = p.add_blend(a, 42, 255).unwrap();
        assert_eq!(p.get(m), Some(Rgb::new(0, 0, 0)));
    }
}
