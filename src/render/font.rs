// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! 8px bitmap font.
//!
//! Every glyph is 8 rows of one byte, bit 7 is the leftmost column, plus an advance in
//! pixels at scale 1. Rows are written as 8-byte strings, `#` for ink and `.` for blank,
//! and packed into bytes at compile time.
//!
//! The table covers codes 0..128. Codes without a drawing (controls, most punctuation)
//! hold the empty glyph: advance 0, no ink. Codes from 128 up have no glyph at all.

/// Glyph height in pixels.
pub const GLYPH_HEIGHT: usize = 8;

/// Maximum glyph width in pixels.
pub const GLYPH_WIDTH: usize = 8;

/// Number of character codes covered by `FONT`.
pub const FONT_LEN: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Glyph {
    pub advance: i32,
    pub rows: [u8; GLYPH_HEIGHT],
}

impl Glyph {
    pub const EMPTY: Glyph = Glyph {
        advance: 0,
        rows: [0; GLYPH_HEIGHT],
    };

    pub const fn new(advance: i32, rows: [&[u8; GLYPH_WIDTH]; GLYPH_HEIGHT]) -> Glyph {
        let mut packed = [0u8; GLYPH_HEIGHT];
        let mut i = 0;
        while i < GLYPH_HEIGHT {
            packed[i] = pack_row(rows[i]);
            i += 1;
        }
        Glyph {
            advance,
            rows: packed,
        }
    }

    /// Ink at (col, row), col 0 is the left edge.
    pub fn is_set(&self, col: usize, row: usize) -> bool {
        col < GLYPH_WIDTH && row < GLYPH_HEIGHT && self.rows[row] & (0x80 >> col) != 0
    }
}

const fn pack_row(row: &[u8; GLYPH_WIDTH]) -> u8 {
    let mut bits = 0u8;
    let mut col = 0;
    while col < GLYPH_WIDTH {
        if row[col] == b'#' {
            bits |= 0x80 >> col;
        }
        col += 1;
    }
    bits
}

/// Glyph for `ch`, `None` for codes outside the table.
pub fn glyph_for(ch: char) -> Option<&'static Glyph> {
    FONT.get(ch as usize)
}

pub static FONT: [Glyph; FONT_LEN] = build_font();

const fn build_font() -> [Glyph; FONT_LEN] {
    let mut font = [Glyph::EMPTY; FONT_LEN];
    font[b'a' as usize] = Glyph::new(
        5,
        [
            b"........",
            b"###.....",
            b"...#....",
            b".###....",
            b"#..#....",
            b".###....",
            b"........",
            b"........",
        ],
    );
    font[b'b' as usize] = Glyph::new(
        6,
        [
            b"#.......",
            b"####....",
            b"#...#...",
            b"#...#...",
            b"#...#...",
            b"####....",
            b"........",
            b"........",
        ],
    );
    font[b'c' as usize] = Glyph::new(
        6,
        [
            b"........",
            b".###....",
            b"#...#...",
            b"#.......",
            b"#...#...",
            b".###....",
            b"........",
            b"........",
        ],
    );
    font[b'd' as usize] = Glyph::new(
        6,
        [
            b"....#...",
            b".####...",
            b"#...#...",
            b"#...#...",
            b"#...#...",
            b".####...",
            b"........",
            b"........",
        ],
    );
    font[b'e' as usize] = Glyph::new(
        6,
        [
            b"........",
            b".###....",
            b"#...#...",
            b"####....",
            b"#.......",
            b".####...",
            b"........",
            b"........",
        ],
    );
    font[b'f' as usize] = Glyph::new(
        4,
        [
            b".##.....",
            b"#.......",
            b"###.....",
            b"#.......",
            b"#.......",
            b"#.......",
            b"........",
            b"........",
        ],
    );
    font[b'g' as usize] = Glyph::new(
        5,
        [
            b"........",
            b".##.....",
            b"#..#....",
            b"#..#....",
            b"#..#....",
            b".###....",
            b"...#....",
            b"###.....",
        ],
    );
    font[b'h' as usize] = Glyph::new(
        5,
        [
            b"#.......",
            b"###.....",
            b"#..#....",
            b"#..#....",
            b"#..#....",
            b"#..#....",
            b"........",
            b"........",
        ],
    );
    font[b'i' as usize] = Glyph::new(
        2,
        [
            b"#.......",
            b"........",
            b"#.......",
            b"#.......",
            b"#.......",
            b"#.......",
            b"........",
            b"........",
        ],
    );
    font[b'j' as usize] = Glyph::new(
        3,
        [
            b".#......",
            b"........",
            b".#......",
            b".#......",
            b".#......",
            b".#......",
            b".#......",
            b"#.......",
        ],
    );
    font[b'k' as usize] = Glyph::new(
        5,
        [
            b"#.......",
            b"#..#....",
            b"#.#.....",
            b"##......",
            b"#.#.....",
            b"#..#....",
            b"........",
            b"........",
        ],
    );
    font[b'l' as usize] = Glyph::new(
        2,
        [
            b"#.......",
            b"#.......",
            b"#.......",
            b"#.......",
            b"#.......",
            b"#.......",
            b"........",
            b"........",
        ],
    );
    font[b'm' as usize] = Glyph::new(
        6,
        [
            b"........",
            b"####....",
            b"#.#.#...",
            b"#.#.#...",
            b"#...#...",
            b"#...#...",
            b"........",
            b"........",
        ],
    );
    font[b'n' as usize] = Glyph::new(
        5,
        [
            b"........",
            b"###.....",
            b"#..#....",
            b"#..#....",
            b"#..#....",
            b"#..#....",
            b"........",
            b"........",
        ],
    );
    font[b'o' as usize] = Glyph::new(
        5,
        [
            b"........",
            b".##.....",
            b"#..#....",
            b"#..#....",
            b"#..#....",
            b".##.....",
            b"........",
            b"........",
        ],
    );
    font[b'p' as usize] = Glyph::new(
        5,
        [
            b"........",
            b"###.....",
            b"#..#....",
            b"#..#....",
            b"#..#....",
            b"###.....",
            b"#.......",
            b"#.......",
        ],
    );
    font[b'q' as usize] = Glyph::new(
        5,
        [
            b"........",
            b".##.....",
            b"#..#....",
            b"#..#....",
            b"#..#....",
            b".###....",
            b"...#....",
            b"...#....",
        ],
    );
    font[b'r' as usize] = Glyph::new(
        5,
        [
            b"........",
            b"###.....",
            b"#..#....",
            b"#.......",
            b"#.......",
            b"#.......",
            b"........",
            b"........",
        ],
    );
    font[b's' as usize] = Glyph::new(
        6,
        [
            b"........",
            b".####...",
            b"#.......",
            b".###....",
            b"....#...",
            b"####....",
            b"........",
            b"........",
        ],
    );
    font[b't' as usize] = Glyph::new(
        4,
        [
            b"#.......",
            b"###.....",
            b"#.......",
            b"#.......",
            b"#.......",
            b".##.....",
            b"........",
            b"........",
        ],
    );
    font[b'u' as usize] = Glyph::new(
        5,
        [
            b"........",
            b"#..#....",
            b"#..#....",
            b"#..#....",
            b"#..#....",
            b".###....",
            b"........",
            b"........",
        ],
    );
    font[b'v' as usize] = Glyph::new(
        6,
        [
            b"........",
            b"#...#...",
            b"#...#...",
            b"#...#...",
            b".#.#....",
            b"..#.....",
            b"........",
            b"........",
        ],
    );
    font[b'w' as usize] = Glyph::new(
        6,
        [
            b"........",
            b"#...#...",
            b"#.#.#...",
            b"#.#.#...",
            b"#.#.#...",
            b".###....",
            b"........",
            b"........",
        ],
    );
    font[b'x' as usize] = Glyph::new(
        6,
        [
            b"........",
            b"#...#...",
            b".#.#....",
            b"..#.....",
            b".#.#....",
            b"#...#...",
            b"........",
            b"........",
        ],
    );
    font[b'y' as usize] = Glyph::new(
        5,
        [
            b"........",
            b"#..#....",
            b"#..#....",
            b"#..#....",
            b"#..#....",
            b".###....",
            b"...#....",
            b"###.....",
        ],
    );
    font[b'z' as usize] = Glyph::new(
        5,
        [
            b"........",
            b"####....",
            b"...#....",
            b".##.....",
            b"#.......",
            b"####....",
            b"........",
            b"........",
        ],
    );
    font[b'A' as usize] = Glyph::new(
        6,
        [
            b"..#.....",
            b".#.#....",
            b"#...#...",
            b"#####...",
            b"#...#...",
            b"#...#...",
            b"........",
            b"........",
        ],
    );
    font[b'B' as usize] = Glyph::new(
        6,
        [
            b"####....",
            b"#...#...",
            b"####....",
            b"#...#...",
            b"#...#...",
            b"####....",
            b"........",
            b"........",
        ],
    );
    font[b'C' as usize] = Glyph::new(
        6,
        [
            b".###....",
            b"#...#...",
            b"#.......",
            b"#.......",
            b"#...#...",
            b".###....",
            b"........",
            b"........",
        ],
    );
    font[b'D' as usize] = Glyph::new(
        6,
        [
            b"####....",
            b"#...#...",
            b"#...#...",
            b"#...#...",
            b"#...#...",
            b"####....",
            b"........",
            b"........",
        ],
    );
    font[b'E' as usize] = Glyph::new(
        6,
        [
            b"#####...",
            b"#.......",
            b"####....",
            b"#.......",
            b"#.......",
            b"#####...",
            b"........",
            b"........",
        ],
    );
    font[b'F' as usize] = Glyph::new(
        6,
        [
            b"#####...",
            b"#.......",
            b"####....",
            b"#.......",
            b"#.......",
            b"#.......",
            b"........",
            b"........",
        ],
    );
    font[b'G' as usize] = Glyph::new(
        6,
        [
            b".###....",
            b"#...#...",
            b"#.......",
            b"#..##...",
            b"#...#...",
            b".###....",
            b"........",
            b"........",
        ],
    );
    font[b'H' as usize] = Glyph::new(
        6,
        [
            b"#...#...",
            b"#...#...",
            b"#####...",
            b"#...#...",
            b"#...#...",
            b"#...#...",
            b"........",
            b"........",
        ],
    );
    font[b'I' as usize] = Glyph::new(
        4,
        [
            b"###.....",
            b".#......",
            b".#......",
            b".#......",
            b".#......",
            b"###.....",
            b"........",
            b"........",
        ],
    );
    font[b'J' as usize] = Glyph::new(
        5,
        [
            b".###....",
            b"...#....",
            b"...#....",
            b"...#....",
            b"#..#....",
            b".##.....",
            b"........",
            b"........",
        ],
    );
    font[b'K' as usize] = Glyph::new(
        6,
        [
            b"#..#....",
            b"#.#.....",
            b"##......",
            b"#.#.....",
            b"#..#....",
            b"#...#...",
            b"........",
            b"........",
        ],
    );
    font[b'L' as usize] = Glyph::new(
        5,
        [
            b"#.......",
            b"#.......",
            b"#.......",
            b"#.......",
            b"#.......",
            b"####....",
            b"........",
            b"........",
        ],
    );
    font[b'M' as usize] = Glyph::new(
        8,
        [
            b"#.....#.",
            b"##...##.",
            b"#.#.#.#.",
            b"#..#..#.",
            b"#..#..#.",
            b"#.....#.",
            b"........",
            b"........",
        ],
    );
    font[b'N' as usize] = Glyph::new(
        6,
        [
            b"#...#...",
            b"##..#...",
            b"#.#.#...",
            b"#..##...",
            b"#...#...",
            b"#...#...",
            b"........",
            b"........",
        ],
    );
    font[b'O' as usize] = Glyph::new(
        6,
        [
            b".###....",
            b"#...#...",
            b"#...#...",
            b"#...#...",
            b"#...#...",
            b".###....",
            b"........",
            b"........",
        ],
    );
    font[b'P' as usize] = Glyph::new(
        6,
        [
            b"####....",
            b"#...#...",
            b"####....",
            b"#.......",
            b"#.......",
            b"#.......",
            b"........",
            b"........",
        ],
    );
    font[b'Q' as usize] = Glyph::new(
        6,
        [
            b".###....",
            b"#...#...",
            b"#...#...",
            b"#...#...",
            b".#.#....",
            b"..###...",
            b"........",
            b"........",
        ],
    );
    font[b'R' as usize] = Glyph::new(
        6,
        [
            b"###.....",
            b"#..#....",
            b"###.....",
            b"#..#....",
            b"#...#...",
            b"#...#...",
            b"........",
            b"........",
        ],
    );
    font[b'S' as usize] = Glyph::new(
        7,
        [
            b".####...",
            b"#....#..",
            b".##.....",
            b"...##...",
            b"#....#..",
            b".####...",
            b"........",
            b"........",
        ],
    );
    font[b'T' as usize] = Glyph::new(
        6,
        [
            b"#####...",
            b"..#.....",
            b"..#.....",
            b"..#.....",
            b"..#.....",
            b"..#.....",
            b"........",
            b"........",
        ],
    );
    font[b'U' as usize] = Glyph::new(
        6,
        [
            b"#...#...",
            b"#...#...",
            b"#...#...",
            b"#...#...",
            b"#...#...",
            b".###....",
            b"........",
            b"........",
        ],
    );
    font[b'V' as usize] = Glyph::new(
        6,
        [
            b"#...#...",
            b"#...#...",
            b"#...#...",
            b".#.#....",
            b".#.#....",
            b"..#.....",
            b"........",
            b"........",
        ],
    );
    font[b'W' as usize] = Glyph::new(
        8,
        [
            b"#.....#.",
            b"#.....#.",
            b"#..#..#.",
            b"#.#.#.#.",
            b"##...##.",
            b"#.....#.",
            b"........",
            b"........",
        ],
    );
    font[b'X' as usize] = Glyph::new(
        6,
        [
            b"#...#...",
            b".#.#....",
            b"..#.....",
            b"..#.....",
            b".#.#....",
            b"#...#...",
            b"........",
            b"........",
        ],
    );
    font[b'Y' as usize] = Glyph::new(
        6,
        [
            b"#...#...",
            b"#...#...",
            b".#.#....",
            b"..#.....",
            b"..#.....",
            b"..#.....",
            b"........",
            b"........",
        ],
    );
    font[b'Z' as usize] = Glyph::new(
        5,
        [
            b"####....",
            b"...#....",
            b"..#.....",
            b".#......",
            b"#.......",
            b"####....",
            b"........",
            b"........",
        ],
    );
    font[b'0' as usize] = Glyph::new(
        6,
        [
            b".###....",
            b"#...#...",
            b"#..##...",
            b"##..#...",
            b"#...#...",
            b".###....",
            b"........",
            b"........",
        ],
    );
    font[b'1' as usize] = Glyph::new(
        6,
        [
            b"..#.....",
            b".##.....",
            b"..#.....",
            b"..#.....",
            b"..#.....",
            b".###....",
            b"........",
            b"........",
        ],
    );
    font[b'2' as usize] = Glyph::new(
        6,
        [
            b".###....",
            b"#...#...",
            b"...#....",
            b".##.....",
            b"#.......",
            b"#####...",
            b"........",
            b"........",
        ],
    );
    font[b'3' as usize] = Glyph::new(
        6,
        [
            b".###....",
            b"#...#...",
            b"..##....",
            b"....#...",
            b"#...#...",
            b".###....",
            b"........",
            b"........",
        ],
    );
    font[b'4' as usize] = Glyph::new(
        6,
        [
            b"...#....",
            b"..##....",
            b".#.#....",
            b"#..#....",
            b"#####...",
            b"...#....",
            b"........",
            b"........",
        ],
    );
    font[b'5' as usize] = Glyph::new(
        6,
        [
            b"#####...",
            b"#.......",
            b"####....",
            b"....#...",
            b"#...#...",
            b".###....",
            b"........",
            b"........",
        ],
    );
    font[b'6' as usize] = Glyph::new(
        6,
        [
            b".###....",
            b"#.......",
            b"####....",
            b"#...#...",
            b"#...#...",
            b".###....",
            b"........",
            b"........",
        ],
    );
    font[b'7' as usize] = Glyph::new(
        6,
        [
            b"#####...",
            b"...#....",
            b"..#.....",
            b".#......",
            b".#......",
            b".#......",
            b"........",
            b"........",
        ],
    );
    font[b'8' as usize] = Glyph::new(
        6,
        [
            b".###....",
            b"#...#...",
            b".###....",
            b"#...#...",
            b"#...#...",
            b".###....",
            b"........",
            b"........",
        ],
    );
    font[b'9' as usize] = Glyph::new(
        6,
        [
            b".###....",
            b"#...#...",
            b"#...#...",
            b".####...",
            b"....#...",
            b".###....",
            b"........",
            b"........",
        ],
    );
    font[b' ' as usize] = Glyph::new(
        3,
        [
            b"........",
            b"........",
            b"........",
            b"........",
            b"........",
            b"........",
            b"........",
            b"........",
        ],
    );
    font[b'!' as usize] = Glyph::new(
        2,
        [
            b"#.......",
            b"#.......",
            b"#.......",
            b"#.......",
            b"........",
            b"#.......",
            b"........",
            b"........",
        ],
    );
    font[b'"' as usize] = Glyph::new(
        4,
        [
            b"#.#.....",
            b"#.#.....",
            b"........",
            b"........",
            b"........",
            b"........",
            b"........",
            b"........",
        ],
    );
    font[b'(' as usize] = Glyph::new(
        3,
        [
            b".#......",
            b"#.......",
            b"#.......",
            b"#.......",
            b"#.......",
            b"#.......",
            b".#......",
            b"........",
        ],
    );
    font[b')' as usize] = Glyph::new(
        3,
        [
            b"#.......",
            b".#......",
            b".#......",
            b".#......",
            b".#......",
            b".#......",
            b"#.......",
            b"........",
        ],
    );
    font[b',' as usize] = Glyph::new(
        3,
        [
            b"........",
            b"........",
            b"........",
            b"........",
            b".#......",
            b"#.......",
            b"........",
            b"........",
        ],
    );
    font[b'-' as usize] = Glyph::new(
        4,
        [
            b"........",
            b"........",
            b"........",
            b"###.....",
            b"........",
            b"........",
            b"........",
            b"........",
        ],
    );
    font[b'_' as usize] = Glyph::new(
        6,
        [
            b"........",
            b"........",
            b"........",
            b"........",
            b"........",
            b"........",
            b"........",
            b"#####...",
        ],
    );
    font[b'.' as usize] = Glyph::new(
        2,
        [
            b"........",
            b"........",
            b"........",
            b"........",
            b"........",
            b"#.......",
            b"........",
            b"........",
        ],
    );
    font[b':' as usize] = Glyph::new(
        2,
        [
            b"........",
            b"........",
            b"#.......",
            b"........",
            b"........",
            b"#.......",
            b"........",
            b"........",
        ],
    );
    font[b';' as usize] = Glyph::new(
        3,
        [
            b"........",
            b"........",
            b".#......",
            b"........",
            b"........",
            b".#......",
            b"#.......",
            b"........",
        ],
    );
    font[b'?' as usize] = Glyph::new(
        6,
        [
            b".###....",
            b"#...#...",
            b"...#....",
            b"..#.....",
            b"........",
            b"..#.....",
            b"........",
            b"........",
        ],
    );
    font[b'[' as usize] = Glyph::new(
        3,
        [
            b"##......",
            b"#.......",
            b"#.......",
            b"#.......",
            b"#.......",
            b"#.......",
            b"##......",
            b"........",
        ],
    );
    font[b']' as usize] = Glyph::new(
        3,
        [
            b"##......",
            b".#......",
            b".#......",
            b".#......",
            b".#......",
            b".#......",
            b"##......",
            b"........",
        ],
    );
    font[b'{' as usize] = Glyph::new(
        4,
        [
            b"..#.....",
            b".#......",
            b".#......",
            b"##......",
            b".#......",
            b".#......",
            b"..#.....",
            b"........",
        ],
    );
    font[b'}' as usize] = Glyph::new(
        4,
        [
            b"#.......",
            b".#......",
            b".#......",
            b".##.....",
            b".#......",
            b".#......",
            b"#.......",
            b"........",
        ],
    );
    font
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_row() {
        assert_eq!(pack_row(b"#......."), 0x80);
        assert_eq!(pack_row(b".......#"), 0x01);
        assert_eq!(pack_row(b"###.#..."), 0xE8);
    }

    #[test]
    fn test_lookup() {
        let a = glyph_for('a').unwrap();
        assert_eq!(a.advance, 5);
        assert_eq!(a.rows[1], 0b1110_0000);
        assert!(a.is_set(0, 4));
        assert!(!a.is_set(1, 4));
        assert_eq!(glyph_for('M').map(|g| g.advance), Some(8));
        assert_eq!(glyph_for(' ').map(|g| g.advance), Some(3));
    }

    #[test]
    fn test_unmapped_and_out_of_range() {
        assert_eq!(glyph_for('\n'), Some(&Glyph::EMPTY));
        assert_eq!(glyph_for('~'), Some(&Glyph::EMPTY));
        assert_eq!(glyph_for('\u{7f}'), Some(&Glyph::EMPTY));
        assert_eq!(glyph_for('\u{80}'), None);
        assert_eq!(glyph_for('é'), None);
    }

    #[test]
    fn test_space_has_no_ink() {
        let g = glyph_for(' ').unwrap();
        assert!(g.rows.iter().all(|&r| r == 0));
    }

    #[test]
    fn test_all_mapped_glyphs_fit_width() {
        for g in FONT.iter() {
            assert!(g.advance >= 0 && g.advance as usize <= GLYPH_WIDTH);
        }
    }
}
