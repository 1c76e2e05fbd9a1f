//! 5x7 bitmap font used to draw words on the contribution graph.

mod glyphs;

/// Rows per glyph; one row per weekday.
pub const LETTER_HEIGHT: usize = 7;
/// Columns per glyph; one column per week.
pub const LETTER_WIDTH: usize = 5;

// Character bitmap, row-major
pub type CharBitmap = Vec<Vec<bool>>;

/// One character of the font. Rows are packed as 5-bit masks, leftmost column in bit 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    ch: char,
    rows: [u8; LETTER_HEIGHT],
}

impl Glyph {
    pub fn ch(&self) -> char {
        self.ch
    }

    pub fn is_set(&self, row: usize, col: usize) -> bool {
        row < LETTER_HEIGHT
            && col < LETTER_WIDTH
            && (self.rows[row] >> (LETTER_WIDTH - 1 - col)) & 1 == 1
    }

    pub fn to_bitmap(&self) -> CharBitmap {
        (0..LETTER_HEIGHT)
            .map(|row| (0..LETTER_WIDTH).map(|col| self.is_set(row, col)).collect())
            .collect()
    }

    pub fn lit_cells(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }
}

/// Look up a glyph. Lowercase letters share the uppercase glyph.
pub fn glyph(ch: char) -> Option<Glyph> {
    let ch = ch.to_ascii_uppercase();
    glyphs::rows_for(ch).map(|rows| Glyph { ch, rows })
}

/// Characters the font can draw, in table order.
pub fn supported_chars() -> impl Iterator<Item = char> {
    glyphs::CHARSET.chars()
}
