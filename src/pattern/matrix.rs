use crate::error::{GraphError, Result};
use crate::font::{self, CharBitmap, LETTER_HEIGHT, LETTER_WIDTH};
use tracing::debug;

/// Blank columns between consecutive letters.
pub const SEPARATOR_WIDTH: usize = 1;
/// Week columns available on a one-year contribution graph.
pub const MAX_COLUMNS: usize = 60;

/// A word rendered into rows of cells; row = weekday, column = week.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordMatrix {
    word: String,
    cells: CharBitmap,
}

impl WordMatrix {
    /// Uppercased word this matrix was built from.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, |row| row.len())
    }

    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.cells
    }

    pub fn lit_cells(&self) -> usize {
        self.cells.iter().flatten().filter(|c| **c).count()
    }
}

/// Width in columns of a word with `letters` characters.
pub fn required_width(letters: usize) -> usize {
    if letters == 0 {
        return 0;
    }
    letters * LETTER_WIDTH + (letters - 1) * SEPARATOR_WIDTH
}

/// Render `word` with the 5x7 font.
///
/// The word is uppercased first. Every character must have a glyph and the
/// result must fit in [`MAX_COLUMNS`]; nothing is built otherwise.
pub fn build_matrix(word: &str) -> Result<WordMatrix> {
    let word = word.to_uppercase();
    if word.is_empty() {
        return Err(GraphError::InvalidInput("word must not be empty".to_string()));
    }

    let glyphs = word
        .chars()
        .map(|ch| font::glyph(ch).ok_or(GraphError::UnknownGlyph(ch)))
        .collect::<Result<Vec<_>>>()?;

    let width = required_width(glyphs.len());
    if width > MAX_COLUMNS {
        return Err(GraphError::WidthExceeded {
            required: width,
            max: MAX_COLUMNS,
        });
    }

    let mut cells: CharBitmap = vec![Vec::with_capacity(width); LETTER_HEIGHT];
    for (index, glyph) in glyphs.iter().enumerate() {
        for (row, line) in cells.iter_mut().enumerate() {
            line.extend((0..LETTER_WIDTH).map(|col| glyph.is_set(row, col)));
            if index + 1 < glyphs.len() {
                line.extend(std::iter::repeat(false).take(SEPARATOR_WIDTH));
            }
        }
    }

    debug!(word = %word, width, "built word matrix");
    Ok(WordMatrix { word, cells })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hi_dimensions() {
        let matrix = build_matrix("HI").unwrap();
        assert_eq!(matrix.height(), 7);
        assert_eq!(matrix.width(), 11);
        assert!(matrix.rows().iter().all(|r| r.len() == 11));
    }

    #[test]
    fn test_dimensions_depend_only_on_length() {
        for word in ["A", "MM", "I I", "HELLO", "0123456789"] {
            let matrix = build_matrix(word).unwrap();
            let n = word.chars().count();
            assert_eq!(matrix.height(), LETTER_HEIGHT, "{}", word);
            assert_eq!(matrix.width(), n * 5 + (n - 1), "{}", word);
        }
    }

    #[test]
    fn test_separator_column_is_blank() {
        let matrix = build_matrix("HH").unwrap();
        for row in 0..matrix.height() {
            assert!(!matrix.is_set(row, 5));
        }
        // H has full-height stems on both sides
        assert!((0..7).all(|row| matrix.is_set(row, 4) && matrix.is_set(row, 6)));
    }

    #[test]
    fn test_lowercase_is_uppercased() {
        let lower = build_matrix("hi").unwrap();
        assert_eq!(lower.word(), "HI");
        assert_eq!(lower, build_matrix("HI").unwrap());
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(build_matrix("HELLO").unwrap(), build_matrix("HELLO").unwrap());
    }

    #[test]
    fn test_lit_cells() {
        assert_eq!(build_matrix("HI").unwrap().lit_cells(), 28);
    }

    #[test]
    fn test_unknown_glyph() {
        let err = build_matrix("HI@").unwrap_err();
        assert!(matches!(err, GraphError::UnknownGlyph('@')));
    }

    #[test]
    fn test_empty_word() {
        assert!(matches!(build_matrix(""), Err(GraphError::InvalidInput(_))));
    }

    #[test]
    fn test_width_limit() {
        // 10 letters: 10*5 + 9 = 59 fits
        assert_eq!(build_matrix("ABCDEFGHIJ").unwrap().width(), 59);
        // 11 letters: 11*5 + 10 = 65 does not
        let err = build_matrix("ABCDEFGHIJK").unwrap_err();
        assert!(matches!(
            err,
            GraphError::WidthExceeded {
                required: 65,
                max: 60
            }
        ));
    }

    #[test]
    fn test_unknown_glyph_reported_before_width() {
        let err = build_matrix("ABCDEFGHIJK@").unwrap_err();
        assert!(matches!(err, GraphError::UnknownGlyph('@')));
    }

    #[test]
    fn test_required_width() {
        assert_eq!(required_width(0), 0);
        assert_eq!(required_width(1), 5);
        assert_eq!(required_width(2), 11);
    }
}
