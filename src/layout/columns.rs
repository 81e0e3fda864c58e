//! Column segmentation: split a line at wide horizontal gaps.

use crate::model::Token;

use super::{join_text, LayoutConfig, Line};

/// A contiguous run of a line's tokens, left to right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column<'a> {
    /// Tokens in this column, in line order
    pub tokens: &'a [Token],
    /// Column index (0 = leftmost)
    pub index: usize,
}

impl<'a> Column<'a> {
    /// Left boundary X coordinate.
    pub fn left(&self) -> f32 {
        self.tokens.first().map(|t| t.baseline_x).unwrap_or(0.0)
    }

    /// Right boundary X coordinate.
    pub fn right(&self) -> f32 {
        self.tokens
            .iter()
            .map(Token::right)
            .fold(self.left(), f32::max)
    }

    /// Horizontal extent of the column.
    pub fn span(&self) -> f32 {
        self.right() - self.left()
    }

    /// Number of tokens in the column.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the column has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Joined text of the column.
    pub fn text(&self, word_gap_threshold: f32) -> String {
        join_text(self.tokens, word_gap_threshold)
    }
}

/// Split a line into columns.
///
/// A boundary goes between two neighbours when the gap after the left token
/// exceeds `max(column_gap_threshold, charWidth * column_gap_multiplier)`,
/// where `charWidth` is the left token's average glyph width. A line with no
/// wide gap yields exactly one column.
pub fn segment_line<'a>(line: &'a Line, config: &LayoutConfig) -> Vec<Column<'a>> {
    let tokens = line.tokens.as_slice();
    if tokens.is_empty() {
        return vec![];
    }

    let mut columns = Vec::new();
    let mut start = 0;

    for (i, pair) in tokens.windows(2).enumerate() {
        let (prev, curr) = (&pair[0], &pair[1]);
        let gap = prev.gap_to(curr);
        if gap > config.column_gap_limit(prev.char_width()) {
            columns.push(Column {
                tokens: &tokens[start..=i],
                index: columns.len(),
            });
            start = i + 1;
        }
    }

    columns.push(Column {
        tokens: &tokens[start..],
        index: columns.len(),
    });

    if columns.len() > 1 {
        log::trace!(
            "line at y={:.1}: {} columns at {:?}",
            line.baseline_y,
            columns.len(),
            columns.iter().map(|c| c.left()).collect::<Vec<_>>()
        );
    }

    columns
}

/// Whether `columns` split `line` exactly: monotonic, no token lost or shared.
pub fn is_partition(line: &Line, columns: &[Column<'_>]) -> bool {
    let mut offset = 0;
    for column in columns {
        if column.is_empty() || offset + column.len() > line.tokens.len() {
            return false;
        }
        let expected = &line.tokens[offset..offset + column.len()];
        if !std::ptr::eq(expected.as_ptr(), column.tokens.as_ptr()) {
            return false;
        }
        offset += column.len();
    }
    offset == line.tokens.len()
}
