//! Block assembly: paragraphs from single-column lines, grid rows from the rest.

use crate::model::{Block, GridCell, Token};

use super::{Column, LayoutConfig, WidthShare};

/// Join runs left to right.
///
/// A single space goes between two runs when the gap between them exceeds
/// `word_gap_threshold`, unless one side already carries the whitespace.
/// Kerned or ligature-split runs with smaller gaps are joined directly.
pub fn join_text(tokens: &[Token], word_gap_threshold: f32) -> String {
    let mut result = String::new();

    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            let prev = &tokens[i - 1];
            let gap = prev.gap_to(token);

            let prev_ends_with_space = prev.text.ends_with(char::is_whitespace);
            let curr_starts_with_space = token.text.starts_with(char::is_whitespace);

            if gap > word_gap_threshold && !prev_ends_with_space && !curr_starts_with_space {
                result.push(' ');
            }
        }
        result.push_str(&token.text);
    }

    result
}

/// Turn the columns of one line into a block.
///
/// Returns `None` only for a line without tokens.
pub fn assemble_block(columns: &[Column<'_>], config: &LayoutConfig) -> Option<Block> {
    match columns {
        [] => None,
        [column] => {
            let first = column.tokens.first()?;
            Some(Block::Paragraph {
                text: column.text(config.word_gap_threshold),
                indent: first.baseline_x * config.indent_scale,
                font_size: first.font_size,
            })
        }
        _ => {
            let shares = width_shares(columns, config.width_share);
            let cells = columns
                .iter()
                .zip(shares)
                .map(|(column, share)| {
                    GridCell::new(column.text(config.word_gap_threshold), share)
                })
                .collect();
            Some(Block::GridRow { cells })
        }
    }
}

/// Cell width shares for a multi-column line.
///
/// Proportional sizing falls back to an equal split whenever a span is not
/// strictly positive, so every share stays positive.
fn width_shares(columns: &[Column<'_>], mode: WidthShare) -> Vec<f32> {
    let equal = vec![1.0 / columns.len() as f32; columns.len()];

    match mode {
        WidthShare::Equal => equal,
        WidthShare::Proportional => {
            let spans: Vec<f32> = columns.iter().map(Column::span).collect();
            let total: f32 = spans.iter().sum();
            if spans.iter().all(|s| *s > 0.0 && s.is_finite()) && total > 0.0 {
                spans.into_iter().map(|s| s / total).collect()
            } else {
                equal
            }
        }
    }
}
