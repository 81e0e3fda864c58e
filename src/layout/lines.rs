//! Line clustering: group tokens that share a baseline.

use std::cmp::Ordering;

use crate::model::{Region, Token};

use super::{join_text, LayoutConfig};

/// Tokens on approximately the same baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Baseline of the first token that opened the line
    pub baseline_y: f32,
    /// Tokens sorted by X position
    pub tokens: Vec<Token>,
    /// Dominant font size, weighted by character count
    pub font_size: f32,
    /// Vertical region; `Body` until classified
    pub region: Region,
}

impl Line {
    /// Create a line from the tokens of one cluster.
    pub fn new(baseline_y: f32, mut tokens: Vec<Token>) -> Self {
        tokens.sort_by(|a, b| {
            a.baseline_x
                .partial_cmp(&b.baseline_x)
                .unwrap_or(Ordering::Equal)
        });

        let total_chars: usize = tokens.iter().map(Token::char_count).sum();
        let weighted_size: f32 = tokens
            .iter()
            .map(|t| t.font_size * t.char_count() as f32)
            .sum();
        let font_size = if total_chars > 0 {
            weighted_size / total_chars as f32
        } else {
            tokens.first().map(|t| t.font_size).unwrap_or(0.0)
        };

        Self {
            baseline_y,
            tokens,
            font_size,
            region: Region::Body,
        }
    }

    /// Same line, tagged with a region.
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Leftmost X position.
    pub fn left(&self) -> f32 {
        self.tokens.first().map(|t| t.baseline_x).unwrap_or(0.0)
    }

    /// Rightmost edge.
    pub fn right(&self) -> f32 {
        self.tokens
            .iter()
            .map(Token::right)
            .fold(f32::NEG_INFINITY, f32::max)
            .max(self.left())
    }

    /// Number of tokens in the line.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the line has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Combined text of the whole line.
    pub fn text(&self, word_gap_threshold: f32) -> String {
        join_text(&self.tokens, word_gap_threshold)
    }
}

/// Group tokens into lines, top of page first.
///
/// A token joins the open line while its baseline is closer to the line's
/// baseline than `max(font size, previous font size) * line_tolerance_factor`.
pub fn cluster_lines(mut tokens: Vec<Token>, config: &LayoutConfig) -> Vec<Line> {
    if tokens.is_empty() {
        return vec![];
    }

    // Sort by Y (descending, since PDF Y is bottom-up) then X
    tokens.sort_by(|a, b| {
        b.baseline_y
            .partial_cmp(&a.baseline_y)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                a.baseline_x
                    .partial_cmp(&b.baseline_x)
                    .unwrap_or(Ordering::Equal)
            })
    });

    let mut lines: Vec<Line> = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut current_y = 0.0_f32;
    let mut prev_font_size = 0.0_f32;

    for token in tokens {
        if current.is_empty() {
            current_y = token.baseline_y;
        } else {
            let tolerance = token.font_size.max(prev_font_size) * config.line_tolerance_factor;
            if (token.baseline_y - current_y).abs() >= tolerance {
                lines.push(Line::new(current_y, std::mem::take(&mut current)));
                current_y = token.baseline_y;
            }
        }
        prev_font_size = token.font_size;
        current.push(token);
    }

    // Don't forget the last line
    if !current.is_empty() {
        lines.push(Line::new(current_y, current));
    }

    log::debug!("clustered into {} lines", lines.len());
    lines
}
