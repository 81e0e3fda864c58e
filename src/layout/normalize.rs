//! Token normalization: drop unusable runs and derive font size and width.

use crate::model::{RawToken, Token};

use super::LayoutConfig;

/// Tokens that survived normalization, plus a count of those that did not.
#[derive(Debug, Clone, Default)]
pub struct NormalizedTokens {
    /// Usable tokens, in decoder order
    pub tokens: Vec<Token>,
    /// Number of degenerate tokens that were omitted
    pub dropped: usize,
}

/// Why a raw token was omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DropReason {
    BlankText,
    BadFontSize,
    BadOrigin,
}

/// Normalize the raw tokens of one page.
pub fn normalize_tokens(
    raw: &[RawToken],
    page_index: usize,
    config: &LayoutConfig,
) -> NormalizedTokens {
    let mut result = NormalizedTokens {
        tokens: Vec::with_capacity(raw.len()),
        dropped: 0,
    };

    for (i, token) in raw.iter().enumerate() {
        match normalize_token(token, page_index, config) {
            Ok(token) => result.tokens.push(token),
            Err(reason) => {
                log::trace!(
                    "page {}: dropping token {} ({:?}): {:?}",
                    page_index,
                    i,
                    token.text,
                    reason
                );
                result.dropped += 1;
            }
        }
    }

    log::debug!(
        "page {}: normalized {} tokens, dropped {}",
        page_index,
        result.tokens.len(),
        result.dropped
    );

    result
}

fn normalize_token(
    raw: &RawToken,
    page_index: usize,
    config: &LayoutConfig,
) -> Result<Token, DropReason> {
    if raw.text.trim().is_empty() {
        return Err(DropReason::BlankText);
    }

    // NaN fails this comparison too
    let font_size = raw.transform.scale();
    if !(font_size > 0.0 && font_size.is_finite()) {
        return Err(DropReason::BadFontSize);
    }

    if !raw.transform.has_finite_origin() {
        return Err(DropReason::BadOrigin);
    }

    let width = match raw.width {
        Some(w) if w > 0.0 && w.is_finite() => w,
        _ => estimate_width(&raw.text, font_size, config.glyph_width_factor),
    };

    let height = raw.height.filter(|h| *h > 0.0 && h.is_finite());

    Ok(Token {
        text: raw.text.clone(),
        baseline_x: raw.transform.tx,
        baseline_y: raw.transform.ty,
        width,
        font_size,
        height,
        page_index,
    })
}

/// Average-glyph-width estimate for runs without a measured width.
///
/// Always positive: an unusable factor falls back to the default one.
fn estimate_width(text: &str, font_size: f32, glyph_width_factor: f32) -> f32 {
    let factor = if glyph_width_factor > 0.0 && glyph_width_factor.is_finite() {
        glyph_width_factor
    } else {
        LayoutConfig::default().glyph_width_factor
    };
    text.chars().count() as f32 * factor * font_size
}
