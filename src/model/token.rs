//! Token types: the page-decoder input contract and its normalized form.

use serde::{Deserialize, Serialize};

/// A 2D affine placement transform `[a, b, c, d, tx, ty]`.
///
/// Serialized as a plain six-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 6]", into = "[f32; 6]")]
pub struct Transform {
    /// Horizontal scale
    pub a: f32,
    /// Horizontal shear
    pub b: f32,
    /// Vertical shear
    pub c: f32,
    /// Vertical scale
    pub d: f32,
    /// X translation (baseline origin)
    pub tx: f32,
    /// Y translation (baseline origin)
    pub ty: f32,
}

impl Transform {
    /// Create a transform from its six components.
    pub fn new(a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// Uniform scale placed at `(x, y)`, the common case for upright text.
    pub fn scaled_at(size: f32, x: f32, y: f32) -> Self {
        Self::new(size, 0.0, 0.0, size, x, y)
    }

    /// Magnitude of the horizontal scale/shear components, `sqrt(a² + b²)`.
    pub fn scale(&self) -> f32 {
        self.a.hypot(self.b)
    }

    /// Whether the origin can be placed on the page.
    pub fn has_finite_origin(&self) -> bool {
        self.tx.is_finite() && self.ty.is_finite()
    }
}

impl From<[f32; 6]> for Transform {
    fn from(m: [f32; 6]) -> Self {
        Self::new(m[0], m[1], m[2], m[3], m[4], m[5])
    }
}

impl From<Transform> for [f32; 6] {
    fn from(t: Transform) -> Self {
        [t.a, t.b, t.c, t.d, t.tx, t.ty]
    }
}

/// A positioned text run as delivered by the page decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawToken {
    /// The text content
    pub text: String,
    /// Placement transform
    pub transform: Transform,
    /// Rendered width, when the decoder knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Rendered height, when the decoder knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl RawToken {
    /// Create a raw token without measured dimensions.
    pub fn new(text: impl Into<String>, transform: Transform) -> Self {
        Self {
            text: text.into(),
            transform,
            width: None,
            height: None,
        }
    }

    /// Set the measured width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the measured height.
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }
}

/// All tokens of one page together with the page dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInput {
    /// Page width in points
    pub page_width: f32,
    /// Page height in points
    pub page_height: f32,
    /// Tokens in decoder order
    #[serde(default)]
    pub tokens: Vec<RawToken>,
}

impl PageInput {
    /// Create an empty page input.
    pub fn new(page_width: f32, page_height: f32) -> Self {
        Self {
            page_width,
            page_height,
            tokens: Vec::new(),
        }
    }

    /// Create an empty US Letter page (612 x 792 points).
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    /// Add a token.
    pub fn push(&mut self, token: RawToken) {
        self.tokens.push(token);
    }

    /// Builder-style variant of [`PageInput::push`].
    pub fn with_token(mut self, token: RawToken) -> Self {
        self.tokens.push(token);
        self
    }
}

/// A normalized token. Immutable once produced by the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// The text content (never empty or whitespace-only)
    pub text: String,
    /// X position of the baseline origin (left edge)
    pub baseline_x: f32,
    /// Y position of the baseline (PDF coordinates, grows upward)
    pub baseline_y: f32,
    /// Width of the run, measured or estimated; always positive
    pub width: f32,
    /// Font size in points; always positive
    pub font_size: f32,
    /// Measured height, if the decoder supplied a usable one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Zero-based index of the page the token came from
    pub page_index: usize,
}

impl Token {
    /// Right edge of the run.
    pub fn right(&self) -> f32 {
        self.baseline_x + self.width
    }

    /// Number of characters in the run.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Average glyph width of the run.
    pub fn char_width(&self) -> f32 {
        self.width / self.char_count().max(1) as f32
    }

    /// Horizontal distance from the end of this run to the start of `next`.
    ///
    /// Negative when the runs overlap.
    pub fn gap_to(&self, next: &Token) -> f32 {
        next.baseline_x - self.right()
    }
}
