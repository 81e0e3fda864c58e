//! # relayout
//!
//! Layout reconstruction for positioned PDF text.
//!
//! A page decoder hands over the text runs of a page, each with a placement
//! transform and a rendered width. This library turns that unordered stream
//! into the page's visual structure: lines, columns, paragraphs, borderless
//! grid rows, and header/footer regions.
//!
//! ## Quick Start
//!
//! ```
//! use relayout::{reconstruct_page, PageInput, RawToken, Transform};
//!
//! fn main() -> relayout::Result<()> {
//!     let input = PageInput::letter()
//!         .with_token(RawToken::new("Hello", Transform::scaled_at(12.0, 50.0, 400.0)).with_width(40.0))
//!         .with_token(RawToken::new("World", Transform::scaled_at(12.0, 95.0, 400.0)).with_width(40.0));
//!
//!     let page = reconstruct_page(&input)?;
//!     assert_eq!(page.body_blocks[0].plain_text(), "Hello World");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Adaptive thresholds**: baseline snapping and column gaps scale with font size
//! - **Grid rows**: multi-column lines become table-like rows
//! - **Regions**: running headers and footers are kept apart from the body
//! - **Parallel processing**: pages are independent and run on a Rayon pool
//! - **Deterministic**: identical input always yields identical blocks

pub mod engine;
pub mod error;
pub mod input;
pub mod layout;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use engine::{CancellationToken, EngineOptions, PageResult, PageSelection};
pub use error::{Error, Result};
pub use input::{pages_from_file, pages_from_reader, pages_from_str};
pub use layout::{LayoutConfig, LayoutEngine, PageStats, WidthShare};
pub use model::{Block, Document, GridCell, Page, PageInput, RawToken, Region, Token, Transform};
pub use render::JsonFormat;

use std::path::Path;

/// Reconstruct a single page with the default thresholds.
pub fn reconstruct_page(input: &PageInput) -> Result<Page> {
    LayoutEngine::new().reconstruct(input, 0)
}

/// Reconstruct a single page with custom thresholds.
pub fn reconstruct_page_with_config(input: &PageInput, config: &LayoutConfig) -> Result<Page> {
    LayoutEngine::with_config(config.clone())?.reconstruct(input, 0)
}

/// Reconstruct every page with default options.
///
/// # Example
///
/// ```
/// use relayout::{reconstruct_pages, PageInput};
///
/// let doc = reconstruct_pages(&[PageInput::letter(), PageInput::letter()]).unwrap();
/// assert_eq!(doc.page_count(), 2);
/// ```
pub fn reconstruct_pages(inputs: &[PageInput]) -> Result<Document> {
    engine::reconstruct_document(inputs, &EngineOptions::default(), &CancellationToken::new())
}

/// Reconstruct every page with custom options.
pub fn reconstruct_pages_with_options(
    inputs: &[PageInput],
    options: &EngineOptions,
) -> Result<Document> {
    engine::reconstruct_document(inputs, options, &CancellationToken::new())
}

/// Read pages from a JSON file and reconstruct them.
pub fn reconstruct_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let inputs = pages_from_file(path)?;
    reconstruct_pages(&inputs)
}

/// Builder for reconstructing and rendering documents.
///
/// # Example
///
/// ```
/// use relayout::{JsonFormat, PageInput, Relayout};
///
/// let json = Relayout::new()
///     .with_column_gap_threshold(18.0)
///     .with_indent_scale(12.0)
///     .sequential()
///     .run(&[PageInput::letter()])?
///     .to_json(JsonFormat::Compact)?;
/// # Ok::<(), relayout::Error>(())
/// ```
pub struct Relayout {
    options: EngineOptions,
    cancel: CancellationToken,
}

impl Relayout {
    /// Create a new Relayout builder.
    pub fn new() -> Self {
        Self {
            options: EngineOptions::default(),
            cancel: CancellationToken::new(),
        }
    }

    /// Replace all layout thresholds.
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.options = self.options.with_layout(config);
        self
    }

    /// Set the absolute column gap threshold.
    pub fn with_column_gap_threshold(mut self, points: f32) -> Self {
        self.options.layout = self.options.layout.with_column_gap_threshold(points);
        self
    }

    /// Set the column gap multiplier.
    pub fn with_column_gap_multiplier(mut self, multiplier: f32) -> Self {
        self.options.layout = self.options.layout.with_column_gap_multiplier(multiplier);
        self
    }

    /// Set the indentation scale.
    pub fn with_indent_scale(mut self, scale: f32) -> Self {
        self.options.layout = self.options.layout.with_indent_scale(scale);
        self
    }

    /// Size grid cells by token span.
    pub fn proportional(mut self) -> Self {
        self.options.layout = self.options.layout.proportional();
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Use a dedicated pool with this many workers.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.options = self.options.with_max_threads(Some(threads));
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.options = self.options.with_pages(pages);
        self
    }

    /// Observe a cancellation token while running.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Reconstruct the given pages.
    pub fn run(self, inputs: &[PageInput]) -> Result<RelayoutResult> {
        let document = engine::reconstruct_document(inputs, &self.options, &self.cancel)?;
        Ok(RelayoutResult { document })
    }

    /// Read pages from a JSON file and reconstruct them.
    pub fn run_file<P: AsRef<Path>>(self, path: P) -> Result<RelayoutResult> {
        let inputs = pages_from_file(path)?;
        self.run(&inputs)
    }
}

impl Default for Relayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a reconstruction run.
pub struct RelayoutResult {
    /// The reconstructed document
    pub document: Document,
}

impl RelayoutResult {
    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello_world() -> PageInput {
        PageInput::letter()
            .with_token(
                RawToken::new("Hello", Transform::scaled_at(12.0, 50.0, 400.0)).with_width(40.0),
            )
            .with_token(
                RawToken::new("World", Transform::scaled_at(12.0, 95.0, 400.0)).with_width(40.0),
            )
    }

    #[test]
    fn test_reconstruct_page() {
        let page = reconstruct_page(&hello_world()).unwrap();
        assert_eq!(page.body_blocks.len(), 1);
        assert_eq!(page.body_blocks[0].plain_text(), "Hello World");
    }

    #[test]
    fn test_reconstruct_page_with_invalid_config() {
        let config = LayoutConfig::new().with_word_gap_threshold(f32::INFINITY);
        let result = reconstruct_page_with_config(&hello_world(), &config);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_relayout_builder() {
        let builder = Relayout::new()
            .with_column_gap_threshold(25.0)
            .with_indent_scale(12.0)
            .proportional()
            .sequential()
            .with_threads(2);

        assert_eq!(builder.options.layout.column_gap_threshold, 25.0);
        assert_eq!(builder.options.layout.indent_scale, 12.0);
        assert_eq!(builder.options.layout.width_share, WidthShare::Proportional);
        assert!(!builder.options.parallel);
        assert_eq!(builder.options.max_threads, Some(2));
    }

    #[test]
    fn test_relayout_run() {
        let result = Relayout::new().run(&[hello_world()]).unwrap();
        assert_eq!(result.to_text(), "Hello World");
        assert!(result
            .to_json(JsonFormat::Compact)
            .unwrap()
            .contains("\"kind\":\"paragraph\""));
        assert_eq!(result.document().page_count(), 1);
    }

    #[test]
    fn test_relayout_cancelled() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = Relayout::new()
            .with_cancellation(cancel)
            .run(&[hello_world()]);
        assert!(matches!(result, Err(Error::Cancelled { .. })));
    }
}
