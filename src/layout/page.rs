//! Page assembly: run every stage for one page and collect the blocks.

use crate::engine::CancellationToken;
use crate::error::{Error, Result};
use crate::model::{Block, Page, PageInput, Region};

use super::{
    assemble_block, classify_lines, cluster_lines, is_partition, normalize_tokens, segment_line,
    LayoutConfig, Line,
};

/// Counters collected while reconstructing one page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageStats {
    /// Tokens delivered by the decoder
    pub tokens_in: usize,
    /// Degenerate tokens omitted by the normalizer
    pub tokens_dropped: usize,
    /// Lines after clustering
    pub lines: usize,
    /// Lines classified as header
    pub header_lines: usize,
    /// Lines classified as footer
    pub footer_lines: usize,
    /// Paragraph blocks emitted
    pub paragraphs: usize,
    /// Grid-row blocks emitted
    pub grid_rows: usize,
}

/// Reconstructs the layout of single pages.
///
/// The engine holds configuration only; every call is independent and
/// side-effect free, so one engine can be shared by any number of workers.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create an engine with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom thresholds.
    ///
    /// Fails with [`Error::InvalidConfig`] when a threshold is unusable.
    pub fn with_config(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The thresholds in use.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Reconstruct one page.
    pub fn reconstruct(&self, input: &PageInput, page_index: usize) -> Result<Page> {
        self.reconstruct_with_stats(input, page_index, &CancellationToken::new())
            .map(|(page, _)| page)
    }

    /// Reconstruct one page, checking `cancel` between stages.
    pub fn reconstruct_cancellable(
        &self,
        input: &PageInput,
        page_index: usize,
        cancel: &CancellationToken,
    ) -> Result<Page> {
        self.reconstruct_with_stats(input, page_index, cancel)
            .map(|(page, _)| page)
    }

    /// Reconstruct one page and report what each stage did.
    pub fn reconstruct_with_stats(
        &self,
        input: &PageInput,
        page_index: usize,
        cancel: &CancellationToken,
    ) -> Result<(Page, PageStats)> {
        let config = &self.config;
        let mut stats = PageStats {
            tokens_in: input.tokens.len(),
            ..PageStats::default()
        };

        cancel.check(page_index)?;
        let normalized = normalize_tokens(&input.tokens, page_index, config);
        stats.tokens_dropped = normalized.dropped;
        let token_count = normalized.tokens.len();

        cancel.check(page_index)?;
        let lines = cluster_lines(normalized.tokens, config);
        let clustered: usize = lines.iter().map(Line::len).sum();
        if clustered != token_count || lines.iter().any(Line::is_empty) {
            return Err(violation(
                page_index,
                format!(
                    "{} tokens normalized but {} clustered into lines",
                    token_count, clustered
                ),
            ));
        }
        stats.lines = lines.len();

        cancel.check(page_index)?;
        let lines = classify_lines(lines, input.page_height, config);

        let mut page = Page::new(page_index, input.page_width, input.page_height);
        for line in &lines {
            cancel.check(page_index)?;

            let columns = segment_line(line, config);
            if !is_partition(line, &columns) {
                return Err(violation(
                    page_index,
                    format!(
                        "columns do not partition the {} tokens of line at y={}",
                        line.len(),
                        line.baseline_y
                    ),
                ));
            }

            let block = assemble_block(&columns, config).ok_or_else(|| {
                violation(
                    page_index,
                    format!("line at y={} produced no block", line.baseline_y),
                )
            })?;

            match line.region {
                Region::Header => stats.header_lines += 1,
                Region::Footer => stats.footer_lines += 1,
                Region::Body => {}
            }
            match block {
                Block::Paragraph { .. } => stats.paragraphs += 1,
                Block::GridRow { .. } => stats.grid_rows += 1,
            }
            page.push(line.region, block);
        }

        log::debug!(
            "page {}: {} lines -> {} paragraphs, {} grid rows ({} header, {} footer)",
            page_index,
            stats.lines,
            stats.paragraphs,
            stats.grid_rows,
            stats.header_lines,
            stats.footer_lines
        );

        Ok((page, stats))
    }
}

fn violation(page: usize, detail: String) -> Error {
    log::warn!("page {}: invariant violation: {}", page, detail);
    Error::InvariantViolation { page, detail }
}
