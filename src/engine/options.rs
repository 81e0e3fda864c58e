//! Engine options and configuration.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};
use crate::layout::LayoutConfig;

/// Options for reconstructing a multi-page document.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Layout thresholds applied to every page
    pub layout: LayoutConfig,

    /// Whether to process pages on a worker pool
    pub parallel: bool,

    /// Worker count for a dedicated pool (None = rayon's global pool)
    pub max_threads: Option<usize>,

    /// Page selection (which pages to reconstruct)
    pub pages: PageSelection,
}

impl EngineOptions {
    /// Create new engine options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set layout thresholds.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Use a dedicated pool with this many workers.
    pub fn with_max_threads(mut self, threads: Option<usize>) -> Self {
        self.max_threads = threads.filter(|n| *n > 0);
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            parallel: true,
            max_threads: None,
            pages: PageSelection::All,
        }
    }
}

/// Page selection (1-indexed page numbers).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// All pages
    #[default]
    All,
    /// A range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<usize>),
    /// Specific pages (1-indexed)
    Pages(Vec<usize>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: usize) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
        }
    }

    /// Check if a zero-based page index should be included.
    pub fn includes_index(&self, index: usize) -> bool {
        self.includes(index + 1)
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.is_empty() || s == "all" {
            return Ok(PageSelection::All);
        }

        // Check for simple range (e.g., "1-10")
        if let Some((start, end)) = s.split_once('-') {
            if !start.contains(',') && !end.contains(',') {
                return page_range(start, end).map(PageSelection::Range);
            }
        }

        // Parse comma-separated list with possible ranges
        let mut pages = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if let Some((start, end)) = part.split_once('-') {
                pages.extend(page_range(start, end)?);
            } else {
                pages.push(page_number(part)?);
            }
        }

        pages.sort_unstable();
        pages.dedup();
        Ok(PageSelection::Pages(pages))
    }
}

fn page_range(start: &str, end: &str) -> Result<RangeInclusive<usize>> {
    let (start, end) = (page_number(start)?, page_number(end)?);
    if start > end {
        return Err(Error::InvalidPageRange(format!(
            "range start {} is after end {}",
            start, end
        )));
    }
    Ok(start..=end)
}

fn page_number(s: &str) -> Result<usize> {
    let s = s.trim();
    match s.parse::<usize>() {
        Ok(0) => Err(Error::InvalidPageRange(
            "page numbers start at 1".to_string(),
        )),
        Ok(n) => Ok(n),
        Err(_) => Err(Error::InvalidPageRange(format!(
            "invalid page number '{}'",
            s
        ))),
    }
}
