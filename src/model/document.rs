//! Document-level types.

use super::{Block, Page};
use serde::{Deserialize, Serialize};

/// A reconstructed document: pages in input order, no shared state between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Pages in the document
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Create a document from pages, ordering them by page index.
    pub fn from_pages(mut pages: Vec<Page>) -> Self {
        pages.sort_by_key(|p| p.index);
        Self { pages }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: usize) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get(page_num - 1)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate over every block of every page in reading order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.pages.iter().flat_map(|p| p.blocks())
    }

    /// Total number of blocks across all pages.
    pub fn block_count(&self) -> usize {
        self.pages.iter().map(Page::block_count).sum()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Region;

    #[test]
    fn test_from_pages_orders_by_index() {
        let doc = Document::from_pages(vec![
            Page::new(2, 612.0, 792.0),
            Page::new(0, 612.0, 792.0),
            Page::new(1, 612.0, 792.0),
        ]);
        let indices: Vec<usize> = doc.pages.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_get_page_one_indexed() {
        let mut doc = Document::new();
        doc.add_page(Page::new(0, 612.0, 792.0));
        assert!(doc.get_page(0).is_none());
        assert_eq!(doc.get_page(1).map(|p| p.index), Some(0));
        assert!(doc.get_page(2).is_none());
    }

    #[test]
    fn test_plain_text_and_counts() {
        let mut first = Page::new(0, 612.0, 792.0);
        first.push(Region::Body, Block::paragraph("one", 0.0, 12.0));
        let mut second = Page::new(1, 612.0, 792.0);
        second.push(Region::Body, Block::paragraph("two", 0.0, 12.0));
        let doc = Document::from_pages(vec![first, second]);

        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.block_count(), 2);
        assert_eq!(doc.plain_text(), "one\n\ntwo");
    }
}
