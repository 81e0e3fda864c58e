//! Plain text rendering of reconstructed pages.

use crate::model::Document;

/// Convert a document to plain text.
///
/// One block per line, grid cells separated by tabs, pages separated by a
/// blank line.
pub fn to_text(doc: &Document) -> String {
    doc.plain_text().trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, GridCell, Page, Region};

    #[test]
    fn test_to_text() {
        let mut page = Page::new(0, 612.0, 792.0);
        page.push(Region::Body, Block::paragraph("Hello, world!", 0.0, 12.0));
        page.push(
            Region::Body,
            Block::GridRow {
                cells: vec![GridCell::new("a", 0.5), GridCell::new("b", 0.5)],
            },
        );
        page.push(Region::Footer, Block::paragraph("1", 0.0, 9.0));
        let doc = Document::from_pages(vec![page]);

        assert_eq!(to_text(&doc), "Hello, world!\na\tb\n1");
    }
}
