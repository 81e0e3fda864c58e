//! JSON rendering of reconstructed pages for the document writer.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Document, Page};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    serialize(doc, format)
}

/// Convert a single page to JSON (`headerBlocks`, `bodyBlocks`, `footerBlocks`).
pub fn page_to_json(page: &Page, format: JsonFormat) -> Result<String> {
    serialize(page, format)
}

fn serialize<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, GridCell, Region};

    fn sample_document() -> Document {
        let mut page = Page::new(0, 612.0, 792.0);
        page.push(Region::Header, Block::paragraph("Report", 1440.0, 9.0));
        page.push(
            Region::Body,
            Block::GridRow {
                cells: vec![GridCell::new("Item", 0.5), GridCell::new("Total", 0.5)],
            },
        );
        Document::from_pages(vec![page])
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample_document(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"headerBlocks\""));
        assert!(json.contains("\"gridRow\""));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample_document(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
    }

    #[test]
    fn test_page_json_round_trip() {
        let doc = sample_document();
        let json = page_to_json(&doc.pages[0], JsonFormat::Compact).unwrap();
        let back: Page = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc.pages[0]);
    }
}
