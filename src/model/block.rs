//! Output block types.

use serde::{Deserialize, Serialize};

/// A reconstructed layout element handed to the document writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Block {
    /// A single-column line
    #[serde(rename_all = "camelCase")]
    Paragraph {
        /// Joined text of the line
        text: String,
        /// Left indentation in output units
        indent: f32,
        /// Font size of the first run
        font_size: f32,
    },

    /// A multi-column line rendered as a borderless table row
    GridRow {
        /// Cells, left to right (always at least two)
        cells: Vec<GridCell>,
    },
}

impl Block {
    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>, indent: f32, font_size: f32) -> Self {
        Block::Paragraph {
            text: text.into(),
            indent,
            font_size,
        }
    }

    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph { .. })
    }

    /// Check if this block is a grid row.
    pub fn is_grid_row(&self) -> bool {
        matches!(self, Block::GridRow { .. })
    }

    /// Cells of a grid row; empty for paragraphs.
    pub fn cells(&self) -> &[GridCell] {
        match self {
            Block::GridRow { cells } => cells,
            Block::Paragraph { .. } => &[],
        }
    }

    /// Get plain text content of the block.
    ///
    /// Grid cells are separated by tabs.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph { text, .. } => text.clone(),
            Block::GridRow { cells } => cells
                .iter()
                .map(|c| c.text.as_str())
                .collect::<Vec<_>>()
                .join("\t"),
        }
    }
}

/// One cell of a grid row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    /// Joined text of the column
    pub text: String,
    /// Relative width; positive, shares need not sum to 1
    pub width_share: f32,
}

impl GridCell {
    /// Create a new cell.
    pub fn new(text: impl Into<String>, width_share: f32) -> Self {
        Self {
            text: text.into(),
            width_share,
        }
    }
}
