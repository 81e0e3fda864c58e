//! Page-level types.

use super::Block;
use serde::{Deserialize, Serialize};

/// Vertical region of a page a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Main content
    #[default]
    Body,
    /// Running header near the top edge
    Header,
    /// Running footer near the bottom edge
    Footer,
}

/// A single reconstructed page.
///
/// Blocks are kept in three groups; each group is in top-to-bottom order and
/// nothing is reordered across group boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Page index (0-indexed, input order)
    pub index: usize,

    /// Page width in points (1 point = 1/72 inch)
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Blocks from header lines
    pub header_blocks: Vec<Block>,

    /// Blocks from body lines
    pub body_blocks: Vec<Block>,

    /// Blocks from footer lines
    pub footer_blocks: Vec<Block>,
}

impl Page {
    /// Create a new empty page with the given dimensions.
    pub fn new(index: usize, width: f32, height: f32) -> Self {
        Self {
            index,
            width,
            height,
            header_blocks: Vec::new(),
            body_blocks: Vec::new(),
            footer_blocks: Vec::new(),
        }
    }

    /// Add a block to the group for `region`.
    pub fn push(&mut self, region: Region, block: Block) {
        self.blocks_mut(region).push(block);
    }

    /// Blocks of one region.
    pub fn blocks_in(&self, region: Region) -> &[Block] {
        match region {
            Region::Header => &self.header_blocks,
            Region::Body => &self.body_blocks,
            Region::Footer => &self.footer_blocks,
        }
    }

    fn blocks_mut(&mut self, region: Region) -> &mut Vec<Block> {
        match region {
            Region::Header => &mut self.header_blocks,
            Region::Body => &mut self.body_blocks,
            Region::Footer => &mut self.footer_blocks,
        }
    }

    /// All blocks in reading order: header, body, footer.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.header_blocks
            .iter()
            .chain(self.body_blocks.iter())
            .chain(self.footer_blocks.iter())
    }

    /// Get plain text content of the page, one block per line.
    pub fn plain_text(&self) -> String {
        self.blocks()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if the page is empty (no content blocks).
    pub fn is_empty(&self) -> bool {
        self.block_count() == 0
    }

    /// Get the number of blocks on the page.
    pub fn block_count(&self) -> usize {
        self.header_blocks.len() + self.body_blocks.len() + self.footer_blocks.len()
    }

    /// Get page dimensions as (width, height) tuple.
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}
