//! Layout reconstruction pipeline.
//!
//! Each stage consumes the previous stage's output and returns a new value:
//!
//! 1. [`normalize_tokens`] drops degenerate runs and derives font size/width
//! 2. [`cluster_lines`] groups tokens by baseline, top of page first
//! 3. [`classify_lines`] tags lines as header, footer or body
//! 4. [`segment_line`] splits a line at wide gaps
//! 5. [`assemble_block`] emits a paragraph or a grid row per line
//! 6. [`LayoutEngine`] runs the stages for a page and collects the blocks

mod blocks;
mod columns;
mod config;
mod lines;
mod normalize;
mod page;
mod region;

pub use blocks::{assemble_block, join_text};
pub use columns::{is_partition, segment_line, Column};
pub use config::{LayoutConfig, WidthShare};
pub use lines::{cluster_lines, Line};
pub use normalize::{normalize_tokens, NormalizedTokens};
pub use page::{LayoutEngine, PageStats};
pub use region::{classify_lines, classify_region};
