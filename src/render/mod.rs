//! Rendering of reconstructed documents for downstream writers.

mod json;
mod text;

pub use json::{page_to_json, to_json, JsonFormat};
pub use text::to_text;
