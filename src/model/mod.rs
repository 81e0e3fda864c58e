//! Data model for layout reconstruction.
//!
//! Tokens flow in from the page decoder (`PageInput`), are normalized into
//! `Token`s, and come out as `Block`s grouped into `Page`s and a `Document`.
//! Every type here is format-agnostic and serializable.

mod block;
mod document;
mod page;
mod token;

pub use block::{Block, GridCell};
pub use document::Document;
pub use page::{Page, Region};
pub use token::{PageInput, RawToken, Token, Transform};
