//! Document-level execution: page selection, worker pool, cancellation.

mod cancel;
mod options;
mod pool;

pub use cancel::CancellationToken;
pub use options::{EngineOptions, PageSelection};
pub use pool::{collect_document, reconstruct_document, reconstruct_streaming, PageResult};
