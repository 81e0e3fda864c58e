//! Cooperative cancellation shared between a caller and page workers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{Error, Result};

/// A flag a caller can raise to abandon pages still in flight.
///
/// Workers check it between pipeline stages; a page observed as cancelled
/// yields [`Error::Cancelled`] and no other page is affected.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Fail with [`Error::Cancelled`] for `page` if cancellation was requested.
    pub fn check(&self, page: usize) -> Result<()> {
        if self.is_cancelled() {
            log::debug!("page {}: cancelled", page);
            return Err(Error::Cancelled { page });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let token = CancellationToken::new();
        let worker = token.clone();
        assert!(worker.check(0).is_ok());

        token.cancel();
        assert!(worker.is_cancelled());
        assert!(matches!(worker.check(2), Err(Error::Cancelled { page: 2 })));
    }
}
