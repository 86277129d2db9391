//! Cooperative search cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A shared stop flag with an optional deadline.
///
/// Clones share the flag, so any holder can stop a search running on
/// another thread. The deadline is per clone and is fixed when the token is
/// built.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    stopped: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelToken {
    /// Creates a token with no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a token that also expires at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        CancelToken {
            stopped: Arc::default(),
            deadline: Some(deadline),
        }
    }

    /// Creates a token that expires `budget` from now.
    pub fn with_budget(budget: Duration) -> Self {
        Self::with_deadline(Instant::now() + budget)
    }

    /// Signals every clone of this token.
    pub fn cancel(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    /// Returns true once [`cancel`](Self::cancel) has been called on any clone.
    #[inline]
    pub fn is_signalled(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Returns true if the deadline has passed.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Returns true if the token is signalled or expired.
    pub fn is_cancelled(&self) -> bool {
        self.is_signalled() || self.is_expired()
    }
}
