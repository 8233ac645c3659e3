use crate::domain_port::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// Observer for headless consumers (CLI, demos): invalidation is logged and
/// latched instead of navigating anywhere. `at_login` reports the latch so a
/// second teardown stays silent.
pub struct LogSessionObserver {
    at_login: AtomicBool,
}

impl LogSessionObserver {
    pub fn new() -> Self {
        Self {
            at_login: AtomicBool::new(false),
        }
    }

    /// Call after a fresh login to re-arm the observer.
    pub fn reset(&self) {
        self.at_login.store(false, Ordering::SeqCst);
    }
}

impl Default for LogSessionObserver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SessionObserver for LogSessionObserver {
    fn at_login(&self) -> bool {
        self.at_login.load(Ordering::SeqCst)
    }

    async fn session_invalidated(&self) {
        self.at_login.store(true, Ordering::SeqCst);
        tracing::warn!("session invalidated; a new login is required");
    }
}
