//! Shared configuration cell.
//!
//! Reloads replace the whole config atomically; readers grab a snapshot and
//! never observe a partial update. Written only by the reload task.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::BotConfig;

/// Cheaply cloneable handle to the current configuration.
#[derive(Clone)]
pub struct SharedConfig {
    inner: Arc<ArcSwap<BotConfig>>,
}

impl SharedConfig {
    pub fn new(config: BotConfig) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// Snapshot of the current configuration.
    pub fn current(&self) -> Arc<BotConfig> {
        self.inner.load_full()
    }

    /// Replace the configuration wholesale.
    pub fn replace(&self, config: BotConfig) {
        self.inner.store(Arc::new(config));
    }
}
