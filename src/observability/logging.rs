//! Structured logging.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Honors `RUST_LOG` when set, otherwise logs this crate at info.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "msgdrip=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
