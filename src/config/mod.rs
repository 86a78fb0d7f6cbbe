//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (flat key=value)
//!     → loader.rs (parse, promote required keys)
//!     → BotConfig (validated, immutable)
//!     → shared.rs (ArcSwap cell read by the sender)
//!
//! On file write:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → forwarded over mpsc to the reload task
//!     → atomic swap of Arc<BotConfig>
//!     → sender observes new delay/path at its next check
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - A failed reload never replaces a working config
//! - The reload task is the only writer of the shared cell

pub mod loader;
pub mod schema;
pub mod shared;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::BotConfig;
pub use shared::SharedConfig;
pub use watcher::ConfigWatcher;
