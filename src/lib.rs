//! Channel autoposter library.
//!
//! # Data Flow
//! ```text
//! config file (key=value)
//!     → config::loader (parse, validate)
//!     → SharedConfig (ArcSwap cell)
//!     → read by the sender each pass / before each sleep
//!
//! On file write:
//!     config::watcher → mpsc → reload task → swap of SharedConfig
//!
//! messages file (re-read each pass)
//!     → sender::SenderLoop (jittered sleep between lines)
//!     → sender::MessageClient (POST {"content": line})
//!     → channel messages endpoint
//! ```

pub mod config;
pub mod lifecycle;
pub mod messages;
pub mod observability;
pub mod sender;

pub use config::{BotConfig, SharedConfig};
pub use lifecycle::Shutdown;
pub use sender::{MessageClient, SenderLoop};
