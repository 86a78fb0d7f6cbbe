//! Message sending subsystem.
//!
//! # Data Flow
//! ```text
//! messages file (re-read each pass)
//!     → runner.rs (loop, one POST per line, jittered sleep)
//!     → client.rs (fixed headers, channel endpoint)
//! ```

pub mod client;
pub mod runner;

pub use client::{MessageClient, SendError};
pub use runner::{SenderError, SenderLoop};
