//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Build client → Spawn watcher + reload task → Run sender
//!
//! Shutdown (shutdown.rs):
//!     Ctrl-C → broadcast to sender → exit cleanly mid-sleep
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
