//! Observability subsystem.
//!
//! Everything logs through `tracing`; output is timestamped human-readable
//! lines on stdout. Level is controlled by `RUST_LOG`.

pub mod logging;
