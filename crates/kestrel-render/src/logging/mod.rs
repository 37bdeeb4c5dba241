//! Logger setup for binaries and tools built on the painter.
//!
//! The library itself only emits through the `log` facade; installing a
//! sink is left to whoever owns `main`.

mod init;

pub use init::{init_logging, LoggingConfig};
