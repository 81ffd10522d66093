//! Logger setup.
//!
//! Everything logs through the `log` facade; the `env_logger` backend is
//! installed exactly once, by the binary, through [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
