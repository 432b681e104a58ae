//! Logging utilities.
//!
//! Centralizes logger initialization. wgpu reports through the `log` facade,
//! so forwarding its messages is a matter of filtering its targets; see
//! [`GraphicsLogLevel`].

mod init;
mod level;

pub use init::{init_logging, LoggingConfig};
pub use level::GraphicsLogLevel;
