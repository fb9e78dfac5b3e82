//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade;
//! everything else in the workspace just uses the facade macros.

mod init;

pub use init::{LoggingConfig, init_logging};
