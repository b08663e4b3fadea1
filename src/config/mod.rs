//! Application configuration and constants.
//!
//! This module provides:
//! - Command-line options (`Cli`) and logging enums
//! - Operational constants (timeouts, limits, endpoints)

mod constants;
mod types;

pub use constants::*;
pub use types::{Cli, LogFormat, LogLevel};
