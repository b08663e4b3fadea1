//! Error type definitions.
//!
//! Failure kinds are explicit enum variants rather than strings so callers
//! and tests can match on them without inspecting messages.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Failure kinds surfaced by the fetch pipeline.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The supplied URL could not be parsed, or is not an http(s) URL.
    #[error("invalid URL: {0}")]
    Parse(String),

    /// Connect, TLS, send, or receive failure.
    #[error("network error: {0}")]
    Network(#[from] std::io::Error),

    /// The redirect hop budget was exhausted without reaching a terminal
    /// response.
    #[error("redirect loop detected after {0} hops")]
    LoopDetected(usize),

    /// The server closed the connection without sending anything usable.
    #[error("empty response from server")]
    EmptyResponse,
}

impl From<url::ParseError> for FetchError {
    fn from(e: url::ParseError) -> Self {
        FetchError::Parse(e.to_string())
    }
}

/// Maps a fetch failure to the process exit code.
///
/// `0` is reserved for success. Network failures and empty responses exit
/// with `1`, unusable URLs with `2`, and exhausted redirect budgets with `3`,
/// so scripts can tell the outcomes apart.
pub fn exit_code(error: &FetchError) -> i32 {
    match error {
        FetchError::Network(_) | FetchError::EmptyResponse => 1,
        FetchError::Parse(_) => 2,
        FetchError::LoopDetected(_) => 3,
    }
}
