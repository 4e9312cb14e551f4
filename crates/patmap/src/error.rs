//! Error types for the dispatch engine.

use thiserror::Error;

/// Errors that can occur when registering patterns or dispatching input.
#[derive(Debug, Error)]
pub enum MapError {
    /// The pattern is not valid regex syntax.
    #[error("invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The pattern contains one or more unnamed capture groups.
    ///
    /// Captures become named arguments to the handler, so every capture group
    /// must carry a name. Patterns with no capture groups at all are fine.
    #[error("pattern '{pattern}' contains unnamed capture groups; only named groups are supported")]
    UnnamedGroups { pattern: String },

    /// No registered pattern fully matches the input.
    ///
    /// This is an expected condition for unrecognized input, not a bug:
    /// callers typically treat it as "unknown command".
    #[error("no registered pattern matches '{input}'")]
    NoMatch { input: String },

    /// An error raised inside a handler, passed through without translation.
    #[error("{0}")]
    Handler(anyhow::Error),
}

/// Result type for dispatch operations.
pub type Result<T> = std::result::Result<T, MapError>;
