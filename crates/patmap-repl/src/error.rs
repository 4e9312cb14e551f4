//! Error types for the input loop.

use std::io;

use patmap::MapError;
use thiserror::Error;

/// Errors that can stop the input loop.
#[derive(Debug, Error)]
pub enum ReplError {
    /// Reading input or writing output failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// Dispatch failed and error catching is disabled.
    #[error(transparent)]
    Dispatch(#[from] MapError),
}
