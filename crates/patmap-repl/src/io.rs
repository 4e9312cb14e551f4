//! Input abstractions for testability.
//!
//! The loop reads lines through the [`LineReader`] trait, so tests can feed
//! scripted input without touching real stdin.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Abstraction over reading lines of input.
pub trait LineReader {
    /// Reads the next line, without its trailing newline.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Real line reader backed by stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinLines;

impl LineReader for StdinLines {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        let read = io::stdin().lock().read_line(&mut buffer)?;
        if read == 0 {
            return Ok(None);
        }
        trim_newline(&mut buffer);
        Ok(Some(buffer))
    }
}

/// Mock line reader for testing.
///
/// Yields a fixed sequence of lines, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct MockLines {
    lines: VecDeque<String>,
}

impl MockLines {
    /// Creates a mock that yields the given lines in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a mock that is already at end of input.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl LineReader for MockLines {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

fn trim_newline(buffer: &mut String) {
    if buffer.ends_with('\n') {
        buffer.pop();
    }
    if buffer.ends_with('\r') {
        buffer.pop();
    }
}
