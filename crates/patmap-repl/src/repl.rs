//! The read-dispatch-print loop.

use std::error::Error as _;
use std::io::Write;

use patmap::{MapError, Mapper};

use crate::error::ReplError;
use crate::io::{LineReader, StdinLines};

/// Startup banner printed when [`ReplOptions::banner`] is enabled.
pub const BANNER: &str = "patmap input loop started (end of input exits)";

const PROMPT: &str = ">>> ";

/// Configuration for the input loop.
///
/// Defaults: banner on, error catching off.
#[derive(Debug, Clone, Copy)]
pub struct ReplOptions {
    banner: bool,
    catch_errors: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            banner: true,
            catch_errors: false,
        }
    }
}

impl ReplOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Control whether the startup banner is printed.
    pub fn banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Control whether dispatch and handler errors are printed and swallowed.
    ///
    /// When enabled, an error ends the current line's handling but not the
    /// loop. When disabled (the default), the first error stops the loop and
    /// surfaces to the caller.
    pub fn catch_errors(mut self, catch_errors: bool) -> Self {
        self.catch_errors = catch_errors;
        self
    }
}

/// An interactive loop that feeds lines of input to a [`Mapper`].
///
/// Reads one line at a time, dispatches every non-empty line, and prints the
/// handler's output. The loop ends when the input is exhausted.
///
/// # Example
///
/// ```no_run
/// use patmap::Mapper;
/// use patmap_repl::{Repl, ReplOptions};
///
/// let mut mapper = Mapper::new();
/// mapper.map("ping", |_| Ok("pong".to_string()))?;
///
/// let mut repl = Repl::new(ReplOptions::new().catch_errors(true));
/// repl.run(&mapper, &mut std::io::stdout())?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Testing
///
/// Use [`Repl::with_reader`] to script the input:
///
/// ```
/// use patmap::Mapper;
/// use patmap_repl::io::MockLines;
/// use patmap_repl::{Repl, ReplOptions};
///
/// let mut mapper = Mapper::new();
/// mapper.map("ping", |_| Ok("pong".to_string()))?;
///
/// let mut out = Vec::new();
/// let mut repl = Repl::with_reader(MockLines::new(["ping"]), ReplOptions::new().banner(false));
/// repl.run(&mapper, &mut out)?;
///
/// assert!(String::from_utf8(out)?.contains("pong"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Repl<R: LineReader = StdinLines> {
    reader: R,
    options: ReplOptions,
}

impl Repl<StdinLines> {
    /// Creates a loop reading from real stdin.
    pub fn new(options: ReplOptions) -> Self {
        Self::with_reader(StdinLines, options)
    }
}

impl<R: LineReader> Repl<R> {
    /// Creates a loop with a custom line reader.
    ///
    /// This is primarily used for testing with [`MockLines`](crate::io::MockLines).
    pub fn with_reader(reader: R, options: ReplOptions) -> Self {
        Self { reader, options }
    }

    /// Runs the loop until end of input.
    ///
    /// Empty lines are skipped without dispatching. Dispatch and handler
    /// errors either stop the loop ([`ReplError::Dispatch`]) or, with
    /// [`ReplOptions::catch_errors`], are printed with their cause chain and
    /// the loop continues.
    pub fn run<W: Write>(&mut self, mapper: &Mapper, out: &mut W) -> Result<(), ReplError> {
        if self.options.banner {
            writeln!(out, "{BANNER}")?;
        }
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            let Some(line) = self.reader.read_line()? else {
                break;
            };
            if line.is_empty() {
                continue;
            }

            match mapper.call(&line) {
                Ok(output) => writeln!(out, "{output}")?,
                Err(err) if self.options.catch_errors => report(out, &err)?,
                Err(err) => return Err(ReplError::Dispatch(err)),
            }
        }
        Ok(())
    }
}

/// Prints an error with its cause chain.
fn report<W: Write>(out: &mut W, err: &MapError) -> std::io::Result<()> {
    match err {
        // anyhow errors carry their own chain; {:#} renders it inline.
        MapError::Handler(inner) => writeln!(out, "error: {inner:#}"),
        other => {
            writeln!(out, "error: {other}")?;
            let mut source = other.source();
            while let Some(cause) = source {
                writeln!(out, "  caused by: {cause}")?;
                source = cause.source();
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MockLines;

    fn pong_mapper() -> Mapper {
        let mut mapper = Mapper::new();
        mapper.map("ping", |_| Ok("pong".to_string())).unwrap();
        mapper
    }

    #[test]
    fn banner_prints_once_when_enabled() {
        let mut out = Vec::new();
        let mut repl = Repl::with_reader(MockLines::empty(), ReplOptions::new());
        repl.run(&pong_mapper(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(BANNER));
        assert_eq!(text.matches(BANNER).count(), 1);
    }

    #[test]
    fn banner_suppressed_when_disabled() {
        let mut out = Vec::new();
        let mut repl = Repl::with_reader(MockLines::empty(), ReplOptions::new().banner(false));
        repl.run(&pong_mapper(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains(BANNER));
    }

    #[test]
    fn empty_lines_are_skipped() {
        let mut out = Vec::new();
        let mut repl = Repl::with_reader(
            MockLines::new(["", "ping", ""]),
            ReplOptions::new().banner(false),
        );
        repl.run(&pong_mapper(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("pong").count(), 1);
    }

    #[test]
    fn exact_transcript() {
        let mut out = Vec::new();
        let mut repl = Repl::with_reader(MockLines::new(["ping"]), ReplOptions::new().banner(false));
        repl.run(&pong_mapper(), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), ">>> pong\n>>> ");
    }
}
