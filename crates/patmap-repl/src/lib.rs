//! Interactive input loop for [`patmap`] registries.
//!
//! `patmap-repl` is the thin presentation layer around a
//! [`Mapper`](patmap::Mapper): it reads lines from an input stream, dispatches
//! every non-empty line, and prints what the handler returns. It exists to
//! exercise a registry by hand; the dispatch semantics all live in `patmap`.
//!
//! # Quick Start
//!
//! ```no_run
//! use patmap::Mapper;
//! use patmap_repl::{Repl, ReplOptions};
//!
//! let mut mapper = Mapper::new();
//! mapper.map(r"(?P<first>\d+)\+(?P<second>\d+)", |args| {
//!     let first: i64 = args.require("first")?.parse()?;
//!     let second: i64 = args.require("second")?.parse()?;
//!     Ok(format!("{} + {} = {}", first, second, first + second))
//! })?;
//!
//! // Keep going on bad input instead of stopping at the first error.
//! let options = ReplOptions::new().catch_errors(true);
//! Repl::new(options).run(&mapper, &mut std::io::stdout())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Error policy
//!
//! The loop itself never interprets dispatch errors. By default the first
//! error from the registry (or from a handler) stops the loop and surfaces as
//! [`ReplError::Dispatch`]. With [`ReplOptions::catch_errors`] the loop prints
//! the error with its cause chain and moves on to the next line.
//!
//! # Testing
//!
//! The loop reads through the [`io::LineReader`] trait; use
//! [`io::MockLines`] to script input and a `Vec<u8>` to capture output.

mod error;
pub mod io;
mod repl;

pub use error::ReplError;
pub use repl::{Repl, ReplOptions, BANNER};
