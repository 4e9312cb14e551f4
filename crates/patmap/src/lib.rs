//! Regex-to-handler dispatch.
//!
//! `patmap` maps regular expressions to handlers and routes input strings to
//! the first pattern that matches the whole input. Named capture groups in
//! the pattern become named arguments to the handler, so the pattern doubles
//! as a tiny argument parser — the same idea as URL routing, applied to
//! arbitrary text.
//!
//! # Quick Start
//!
//! ```
//! use patmap::Mapper;
//!
//! let mut mapper = Mapper::new();
//!
//! mapper.map(r"call my_func", |_args| {
//!     Ok("I, my_func, have been called".to_string())
//! })?;
//!
//! mapper.map(r"(?P<first>\d+)\+(?P<second>\d+)", |args| {
//!     let first: i64 = args.require("first")?.parse()?;
//!     let second: i64 = args.require("second")?.parse()?;
//!     Ok(format!("{} + {} = {}", first, second, first + second))
//! })?;
//!
//! assert_eq!(mapper.call("call my_func")?, "I, my_func, have been called");
//! assert_eq!(mapper.call("3+5")?, "3 + 5 = 8");
//! # Ok::<(), patmap::MapError>(())
//! ```
//!
//! # Rules of the road
//!
//! - **Full-string matching**: a pattern must match the entire input, not a
//!   substring of it. `test` matches `"test"` but not `"a test"`.
//! - **Named groups only**: a pattern either has no capture groups or has
//!   only named ones (`(?P<name>...)`). Unnamed groups are rejected at
//!   registration time because captures travel to handlers by name.
//! - **Patterns are identities**: registering the same pattern text twice
//!   replaces the handler. Matching order across distinct patterns is an
//!   implementation detail; keep patterns unambiguous.
//!
//! # Extra arguments
//!
//! [`Mapper::call_with`] forwards caller-supplied arguments alongside the
//! captures. Named extras override same-named captures:
//!
//! ```
//! use patmap::{CallArgs, Mapper};
//!
//! let mut mapper = Mapper::new();
//! mapper.map(r"greet (?P<name>\w+)", |args| {
//!     Ok(format!("hello {}", args.require("name")?))
//! })?;
//!
//! let extra = CallArgs::new().kwarg("name", "override");
//! assert_eq!(mapper.call_with("greet fred", extra)?, "hello override");
//! # Ok::<(), patmap::MapError>(())
//! ```
//!
//! # One handler, several patterns
//!
//! [`Mapper::map`] returns the stored [`Handler`] reference, so the same
//! callable can be chained under more patterns with
//! [`Mapper::map_handler`] — the registration call is transparent, like a
//! stack of decorators.

mod args;
mod error;
mod handler;
mod mapper;

pub use args::CallArgs;
pub use error::{MapError, Result};
pub use handler::{Handler, HandlerResult};
pub use mapper::Mapper;
