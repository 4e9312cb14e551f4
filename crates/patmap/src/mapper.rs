//! The dispatch registry.

use std::collections::HashMap;

use regex::Regex;

use crate::args::CallArgs;
use crate::error::{MapError, Result};
use crate::handler::{Handler, HandlerResult};

/// One registered pattern-to-handler mapping.
struct Entry {
    /// The pattern source text as registered. Identity of the entry.
    pattern: String,
    /// Compiled anchored form, used for full-string matching.
    regex: Regex,
    handler: Handler,
}

/// A registry that routes input strings to handlers by regex.
///
/// Patterns are matched against the whole input, start to end. Named capture
/// groups become named arguments to the handler; unnamed groups are rejected
/// at registration time.
///
/// # Matching order
///
/// Entries are scanned in first-registration order and the first full match
/// wins. That order is an implementation detail, not a contract: keep your
/// patterns unambiguous rather than relying on it.
///
/// # Threading
///
/// A `Mapper` is single-threaded by construction (handlers are
/// `Rc<RefCell<_>>`). Wrap it in your own synchronization if you need to share
/// one across threads.
///
/// # Example
///
/// ```
/// use patmap::Mapper;
///
/// let mut mapper = Mapper::new();
/// mapper.map(r"ping", |_args| Ok("pong".to_string()))?;
///
/// assert_eq!(mapper.call("ping")?, "pong");
/// assert!(mapper.call("ping!").is_err());
/// # Ok::<(), patmap::MapError>(())
/// ```
#[derive(Default)]
pub struct Mapper {
    entries: Vec<Entry>,
}

impl Mapper {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a closure or function under a pattern.
    ///
    /// The pattern is compiled for full-string matching. Registration fails
    /// with [`MapError::InvalidPattern`] on bad regex syntax and with
    /// [`MapError::UnnamedGroups`] if any capture group lacks a name; in both
    /// cases the registry is left unchanged.
    ///
    /// Registering the same pattern text again replaces the previous handler.
    ///
    /// Returns the stored [`Handler`] so the same callable can be chained
    /// under further patterns via [`map_handler`](Self::map_handler).
    pub fn map<F>(&mut self, pattern: &str, handler: F) -> Result<Handler>
    where
        F: FnMut(&CallArgs) -> HandlerResult + 'static,
    {
        self.map_handler(pattern, Handler::new(handler))
    }

    /// Registers an existing handler reference under a pattern.
    ///
    /// Same contract as [`map`](Self::map); use this to register one handler
    /// under several patterns:
    ///
    /// ```
    /// use patmap::Mapper;
    ///
    /// let mut mapper = Mapper::new();
    /// let handler = mapper.map("I am Fred", |_| Ok("I have multiple names!".to_string()))?;
    /// mapper.map_handler("No, I am Joe", handler)?;
    ///
    /// assert_eq!(mapper.call("I am Fred")?, mapper.call("No, I am Joe")?);
    /// # Ok::<(), patmap::MapError>(())
    /// ```
    pub fn map_handler(&mut self, pattern: &str, handler: Handler) -> Result<Handler> {
        let regex = compile_full_match(pattern)?;

        // Group 0 is the whole match; only explicit groups count.
        let total = regex.captures_len() - 1;
        let named = regex.capture_names().flatten().count();
        if total > 0 && named < total {
            return Err(MapError::UnnamedGroups {
                pattern: pattern.to_string(),
            });
        }

        match self.entries.iter_mut().find(|e| e.pattern == pattern) {
            Some(entry) => {
                entry.regex = regex;
                entry.handler = handler.clone();
            }
            None => self.entries.push(Entry {
                pattern: pattern.to_string(),
                regex,
                handler: handler.clone(),
            }),
        }
        Ok(handler)
    }

    /// Finds the handler for an input without invoking it.
    ///
    /// Returns the first entry whose pattern fully matches, along with its
    /// named-group captures. Optional groups that did not participate in the
    /// match are absent from the map. Returns `None` when nothing matches.
    pub fn resolve(&self, input: &str) -> Option<(Handler, HashMap<String, String>)> {
        for entry in &self.entries {
            if let Some(caps) = entry.regex.captures(input) {
                let named = entry
                    .regex
                    .capture_names()
                    .flatten()
                    .filter_map(|name| {
                        caps.name(name)
                            .map(|m| (name.to_string(), m.as_str().to_string()))
                    })
                    .collect();
                return Some((entry.handler.clone(), named));
            }
        }
        None
    }

    /// Dispatches an input string to its handler.
    ///
    /// Fails with [`MapError::NoMatch`] when no pattern fully matches. A
    /// handler's own error surfaces as [`MapError::Handler`], untranslated.
    pub fn call(&self, input: &str) -> Result<String> {
        self.call_with(input, CallArgs::new())
    }

    /// Dispatches an input string with extra caller-supplied arguments.
    ///
    /// The handler sees the extra positionals unchanged and in order, and a
    /// named map built from the matched capture groups overlaid with the
    /// extra keyword arguments — caller-supplied values win on collision.
    pub fn call_with(&self, input: &str, extra: CallArgs) -> Result<String> {
        let (handler, captures) = self.resolve(input).ok_or_else(|| MapError::NoMatch {
            input: input.to_string(),
        })?;
        let args = CallArgs::merged(captures, extra);
        handler.call(&args).map_err(MapError::Handler)
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no patterns.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the registered pattern texts in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.pattern.as_str())
    }
}

/// Compiles a pattern so it only matches a whole string.
///
/// The source is wrapped as `\A(?:pattern)\z`, which anchors it without
/// changing its capture groups or alternation structure.
fn compile_full_match(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    Regex::new(&format!(r"\A(?:{pattern})\z"))
}
