//! The argument set passed to handlers.
//!
//! Regex group names are only known at runtime, so handlers cannot receive
//! them as ordinary function parameters. Instead every handler takes one
//! [`CallArgs`] value: a string-keyed map of named arguments plus a list of
//! positional ones. The same type doubles as the caller-side builder for
//! extra arguments on [`Mapper::call_with`](crate::Mapper::call_with).

use std::collections::HashMap;

/// Arguments for one handler invocation.
///
/// Named entries come from two sources: named capture groups matched against
/// the input, and extra keyword arguments supplied by the caller. On a name
/// collision the caller-supplied value wins. Positional entries are always
/// caller-supplied and keep their order.
///
/// # Example
///
/// ```
/// use patmap::CallArgs;
///
/// let extra = CallArgs::new()
///     .arg("first positional")
///     .kwarg("user", "fred");
///
/// assert_eq!(extra.positional(), &["first positional".to_string()]);
/// assert_eq!(extra.get("user"), Some("fred"));
/// assert_eq!(extra.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    pub(crate) positional: Vec<String>,
    pub(crate) named: HashMap<String, String>,
}

impl CallArgs {
    /// Creates an empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Sets a named argument, replacing any previous value for the name.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    /// Returns the positional arguments in the order they were supplied.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Gets a named argument.
    ///
    /// Returns `None` if the name is absent, including when it belongs to an
    /// optional capture group that did not participate in the match.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.named.get(name).map(String::as_str)
    }

    /// Gets a required named argument.
    ///
    /// Returns an error if the name is absent, so handlers can use `?` on
    /// arguments their pattern always captures.
    pub fn require(&self, name: &str) -> Result<&str, anyhow::Error> {
        self.get(name)
            .ok_or_else(|| anyhow::anyhow!("missing argument '{name}'"))
    }

    /// Iterates over the named arguments in arbitrary order.
    pub fn named(&self) -> impl Iterator<Item = (&str, &str)> {
        self.named.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlays caller-supplied extras onto matched captures.
    ///
    /// Extras win on name collision; positionals are extras-only.
    pub(crate) fn merged(captures: HashMap<String, String>, extra: CallArgs) -> Self {
        let mut named = captures;
        named.extend(extra.named);
        Self {
            positional: extra.positional,
            named,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_args() {
        let args = CallArgs::new().arg("a").arg("b").kwarg("k", "v");
        assert_eq!(args.positional(), &["a".to_string(), "b".to_string()]);
        assert_eq!(args.get("k"), Some("v"));
    }

    #[test]
    fn kwarg_replaces_previous_value() {
        let args = CallArgs::new().kwarg("k", "old").kwarg("k", "new");
        assert_eq!(args.get("k"), Some("new"));
    }

    #[test]
    fn require_missing_argument_errors() {
        let args = CallArgs::new();
        let err = args.require("user").unwrap_err();
        assert_eq!(err.to_string(), "missing argument 'user'");
    }

    #[test]
    fn merged_extras_override_captures() {
        let mut captures = HashMap::new();
        captures.insert("first".to_string(), "from_capture".to_string());
        captures.insert("second".to_string(), "kept".to_string());

        let extra = CallArgs::new().arg("pos").kwarg("first", "from_caller");
        let merged = CallArgs::merged(captures, extra);

        assert_eq!(merged.get("first"), Some("from_caller"));
        assert_eq!(merged.get("second"), Some("kept"));
        assert_eq!(merged.positional(), &["pos".to_string()]);
    }

    #[test]
    fn named_iterates_all_entries() {
        let args = CallArgs::new().kwarg("a", "1").kwarg("b", "2");
        let mut names: Vec<&str> = args.named().map(|(k, _)| k).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["a", "b"]);
    }
}
