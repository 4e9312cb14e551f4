//! Handler references.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::args::CallArgs;

/// What a handler produces: its output text, or an application error.
///
/// Handler errors are application-level, so they use `anyhow::Error` and
/// propagate through dispatch without translation.
pub type HandlerResult = Result<String, anyhow::Error>;

/// Type-erased, cheaply clonable reference to a handler.
///
/// Dispatch is single-threaded, so handlers use `Rc<RefCell<dyn FnMut>>`:
/// `FnMut` lets a handler carry mutable state without interior-mutability
/// wrappers at the call site, and cloning shares the underlying callable.
/// Sharing is what makes registering one handler under several patterns work —
/// see [`Mapper::map_handler`](crate::Mapper::map_handler).
pub struct Handler(Rc<RefCell<dyn FnMut(&CallArgs) -> HandlerResult>>);

impl Handler {
    /// Wraps a closure or function as a handler.
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(&CallArgs) -> HandlerResult + 'static,
    {
        Self(Rc::new(RefCell::new(f)))
    }

    /// Invokes the handler with the given arguments.
    pub fn call(&self, args: &CallArgs) -> HandlerResult {
        (self.0.borrow_mut())(args)
    }
}

impl Clone for Handler {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}
