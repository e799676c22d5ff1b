//! # Handler Contract
//!
//! A handler accepts a 4-byte [`Payload`] and produces a signed integer, or
//! fails. That is the only capability the dispatcher relies on.
//!
//! # Usage Patterns
//!
//! 1. **Closure**: `|payload: Payload| payload.as_i32() * 2`
//! 2. **Struct implementation**: `impl Handler for MyHandler`
//! 3. **Fallible**: return `Result<i32, E>` (or `Result<(), E>`) from either
//!
//! Handlers own no state. Anything they act on (a stack, a socket, a counter)
//! belongs to whoever built them and is captured at registration time:
//!
//! ```rust,ignore
//! let stack = Rc::new(RefCell::new(Stack::new()));
//! let s = stack.clone();
//! table.register(4, move |p: Payload| s.borrow_mut().push(p.as_i32()));
//! ```

use crate::{codec::Payload, error::BoxError};

/// What a handler reports back through the dispatcher.
pub type HandlerResult = Result<i32, BoxError>;

/// Converts a handler's output into a [`HandlerResult`].
///
/// # Default Implementations
///
/// - `i32` → `Ok(value)`
/// - `()` → `Ok(0)`
/// - `Result<T, E>` → Delegates to inner `T` or boxes the error
///   (so [`HandlerResult`] itself qualifies)
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be returned from a handler",
    label = "missing `IntoOutcome` implementation",
    note = "Handlers must return `i32`, `()`, or a `Result` wrapping one of those."
)]
pub trait IntoOutcome {
    /// Convert the output into the dispatcher's result type.
    fn into_outcome(self) -> HandlerResult;
}

impl IntoOutcome for i32 {
    fn into_outcome(self) -> HandlerResult {
        Ok(self)
    }
}

impl IntoOutcome for () {
    fn into_outcome(self) -> HandlerResult {
        Ok(0)
    }
}

impl<T, E> IntoOutcome for Result<T, E>
where
    T: IntoOutcome,
    E: Into<BoxError>,
{
    fn into_outcome(self) -> HandlerResult {
        match self {
            Ok(t) => t.into_outcome(),
            Err(e) => Err(e.into()),
        }
    }
}

/// A callable registered against an instruction code.
///
/// Invocation is synchronous: the dispatcher waits for `call` to return and
/// imposes no timeout. Implementations are not required to be `Send` or
/// `Sync`; the dispatch core is single-threaded.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be registered as an event handler",
    label = "missing `Handler` implementation",
    note = "Handlers accept a `Payload` and return `i32`, `()`, or a `Result` of those."
)]
pub trait Handler: 'static {
    /// The raw output, converted through [`IntoOutcome`].
    type Output: IntoOutcome;

    /// Handle one payload.
    fn call(&self, payload: Payload) -> Self::Output;
}

// Blanket impl for closures
impl<F, R> Handler for F
where
    F: Fn(Payload) -> R + 'static,
    R: IntoOutcome,
{
    type Output = R;

    fn call(&self, payload: Payload) -> Self::Output {
        (self)(payload)
    }
}

/// Object-safe version of [`Handler`], as stored in a dispatch table.
pub trait DynHandler: 'static {
    /// Handle one payload and normalize the outcome.
    fn call_dyn(&self, payload: Payload) -> HandlerResult;
}

impl<T: Handler> DynHandler for T {
    fn call_dyn(&self, payload: Payload) -> HandlerResult {
        self.call(payload).into_outcome()
    }
}
