//! Dispatcher: table lookup plus handler invocation.

use crate::{
    codec::{EVENT_SIZE, Event, decode},
    error::DispatchError,
    handler::{DynHandler, Handler},
    table::DispatchTable,
};

/// Something that can dispatch a decoded event to a handler.
///
/// Implemented by the owning [`Dispatcher`] and by
/// [`SharedDispatcher`](crate::SharedDispatcher), so run loops can accept either.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot dispatch events",
    label = "missing `Dispatch` implementation",
    note = "Implement `Dispatch` or use `Dispatcher` / `SharedDispatcher`."
)]
pub trait Dispatch {
    /// Look up the handler for `event.instruction` and invoke it.
    fn dispatch(&self, event: Event) -> Result<i32, DispatchError>;

    /// Decode five bytes and dispatch the result.
    fn dispatch_bytes(&self, bytes: &[u8; EVENT_SIZE]) -> Result<i32, DispatchError> {
        self.dispatch(decode(bytes))
    }
}

impl<D: Dispatch + ?Sized> Dispatch for &D {
    fn dispatch(&self, event: Event) -> Result<i32, DispatchError> {
        (**self).dispatch(event)
    }
}

/// A dispatcher owning its own [`DispatchTable`].
///
/// Each instance is isolated: registrations on one dispatcher are never seen
/// by another. Use [`SharedDispatcher`](crate::SharedDispatcher) to opt in to
/// a table shared between handles.
///
/// # Example
///
/// ```rust
/// use evdrive_core::{DispatchError, Dispatcher, Event, Payload};
///
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.register(1, |p: Payload| p.as_i32() + 1);
///
/// assert_eq!(dispatcher.dispatch(Event::with_int(1, 41)).unwrap(), 42);
/// assert!(matches!(
///     dispatcher.dispatch(Event::with_int(2, 0)),
///     Err(DispatchError::UnregisteredInstruction(2))
/// ));
/// ```
#[derive(Debug, Default)]
pub struct Dispatcher {
    table: DispatchTable,
}

impl Dispatcher {
    /// Create a dispatcher with an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dispatcher around an existing table.
    pub fn from_table(table: DispatchTable) -> Self {
        Self { table }
    }

    /// Register `handler` for `code`, replacing any earlier one.
    pub fn register<H: Handler>(&mut self, code: u8, handler: H) {
        self.table.register(code, handler);
    }

    /// The underlying table.
    pub fn table(&self) -> &DispatchTable {
        &self.table
    }

    /// Mutable access to the underlying table.
    pub fn table_mut(&mut self) -> &mut DispatchTable {
        &mut self.table
    }

    /// Give up the dispatcher and keep its table.
    pub fn into_table(self) -> DispatchTable {
        self.table
    }

    /// Look up the handler for `event.instruction` and invoke it.
    ///
    /// Same as [`Dispatch::dispatch`], available without importing the trait.
    /// The handler's value is returned verbatim. A missing handler yields
    /// [`DispatchError::UnregisteredInstruction`]; a failing handler yields
    /// [`DispatchError::Handler`] carrying its error unchanged.
    pub fn dispatch(&self, event: Event) -> Result<i32, DispatchError> {
        let handler = self.table.lookup(event.instruction);
        invoke(handler, event)
    }

    /// Decode five bytes and dispatch the result.
    ///
    /// Same as [`Dispatch::dispatch_bytes`], available without importing the
    /// trait.
    pub fn dispatch_bytes(&self, bytes: &[u8; EVENT_SIZE]) -> Result<i32, DispatchError> {
        self.dispatch(decode(bytes))
    }
}

impl Dispatch for Dispatcher {
    fn dispatch(&self, event: Event) -> Result<i32, DispatchError> {
        Dispatcher::dispatch(self, event)
    }
}

impl From<DispatchTable> for Dispatcher {
    fn from(table: DispatchTable) -> Self {
        Self::from_table(table)
    }
}

/// Shared invocation path for every dispatcher flavour.
pub(crate) fn invoke(
    handler: Option<&dyn DynHandler>,
    event: Event,
) -> Result<i32, DispatchError> {
    let instruction = event.instruction;
    let Some(handler) = handler else {
        #[cfg(feature = "tracing")]
        tracing::warn!(instruction, "no handler registered");
        return Err(DispatchError::UnregisteredInstruction(instruction));
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(instruction, payload = event.payload.as_i32(), "dispatching");

    handler
        .call_dyn(event.payload)
        .map_err(|source| DispatchError::Handler {
            instruction,
            source,
        })
}
