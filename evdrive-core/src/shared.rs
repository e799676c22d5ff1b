//! # Shared Dispatch Table
//!
//! Provides [`SharedDispatcher`], an explicit opt-in for several handles that
//! register into and dispatch from one table.
//!
//! A plain [`Dispatcher`](crate::Dispatcher) owns its table and stays
//! isolated. Cloning a `SharedDispatcher` instead yields another handle onto
//! the same table, so a registration made through any clone is visible to all
//! of them.
//!
//! # Example
//!
//! ```rust
//! use evdrive_core::{Event, Payload, SharedDispatcher};
//!
//! let dispatcher = SharedDispatcher::new();
//! let other = dispatcher.clone();
//!
//! other.register(3, |_: Payload| 7);
//! assert_eq!(dispatcher.dispatch(Event::with_int(3, 0)).unwrap(), 7);
//! ```
//!
//! The handle is single-threaded (`Rc`), matching the rest of the core.

use crate::{
    codec::Event,
    dispatcher::{Dispatch, invoke},
    error::DispatchError,
    handler::Handler,
    table::DispatchTable,
};
use std::{cell::RefCell, rc::Rc};

/// A cloneable handle onto a dispatch table shared between owners.
#[derive(Debug, Clone, Default)]
pub struct SharedDispatcher(Rc<RefCell<DispatchTable>>);

impl SharedDispatcher {
    /// Create a handle onto a new, empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Share an existing table.
    pub fn from_table(table: DispatchTable) -> Self {
        Self(Rc::new(RefCell::new(table)))
    }

    /// Register `handler` for `code`, visible through every clone.
    ///
    /// May be called from inside a running handler.
    pub fn register<H: Handler>(&self, code: u8, handler: H) {
        self.0.borrow_mut().register(code, handler);
    }

    /// Remove the handler for `code`. Returns whether one was present.
    pub fn unregister(&self, code: u8) -> bool {
        self.0.borrow_mut().unregister(code)
    }

    /// Whether a handler is registered for `code`.
    pub fn contains(&self, code: u8) -> bool {
        self.0.borrow().contains(code)
    }

    /// Number of handles onto this table.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Whether two handles share one table.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Recover the table if this is the only handle.
    ///
    /// Returns `Err(self)` if other handles remain.
    pub fn try_unwrap(self) -> Result<DispatchTable, Self> {
        Rc::try_unwrap(self.0)
            .map(RefCell::into_inner)
            .map_err(SharedDispatcher)
    }

    /// Look up and invoke the handler for `event.instruction`.
    ///
    /// The table borrow is released before the handler runs.
    pub fn dispatch(&self, event: Event) -> Result<i32, DispatchError> {
        let handler = self.0.borrow().lookup_shared(event.instruction);
        invoke(handler.as_deref(), event)
    }
}

impl Dispatch for SharedDispatcher {
    fn dispatch(&self, event: Event) -> Result<i32, DispatchError> {
        SharedDispatcher::dispatch(self, event)
    }
}
