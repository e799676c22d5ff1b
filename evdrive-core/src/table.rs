//! Dispatch table: one handler slot per instruction code.
//!
//! The instruction field is one byte wide, so the table is a fixed array of
//! 256 slots indexed directly by code. Registering into an occupied slot
//! replaces the previous handler; an empty slot is a normal state that
//! dispatch reports as an unregistered instruction.

use crate::handler::{DynHandler, Handler};
use std::{fmt, rc::Rc};

/// Number of distinct instruction codes.
pub const TABLE_SIZE: usize = u8::MAX as usize + 1;

/// A type-erased, reference-counted handler as stored in a table slot.
pub type SharedHandler = Rc<dyn DynHandler>;

/// Mapping from instruction code to handler.
pub struct DispatchTable {
    slots: Box<[Option<SharedHandler>; TABLE_SIZE]>,
}

impl DispatchTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            slots: Box::new(std::array::from_fn(|_| None)),
        }
    }

    /// Store `handler` for `code`, replacing any earlier registration.
    pub fn register<H: Handler>(&mut self, code: u8, handler: H) {
        self.register_shared(code, Rc::new(handler));
    }

    /// Store an already-erased handler for `code`.
    pub fn register_shared(&mut self, code: u8, handler: SharedHandler) {
        let previous = self.slots[usize::from(code)].replace(handler);
        #[cfg(feature = "tracing")]
        {
            if previous.is_some() {
                tracing::debug!(code, "replaced handler");
            } else {
                tracing::debug!(code, "registered handler");
            }
        }
        drop(previous);
    }

    /// Chained form of [`register`](Self::register).
    pub fn with<H: Handler>(mut self, code: u8, handler: H) -> Self {
        self.register(code, handler);
        self
    }

    /// The handler registered for `code`, if any.
    pub fn lookup(&self, code: u8) -> Option<&dyn DynHandler> {
        self.slots[usize::from(code)].as_deref()
    }

    /// A new reference to the handler registered for `code`, if any.
    pub fn lookup_shared(&self, code: u8) -> Option<SharedHandler> {
        self.slots[usize::from(code)].clone()
    }

    /// Remove the handler for `code`. Returns whether one was present.
    pub fn unregister(&mut self, code: u8) -> bool {
        self.slots[usize::from(code)].take().is_some()
    }

    /// Whether a handler is registered for `code`.
    pub fn contains(&self, code: u8) -> bool {
        self.slots[usize::from(code)].is_some()
    }

    /// Number of registered codes.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether no code is registered.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Registered codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&code| self.contains(code))
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTable")
            .field("codes", &self.codes().collect::<Vec<_>>())
            .finish()
    }
}
