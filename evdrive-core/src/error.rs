//! Error types for evdrive.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`RunError`] - Top-level error for driving a byte stream through a dispatcher
//! - [`DispatchError`] - Errors during event dispatch
//! - [`SourceError`] - Errors from byte sources (short reads, I/O)

use std::io;
use thiserror::Error;

use crate::codec::EVENT_SIZE;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for reading and dispatching an event stream.
#[derive(Error, Debug)]
pub enum RunError {
    /// An event could not be dispatched.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// The byte source failed to produce an event.
    #[error("source error: {0}")]
    Source(#[from] SourceError),
}

/// Errors that can occur during event dispatch.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No handler is registered for the instruction code.
    ///
    /// Recoverable: the caller decides whether to skip the event or stop.
    #[error("no handler registered for instruction {0}")]
    UnregisteredInstruction(u8),

    /// The handler ran and reported a failure.
    #[error("handler for instruction {instruction} failed")]
    Handler {
        /// The instruction whose handler failed.
        instruction: u8,
        /// The handler's own error, untouched.
        #[source]
        source: BoxError,
    },
}

impl DispatchError {
    /// The instruction code this error concerns.
    pub fn instruction(&self) -> u8 {
        match self {
            DispatchError::UnregisteredInstruction(code) => *code,
            DispatchError::Handler { instruction, .. } => *instruction,
        }
    }

    /// Whether this error means "no handler for this code".
    pub fn is_unregistered(&self) -> bool {
        matches!(self, DispatchError::UnregisteredInstruction(_))
    }

    /// Recover the handler's error, if this is a handler failure.
    pub fn into_handler_error(self) -> Option<BoxError> {
        match self {
            DispatchError::Handler { source, .. } => Some(source),
            DispatchError::UnregisteredInstruction(_) => None,
        }
    }
}

/// Errors raised by byte sources before decoding.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The input ended partway through an event.
    #[error("short read: expected {expected} bytes, got {got}")]
    ShortRead {
        /// Bytes needed for a full event.
        expected: usize,
        /// Bytes actually available.
        got: usize,
    },

    /// The underlying reader failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl SourceError {
    /// A short read of `got` bytes against a full event.
    pub fn short_read(got: usize) -> Self {
        SourceError::ShortRead {
            expected: EVENT_SIZE,
            got,
        }
    }
}
