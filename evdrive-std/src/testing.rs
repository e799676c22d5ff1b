//! Testing utilities for evdrive.
//!
//! This module provides handler doubles that make dispatch behaviour easy to
//! observe in tests.
//!
//! # Features
//!
//! - [`RecordingHandler`]: Records every payload it receives
//! - [`CountingHandler`]: Counts invocations
//! - [`FailingHandler`]: Always fails with a fixed message

use evdrive_core::{Handler, Payload};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use thiserror::Error;

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records all payloads it receives.
///
/// Clones share one record, so a clone kept by the test observes calls made
/// through the copy registered in the dispatcher.
///
/// # Example
///
/// ```rust
/// use evdrive_core::{Dispatcher, Event};
/// use evdrive_std::testing::RecordingHandler;
///
/// let recorder = RecordingHandler::returning(7);
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.register(1, recorder.clone());
///
/// assert_eq!(dispatcher.dispatch(Event::with_int(1, 99)).unwrap(), 7);
/// assert_eq!(recorder.values(), vec![99]);
/// ```
pub struct RecordingHandler {
    payloads: Arc<Mutex<Vec<Payload>>>,
    result: i32,
}

impl RecordingHandler {
    /// Create a recording handler that returns `0`.
    pub fn new() -> Self {
        Self::returning(0)
    }

    /// Create a recording handler that returns `result` on every call.
    pub fn returning(result: i32) -> Self {
        Self {
            payloads: Arc::new(Mutex::new(Vec::new())),
            result,
        }
    }

    /// Get a clone of the recorded payloads.
    pub fn payloads(&self) -> Vec<Payload> {
        self.payloads.lock().unwrap().clone()
    }

    /// Recorded payloads read as little-endian integers.
    pub fn values(&self) -> Vec<i32> {
        self.payloads().iter().map(Payload::as_i32).collect()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }

    /// Clear all recorded payloads.
    pub fn clear(&self) {
        self.payloads.lock().unwrap().clear();
    }
}

impl Default for RecordingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingHandler {
    fn clone(&self) -> Self {
        Self {
            payloads: self.payloads.clone(),
            result: self.result,
        }
    }
}

impl Handler for RecordingHandler {
    type Output = i32;

    fn call(&self, payload: Payload) -> i32 {
        self.payloads.lock().unwrap().push(payload);
        self.result
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations and returns the running count.
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingHandler {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl Handler for CountingHandler {
    type Output = i32;

    fn call(&self, _payload: Payload) -> i32 {
        let n = self.count.fetch_add(1, Ordering::SeqCst) + 1;
        i32::try_from(n).unwrap_or(i32::MAX)
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// The error raised by [`FailingHandler`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InjectedFailure(pub String);

/// A handler that always fails.
#[derive(Debug, Clone)]
pub struct FailingHandler {
    message: String,
}

impl FailingHandler {
    /// Create a handler failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Handler for FailingHandler {
    type Output = Result<i32, InjectedFailure>;

    fn call(&self, _payload: Payload) -> Self::Output {
        Err(InjectedFailure(self.message.clone()))
    }
}
