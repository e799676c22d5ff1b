//! Logging decorator for handlers.

use evdrive_core::{Handler, HandlerResult, IntoOutcome, Payload};

/// A handler wrapper that logs each invocation and its outcome.
///
/// The wrapped handler's result is returned unchanged. Without the `tracing`
/// feature this is a plain pass-through.
pub struct LoggingHandler<H> {
    inner: H,
    name: &'static str,
}

impl<H> LoggingHandler<H> {
    /// Wrap `inner`, labelling its log lines with `name`.
    pub const fn new(inner: H, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The label used in log lines.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Unwrap the inner handler.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: Clone> Clone for LoggingHandler<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<H: Handler> Handler for LoggingHandler<H> {
    type Output = HandlerResult;

    fn call(&self, payload: Payload) -> HandlerResult {
        let outcome = self.inner.call(payload).into_outcome();
        #[cfg(feature = "tracing")]
        {
            match &outcome {
                Ok(value) => tracing::info!(
                    handler = self.name,
                    payload = payload.as_i32(),
                    result = *value,
                    "handled"
                ),
                Err(error) => tracing::warn!(
                    handler = self.name,
                    payload = payload.as_i32(),
                    %error,
                    "handler failed"
                ),
            }
        }
        outcome
    }
}
