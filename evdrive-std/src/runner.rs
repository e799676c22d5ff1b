//! Run loop: pull frames from a [`ByteSource`], decode, dispatch.
//!
//! The loop is sequential. Each event is fully handled before the next frame
//! is read. What happens on an unregistered instruction is the caller's call,
//! expressed as an [`OnUnregistered`] policy; every other failure ends the run.

use crate::source::ByteSource;
use evdrive_core::{Dispatch, Event, RunError};

/// What the runner does when an event names an instruction with no handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnUnregistered {
    /// End the run with the dispatch error (default).
    #[default]
    Stop,
    /// Record the event as skipped and continue with the next frame.
    Skip,
}

/// The outcome of a single [`Runner::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A handler ran and returned `result`.
    Dispatched {
        /// The event that was dispatched.
        event: Event,
        /// The handler's value.
        result: i32,
    },
    /// No handler was registered and the policy said to skip.
    Skipped {
        /// The event that was skipped.
        event: Event,
    },
}

/// Totals for a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Events handed to a handler.
    pub dispatched: usize,
    /// Events skipped for lack of a handler.
    pub skipped: usize,
    /// Handler results in dispatch order.
    pub results: Vec<i32>,
}

impl RunSummary {
    fn record(&mut self, step: Step) {
        match step {
            Step::Dispatched { result, .. } => {
                self.dispatched += 1;
                self.results.push(result);
            }
            Step::Skipped { .. } => self.skipped += 1,
        }
    }
}

/// Drives events from a source through a dispatcher.
///
/// # Example
///
/// ```rust
/// use evdrive_core::{Dispatcher, Payload};
/// use evdrive_std::{runner::{OnUnregistered, Runner}, source::SliceSource};
///
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.register(1, |p: Payload| p.as_i32() * 2);
///
/// let bytes = [1, 21, 0, 0, 0, 7, 0, 0, 0, 0];
/// let summary = Runner::new(&dispatcher, SliceSource::new(&bytes))
///     .on_unregistered(OnUnregistered::Skip)
///     .run()
///     .unwrap();
///
/// assert_eq!(summary.results, vec![42]);
/// assert_eq!(summary.skipped, 1);
/// ```
#[derive(Debug)]
pub struct Runner<D, S> {
    dispatcher: D,
    source: S,
    policy: OnUnregistered,
}

impl<D: Dispatch, S: ByteSource> Runner<D, S> {
    /// Create a runner that stops on the first unregistered instruction.
    pub fn new(dispatcher: D, source: S) -> Self {
        Self {
            dispatcher,
            source,
            policy: OnUnregistered::default(),
        }
    }

    /// Set the policy for unregistered instructions.
    pub fn on_unregistered(mut self, policy: OnUnregistered) -> Self {
        self.policy = policy;
        self
    }

    /// The active policy.
    pub fn policy(&self) -> OnUnregistered {
        self.policy
    }

    /// Process one frame. `Ok(None)` once the source is exhausted.
    pub fn step(&mut self) -> Result<Option<Step>, RunError> {
        let Some(event) = self.source.next_event()? else {
            return Ok(None);
        };

        match self.dispatcher.dispatch(event) {
            Ok(result) => Ok(Some(Step::Dispatched { event, result })),
            Err(e) if e.is_unregistered() && self.policy == OnUnregistered::Skip => {
                #[cfg(feature = "tracing")]
                tracing::info!(
                    instruction = e.instruction(),
                    "skipping unregistered instruction"
                );
                Ok(Some(Step::Skipped { event }))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Process frames until the source ends or an error stops the run.
    pub fn run(&mut self) -> Result<RunSummary, RunError> {
        let mut summary = RunSummary::default();
        while let Some(step) = self.step()? {
            summary.record(step);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            dispatched = summary.dispatched,
            skipped = summary.skipped,
            "source exhausted"
        );
        Ok(summary)
    }

    /// Give back the dispatcher and source.
    pub fn into_parts(self) -> (D, S) {
        (self.dispatcher, self.source)
    }
}
