//! # evdrive - Fixed-Width Binary Event Dispatch
//!
//! `evdrive` decodes 5-byte event records (one instruction byte, four payload
//! bytes), looks up the handler registered for the instruction, and invokes
//! it with the payload. The dispatcher knows nothing about what handlers do;
//! application state is owned by the caller and captured by handler closures.
//!
//! ## Quick Start
//!
//! ```rust
//! use evdrive::prelude::*;
//! use std::{cell::RefCell, rc::Rc};
//!
//! let total = Rc::new(RefCell::new(0));
//!
//! let mut dispatcher = Dispatcher::new();
//! let t = total.clone();
//! dispatcher.register(1, move |p: Payload| {
//!     *t.borrow_mut() += p.as_i32();
//!     *t.borrow()
//! });
//!
//! let bytes = encode_all(&[Event::with_int(1, 40), Event::with_int(1, 2)]);
//! let summary = Runner::new(&dispatcher, SliceSource::new(&bytes)).run()?;
//!
//! assert_eq!(summary.results, vec![40, 42]);
//! # Ok::<(), RunError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing`: structured log events from the table, dispatcher, run loop
//!   and [`LoggingHandler`](handlers::LoggingHandler).

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use evdrive_core::{
    // Error types
    BoxError,
    // Dispatch
    Dispatch,
    DispatchError,
    DispatchTable,
    Dispatcher,
    // Handler
    DynHandler,
    // Codec
    EVENT_SIZE,
    Event,
    Handler,
    HandlerResult,
    IntoOutcome,
    PAYLOAD_SIZE,
    Payload,
    RunError,
    SharedDispatcher,
    SharedHandler,
    SourceError,
    TABLE_SIZE,
    decode,
    encode,
    encode_all,
    payload_as_int,
};

/// Byte sources feeding the decoder.
pub mod source {
    pub use evdrive_std::source::{ByteSource, Events, ReaderSource, SliceSource, read_frame};
}

/// Run loop driving a source through a dispatcher.
pub mod runner {
    pub use evdrive_std::runner::{OnUnregistered, RunSummary, Runner, Step};
}

/// Standard handler implementations.
pub mod handlers {
    #![allow(clippy::wildcard_imports)]
    pub use evdrive_std::handlers::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use evdrive_std::testing::*;
}

/// Prelude module - common imports for evdrive.
///
/// # Usage
///
/// ```rust,ignore
/// use evdrive::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Dispatch
        Dispatch,
        DispatchError,
        DispatchTable,
        Dispatcher,
        // Codec
        Event,
        // Handler
        Handler,
        Payload,
        // Errors
        RunError,
        SharedDispatcher,
        SourceError,
        decode,
        encode,
        encode_all,
        runner::{OnUnregistered, Runner},
        source::{ByteSource, ReaderSource, SliceSource},
    };
}
