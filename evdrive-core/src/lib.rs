//! # evdrive-core
//!
//! Core types for the evdrive event dispatcher.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! handler crates that don't need the byte sources and run loop from
//! `evdrive-std`.
//!
//! # Data Flow
//!
//! ```text
//! raw bytes ──▶ codec::decode ──▶ Event ──▶ Dispatcher ──▶ Handler ──▶ i32
//!                                              │
//!                                        DispatchTable
//! ```
//!
//! ## Event Codec ([`codec`])
//!
//! A fixed 5-byte record: one instruction byte followed by a 4-byte opaque
//! payload. Decoding never fails; the integer view of a payload is
//! little-endian.
//!
//! ## Handler Contract ([`Handler`])
//!
//! Anything that turns a [`Payload`] into an `i32` or an error. Closures
//! qualify automatically. State lives outside the handler and is captured.
//!
//! ## Dispatch Table ([`DispatchTable`])
//!
//! 256 slots, one per instruction code. Re-registration overwrites; empty
//! slots are expected.
//!
//! ## Dispatcher ([`Dispatcher`], [`SharedDispatcher`])
//!
//! Looks up the handler for an event and invokes it, passing its result
//! through untouched. An empty slot yields
//! [`DispatchError::UnregisteredInstruction`], which callers may treat as
//! skippable.
//!
//! # Threading
//!
//! Everything here is single-threaded and synchronous. Hosts feeding one
//! dispatcher from several sources must serialize the calls themselves, or
//! give each source its own dispatcher.
//!
//! # Error Types
//!
//! - [`RunError`] - Top-level error type
//! - [`DispatchError`] - Dispatch errors
//! - [`SourceError`] - Byte source errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod codec;
mod dispatcher;
mod error;
mod handler;
mod shared;
mod table;

// Re-exports
pub use codec::{
    EVENT_SIZE, Event, PAYLOAD_SIZE, Payload, decode, encode, encode_all, payload_as_int,
};
pub use dispatcher::{Dispatch, Dispatcher};
pub use error::{BoxError, DispatchError, RunError, SourceError};
pub use handler::{DynHandler, Handler, HandlerResult, IntoOutcome};
pub use shared::SharedDispatcher;
pub use table::{DispatchTable, SharedHandler, TABLE_SIZE};
