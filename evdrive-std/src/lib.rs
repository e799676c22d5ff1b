//! # evdrive-std
//!
//! Standard implementations around the evdrive dispatch core.
//!
//! This crate provides:
//! - **Byte sources**: [`SliceSource`], [`ReaderSource`], [`read_frame`]
//! - **Run loop**: [`Runner`] with a stop-or-skip policy for unknown codes
//! - **Standard handlers**: [`LoggingHandler`]
//! - **Testing**: recording, counting and failing handlers
//!
//! [`SliceSource`]: source::SliceSource
//! [`ReaderSource`]: source::ReaderSource
//! [`read_frame`]: source::read_frame
//! [`Runner`]: runner::Runner
//! [`LoggingHandler`]: handlers::LoggingHandler

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use evdrive_core;

// Modules
pub mod handlers;
pub mod runner;
pub mod source;
pub mod testing;
