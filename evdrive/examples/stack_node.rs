//! A stack node driven by binary events.
//!
//! Without arguments, runs a built-in stream that initialises the stack,
//! pushes 125 and 65281, pops and peeks, pops an empty stack, and finally
//! sends instruction 16, which has no handler and stops the run.
//!
//! With a path argument, reads events from that file instead and skips
//! unknown instructions.
//!
//! ```text
//! RUST_LOG=debug cargo run --example stack_node --features tracing
//! EVDRIVE_STACK_MAX=4 cargo run --example stack_node -- events.bin
//! ```

use evdrive::{
    Dispatcher, RunError,
    runner::{OnUnregistered, Runner},
    source::{ReaderSource, SliceSource},
};
use std::{env, fs::File, io::BufReader, process::ExitCode};
use tracing_subscriber::EnvFilter;

#[path = "../tests/common/mod.rs"]
mod common;

use common::{DEMO_STREAM, stack_max_from_env, stack_node_with};

fn run(dispatcher: &Dispatcher) -> Result<(), RunError> {
    let summary = match env::args_os().nth(1) {
        Some(path) => {
            let file = File::open(&path).map_err(evdrive::SourceError::from)?;
            Runner::new(dispatcher, ReaderSource::new(BufReader::new(file)))
                .on_unregistered(OnUnregistered::Skip)
                .run()?
        }
        None => Runner::new(dispatcher, SliceSource::new(&DEMO_STREAM)).run()?,
    };

    tracing::info!(
        dispatched = summary.dispatched,
        skipped = summary.skipped,
        results = ?summary.results,
        "done"
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let (dispatcher, _stack) = stack_node_with(stack_max_from_env());

    match run(&dispatcher) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "exiting");
            ExitCode::FAILURE
        }
    }
}
