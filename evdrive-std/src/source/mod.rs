//! Byte sources: producers of 5-byte event frames.
//!
//! Decoding assumes a complete frame. Sources are where incomplete input is
//! caught: a clean end between frames is `Ok(None)`, while input that stops
//! partway through a frame is a [`SourceError::ShortRead`].

mod reader;
mod slice;

pub use reader::{ReaderSource, read_frame};
pub use slice::SliceSource;

use evdrive_core::{EVENT_SIZE, Event, SourceError, decode};

/// Supplies complete event frames on demand.
pub trait ByteSource {
    /// The next frame, `Ok(None)` at a clean end of input.
    fn next_frame(&mut self) -> Result<Option<[u8; EVENT_SIZE]>, SourceError>;

    /// The next frame, decoded.
    fn next_event(&mut self) -> Result<Option<Event>, SourceError> {
        Ok(self.next_frame()?.map(|frame| decode(&frame)))
    }

    /// Iterate over decoded events until the source ends or fails.
    fn events(self) -> Events<Self>
    where
        Self: Sized,
    {
        Events {
            source: self,
            done: false,
        }
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn next_frame(&mut self) -> Result<Option<[u8; EVENT_SIZE]>, SourceError> {
        (**self).next_frame()
    }
}

/// Iterator returned by [`ByteSource::events`].
///
/// Yields at most one error, after which it is exhausted.
#[derive(Debug)]
pub struct Events<S> {
    source: S,
    done: bool,
}

impl<S: ByteSource> Iterator for Events<S> {
    type Item = Result<Event, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.source.next_event() {
            Ok(Some(event)) => Some(Ok(event)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
