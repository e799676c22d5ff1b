//! In-memory byte source.

use super::ByteSource;
use evdrive_core::{EVENT_SIZE, SourceError};

/// Walks a byte buffer five bytes at a time.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
}

impl<'a> SliceSource<'a> {
    /// Read frames from `bytes`.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Bytes not yet consumed.
    pub const fn remaining(&self) -> &'a [u8] {
        self.bytes
    }

    /// Number of whole frames left.
    pub const fn frames_left(&self) -> usize {
        self.bytes.len() / EVENT_SIZE
    }
}

impl ByteSource for SliceSource<'_> {
    fn next_frame(&mut self) -> Result<Option<[u8; EVENT_SIZE]>, SourceError> {
        match self.bytes.split_first_chunk::<EVENT_SIZE>() {
            Some((frame, rest)) => {
                self.bytes = rest;
                Ok(Some(*frame))
            }
            None if self.bytes.is_empty() => Ok(None),
            None => Err(SourceError::short_read(self.bytes.len())),
        }
    }
}
