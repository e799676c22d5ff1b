//! Byte source over any [`std::io::Read`].

use super::ByteSource;
use evdrive_core::{EVENT_SIZE, SourceError};
use std::io::{ErrorKind, Read};

/// Reads consecutive frames from a reader until it is exhausted.
///
/// Wrap unbuffered readers such as `File` in a `BufReader` first.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    /// Read frames from `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Borrow the inner reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Give back the inner reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn next_frame(&mut self) -> Result<Option<[u8; EVENT_SIZE]>, SourceError> {
        let mut frame = [0u8; EVENT_SIZE];
        match fill(&mut self.reader, &mut frame)? {
            0 => Ok(None),
            EVENT_SIZE => Ok(Some(frame)),
            got => Err(SourceError::short_read(got)),
        }
    }
}

/// Read exactly one frame from the start of `reader`.
///
/// Unlike [`ReaderSource`], an empty reader is an error here: the caller
/// expected an event to be present (for instance after being told a watched
/// file changed).
pub fn read_frame<R: Read>(mut reader: R) -> Result<[u8; EVENT_SIZE], SourceError> {
    let mut frame = [0u8; EVENT_SIZE];
    match fill(&mut reader, &mut frame)? {
        EVENT_SIZE => Ok(frame),
        got => Err(SourceError::short_read(got)),
    }
}

/// Fill `buf` as far as the reader allows. Returns the byte count.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, SourceError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}
