//! # Event Codec
//!
//! Converts between the fixed 5-byte wire record and a structured [`Event`].
//!
//! # Layout
//!
//! ```text
//! ┌────────┬───────────────────────────────┐
//! │ 0      │ 1        2        3        4  │
//! │ instr  │ payload (4 bytes, verbatim)   │
//! └────────┴───────────────────────────────┘
//! ```
//!
//! Bytes are copied position for position. No byte-order conversion happens
//! while decoding; the payload only acquires an integer meaning when a handler
//! asks for one through [`payload_as_int`], which reads it little-endian.
//!
//! Decoding is infallible: any five bytes form a valid event. Detecting short
//! or truncated input is the job of whatever produced the bytes.

use std::fmt;

/// Number of bytes in one encoded event.
pub const EVENT_SIZE: usize = 5;

/// Number of payload bytes carried by an event.
pub const PAYLOAD_SIZE: usize = 4;

/// The opaque 4-byte payload of an [`Event`].
///
/// The dispatcher never looks inside a payload; interpretation is up to the
/// handler. [`Payload::as_i32`] offers the common little-endian integer view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Payload([u8; PAYLOAD_SIZE]);

impl Payload {
    /// An all-zero payload.
    pub const ZERO: Payload = Payload([0; PAYLOAD_SIZE]);

    /// Wrap four raw bytes.
    pub const fn new(bytes: [u8; PAYLOAD_SIZE]) -> Self {
        Self(bytes)
    }

    /// Store `value` little-endian.
    pub const fn from_i32(value: i32) -> Self {
        Self(value.to_le_bytes())
    }

    /// Read the payload as a little-endian signed integer.
    pub const fn as_i32(&self) -> i32 {
        i32::from_le_bytes(self.0)
    }

    /// The raw bytes, in wire order.
    pub const fn as_bytes(&self) -> &[u8; PAYLOAD_SIZE] {
        &self.0
    }

    /// Consume the payload and return its raw bytes.
    pub const fn into_bytes(self) -> [u8; PAYLOAD_SIZE] {
        self.0
    }
}

impl From<[u8; PAYLOAD_SIZE]> for Payload {
    fn from(bytes: [u8; PAYLOAD_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<i32> for Payload {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl AsRef<[u8]> for Payload {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A decoded event: an instruction code selecting a handler, plus its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event {
    /// Selects the handler, 0 to 255.
    pub instruction: u8,
    /// Handed verbatim to the selected handler.
    pub payload: Payload,
}

impl Event {
    /// Build an event from its parts.
    pub const fn new(instruction: u8, payload: Payload) -> Self {
        Self {
            instruction,
            payload,
        }
    }

    /// Build an event whose payload is `value` stored little-endian.
    pub const fn with_int(instruction: u8, value: i32) -> Self {
        Self::new(instruction, Payload::from_i32(value))
    }

    /// Decode a wire record. See [`decode`].
    pub const fn from_bytes(bytes: &[u8; EVENT_SIZE]) -> Self {
        Self {
            instruction: bytes[0],
            payload: Payload([bytes[1], bytes[2], bytes[3], bytes[4]]),
        }
    }

    /// Encode into a wire record. See [`encode`].
    pub const fn to_bytes(&self) -> [u8; EVENT_SIZE] {
        let p = self.payload.0;
        [self.instruction, p[0], p[1], p[2], p[3]]
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Instruction: {}, Payload: {}",
            self.instruction,
            self.payload.as_i32()
        )
    }
}

impl From<[u8; EVENT_SIZE]> for Event {
    fn from(bytes: [u8; EVENT_SIZE]) -> Self {
        Self::from_bytes(&bytes)
    }
}

impl From<Event> for [u8; EVENT_SIZE] {
    fn from(event: Event) -> Self {
        event.to_bytes()
    }
}

/// Decode five bytes into an [`Event`].
///
/// Byte 0 becomes the instruction and bytes 1..5 become the payload, copied
/// verbatim. Never fails.
#[inline]
pub const fn decode(bytes: &[u8; EVENT_SIZE]) -> Event {
    Event::from_bytes(bytes)
}

/// Encode an [`Event`] into five bytes. Inverse of [`decode`].
#[inline]
pub const fn encode(event: &Event) -> [u8; EVENT_SIZE] {
    event.to_bytes()
}

/// Reinterpret a payload as a signed 32-bit integer, little-endian.
#[inline]
pub const fn payload_as_int(payload: &Payload) -> i32 {
    payload.as_i32()
}

/// Concatenate the encodings of several events into one byte stream.
pub fn encode_all<'a, I>(events: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a Event>,
{
    let events = events.into_iter();
    let mut out = Vec::with_capacity(events.size_hint().0 * EVENT_SIZE);
    for event in events {
        out.extend_from_slice(&event.to_bytes());
    }
    out
}
