//! Codec module - the netstring wire format and its two length encodings.
//!
//! Both strategies share the frame shape `length ':' payload ','` and differ
//! only in how the length is written:
//!
//! - [`text`] - decimal ASCII length, the classic netstring format
//! - [`binary`] - fixed 4-byte little-endian length
//!
//! # Design
//!
//! Strategies are parallel modules with identical `encode`/`decode` shapes
//! rather than implementations of a codec trait. Selection happens at
//! compile time at the call site; no parsing logic is shared between them,
//! only the wire constants and the end-of-stream mapping.
//!
//! # Example
//!
//! ```
//! use netstring_codec::codec::{binary, text};
//!
//! let frame = text::encode(b"hello");
//! assert_eq!(frame, b"5:hello,");
//!
//! let frame = binary::encode(b"hello").unwrap();
//! assert_eq!(&frame[..5], &[5, 0, 0, 0, b':']);
//! ```

use std::io;

use crate::error::DecodeError;

pub mod binary;
pub mod text;

/// Byte separating the length field from the payload (`:`).
pub const SEPARATOR: u8 = 0x3a;

/// Byte terminating a frame after the payload (`,`).
pub const TERMINATOR: u8 = 0x2c;

/// End-of-stream mid-frame means the frame is truncated; every other I/O
/// failure passes through untouched.
pub(crate) fn truncated_on_eof(err: io::Error) -> DecodeError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        DecodeError::Truncated
    } else {
        DecodeError::Io(err)
    }
}
