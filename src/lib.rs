//! # netstring-codec
//!
//! Streaming codec for the netstring framing format: a self-delimiting
//! byte-string encoding with a decimal ASCII length, a `:` separator, the
//! raw payload, and a `,` terminator. See
//! <https://cr.yp.to/proto/netstrings.txt>.
//!
//! ```text
//! ┌────────────────┬─────┬───────────────┬─────┐
//! │ Length         │ ':' │ Payload       │ ',' │
//! │ decimal ASCII  │     │ Length bytes  │     │
//! └────────────────┴─────┴───────────────┴─────┘
//! ```
//!
//! ## Architecture
//!
//! - **Encoding** is a pure function from payload bytes to a complete frame.
//! - **Decoding** pulls exactly one frame from any [`ByteSource`] (every
//!   `std::io::BufRead` qualifies) via a byte-at-a-time state machine, and
//!   diagnoses each class of malformed input with its own
//!   [`DecodeError`] variant.
//! - [`codec::binary`] is a sibling strategy that swaps the decimal length
//!   for a fixed 4-byte little-endian one; [`FrameReader`] /
//!   [`FrameWriter`] wrap `std::io` streams for whole-frame I/O.
//!
//! Payloads are opaque: embedded `:` and `,` bytes need no escaping, the
//! length alone delimits the frame.
//!
//! ## Example
//!
//! ```
//! let frame = netstring_codec::encode(b"hello");
//! assert_eq!(frame, b"5:hello,");
//!
//! let mut src = &frame[..];
//! let payload = netstring_codec::decode(&mut src).unwrap();
//! assert_eq!(&payload[..], b"hello");
//! assert!(src.is_empty());
//! ```

pub mod codec;
pub mod error;
pub mod source;
pub mod stream;

pub use codec::text::{decode, encode, encode_into, encoded_len};
pub use codec::{SEPARATOR, TERMINATOR};
pub use error::{DecodeError, EncodeError};
pub use source::ByteSource;
pub use stream::{FrameReader, FrameWriter};
