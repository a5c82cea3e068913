//! Byte source abstraction consumed by the decoders.
//!
//! The decoder needs exactly three capabilities from whatever supplies the
//! stream: read one byte, peek one byte without consuming it, and read
//! exactly N bytes. [`ByteSource`] captures those, and a blanket impl makes
//! every buffered standard reader (`&[u8]`, [`std::io::Cursor`],
//! [`std::io::BufReader`] over a file or socket, ...) usable directly.
//!
//! End-of-stream is reported as [`std::io::ErrorKind::UnexpectedEof`]; the
//! decoders translate that into [`DecodeError::Truncated`] and pass every
//! other I/O error through untouched.
//!
//! [`DecodeError::Truncated`]: crate::DecodeError::Truncated
//!
//! # Example
//!
//! ```
//! use netstring_codec::ByteSource;
//!
//! let mut src = &b"abc"[..];
//! assert_eq!(src.peek_byte().unwrap(), b'a');
//! assert_eq!(src.read_byte().unwrap(), b'a');
//! assert_eq!(&src.read_exact_bytes(2).unwrap()[..], b"bc");
//! ```

use std::io::{self, BufRead, Read};

use bytes::Bytes;

/// An ordered, consumable stream of bytes with one-byte lookahead.
///
/// Implementations must keep `peek_byte` and `read_byte` coherent: peeking
/// never moves the cursor, and the next `read_byte` returns the byte that
/// was peeked.
pub trait ByteSource {
    /// Read and consume the next byte.
    fn read_byte(&mut self) -> io::Result<u8>;

    /// Return the next byte without consuming it.
    ///
    /// Lookahead is bounded to a single byte; there is deliberately no
    /// wider peek and no pushback.
    fn peek_byte(&mut self) -> io::Result<u8>;

    /// Read and consume exactly `len` bytes.
    ///
    /// If the stream ends short, the error is end-of-stream and any
    /// partially read data is discarded.
    fn read_exact_bytes(&mut self, len: usize) -> io::Result<Bytes>;
}

fn end_of_stream() -> io::Error {
    io::ErrorKind::UnexpectedEof.into()
}

/// Any buffered reader is a byte source; `peek_byte` looks at the front of
/// the reader's buffer without consuming it.
impl<R: BufRead + ?Sized> ByteSource for R {
    fn read_byte(&mut self) -> io::Result<u8> {
        let byte = match self.fill_buf()?.first() {
            Some(&b) => b,
            None => return Err(end_of_stream()),
        };
        self.consume(1);
        Ok(byte)
    }

    fn peek_byte(&mut self) -> io::Result<u8> {
        match self.fill_buf()?.first() {
            Some(&b) => Ok(b),
            None => Err(end_of_stream()),
        }
    }

    fn read_exact_bytes(&mut self, len: usize) -> io::Result<Bytes> {
        // The declared length is untrusted until the bytes actually
        // arrive; let the buffer grow with the stream instead of
        // pre-sizing it.
        let mut buf = Vec::new();
        let n = (&mut *self).take(len as u64).read_to_end(&mut buf)?;
        if n < len {
            return Err(end_of_stream());
        }
        Ok(Bytes::from(buf))
    }
}
