//! Blocking frame I/O over standard readers and writers.
//!
//! [`FrameWriter`] and [`FrameReader`] wrap a `std::io` writer/reader and
//! move whole frames in the decimal text format:
//!
//! ```text
//! producer ─► FrameWriter<W: Write> ─► bytes ─► FrameReader<R: BufRead> ─► consumer
//! ```
//!
//! The reader distinguishes a stream that ends *between* frames (clean
//! shutdown, `Ok(None)`) from one that ends *inside* a frame
//! ([`DecodeError::Truncated`]).
//!
//! # Example
//!
//! ```
//! use netstring_codec::{FrameReader, FrameWriter};
//!
//! let mut writer = FrameWriter::new(Vec::new());
//! writer.write_frame(b"first").unwrap();
//! writer.write_frame(b"second").unwrap();
//!
//! let bytes = writer.into_inner();
//! let frames: Vec<_> = FrameReader::new(&bytes[..])
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(frames, [&b"first"[..], &b"second"[..]]);
//! ```

use std::io::{self, BufRead, Write};

use bytes::Bytes;

use crate::codec::text;
use crate::error::{DecodeError, Result};
use crate::source::ByteSource;

/// Writes payloads as complete frames to an underlying writer.
///
/// Each frame is staged in an internal scratch buffer and handed to the
/// writer in a single `write_all`, so a frame never reaches `W` in pieces.
#[derive(Debug)]
pub struct FrameWriter<W: Write> {
    writer: W,
    scratch: Vec<u8>,
}

impl<W: Write> FrameWriter<W> {
    /// Create a frame writer over `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            scratch: Vec::new(),
        }
    }

    /// Write one payload as a complete frame.
    pub fn write_frame(&mut self, payload: &[u8]) -> io::Result<()> {
        self.scratch.clear();
        text::encode_into(&mut self.scratch, payload);
        self.writer.write_all(&self.scratch)?;
        tracing::trace!("wrote frame with {} byte payload", payload.len());
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume the frame writer, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Pulls complete frames out of an underlying buffered reader.
///
/// Also usable as an iterator over `Result<Bytes, DecodeError>`; iteration
/// ends on clean end-of-stream. After a decode error the stream position
/// is unspecified and further reads should not be attempted.
#[derive(Debug)]
pub struct FrameReader<R: BufRead> {
    reader: R,
}

impl<R: BufRead> FrameReader<R> {
    /// Create a frame reader over `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read the next frame.
    ///
    /// Returns `Ok(None)` when the stream ends before the first byte of a
    /// frame; an end-of-stream anywhere inside a frame is
    /// [`DecodeError::Truncated`].
    pub fn read_frame(&mut self) -> Result<Option<Bytes>> {
        match self.reader.peek_byte() {
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(err) => return Err(DecodeError::Io(err)),
        }

        let payload = text::decode(&mut self.reader)?;
        tracing::trace!("read frame with {} byte payload", payload.len());
        Ok(Some(payload))
    }

    /// Get a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consume the frame reader, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> Iterator for FrameReader<R> {
    type Item = Result<Bytes>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_frame() {
            Ok(Some(payload)) => Some(Ok(payload)),
            Ok(None) => None,
            Err(err) => {
                tracing::debug!("frame decode failed: {}", err);
                Some(Err(err))
            }
        }
    }
}
