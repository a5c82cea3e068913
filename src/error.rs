//! Error types for netstring-codec.

use thiserror::Error;

/// Everything that can go wrong while decoding one frame.
///
/// Decoding is atomic: a call either yields a complete payload or one of
/// these errors, never a partial result. After an error the source cursor
/// is left at an unspecified position inside the broken frame, so callers
/// must treat the stream as unframed from that point on.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The source reached end-of-stream before the length field, payload,
    /// or terminator was fully read.
    #[error("unexpected end of stream inside a frame")]
    Truncated,

    /// A byte in the length field is neither an ASCII digit nor the
    /// separator.
    #[error("invalid length digit {0:#04x}")]
    InvalidDigit(u8),

    /// The length field starts with `0` but is not exactly the single
    /// digit `0`.
    #[error("leading zero in length field")]
    LeadingZero,

    /// The separator appeared before any length digit was read.
    #[error("empty length field")]
    InvalidLength,

    /// The byte after the payload is not the frame terminator.
    #[error("unexpected terminator {0:#04x}, wanted 0x2c (',')")]
    UnexpectedTerminator(u8),

    /// The byte after a fixed-width length prefix is not the separator.
    /// Only produced by the binary-length codec.
    #[error("unexpected separator {0:#04x}, wanted 0x3a (':')")]
    UnexpectedSeparator(u8),

    /// The declared length does not fit in `usize` on this platform.
    #[error("length field overflows usize")]
    LengthOverflow,

    /// Non-EOF I/O error from the byte source, passed through unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DecodeError {
    /// Returns true if the input ended mid-frame, as opposed to being
    /// structurally corrupt.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        matches!(self, DecodeError::Truncated)
    }
}

/// Errors from encoding a frame.
///
/// The decimal-length encoder is infallible; only the binary-length codec
/// can reject a payload.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The payload length does not fit in the fixed 4-byte length prefix.
    #[error("payload length {0} exceeds the 4-byte length prefix")]
    PayloadTooLarge(usize),
}

/// Result type alias; decoding errors are the common case.
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;
