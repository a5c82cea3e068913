//! The classic netstring format with a decimal ASCII length.
//!
//! ```text
//! ┌────────────────┬─────┬───────────────┬─────┐
//! │ Length         │ ':' │ Payload       │ ',' │
//! │ decimal ASCII  │     │ Length bytes  │     │
//! └────────────────┴─────┴───────────────┴─────┘
//! ```
//!
//! The length is the shortest decimal representation of the payload size:
//! no leading zeros, `0` only for an empty payload. The payload is opaque;
//! embedded `:` and `,` bytes are not escaped, the length alone delimits
//! the frame. See <https://cr.yp.to/proto/netstrings.txt>.
//!
//! # Example
//!
//! ```
//! use netstring_codec::codec::text;
//!
//! let frame = text::encode(b"hello");
//! assert_eq!(frame, b"5:hello,");
//!
//! let mut src = &frame[..];
//! assert_eq!(&text::decode(&mut src).unwrap()[..], b"hello");
//! assert!(src.is_empty());
//! ```

use std::io;

use bytes::Bytes;

use super::{truncated_on_eof, SEPARATOR, TERMINATOR};
use crate::error::{DecodeError, Result};
use crate::source::ByteSource;

/// State machine for decoding one frame.
#[derive(Debug)]
enum State {
    /// Parsing the decimal length field, one digit per step.
    ReadLength { len: usize, digits: usize },
    /// Length and separator consumed, reading exactly `len` payload bytes.
    ReadPayload { len: usize },
    /// Payload consumed, expecting the terminator byte.
    ReadTerminator { payload: Bytes },
}

/// Encode a payload as a complete netstring frame.
///
/// Infallible: every `&[u8]` has a representable length.
///
/// # Example
///
/// ```
/// use netstring_codec::codec::text;
///
/// assert_eq!(text::encode(b""), b"0:,");
/// assert_eq!(text::encode(b"sunshine"), b"8:sunshine,");
/// ```
pub fn encode(payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(encoded_len(payload.len()));
    encode_into(&mut frame, payload);
    frame
}

/// Append one frame to an existing buffer.
///
/// Useful for batching several frames into a single write.
pub fn encode_into(frame: &mut Vec<u8>, payload: &[u8]) {
    let mut length = itoa::Buffer::new();
    frame.extend_from_slice(length.format(payload.len()).as_bytes());
    frame.push(SEPARATOR);
    frame.extend_from_slice(payload);
    frame.push(TERMINATOR);
}

/// Exact size of the frame [`encode`] produces for a payload of
/// `payload_len` bytes.
pub fn encoded_len(payload_len: usize) -> usize {
    itoa::Buffer::new().format(payload_len).len() + 1 + payload_len + 1
}

/// Decode exactly one frame from the source.
///
/// Consumes the length field, separator, payload, and terminator; the
/// source is left positioned on the byte after the frame. On an error the
/// cursor position is unspecified and the source should be discarded.
///
/// # Errors
///
/// - [`DecodeError::Truncated`] - the stream ended mid-frame
/// - [`DecodeError::InvalidDigit`] - a non-digit byte in the length field
/// - [`DecodeError::LeadingZero`] - length starts with `0` but is not `0`
/// - [`DecodeError::InvalidLength`] - separator with no digits before it
/// - [`DecodeError::UnexpectedTerminator`] - the byte after the payload is
///   not `,`
/// - [`DecodeError::LengthOverflow`] - length does not fit in `usize`
/// - [`DecodeError::Io`] - a non-EOF failure from the source
///
/// # Example
///
/// ```
/// use netstring_codec::codec::text;
///
/// let mut src = &b"8:sunshine,"[..];
/// assert_eq!(&text::decode(&mut src).unwrap()[..], b"sunshine");
/// ```
pub fn decode<S: ByteSource + ?Sized>(source: &mut S) -> Result<Bytes> {
    let mut state = State::ReadLength { len: 0, digits: 0 };

    loop {
        state = match state {
            State::ReadLength { len, digits } => {
                let byte = source.read_byte().map_err(truncated_on_eof)?;
                match byte {
                    // A zero is only valid as the sole digit of the length;
                    // one byte of lookahead decides which case this is. The
                    // separator itself is consumed on the next iteration.
                    b'0' if digits == 0 => match source.peek_byte() {
                        Ok(SEPARATOR) => State::ReadLength { len: 0, digits: 1 },
                        Ok(_) => return Err(DecodeError::LeadingZero),
                        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                            return Err(DecodeError::LeadingZero)
                        }
                        Err(err) => return Err(DecodeError::Io(err)),
                    },
                    b'0'..=b'9' => {
                        let digit = usize::from(byte - b'0');
                        let len = len
                            .checked_mul(10)
                            .and_then(|len| len.checked_add(digit))
                            .ok_or(DecodeError::LengthOverflow)?;
                        State::ReadLength {
                            len,
                            digits: digits + 1,
                        }
                    }
                    SEPARATOR if digits == 0 => return Err(DecodeError::InvalidLength),
                    SEPARATOR => State::ReadPayload { len },
                    other => return Err(DecodeError::InvalidDigit(other)),
                }
            }

            State::ReadPayload { len } => {
                let payload = source.read_exact_bytes(len).map_err(truncated_on_eof)?;
                State::ReadTerminator { payload }
            }

            State::ReadTerminator { payload } => {
                let byte = source.read_byte().map_err(truncated_on_eof)?;
                if byte != TERMINATOR {
                    return Err(DecodeError::UnexpectedTerminator(byte));
                }
                return Ok(payload);
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    fn decode_all(mut input: &[u8]) -> Result<Bytes> {
        decode(&mut input)
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(b""), b"0:,");
    }

    #[test]
    fn test_encode_simple() {
        assert_eq!(encode(b"sunshine"), b"8:sunshine,");
    }

    #[test]
    fn test_encode_into_appends() {
        let mut batch = Vec::new();
        encode_into(&mut batch, b"first");
        encode_into(&mut batch, b"second");
        assert_eq!(batch, b"5:first,6:second,");
    }

    #[test]
    fn test_encoded_len_is_exact() {
        for payload_len in [0, 1, 9, 10, 99, 100, 105, 1000] {
            let payload = vec![b'x'; payload_len];
            assert_eq!(encode(&payload).len(), encoded_len(payload_len));
        }
    }

    #[test]
    fn test_decode_simple() {
        assert_eq!(&decode_all(b"8:sunshine,").unwrap()[..], b"sunshine");
    }

    #[test]
    fn test_decode_empty_payload() {
        assert!(decode_all(b"0:,").unwrap().is_empty());
    }

    #[test]
    fn test_decode_three_digit_length() {
        let payload = vec![0xAB; 105];
        let frame = encode(&payload);
        assert!(frame.starts_with(b"105:"));
        assert_eq!(&decode_all(&frame).unwrap()[..], &payload[..]);
    }

    #[test]
    fn test_decode_leading_zero() {
        assert!(matches!(
            decode_all(b"08:sunshine,"),
            Err(DecodeError::LeadingZero)
        ));
    }

    #[test]
    fn test_decode_sole_zero_then_eof() {
        // A bare "0" with nothing after it is diagnosed as a leading zero,
        // not as truncation: the lookahead found no separator.
        assert!(matches!(decode_all(b"0"), Err(DecodeError::LeadingZero)));
    }

    #[test]
    fn test_decode_missing_length() {
        assert!(matches!(
            decode_all(b":foo,"),
            Err(DecodeError::InvalidLength)
        ));
    }

    #[test]
    fn test_decode_invalid_digit_reports_byte() {
        assert!(matches!(
            decode_all(b"8e:sunshine,"),
            Err(DecodeError::InvalidDigit(b'e'))
        ));
    }

    #[test]
    fn test_decode_wrong_terminator_reports_byte() {
        assert!(matches!(
            decode_all(b"8:sunshine:"),
            Err(DecodeError::UnexpectedTerminator(b':'))
        ));
    }

    #[test]
    fn test_decode_length_overflow() {
        let mut frame = vec![b'9'; 21];
        frame.extend_from_slice(b":x,");
        assert!(matches!(
            decode_all(&frame),
            Err(DecodeError::LengthOverflow)
        ));
    }

    #[test]
    fn test_decode_consumes_exactly_one_frame() {
        let mut src = &b"5:first,6:second,trailing"[..];
        assert_eq!(&decode(&mut src).unwrap()[..], b"first");
        assert_eq!(src, b"6:second,trailing");
        assert_eq!(&decode(&mut src).unwrap()[..], b"second");
        assert_eq!(src, b"trailing");
    }

    #[test]
    fn test_decode_payload_with_embedded_delimiters() {
        let payload = b"a:b,c:d,";
        assert_eq!(&decode_all(&encode(payload)).unwrap()[..], payload);
    }

    quickcheck! {
        fn roundtrip(payload: Vec<u8>) -> bool {
            decode_all(&encode(&payload)).unwrap() == payload
        }

        fn reencode_is_canonical(payload: Vec<u8>) -> bool {
            let frame = encode(&payload);
            encode(&decode_all(&frame).unwrap()) == frame
        }
    }
}
