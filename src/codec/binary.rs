//! Netstring variant with a fixed 4-byte binary length.
//!
//! ```text
//! ┌────────────┬─────┬───────────────┬─────┐
//! │ Length     │ ':' │ Payload       │ ',' │
//! │ 4 bytes    │     │ Length bytes  │     │
//! │ uint32 LE  │     │               │     │
//! └────────────┴─────┴───────────────┴─────┘
//! ```
//!
//! Same frame shape as [`text`], but the length is a little-endian `u32`
//! instead of decimal ASCII, so a frame costs a constant 6 bytes of
//! overhead and the length never needs digit-by-digit parsing. The price
//! is a 4 GiB payload ceiling: [`encode`] rejects anything larger rather
//! than wrapping the length.
//!
//! [`text`]: crate::codec::text

use bytes::Bytes;

use super::{truncated_on_eof, SEPARATOR, TERMINATOR};
use crate::error::{DecodeError, EncodeError, Result};
use crate::source::ByteSource;

/// Width of the binary length prefix in bytes.
pub const LENGTH_SIZE: usize = 4;

/// Encode a payload as a binary-length frame.
///
/// # Errors
///
/// [`EncodeError::PayloadTooLarge`] if the payload does not fit the 4-byte
/// length prefix.
pub fn encode(payload: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let mut frame = Vec::with_capacity(encoded_len(payload.len()));
    encode_into(&mut frame, payload)?;
    Ok(frame)
}

/// Append one binary-length frame to an existing buffer.
///
/// The buffer is untouched when the payload is too large.
pub fn encode_into(frame: &mut Vec<u8>, payload: &[u8]) -> Result<(), EncodeError> {
    let len = u32::try_from(payload.len())
        .map_err(|_| EncodeError::PayloadTooLarge(payload.len()))?;
    frame.extend_from_slice(&len.to_le_bytes());
    frame.push(SEPARATOR);
    frame.extend_from_slice(payload);
    frame.push(TERMINATOR);
    Ok(())
}

/// Exact size of the frame [`encode`] produces for a payload of
/// `payload_len` bytes.
pub fn encoded_len(payload_len: usize) -> usize {
    LENGTH_SIZE + 1 + payload_len + 1
}

/// Decode exactly one binary-length frame from the source.
///
/// Consumes exactly `4 + 1 + length + 1` bytes.
///
/// # Errors
///
/// - [`DecodeError::Truncated`] - the stream ended mid-frame
/// - [`DecodeError::UnexpectedSeparator`] - the byte after the length
///   prefix is not `:`
/// - [`DecodeError::UnexpectedTerminator`] - the byte after the payload is
///   not `,`
/// - [`DecodeError::LengthOverflow`] - the length does not fit in `usize`
///   (targets narrower than 32 bits)
/// - [`DecodeError::Io`] - a non-EOF failure from the source
pub fn decode<S: ByteSource + ?Sized>(source: &mut S) -> Result<Bytes> {
    let prefix = source
        .read_exact_bytes(LENGTH_SIZE)
        .map_err(truncated_on_eof)?;
    let len = u32::from_le_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]);
    let len = usize::try_from(len).map_err(|_| DecodeError::LengthOverflow)?;

    let byte = source.read_byte().map_err(truncated_on_eof)?;
    if byte != SEPARATOR {
        return Err(DecodeError::UnexpectedSeparator(byte));
    }

    let payload = source.read_exact_bytes(len).map_err(truncated_on_eof)?;

    let byte = source.read_byte().map_err(truncated_on_eof)?;
    if byte != TERMINATOR {
        return Err(DecodeError::UnexpectedTerminator(byte));
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(mut input: &[u8]) -> Result<Bytes> {
        decode(&mut input)
    }

    #[test]
    fn test_encode_wire_layout() {
        let frame = encode(b"hi").unwrap();
        assert_eq!(frame, [2, 0, 0, 0, b':', b'h', b'i', b',']);
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(b"").unwrap(), [0, 0, 0, 0, b':', b',']);
    }

    #[test]
    fn test_length_little_endian_byte_order() {
        let payload = vec![b'x'; 0x0102];
        let frame = encode(&payload).unwrap();
        assert_eq!(&frame[..LENGTH_SIZE], [0x02, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn test_encoded_len_is_exact() {
        for payload_len in [0, 1, 255, 256, 1000] {
            let payload = vec![0u8; payload_len];
            assert_eq!(encode(&payload).unwrap().len(), encoded_len(payload_len));
        }
    }

    #[test]
    fn test_roundtrip() {
        let payload = b"per:fect,lib:rary,";
        let frame = encode(payload).unwrap();
        assert_eq!(&decode_all(&frame).unwrap()[..], payload);
    }

    #[test]
    fn test_decode_truncated_prefix() {
        assert!(matches!(
            decode_all(&[2, 0]),
            Err(DecodeError::Truncated)
        ));
    }

    #[test]
    fn test_decode_truncated_payload() {
        assert!(matches!(
            decode_all(&[8, 0, 0, 0, b':', b'a', b'b']),
            Err(DecodeError::Truncated)
        ));
    }

    #[test]
    fn test_decode_max_prefix_short_stream() {
        // The prefix declares u32::MAX payload bytes and delivers none;
        // the decoder must diagnose truncation, not reserve that much.
        assert!(matches!(
            decode_all(&[0xff, 0xff, 0xff, 0xff, b':']),
            Err(DecodeError::Truncated)
        ));
    }

    #[test]
    fn test_decode_wrong_separator_reports_byte() {
        assert!(matches!(
            decode_all(&[2, 0, 0, 0, b';', b'h', b'i', b',']),
            Err(DecodeError::UnexpectedSeparator(b';'))
        ));
    }

    #[test]
    fn test_decode_wrong_terminator_reports_byte() {
        assert!(matches!(
            decode_all(&[2, 0, 0, 0, b':', b'h', b'i', b'!']),
            Err(DecodeError::UnexpectedTerminator(b'!'))
        ));
    }

    #[test]
    fn test_decode_consumes_exactly_one_frame() {
        let mut batch = Vec::new();
        encode_into(&mut batch, b"first").unwrap();
        encode_into(&mut batch, b"second").unwrap();

        let mut src = &batch[..];
        assert_eq!(&decode(&mut src).unwrap()[..], b"first");
        assert_eq!(&decode(&mut src).unwrap()[..], b"second");
        assert!(src.is_empty());
    }
}
