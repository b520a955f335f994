//! UTF-8 cursor: decode one code point from the front of a buffer.
//!
//! The cursor distinguishes a sequence that is *cut off* by the end of the
//! buffer from one that is *malformed*. The former is only an error once the
//! caller says no more bytes will arrive; until then it is reported as
//! [`Decoded::Incomplete`] so the caller can refill and retry.

use crate::error::DecodeError;

/// Outcome of decoding at the front of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// A complete code point and its encoded length in bytes.
    Char(char, usize),
    /// The buffer ends inside a multi-byte sequence.
    Incomplete,
    /// The buffer is empty.
    Empty,
}

// Expected sequence length for a lead byte; 0 marks a byte that can never
// start a sequence (continuation bytes, overlong leads C0/C1, F5..FF).
#[inline(always)]
const fn sequence_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Decode the code point starting at `bytes[0]`.
///
/// With `at_eof` set, a truncated trailing sequence becomes
/// [`DecodeError::Truncated`]; malformed sequences are always
/// [`DecodeError::Invalid`]. Offsets in the error are `0`, the position of
/// the offending lead byte within `bytes`.
#[inline]
pub fn decode(bytes: &[u8], at_eof: bool) -> Result<Decoded, DecodeError> {
    let Some(&lead) = bytes.first() else {
        return Ok(Decoded::Empty);
    };
    if lead < 0x80 {
        return Ok(Decoded::Char(lead as char, 1));
    }

    let width = sequence_len(lead);
    if width == 0 {
        return Err(DecodeError::Invalid { offset: 0 });
    }

    let available = &bytes[..width.min(bytes.len())];
    match std::str::from_utf8(available) {
        Ok(s) => match s.chars().next() {
            Some(c) if available.len() == width => Ok(Decoded::Char(c, width)),
            _ => Err(DecodeError::Invalid { offset: 0 }),
        },
        // `error_len() == None` means the input ended mid-sequence.
        Err(e) if e.error_len().is_none() => {
            if at_eof {
                Err(DecodeError::Truncated { offset: 0 })
            } else {
                Ok(Decoded::Incomplete)
            }
        }
        Err(_) => Err(DecodeError::Invalid { offset: 0 }),
    }
}

/// Validate segment bytes as text, zero-copy.
#[cfg(feature = "simd")]
#[inline]
pub fn validate(bytes: &[u8]) -> Option<&str> {
    simdutf8::basic::from_utf8(bytes).ok()
}

/// Validate segment bytes as text, zero-copy.
#[cfg(not(feature = "simd"))]
#[inline]
pub fn validate(bytes: &[u8]) -> Option<&str> {
    std::str::from_utf8(bytes).ok()
}
