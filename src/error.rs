use std::io;
use thiserror::Error;

/// A byte sequence that cannot be decoded as UTF-8.
///
/// Offsets are relative to the buffer handed to the decoder; the pull
/// scanner rebases them onto the absolute input position before
/// surfacing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid UTF-8 sequence at byte {offset}")]
    Invalid { offset: usize },

    #[error("incomplete UTF-8 sequence at end of input, byte {offset}")]
    Truncated { offset: usize },
}

impl DecodeError {
    #[inline]
    pub fn offset(&self) -> usize {
        match *self {
            Self::Invalid { offset } | Self::Truncated { offset } => offset,
        }
    }

    #[inline]
    pub(crate) fn rebase(self, base: usize) -> Self {
        match self {
            Self::Invalid { offset } => Self::Invalid {
                offset: offset + base,
            },
            Self::Truncated { offset } => Self::Truncated {
                offset: offset + base,
            },
        }
    }
}

/// Public error type for every scanning surface. All variants are terminal.
#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("source read failed: {0}")]
    Source(#[from] io::Error),

    #[error("segment exceeds maximum buffer size of {max} bytes")]
    TooLong { max: usize },

    #[error("split function advanced {advance} bytes but only {available} were buffered")]
    InvalidAdvance { advance: usize, available: usize },

    #[error("split function made no progress at end of input ({remaining} bytes left)")]
    Stalled { remaining: usize },
}

impl SegmentError {
    pub(crate) fn rebase(self, base: usize) -> Self {
        match self {
            Self::Decode(e) => Self::Decode(e.rebase(base)),
            other => other,
        }
    }
}
