//! The single transition loop every scanning surface is built on.
//!
//! [`next_segment`] looks at the front of a buffer and either measures the
//! next complete segment or asks for more bytes. It holds no state between
//! calls: the open run lives on the stack and is rebuilt on retry, so the
//! pull scanner, the split function and the in-memory iterator all make
//! identical decisions for identical bytes.

use crate::{
    category::{Category, Classifier},
    error::DecodeError,
    rules::{Join, bridges, join},
    segment::{CategoryFlags, SegmentType, resolve},
    utf8::{Decoded, decode},
};

/// Result of one scan step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The next `len` bytes form a complete segment.
    Segment { len: usize, kind: SegmentType },
    /// The outcome depends on bytes not yet in the buffer.
    NeedMore,
    /// Nothing left: the buffer is empty and the input is exhausted.
    End,
}

/// Open run: bytes `[0, end)` of the buffer, last non-mark category seen,
/// and the categories observed so far.
#[derive(Debug, Clone, Copy)]
struct Run {
    end: usize,
    last: Category,
    flags: CategoryFlags,
}

impl Run {
    #[inline(always)]
    fn open(category: Category, len: usize) -> Self {
        let mut flags = CategoryFlags::empty();
        flags.observe(category);
        Self {
            end: len,
            last: category,
            flags,
        }
    }

    #[inline(always)]
    fn push(&mut self, category: Category, len: usize) {
        self.end += len;
        if category != Category::Extend {
            self.last = category;
        }
        self.flags.observe(category);
    }

    #[inline(always)]
    fn close(self) -> Step {
        Step::Segment {
            len: self.end,
            kind: resolve(self.flags),
        }
    }
}

/// Decode the code point at the front of `bytes` and classify it.
///
/// `Ok(None)` means the buffer ran out (empty or mid-sequence).
#[inline(always)]
fn peek<C: Classifier + ?Sized>(
    bytes: &[u8],
    at_eof: bool,
    classifier: &C,
) -> Result<Option<(Category, usize)>, DecodeError> {
    match decode(bytes, at_eof)? {
        Decoded::Char(c, len) => Ok(Some((classifier.category(c), len))),
        Decoded::Incomplete | Decoded::Empty => Ok(None),
    }
}

/// Measure the segment at the front of `data`.
///
/// Returns [`Step::NeedMore`] whenever the decision depends on bytes past the
/// end of `data` and `at_eof` is false; it never invents a boundary at the
/// buffer edge. A decode failure at the front of `data` is an error. A
/// failure *after* an open run closes that run first, so the error surfaces
/// on the following call at the offending byte.
pub fn next_segment<C: Classifier + ?Sized>(
    data: &[u8],
    at_eof: bool,
    classifier: &C,
) -> Result<Step, DecodeError> {
    let Some((first, len)) = peek(data, at_eof, classifier)? else {
        return Ok(if data.is_empty() && at_eof {
            Step::End
        } else {
            Step::NeedMore
        });
    };

    let mut run = Run::open(first, len);
    if first.is_standalone() {
        return Ok(run.close());
    }

    loop {
        let rest = &data[run.end..];
        let (next, next_len) = match peek(rest, at_eof, classifier) {
            Ok(Some(found)) => found,
            Ok(None) if at_eof => return Ok(run.close()),
            Ok(None) => return Ok(Step::NeedMore),
            Err(_) => return Ok(run.close()),
        };

        match join(run.last, next) {
            Join::Extend => run.push(next, next_len),
            Join::Break => return Ok(run.close()),
            Join::Lookahead => match peek(&rest[next_len..], at_eof, classifier) {
                Ok(Some((after, after_len))) if bridges(run.last, next, after) => {
                    run.push(next, next_len);
                    run.push(after, after_len);
                }
                Ok(None) if !at_eof => return Ok(Step::NeedMore),
                _ => return Ok(run.close()),
            },
        }
    }
}
