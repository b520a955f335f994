//! Generic buffered scanner driving any [`Splitter`] over a reader.

use crate::{
    buffer::ScanBuffer,
    config::ScanConfig,
    error::SegmentError,
    split::{Split, Splitter, WordSplitter},
};
use log::{debug, trace};
use std::{borrow::Cow, io::Read, ops::Range};

/// Consecutive zero-advance tokens tolerated before the split function is
/// declared stuck.
const MAX_EMPTY_TOKENS: usize = 100;

/// Pull tokens out of a reader with a split function.
///
/// ```
/// use std::io::Cursor;
/// use wordseg::Scanner;
///
/// let mut scanner = Scanner::words(Cursor::new("3.5 cats"));
/// let mut tokens = Vec::new();
/// while scanner.scan() {
///     tokens.push(scanner.text().into_owned());
/// }
/// assert!(scanner.err().is_none());
/// assert_eq!(tokens, ["3.5", " ", "cats"]);
/// ```
#[derive(Debug)]
pub struct Scanner<R, S> {
    buf: ScanBuffer<R>,
    splitter: S,
    // buffer span of the current token
    token: Option<Range<usize>>,
    empties: usize,
    err: Option<SegmentError>,
    done: bool,
}

impl<R: Read> Scanner<R, WordSplitter> {
    pub fn words(reader: R) -> Self {
        Self::new(reader, WordSplitter::default())
    }
}

impl<R: Read, S: Splitter> Scanner<R, S> {
    pub fn new(reader: R, splitter: S) -> Self {
        Self::with_config(reader, splitter, ScanConfig::default())
    }

    pub fn with_config(reader: R, splitter: S, config: ScanConfig) -> Self {
        Self {
            buf: ScanBuffer::new(reader, config),
            splitter,
            token: None,
            empties: 0,
            err: None,
            done: false,
        }
    }

    /// Advance to the next token. Returns `false` at end of input or after
    /// a terminal error; every later call also returns `false`.
    pub fn scan(&mut self) -> bool {
        if self.done {
            return false;
        }
        match self.advance() {
            Ok(true) => true,
            Ok(false) => {
                self.finish(None);
                false
            }
            Err(e) => {
                debug!("scanner stopped: {e}");
                self.finish(Some(e));
                false
            }
        }
    }

    // A failed fill may already have slid the buffer under the last token.
    fn finish(&mut self, err: Option<SegmentError>) {
        self.token = None;
        self.err = err;
        self.done = true;
    }

    fn advance(&mut self) -> Result<bool, SegmentError> {
        loop {
            let data = self.buf.data();
            let at_eof = self.buf.at_eof();
            let available = data.len();

            let found = match self.splitter.split(data, at_eof) {
                Ok(Split::Token { advance, token }) => {
                    if advance > available {
                        return Err(SegmentError::InvalidAdvance { advance, available });
                    }
                    let Some(range) = subslice_range(data, token) else {
                        return Err(SegmentError::InvalidAdvance { advance, available });
                    };
                    Some((advance, range))
                }
                Ok(Split::NeedMore) if at_eof => {
                    if available == 0 {
                        return Ok(false);
                    }
                    return Err(SegmentError::Stalled {
                        remaining: available,
                    });
                }
                Ok(Split::NeedMore) => None,
                Ok(Split::End) => return Ok(false),
                Err(e) => return Err(e.rebase(self.buf.position())),
            };

            match found {
                Some((advance, range)) => {
                    if advance == 0 {
                        self.empties += 1;
                        if self.empties > MAX_EMPTY_TOKENS {
                            return Err(SegmentError::Stalled {
                                remaining: available,
                            });
                        }
                    } else {
                        self.empties = 0;
                    }
                    let at = self.buf.consume(advance);
                    self.token = Some(at + range.start..at + range.end);
                    trace!("token {:?} at byte {}", self.text(), self.offset());
                    return Ok(true);
                }
                None => self.buf.fill()?,
            }
        }
    }

    /// Bytes of the current token. Valid until the next [`Self::scan`];
    /// empty once the scanner has stopped.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        match &self.token {
            Some(span) => self.buf.slice(span.start, span.end),
            None => &[],
        }
    }

    /// The current token as text; invalid UTF-8 is replaced, not rejected.
    #[inline]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.bytes())
    }

    /// Absolute input offset of the current token, or of the first
    /// unconsumed byte when there is none.
    #[inline]
    pub fn offset(&self) -> usize {
        match &self.token {
            Some(span) => self.buf.absolute(span.start),
            None => self.buf.position(),
        }
    }

    pub fn err(&self) -> Option<&SegmentError> {
        self.err.as_ref()
    }
}

/// Position of `inner` within `outer`, if `inner` is a subslice of it.
fn subslice_range(outer: &[u8], inner: &[u8]) -> Option<Range<usize>> {
    let start = (inner.as_ptr() as usize).checked_sub(outer.as_ptr() as usize)?;
    let end = start.checked_add(inner.len())?;
    (end <= outer.len()).then_some(start..end)
}
