//! Split functions: the stateless, buffer-in / token-out form of the
//! segmenter, for composition with chunked scanners such as [`crate::Scanner`].
//!
//! A split function sees the unconsumed bytes and whether the input is
//! exhausted, and answers with one of three things:
//!
//! * [`Split::Token`] – consume `advance` bytes and yield `token`;
//! * [`Split::NeedMore`] – cannot decide yet, retry with more bytes
//!   (only legal while `at_eof` is false);
//! * [`Split::End`] – nothing left to yield.

use crate::{
    category::{Classifier, UnicodeClassifier},
    error::SegmentError,
    scan::{Step, next_segment},
};
use memchr::memchr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split<'a> {
    Token { advance: usize, token: &'a [u8] },
    NeedMore,
    End,
}

pub trait Splitter {
    fn split<'a>(&mut self, data: &'a [u8], at_eof: bool) -> Result<Split<'a>, SegmentError>;
}

impl<F> Splitter for F
where
    F: for<'a> FnMut(&'a [u8], bool) -> Result<Split<'a>, SegmentError>,
{
    #[inline(always)]
    fn split<'a>(&mut self, data: &'a [u8], at_eof: bool) -> Result<Split<'a>, SegmentError> {
        self(data, at_eof)
    }
}

/// Word split function with an injected classifier. Makes exactly the
/// boundary decisions of [`crate::WordSegmenter`] but drops the type.
#[derive(Debug, Clone, Copy)]
pub struct WordSplitter<C = UnicodeClassifier> {
    classifier: C,
}

impl Default for WordSplitter {
    fn default() -> Self {
        Self::new(UnicodeClassifier)
    }
}

impl<C: Classifier> WordSplitter<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }
}

impl<C: Classifier> Splitter for WordSplitter<C> {
    #[inline]
    fn split<'a>(&mut self, data: &'a [u8], at_eof: bool) -> Result<Split<'a>, SegmentError> {
        split_words_with(data, at_eof, &self.classifier)
    }
}

/// Split on word boundaries using the default Unicode classifier.
#[inline]
pub fn split_words(data: &[u8], at_eof: bool) -> Result<Split<'_>, SegmentError> {
    split_words_with(data, at_eof, &UnicodeClassifier)
}

#[inline]
pub fn split_words_with<'a, C: Classifier + ?Sized>(
    data: &'a [u8],
    at_eof: bool,
    classifier: &C,
) -> Result<Split<'a>, SegmentError> {
    match next_segment(data, at_eof, classifier)? {
        Step::Segment { len, .. } => Ok(Split::Token {
            advance: len,
            token: &data[..len],
        }),
        Step::NeedMore => Ok(Split::NeedMore),
        Step::End => Ok(Split::End),
    }
}

/// Split into lines, dropping the `\n` or `\r\n` terminator. A final line
/// without a terminator is still yielded.
pub fn split_lines(data: &[u8], at_eof: bool) -> Result<Split<'_>, SegmentError> {
    if let Some(i) = memchr(b'\n', data) {
        return Ok(Split::Token {
            advance: i + 1,
            token: drop_cr(&data[..i]),
        });
    }
    if !at_eof {
        return Ok(Split::NeedMore);
    }
    if data.is_empty() {
        return Ok(Split::End);
    }
    Ok(Split::Token {
        advance: data.len(),
        token: drop_cr(data),
    })
}

#[inline(always)]
fn drop_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{category::Category, error::DecodeError};

    fn token(advance: usize, token: &[u8]) -> Split<'_> {
        Split::Token { advance, token }
    }

    #[test]
    fn split_words_yields_one_segment_per_call() {
        let data = b"Now is";
        assert_eq!(split_words(data, false).unwrap(), token(3, b"Now"));
        assert_eq!(split_words(&data[3..], false).unwrap(), token(1, b" "));
        assert_eq!(split_words(&data[4..], false).unwrap(), Split::NeedMore);
        assert_eq!(split_words(&data[4..], true).unwrap(), token(2, b"is"));
        assert_eq!(split_words(&data[6..], true).unwrap(), Split::End);
    }

    #[test]
    fn split_words_reports_decode_errors() {
        assert!(matches!(
            split_words(b"\xC3", true),
            Err(SegmentError::Decode(DecodeError::Truncated { offset: 0 }))
        ));
        assert_eq!(split_words(b"\xC3", false).unwrap(), Split::NeedMore);
    }

    #[test]
    fn word_splitter_uses_its_classifier() {
        let mut splitter = WordSplitter::new(|c: char| {
            if c == '#' {
                Category::Letter
            } else {
                Category::Other
            }
        });
        assert_eq!(splitter.split(b"##a", true).unwrap(), token(2, b"##"));
    }

    #[test]
    fn default_word_splitter_matches_split_words() {
        let mut splitter: WordSplitter = WordSplitter::default();
        let data = "don't 3.5 サッカー".as_bytes();
        let mut rest = data;
        while let Split::Token { advance, token } = splitter.split(rest, true).unwrap() {
            assert_eq!(split_words(rest, true).unwrap(), Split::Token { advance, token });
            rest = &rest[advance..];
        }
        assert!(rest.is_empty());
    }

    #[test]
    fn lines() {
        assert_eq!(split_lines(b"one\r\ntwo", false).unwrap(), token(5, b"one"));
        assert_eq!(split_lines(b"two", false).unwrap(), Split::NeedMore);
        assert_eq!(split_lines(b"two", true).unwrap(), token(3, b"two"));
        assert_eq!(split_lines(b"\n", true).unwrap(), token(1, b""));
        assert_eq!(split_lines(b"", true).unwrap(), Split::End);
    }
}
