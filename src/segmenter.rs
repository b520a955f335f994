//! Typed segmentation: the pull scanner over a reader and the zero-copy
//! iterator over an in-memory slice.

use crate::{
    buffer::ScanBuffer,
    category::{Classifier, UnicodeClassifier},
    config::ScanConfig,
    error::SegmentError,
    scan::{Step, next_segment},
    segment::{Segment, SegmentType},
    utf8,
};
use log::{debug, trace};
use std::{borrow::Cow, io::Read, iter::FusedIterator};

/// Pull-based word segmenter bound to a reader.
///
/// Each successful [`segment`](Self::segment) exposes one segment through
/// [`bytes`](Self::bytes), [`text`](Self::text), [`kind`](Self::kind) and
/// [`current`](Self::current). The first read or decode failure is latched:
/// `segment` keeps returning `false` and [`err`](Self::err) keeps returning
/// that error.
///
/// ```
/// use wordseg::{SegmentType, WordSegmenter};
///
/// let mut segmenter = WordSegmenter::new("cat3.5 你好".as_bytes());
/// let mut out = Vec::new();
/// while segmenter.segment() {
///     out.push((segmenter.text().into_owned(), segmenter.kind()));
/// }
/// assert!(segmenter.err().is_none());
/// assert_eq!(
///     out,
///     [
///         ("cat3.5".to_string(), SegmentType::Letter),
///         (" ".to_string(), SegmentType::None),
///         ("你".to_string(), SegmentType::Ideographic),
///         ("好".to_string(), SegmentType::Ideographic),
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct WordSegmenter<R, C = UnicodeClassifier> {
    buf: ScanBuffer<R>,
    classifier: C,
    // buffer index of the current segment's first byte, and the segment itself
    current: Option<(usize, Segment)>,
    err: Option<SegmentError>,
    done: bool,
}

impl<R: Read> WordSegmenter<R> {
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ScanConfig::default())
    }

    pub fn with_config(reader: R, config: ScanConfig) -> Self {
        Self::with_classifier(reader, UnicodeClassifier, config)
    }
}

impl<R: Read, C: Classifier> WordSegmenter<R, C> {
    pub fn with_classifier(reader: R, classifier: C, config: ScanConfig) -> Self {
        Self {
            buf: ScanBuffer::new(reader, config),
            classifier,
            current: None,
            err: None,
            done: false,
        }
    }

    /// Advance to the next segment. Returns `false` at end of input or once
    /// a terminal error has been recorded.
    pub fn segment(&mut self) -> bool {
        if self.done {
            return false;
        }
        match self.advance() {
            Ok(Some(found)) => {
                self.current = Some(found);
                true
            }
            Ok(None) => {
                self.finish(None);
                false
            }
            Err(e) => {
                debug!("segmenter stopped: {e}");
                self.finish(Some(e));
                false
            }
        }
    }

    fn advance(&mut self) -> Result<Option<(usize, Segment)>, SegmentError> {
        loop {
            let step = next_segment(self.buf.data(), self.buf.at_eof(), &self.classifier)
                .map_err(|e| e.rebase(self.buf.position()))?;
            match step {
                Step::Segment { len, kind } => {
                    let at = self.buf.consume(len);
                    let start = self.buf.absolute(at);
                    let segment = Segment {
                        start,
                        end: start + len,
                        kind,
                    };
                    trace!("{kind} segment at {}..{}", segment.start, segment.end);
                    return Ok(Some((at, segment)));
                }
                Step::NeedMore => self.buf.fill()?,
                Step::End => return Ok(None),
            }
        }
    }

    fn finish(&mut self, err: Option<SegmentError>) {
        self.current = None;
        self.err = err;
        self.done = true;
    }

    /// Raw bytes of the current segment; empty before the first segment and
    /// after the scanner stopped.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        match self.current {
            Some((at, segment)) => self.buf.slice(at, at + segment.len()),
            None => &[],
        }
    }

    /// The current segment as text, borrowed from the scan buffer.
    #[inline]
    pub fn text(&self) -> Cow<'_, str> {
        let bytes = self.bytes();
        match utf8::validate(bytes) {
            Some(text) => Cow::Borrowed(text),
            None => String::from_utf8_lossy(bytes),
        }
    }

    /// Type of the current segment, [`SegmentType::None`] when there is none.
    #[inline]
    pub fn kind(&self) -> SegmentType {
        self.current.map(|(_, segment)| segment.kind).unwrap_or_default()
    }

    /// Absolute span and type of the current segment.
    #[inline]
    pub fn current(&self) -> Option<Segment> {
        self.current.map(|(_, segment)| segment)
    }

    pub fn err(&self) -> Option<&SegmentError> {
        self.err.as_ref()
    }
}

/// Zero-copy segment iterator over an in-memory input.
///
/// Yields `Err` once on malformed UTF-8 and then stops.
#[derive(Debug, Clone)]
pub struct Segments<'a, C = UnicodeClassifier> {
    input: &'a [u8],
    pos: usize,
    classifier: C,
    done: bool,
}

impl<'a> Segments<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_classifier(input, UnicodeClassifier)
    }
}

impl<'a, C: Classifier> Segments<'a, C> {
    pub fn with_classifier(input: &'a [u8], classifier: C) -> Self {
        Self {
            input,
            pos: 0,
            classifier,
            done: false,
        }
    }

    /// The input being segmented.
    pub fn input(&self) -> &'a [u8] {
        self.input
    }
}

impl<C: Classifier> Iterator for Segments<'_, C> {
    type Item = Result<Segment, SegmentError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let rest = &self.input[self.pos..];
        match next_segment(rest, true, &self.classifier) {
            Ok(Step::Segment { len, kind }) => {
                let start = self.pos;
                self.pos += len;
                Some(Ok(Segment {
                    start,
                    end: self.pos,
                    kind,
                }))
            }
            // at_eof is set, so the engine never asks for more
            Ok(Step::End | Step::NeedMore) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(SegmentError::Decode(e.rebase(self.pos))))
            }
        }
    }
}

impl<C: Classifier> FusedIterator for Segments<'_, C> {}

/// Segment a complete in-memory input.
pub fn segment_words(input: &[u8]) -> Result<Vec<Segment>, SegmentError> {
    Segments::new(input).collect()
}
