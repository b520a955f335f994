//! Growable read buffer shared by the streaming scanners.

use crate::{config::ScanConfig, error::SegmentError};
use log::debug;
use std::io::{self, ErrorKind, Read};

/// Window over a reader. Unconsumed bytes live in `buf[start..end]`;
/// `base` is the absolute input offset of `buf[0]`.
#[derive(Debug)]
pub struct ScanBuffer<R> {
    reader: R,
    buf: Vec<u8>,
    start: usize,
    end: usize,
    base: usize,
    eof: bool,
    max: usize,
}

impl<R: Read> ScanBuffer<R> {
    pub fn new(reader: R, config: ScanConfig) -> Self {
        Self {
            reader,
            buf: vec![0; config.initial_capacity],
            start: 0,
            end: 0,
            base: 0,
            eof: false,
            max: config.max_segment_size,
        }
    }

    /// Unconsumed bytes.
    #[inline(always)]
    pub fn data(&self) -> &[u8] {
        &self.buf[self.start..self.end]
    }

    #[inline(always)]
    pub fn at_eof(&self) -> bool {
        self.eof
    }

    /// Absolute input offset of the first unconsumed byte.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.base + self.start
    }

    /// Absolute input offset of a buffer index.
    #[inline(always)]
    pub fn absolute(&self, index: usize) -> usize {
        self.base + index
    }

    /// Mark `n` bytes as consumed and return the buffer index they started at.
    /// Consumed bytes stay addressable through [`Self::slice`] until the next
    /// [`Self::fill`].
    #[inline]
    pub fn consume(&mut self, n: usize) -> usize {
        let at = self.start;
        self.start = (self.start + n).min(self.end);
        at
    }

    #[inline(always)]
    pub fn slice(&self, from: usize, to: usize) -> &[u8] {
        &self.buf[from..to]
    }

    /// Pull more bytes from the reader: slide unconsumed bytes to the front,
    /// grow when the buffer is full, then perform one read. A zero-byte read
    /// marks end of input.
    ///
    /// The buffer may grow [`ScanConfig::MIN_BUFFER`] bytes past `max` so a
    /// segment of exactly `max` bytes still has room for its lookahead.
    pub fn fill(&mut self) -> Result<(), SegmentError> {
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.base += self.start;
            self.start = 0;
        }

        if self.end == self.buf.len() {
            let limit = self.max.saturating_add(ScanConfig::MIN_BUFFER);
            if self.buf.len() >= limit {
                return Err(SegmentError::TooLong { max: self.max });
            }
            let grown = self.buf.len().saturating_mul(2).clamp(1, limit);
            debug!("growing scan buffer {} -> {grown} bytes", self.buf.len());
            self.buf.resize(grown, 0);
        }

        loop {
            match self.reader.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    debug!("source exhausted at byte {}", self.base + self.end);
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) if n > self.buf.len() - self.end => {
                    return Err(SegmentError::Source(io::Error::new(
                        ErrorKind::InvalidData,
                        format!(
                            "reader returned {n} bytes into a {}-byte buffer",
                            self.buf.len() - self.end
                        ),
                    )));
                }
                Ok(n) => {
                    self.end += n;
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}
