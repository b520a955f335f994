//! Unicode word-boundary segmentation over byte streams.
//!
//! Input bytes are cut into contiguous, typed [`Segment`]s: runs of letters
//! and digits, single Han / Hiragana code points, Katakana runs, and
//! one-code-point segments for everything else. The same boundary engine
//! backs three surfaces:
//!
//! * [`WordSegmenter`] – pull scanner over any [`std::io::Read`], with types;
//! * [`split_words`] / [`Scanner`] – split-function form for chunked scanning;
//! * [`Segments`] / [`segment_words`] – zero-copy iteration over a slice.

pub mod buffer;
pub mod category;
pub mod config;
pub mod error;
pub mod rules;
pub mod scan;
pub mod scanner;
pub mod segment;
pub mod segmenter;
pub mod split;
pub mod unicode;
pub mod utf8;

pub use category::{Category, Classifier, UnicodeClassifier};
pub use config::{ScanConfig, ScanConfigBuilder};
pub use error::{DecodeError, SegmentError};
pub use scanner::Scanner;
pub use segment::{Segment, SegmentType};
pub use segmenter::{Segments, WordSegmenter, segment_words};
pub use split::{Split, Splitter, WordSplitter, split_lines, split_words};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
