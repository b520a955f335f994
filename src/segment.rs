//! Finalized segments and the type resolver.

use crate::category::Category;
use std::{fmt, ops::Range};

/// Coarse lexical type of an emitted segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum SegmentType {
    /// Whitespace, punctuation, newlines and anything else that is not a word.
    #[default]
    None,
    Letter,
    Number,
    /// A single Han / Hiragana code point, or a Katakana run.
    Ideographic,
}

impl SegmentType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Letter => "LETTER",
            Self::Number => "NUMBER",
            Self::Ideographic => "IDEO",
        }
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of categories observed in a run. Only presence matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryFlags(u8);

impl CategoryFlags {
    const LETTER: u8 = 1;
    const DIGIT: u8 = 1 << 1;
    const KATAKANA: u8 = 1 << 2;
    const IDEOGRAPHIC: u8 = 1 << 3;

    #[inline(always)]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline(always)]
    pub fn observe(&mut self, category: Category) {
        self.0 |= match category {
            Category::Letter => Self::LETTER,
            Category::Digit => Self::DIGIT,
            Category::Katakana => Self::KATAKANA,
            Category::Ideographic => Self::IDEOGRAPHIC,
            _ => 0,
        };
    }

    #[inline(always)]
    pub const fn has_letter(self) -> bool {
        self.0 & Self::LETTER != 0
    }

    #[inline(always)]
    pub const fn has_digit(self) -> bool {
        self.0 & Self::DIGIT != 0
    }

    #[inline(always)]
    pub const fn has_ideographic(self) -> bool {
        self.0 & (Self::KATAKANA | Self::IDEOGRAPHIC) != 0
    }
}

impl FromIterator<Category> for CategoryFlags {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut flags = Self::empty();
        for category in iter {
            flags.observe(category);
        }
        flags
    }
}

/// Resolve the segment type of a closed run: Letter beats Number beats
/// Ideographic beats None.
#[inline]
pub const fn resolve(flags: CategoryFlags) -> SegmentType {
    if flags.has_letter() {
        SegmentType::Letter
    } else if flags.has_digit() {
        SegmentType::Number
    } else if flags.has_ideographic() {
        SegmentType::Ideographic
    } else {
        SegmentType::None
    }
}

/// A typed byte span of the input. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub kind: SegmentType,
}

impl Segment {
    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The segment's bytes within the input it was produced from.
    ///
    /// Returns `None` if `input` is shorter than the span.
    #[inline]
    pub fn bytes_in<'a>(&self, input: &'a [u8]) -> Option<&'a [u8]> {
        input.get(self.range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Category::*;

    #[test]
    fn resolve_precedence() {
        let cases: &[(&[Category], SegmentType)] = &[
            (&[Letter], SegmentType::Letter),
            (&[Letter, Digit, MidNumLet], SegmentType::Letter),
            (&[Digit, Letter], SegmentType::Letter),
            (&[Digit, MidNumLet, Digit], SegmentType::Number),
            (&[Katakana, Katakana], SegmentType::Ideographic),
            (&[Ideographic], SegmentType::Ideographic),
            (&[Other], SegmentType::None),
            (&[Newline], SegmentType::None),
            (&[MidNum], SegmentType::None),
            (&[], SegmentType::None),
        ];
        for (categories, expected) in cases {
            let flags: CategoryFlags = categories.iter().copied().collect();
            assert_eq!(resolve(flags), *expected, "{categories:?}");
            // pure: same input, same answer
            assert_eq!(resolve(flags), resolve(flags));
        }
    }

    #[test]
    fn segment_helpers() {
        let input = b"Now is";
        let seg = Segment {
            start: 4,
            end: 6,
            kind: SegmentType::Letter,
        };
        assert_eq!(seg.len(), 2);
        assert!(!seg.is_empty());
        assert_eq!(seg.bytes_in(input), Some(&b"is"[..]));
        assert_eq!(seg.bytes_in(b"Now"), None);
    }

    #[test]
    fn type_display() {
        assert_eq!(SegmentType::Letter.to_string(), "LETTER");
        assert_eq!(SegmentType::Ideographic.to_string(), "IDEO");
        assert_eq!(SegmentType::default(), SegmentType::None);
    }
}
