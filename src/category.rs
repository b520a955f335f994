//! Per-code-point word-break categories and the classifier seam.
//!
//! The boundary engine never looks at characters directly: it asks a
//! [`Classifier`] for each decoded code point's [`Category`] and works on
//! those alone. Any `Fn(char) -> Category` is a classifier, which keeps
//! the engine testable with small fake tables.

use crate::unicode::{PUNCT_TABLE, is_ideographic, is_katakana, is_numeric_symbol};
use unicode_normalization::char::is_combining_mark;

/// Word-break category of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Category {
    /// Alphabetic, including Hangul and scripts without their own rule.
    Letter,
    /// Decimal numeral.
    Digit,
    /// Punctuation valid only between two letters (`:`, `·`).
    MidLetter,
    /// Punctuation valid between two letters or two digits (`.`, `'`).
    MidNumLet,
    /// Punctuation valid only between two digits (`,`, `;`).
    MidNum,
    Katakana,
    /// Han, Hiragana and other scripts segmented one code point at a time.
    Ideographic,
    Newline,
    /// Combining mark. Rides along with the letter, digit or katakana before
    /// it and is invisible to the rules that follow.
    Extend,
    /// Everything else, spaces included.
    Other,
}

impl Category {
    /// A run opened by this category closes right after it, whatever follows.
    #[inline(always)]
    pub const fn is_standalone(self) -> bool {
        !matches!(self, Self::Letter | Self::Digit | Self::Katakana)
    }
}

/// Maps a code point to its [`Category`]. Must be total and deterministic.
pub trait Classifier {
    fn category(&self, c: char) -> Category;
}

impl<F> Classifier for F
where
    F: Fn(char) -> Category,
{
    #[inline(always)]
    fn category(&self, c: char) -> Category {
        self(c)
    }
}

/// Default classifier backed by the block tables in [`crate::unicode`] and
/// the standard library's alphabetic / numeric properties.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeClassifier;

impl Classifier for UnicodeClassifier {
    #[inline]
    fn category(&self, c: char) -> Category {
        if c.is_ascii() {
            return match c {
                'a'..='z' | 'A'..='Z' => Category::Letter,
                '0'..='9' => Category::Digit,
                _ => PUNCT_TABLE.get(&c).copied().unwrap_or(Category::Other),
            };
        }

        if let Some(&category) = PUNCT_TABLE.get(&c) {
            return category;
        }
        // Han and kana are alphabetic too, so the block checks go first.
        if is_katakana(c) {
            return Category::Katakana;
        }
        if is_ideographic(c) {
            return Category::Ideographic;
        }
        if c.is_alphabetic() {
            return Category::Letter;
        }
        // Spacing vowel signs are alphabetic and stay Letters; the rest of
        // the marks (accents, viramas, nuktas) extend.
        if is_combining_mark(c) {
            return Category::Extend;
        }
        if c.is_numeric() && !is_numeric_symbol(c) {
            return Category::Digit;
        }
        Category::Other
    }
}
