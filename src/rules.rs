//! Boundary rules: does the next code point extend the open run?
//!
//! Rules, highest precedence first:
//!
//! | # | Rule | Effect |
//! |---|------|--------|
//! | 1 | Ideographic singleton | an `Ideographic` code point is always its own run |
//! | 2 | Combining mark | `(Letter \| Digit \| Katakana) × Extend` |
//! | 3 | Katakana run | `Katakana × Katakana` |
//! | 4 | Word run | `(Letter \| Digit) × (Letter \| Digit)` |
//! | 5 | Mid-word connector | `Letter × (MidLetter \| MidNumLet) × Letter`, `Digit × (MidNum \| MidNumLet) × Digit` |
//! | 6 | Newline / Other | never joins either side |
//!
//! An absorbed `Extend` mark is skipped when the next decision looks back at
//! the run, so `prev` is always the last non-mark code point.
//!
//! Rule 5 needs one code point of lookahead. [`join`] reports that as
//! [`Join::Lookahead`] and the caller settles it with [`bridges`] once the
//! code point after the connector is known.

use crate::category::Category::{
    self, Digit, Extend, Ideographic, Katakana, Letter, MidLetter, MidNum, MidNumLet,
};

/// Decision for the code point following an open run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Join {
    /// Extend the run.
    Extend,
    /// Close the run before this code point.
    Break,
    /// Connector: extend only if [`bridges`] holds for the code point after it.
    Lookahead,
}

/// Decide whether `next` continues a run whose last code point is `prev`.
#[inline(always)]
pub fn join(prev: Category, next: Category) -> Join {
    match (prev, next) {
        (Ideographic, _) | (_, Ideographic) => Join::Break,
        (Letter | Digit | Katakana, Extend) => Join::Extend,
        (Katakana, Katakana) => Join::Extend,
        (Letter | Digit, Letter | Digit) => Join::Extend,
        (Letter, MidLetter | MidNumLet) | (Digit, MidNum | MidNumLet) => Join::Lookahead,
        _ => Join::Break,
    }
}

/// Whether `connector`, preceded by `prev` and followed by `after`, stays
/// inside the word.
#[inline(always)]
pub fn bridges(prev: Category, connector: Category, after: Category) -> bool {
    matches!(
        (prev, connector, after),
        (Letter, MidLetter | MidNumLet, Letter) | (Digit, MidNum | MidNumLet, Digit)
    )
}
