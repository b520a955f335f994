// Block-range predicates and the punctuation table behind `UnicodeClassifier`.
// Everything here is a pure function of the code point.

use crate::category::Category;
use phf::{Map, phf_map};

/// Punctuation that can sit inside a word or number, plus the line
/// terminators. Anything not listed falls through to the range checks.
pub static PUNCT_TABLE: Map<char, Category> = phf_map! {
    // MidNumLet: valid between two letters or two digits
    '.' => Category::MidNumLet,
    '\'' => Category::MidNumLet,
    '\u{2018}' => Category::MidNumLet, // LEFT SINGLE QUOTATION MARK
    '\u{2019}' => Category::MidNumLet, // RIGHT SINGLE QUOTATION MARK
    '\u{2024}' => Category::MidNumLet, // ONE DOT LEADER
    '\u{FE52}' => Category::MidNumLet, // SMALL FULL STOP
    '\u{FF07}' => Category::MidNumLet, // FULLWIDTH APOSTROPHE
    '\u{FF0E}' => Category::MidNumLet, // FULLWIDTH FULL STOP

    // MidLetter: valid between two letters only
    ':' => Category::MidLetter,
    '\u{00B7}' => Category::MidLetter, // MIDDLE DOT
    '\u{0387}' => Category::MidLetter, // GREEK ANO TELEIA
    '\u{05F4}' => Category::MidLetter, // HEBREW PUNCTUATION GERSHAYIM
    '\u{2027}' => Category::MidLetter, // HYPHENATION POINT
    '\u{FE13}' => Category::MidLetter, // PRESENTATION FORM FOR VERTICAL COLON
    '\u{FE55}' => Category::MidLetter, // SMALL COLON
    '\u{FF1A}' => Category::MidLetter, // FULLWIDTH COLON

    // MidNum: valid between two digits only
    ',' => Category::MidNum,
    ';' => Category::MidNum,
    '\u{037E}' => Category::MidNum, // GREEK QUESTION MARK
    '\u{0589}' => Category::MidNum, // ARMENIAN FULL STOP
    '\u{060C}' => Category::MidNum, // ARABIC COMMA
    '\u{060D}' => Category::MidNum, // ARABIC DATE SEPARATOR
    '\u{066C}' => Category::MidNum, // ARABIC THOUSANDS SEPARATOR
    '\u{07F8}' => Category::MidNum, // NKO COMMA
    '\u{2044}' => Category::MidNum, // FRACTION SLASH
    '\u{FE10}' => Category::MidNum, // PRESENTATION FORM FOR VERTICAL COMMA
    '\u{FE14}' => Category::MidNum, // PRESENTATION FORM FOR VERTICAL SEMICOLON
    '\u{FE50}' => Category::MidNum, // SMALL COMMA
    '\u{FE54}' => Category::MidNum, // SMALL SEMICOLON
    '\u{FF0C}' => Category::MidNum, // FULLWIDTH COMMA
    '\u{FF1B}' => Category::MidNum, // FULLWIDTH SEMICOLON

    '\n' => Category::Newline,
    '\r' => Category::Newline,
    '\u{000B}' => Category::Newline, // LINE TABULATION
    '\u{000C}' => Category::Newline, // FORM FEED
    '\u{0085}' => Category::Newline, // NEXT LINE (NEL)
    '\u{2028}' => Category::Newline, // LINE SEPARATOR
    '\u{2029}' => Category::Newline, // PARAGRAPH SEPARATOR
};

// Katakana word-break ranges, including halfwidth forms and the
// voiced sound marks that attach to kana.
#[inline(always)]
pub fn is_katakana(c: char) -> bool {
    matches!(c as u32,
        0x3031..=0x3035  | // Vertical kana repeat marks
        0x309B..=0x309C  | // Combining voiced sound marks
        0x30A0..=0x30FA  | // Katakana
        0x30FC..=0x30FF  | // Prolonged sound mark, iteration marks, digraph
        0x31F0..=0x31FF  | // Phonetic Extensions
        0x32D0..=0x32FE  | // Circled Katakana
        0x3300..=0x3357  | // Squared Katakana words
        0xFF66..=0xFF9D  | // Halfwidth Katakana
        0x1B000            // Katakana letter archaic E
    )
}

// Hiragana block without the combining sound marks (U+3099, U+309A) and
// the spacing ones claimed by `is_katakana`.
#[inline(always)]
pub fn is_hiragana(c: char) -> bool {
    matches!(c as u32, 0x3040..=0x3098 | 0x309D..=0x309F | 0x1B001..=0x1B11F)
}

// Unified Han blocks + extensions A–I + compatibility block.
#[inline(always)]
pub fn is_cjk_unified_ideograph(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FFF   | // Unified
        0x3400..=0x4DBF   | // Ext A
        0x20000..=0x2A6DF | // Ext B
        0x2A700..=0x2B73F | // Ext C
        0x2B740..=0x2B81F | // Ext D
        0x2B820..=0x2CEAF | // Ext E
        0x2CEB0..=0x2EBEF | // Ext F
        0x30000..=0x3134F | // Ext G
        0x31350..=0x323AF | // Ext H
        0x2EBF0..=0x2EE5F | // Ext I
        0xF900..=0xFAFF   | // Compatibility
        0x2F800..=0x2FA1F   // Compatibility Supplement
    )
}

// Radicals and the ideographic iteration / number marks.
#[inline(always)]
pub fn is_ideographic_mark(c: char) -> bool {
    matches!(c as u32,
        0x2E80..=0x2EFF | // CJK Radicals Supplement
        0x2F00..=0x2FDF | // Kangxi Radicals
        0x3005..=0x3007 | // Iteration mark, closing mark, number zero
        0x3021..=0x3029 | // Hangzhou numerals
        0x3038..=0x303B   // Hangzhou numerals 10–30, vertical iteration mark
    )
}

/// Numeric code points that are not decimal digits: super- and subscripts,
/// vulgar fractions, circled and parenthesized numbers, dingbat numerals.
#[inline(always)]
pub fn is_numeric_symbol(c: char) -> bool {
    matches!(c as u32,
        0x00B2..=0x00B3 | 0x00B9 | 0x00BC..=0x00BE |
        0x09F4..=0x09F9 | // Bengali currency numerators
        0x0BF0..=0x0BF2 | // Tamil ten, hundred, thousand
        0x0F2A..=0x0F33 | // Tibetan half digits
        0x1369..=0x137C | // Ethiopic numbers
        0x2070..=0x2079 | 0x2080..=0x2089 |
        0x2150..=0x215F | 0x2189 |
        0x2460..=0x249B | 0x24EA..=0x24FF |
        0x2776..=0x2793 |
        0x2CFD |
        0x3192..=0x3195 |
        0x3220..=0x3229 | 0x3248..=0x324F | 0x3251..=0x325F |
        0x3280..=0x3289 | 0x32B1..=0x32BF |
        0x1F100..=0x1F10C
    )
}

/// Scripts that are segmented one code point at a time.
#[inline(always)]
pub fn is_ideographic(c: char) -> bool {
    is_cjk_unified_ideograph(c) || is_hiragana(c) || is_ideographic_mark(c)
}
