use std::ops::Index;

use rand::{seq::SliceRandom, Rng};
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::GenError;

/// ASCII letters, digits and punctuation.
pub const SYMBOL_POOL: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
);

/// First code point used once the ASCII pool runs out (box drawing block).
const EXTENSION_START: u32 = 0x2500;

/// Ordered universe of distinct, whitespace-free tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolBase(Vec<String>);

impl SymbolBase {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The declared universe as written on the first line of a relation file.
    pub fn header(&self) -> String {
        self.0.join(" ")
    }
}

impl Index<usize> for SymbolBase {
    type Output = str;

    fn index(&self, i: usize) -> &str {
        &self.0[i]
    }
}

/// Builds a base of `n` distinct symbols.
///
/// Small bases are a uniform sample of the ASCII pool. Larger bases take the
/// whole pool followed by printable single characters from `U+2500` upward,
/// and past the end of Unicode fall back to `X`-prefixed numbered tokens so the count is
/// always met.
pub fn build_base(n: usize, rng: &mut impl Rng) -> Result<SymbolBase, GenError> {
    if n == 0 {
        return Err(GenError::invalid("base size must be greater than 0"));
    }

    let pool: Vec<char> = SYMBOL_POOL.chars().collect();

    let symbols = if n <= pool.len() {
        pool.choose_multiple(rng, n)
            .map(|c| c.to_string())
            .collect()
    }
    else {
        let mut symbols: Vec<String> = Vec::with_capacity(n);
        symbols.extend(pool.iter().map(|c| c.to_string()));
        extend_symbols(&mut symbols, n - pool.len(), EXTENSION_START);
        symbols
    };

    Ok(SymbolBase(symbols))
}

fn extend_symbols(symbols: &mut Vec<String>, extra: usize, start: u32) {
    let target = symbols.len() + extra;

    symbols.extend((start..=char::MAX as u32)
        .filter_map(char::from_u32)
        .filter(|&c| printable(c))
        .take(extra)
        .map(|c| c.to_string()));

    let missing = target - symbols.len();
    if missing > 0 {
        let width = missing.to_string().len();
        symbols.extend((0..missing).map(|i| format!("X{:0width$}", i, width = width)));
    }
}

/// Whether `c` renders as a visible glyph on its own.
///
/// Rejects unassigned, private-use and format code points, combining marks,
/// separators, noncharacters and the letters that render blank.
fn printable(c: char) -> bool {
    if c.is_whitespace() || is_noncharacter(c) || BLANK_LETTERS.contains(&c) {
        return false;
    }
    !matches!(get_general_category(c),
        GeneralCategory::Unassigned
        | GeneralCategory::PrivateUse
        | GeneralCategory::Surrogate
        | GeneralCategory::Control
        | GeneralCategory::Format
        | GeneralCategory::NonspacingMark
        | GeneralCategory::SpacingMark
        | GeneralCategory::EnclosingMark
        | GeneralCategory::SpaceSeparator
        | GeneralCategory::LineSeparator
        | GeneralCategory::ParagraphSeparator)
}

// Hangul fillers and the empty braille pattern.
const BLANK_LETTERS: [char; 5] = ['\u{115f}', '\u{1160}', '\u{2800}', '\u{3164}', '\u{ffa0}'];

fn is_noncharacter(c: char) -> bool {
    let cp = c as u32;
    (0xfdd0..=0xfdef).contains(&cp) || cp & 0xfffe == 0xfffe
}
