use std::collections::HashSet;

use relgen::{sampler::PairSelection, symbols::SymbolBase};


pub fn prop_base_valid(base: &SymbolBase, n: usize) -> bool {
    base.len() == n &&
    prop_symbols_distinct(base.as_slice()) &&
    base.as_slice().iter().all(|s| !s.is_empty() && !s.chars().any(char::is_whitespace))
}

pub fn prop_symbols_distinct(symbols: &[String]) -> bool {
    let unique: HashSet<&String> = symbols.iter().collect();
    unique.len() == symbols.len()
}

pub fn prop_selection_valid(selection: &PairSelection, expected: u64) -> bool {
    let indices: Vec<u64> = selection.iter().collect();

    indices.len() as u64 == expected &&
    selection.len() == expected &&
    indices.windows(2).all(|w| w[0] < w[1]) &&
    indices.iter().all(|&idx| idx < selection.domain())
}

// Every pair line names two symbols from the header.
pub fn prop_relation_text_valid(text: &str, expected_pairs: u64) -> bool {
    if !text.ends_with('\n') {
        return false;
    }
    let mut lines = text.lines();
    let header: HashSet<&str> = match lines.next() {
        Some(line) => line.split(' ').collect(),
        None => return false,
    };

    let mut count = 0;
    for line in lines {
        let tokens: Vec<&str> = line.split(' ').collect();
        if tokens.len() != 2 || !tokens.iter().all(|t| header.contains(t)) {
            return false;
        }
        count += 1;
    }
    count == expected_pairs
}
