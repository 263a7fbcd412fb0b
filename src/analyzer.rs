use std::collections::BTreeMap;

use crate::stats::AnalysisResult;

/// Splits text on runs of whitespace. Tokens borrow from `text`.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

pub fn count_words(tokens: &[&str]) -> usize {
    tokens.len()
}

/// Counts Unicode code points, not bytes.
pub fn count_characters(tokens: &[&str]) -> usize {
    tokens.iter().map(|token| token.chars().count()).sum()
}

pub fn word_frequencies(tokens: &[&str]) -> BTreeMap<String, usize> {
    let mut frequencies = BTreeMap::new();
    for token in tokens {
        *frequencies.entry((*token).to_string()).or_insert(0) += 1;
    }
    frequencies
}

pub fn letter_frequencies(tokens: &[&str]) -> BTreeMap<String, usize> {
    let mut frequencies = BTreeMap::new();
    for token in tokens {
        for letter in token.chars() {
            *frequencies.entry(letter.to_string()).or_insert(0) += 1;
        }
    }
    frequencies
}

pub fn analyze(filename: &str, text: &str) -> AnalysisResult {
    let tokens = tokenize(text);

    AnalysisResult {
        filename: filename.to_string(),
        characters: count_characters(&tokens),
        words: count_words(&tokens),
        letter_frequencies: letter_frequencies(&tokens),
        word_frequencies: word_frequencies(&tokens),
    }
}
