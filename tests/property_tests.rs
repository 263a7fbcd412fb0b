//! Property-based checks of the counting invariants.

use proptest::prelude::*;
use wordstat::analyzer::{
    count_characters, count_words, letter_frequencies, tokenize, word_frequencies,
};

proptest! {
    #[test]
    fn word_count_is_token_count(text in "\\PC{0,200}") {
        let tokens = tokenize(&text);
        prop_assert_eq!(count_words(&tokens), tokens.len());
    }

    #[test]
    fn character_count_is_code_points(text in "\\PC{0,200}") {
        let tokens = tokenize(&text);
        let expected: usize = tokens.iter().map(|t| t.chars().count()).sum();
        prop_assert_eq!(count_characters(&tokens), expected);
    }

    #[test]
    fn frequency_sums_match_totals(text in "[a-zé ,.\\t\\n]{0,200}") {
        let tokens = tokenize(&text);
        prop_assert_eq!(word_frequencies(&tokens).values().sum::<usize>(), count_words(&tokens));
        prop_assert_eq!(letter_frequencies(&tokens).values().sum::<usize>(), count_characters(&tokens));
    }

    #[test]
    fn tokens_never_contain_whitespace(text in "\\PC{0,200}") {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
        }
    }
}
