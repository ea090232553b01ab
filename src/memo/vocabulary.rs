// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed English vocabulary for numbers 0-9999 and the two operators.
//!
//! Syllable counts are assigned by hand, not derived from pronunciation.
//! Every tens-word counts as two syllables, even "seventy".

/// Syllables in "zero" through "nineteen".
pub const BASE_SYLLABLES: [u8; 20] = [2, 1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 3, 1, 2, 2, 2, 2, 3, 2, 2];

/// Words for 0 through 19.
pub const ONES_WORDS: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

/// Words for multiples of ten, indexed by the tens digit. Index 0 and 1 are
/// never rendered as tens-words.
pub const TENS_WORDS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

pub const HUNDRED_WORD: &str = "hundred";
pub const THOUSAND_WORD: &str = "thousand";
pub const PLUS_WORD: &str = "plus";
pub const EQUALS_WORD: &str = "equals";

pub const TENS_SYLLABLES: u8 = 2;
pub const HUNDRED_SYLLABLES: u8 = 2;
pub const THOUSAND_SYLLABLES: u8 = 2;
pub const PLUS_SYLLABLES: u8 = 1;
pub const EQUALS_SYLLABLES: u8 = 2;

/// Syllable count of a single vocabulary word, or `None` if the word is not
/// part of the vocabulary.
pub fn word_syllables(word: &str) -> Option<u8> {
    if let Some(i) = ONES_WORDS.iter().position(|&w| w == word) {
        return Some(BASE_SYLLABLES[i]);
    }
    if TENS_WORDS[2..].contains(&word) {
        return Some(TENS_SYLLABLES);
    }
    match word {
        HUNDRED_WORD => Some(HUNDRED_SYLLABLES),
        THOUSAND_WORD => Some(THOUSAND_SYLLABLES),
        PLUS_WORD => Some(PLUS_SYLLABLES),
        EQUALS_WORD => Some(EQUALS_SYLLABLES),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_syllables() {
        assert_eq!(word_syllables("zero"), Some(2));
        assert_eq!(word_syllables("seven"), Some(2));
        assert_eq!(word_syllables("eleven"), Some(3));
        assert_eq!(word_syllables("ten"), Some(1));
        assert_eq!(word_syllables("seventy"), Some(2));
        assert_eq!(word_syllables("twenty"), Some(2));
        assert_eq!(word_syllables("thousand"), Some(2));
        assert_eq!(word_syllables("plus"), Some(1));
        assert_eq!(word_syllables("equals"), Some(2));
        assert_eq!(word_syllables(""), None);
        assert_eq!(word_syllables("Seven"), None);
        assert_eq!(word_syllables("million"), None);
    }
}
