// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The syllable table and the renderer are built independently; these tests
//! check that counting the rendered words agrees with the table everywhere.

mod common;

use common::n;
use haiku_search::memo::vocabulary::BASE_SYLLABLES;
use haiku_search::memo::SyllableKey;
use haiku_search::render::{number_to_text_with, phrase_syllables};
use haiku_search::{build_syllable_table, number_to_text, HaikuError, Number, ZeroStyle};

#[test]
fn test_table_matches_rendered_words() {
    let table = build_syllable_table();
    for value in 1..=9999 {
        let phrase = number_to_text(value).unwrap();
        assert_eq!(
            phrase_syllables(&phrase).unwrap(),
            table.syllables(value).unwrap(),
            "{} renders as {:?}",
            value,
            phrase
        );
    }
}

#[test]
fn test_zero_counts_as_the_word() {
    let table = build_syllable_table();
    let spoken = number_to_text_with(n(0), ZeroStyle::Word);
    assert_eq!(spoken, "zero");
    assert_eq!(phrase_syllables(&spoken).unwrap(), table.of(n(0)));
    assert_eq!(table.of(n(0)), 2);
}

#[test]
fn test_base_entries() {
    let table = build_syllable_table();
    for (value, &expected) in BASE_SYLLABLES.iter().enumerate() {
        assert_eq!(table.of(n(value as u32)), expected);
    }
}

#[test]
fn test_operator_words() {
    let table = build_syllable_table();
    assert_eq!(table.get(SyllableKey::Plus), phrase_syllables("plus").unwrap());
    assert_eq!(table.get(SyllableKey::Equals), phrase_syllables("equals").unwrap());
    assert_eq!(table.get(SyllableKey::Hundred), phrase_syllables("hundred").unwrap());
    assert_eq!(table.get(SyllableKey::Thousand), phrase_syllables("thousand").unwrap());
}

#[test]
fn test_build_is_idempotent() {
    assert_eq!(build_syllable_table(), build_syllable_table());
}

#[test]
fn test_range_is_enforced() {
    let table = build_syllable_table();
    assert_eq!(table.syllables(9999).unwrap(), 9);
    assert_eq!(
        table.syllables(10_000),
        Err(HaikuError::Domain { value: 10_000 })
    );
    assert_eq!(
        number_to_text(10_000),
        Err(HaikuError::Domain { value: 10_000 })
    );
    assert!(Number::new(10_000).is_err());
}

#[test]
fn test_lines_read_back() {
    // "seven hundred seventy four": hyphens only below one hundred
    assert_eq!(number_to_text(774).unwrap(), "seven hundred seventy four");
    assert_eq!(number_to_text(74).unwrap(), "seventy-four");
    assert_eq!(phrase_syllables("seven hundred seventy four").unwrap(), 7);
}
