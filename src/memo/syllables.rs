// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Syllable counts for every number 0-9999 and the operator words.
//!
//! The table is composed bottom-up from the counts for 0-19, using the same
//! rules as the renderer in [`crate::render`]. In particular multiples of 100
//! and 1000 are "three hundred" and "two thousand", never
//! "three hundred zero", so they carry no trailing zero term.
//!
//! # Example
//!
//! ```
//! use haiku_search::memo::SyllableTable;
//!
//! let table = SyllableTable::build();
//! assert_eq!(table.syllables(74).unwrap(), 3); // sev-en-ty four
//! assert_eq!(table.syllables(300).unwrap(), 3); // three hun-dred
//! assert!(table.syllables(10_000).is_err());
//! ```

use tracing::debug;

use crate::error::Result;
use crate::memo::vocabulary::{
    BASE_SYLLABLES, EQUALS_SYLLABLES, HUNDRED_SYLLABLES, PLUS_SYLLABLES, TENS_SYLLABLES,
    THOUSAND_SYLLABLES,
};
use crate::number::Number;

/// Key into a [`SyllableTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyllableKey {
    Number(Number),
    Hundred,
    Thousand,
    /// The "+" symbol, spoken "plus".
    Plus,
    /// The "=" symbol, spoken "equals".
    Equals,
}

/// Immutable syllable lookup for 0-9999 plus the symbolic entries.
///
/// Built once per search context and never modified. Cloning copies about
/// 10 KB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableTable {
    numbers: Box<[u8]>,
    hundred: u8,
    thousand: u8,
    plus: u8,
    equals: u8,
}

impl SyllableTable {
    /// Build the complete table.
    ///
    /// # Algorithm
    ///
    /// - 0-19 come straight from [`BASE_SYLLABLES`].
    /// - 20-99: `tens*10` counts 2; `tens*10 + ones` adds the ones-word.
    /// - 100-999: `h*100` is `syl(h) + syl(hundred)`; a nonzero remainder
    ///   `r` adds `syl(r)`.
    /// - 1000-9999: the same with "thousand" over the 0-999 table.
    pub fn build() -> Self {
        let mut numbers = vec![0u8; Number::COUNT];
        numbers[..20].copy_from_slice(&BASE_SYLLABLES);

        for tens in 2..10 {
            numbers[tens * 10] = TENS_SYLLABLES;
            for ones in 1..10 {
                numbers[tens * 10 + ones] = TENS_SYLLABLES + BASE_SYLLABLES[ones];
            }
        }

        for hundreds in 1..10 {
            let prefix = numbers[hundreds] + HUNDRED_SYLLABLES;
            numbers[hundreds * 100] = prefix;
            for last_two in 1..100 {
                numbers[hundreds * 100 + last_two] = prefix + numbers[last_two];
            }
        }

        for thousands in 1..10 {
            let prefix = numbers[thousands] + THOUSAND_SYLLABLES;
            numbers[thousands * 1000] = prefix;
            for last_three in 1..1000 {
                numbers[thousands * 1000 + last_three] = prefix + numbers[last_three];
            }
        }

        debug!(entries = numbers.len(), "built syllable table");

        Self {
            numbers: numbers.into_boxed_slice(),
            hundred: HUNDRED_SYLLABLES,
            thousand: THOUSAND_SYLLABLES,
            plus: PLUS_SYLLABLES,
            equals: EQUALS_SYLLABLES,
        }
    }

    /// Syllables for any key. Numbers are already range-checked.
    #[inline]
    pub fn get(&self, key: SyllableKey) -> u8 {
        match key {
            SyllableKey::Number(n) => self.numbers[n.index()],
            SyllableKey::Hundred => self.hundred,
            SyllableKey::Thousand => self.thousand,
            SyllableKey::Plus => self.plus,
            SyllableKey::Equals => self.equals,
        }
    }

    /// Syllables for a validated number.
    #[inline]
    pub fn of(&self, n: Number) -> u8 {
        self.numbers[n.index()]
    }

    /// Syllables for a raw integer, failing with a domain error above 9999.
    pub fn syllables(&self, n: u32) -> Result<u8> {
        Ok(self.of(Number::new(n)?))
    }

    /// All numbers with exactly `count` syllables, in ascending order.
    pub fn numbers_with(&self, count: u8) -> impl Iterator<Item = Number> + '_ {
        self.numbers
            .iter()
            .enumerate()
            .filter(move |&(_, &s)| s == count)
            .map(|(i, _)| Number::from_index(i))
    }
}

impl Default for SyllableTable {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(value: u32) -> Number {
        Number::new(value).unwrap()
    }

    #[test]
    fn test_base_entries() {
        let table = SyllableTable::build();
        for (i, &expected) in BASE_SYLLABLES.iter().enumerate() {
            assert_eq!(table.syllables(i as u32).unwrap(), expected, "n = {}", i);
        }
    }

    #[test]
    fn test_symbolic_entries() {
        let table = SyllableTable::build();
        assert_eq!(table.get(SyllableKey::Hundred), 2);
        assert_eq!(table.get(SyllableKey::Thousand), 2);
        assert_eq!(table.get(SyllableKey::Plus), 1);
        assert_eq!(table.get(SyllableKey::Equals), 2);
        assert_eq!(table.get(SyllableKey::Number(n(7))), 2);
    }

    #[test]
    fn test_tens() {
        let table = SyllableTable::build();
        assert_eq!(table.of(n(70)), 2);
        assert_eq!(table.of(n(74)), 3);
        assert_eq!(table.of(n(20)), 2);
        assert_eq!(table.of(n(77)), 4);
        assert_eq!(table.of(n(99)), 3);
    }

    #[test]
    fn test_hundreds_elide_zero() {
        let table = SyllableTable::build();
        // "one hundred", not "one hundred zero"
        assert_eq!(table.of(n(100)), 3);
        assert_eq!(table.of(n(101)), 4);
        assert_eq!(table.of(n(700)), 4);
        // "seven hundred seventy four"
        assert_eq!(table.of(n(774)), 7);
    }

    #[test]
    fn test_thousands_elide_zero() {
        let table = SyllableTable::build();
        assert_eq!(table.of(n(1000)), 3);
        assert_eq!(table.of(n(1001)), 4);
        assert_eq!(table.of(n(7000)), 4);
        assert_eq!(table.of(n(7777)), 12);
        assert_eq!(table.syllables(9999).unwrap(), 9);
    }

    #[test]
    fn test_out_of_range() {
        let table = SyllableTable::build();
        assert!(table.syllables(10_000).is_err());
    }

    #[test]
    fn test_every_entry_positive() {
        let table = SyllableTable::build();
        assert!(Number::all().all(|n| table.of(n) > 0));
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(SyllableTable::build(), SyllableTable::build());
    }

    #[test]
    fn test_numbers_with() {
        let table = SyllableTable::build();
        assert_eq!(table.numbers_with(5).count(), 260);
        assert_eq!(table.numbers_with(6).count(), 1150);
        let three: Vec<u16> = table.numbers_with(3).map(Number::get).collect();
        assert_eq!(three.len(), 82);
        assert_eq!(&three[..4], &[11, 17, 21, 22]);
        assert!(three.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(table.numbers_with(0).count(), 0);
    }
}
