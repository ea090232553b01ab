// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! English rendering of numbers and haiku equations.
//!
//! The rules mirror [`SyllableTable::build`](crate::memo::SyllableTable::build):
//! multiples of 100 and 1000 drop the trailing zero, and a tens-word joins its
//! ones-word with a hyphen only when the whole number is below 100.
//!
//! ```text
//! 74    seventy-four
//! 774   seven hundred seventy four
//! 1001  one thousand one
//! ```

use crate::error::{HaikuError, Result};
use crate::memo::vocabulary::{
    word_syllables, EQUALS_WORD, HUNDRED_WORD, ONES_WORDS, PLUS_WORD, TENS_WORDS, THOUSAND_WORD,
};
use crate::number::Number;
use crate::search::Solution;

/// How zero is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroStyle {
    /// Zero renders as the empty string, like the digit elision in
    /// "three hundred".
    #[default]
    Elided,
    /// Zero renders as "zero".
    Word,
}

/// Canonical phrase for `n`, failing with a domain error above 9999.
pub fn number_to_text(n: u32) -> Result<String> {
    Ok(Number::new(n)?.phrase())
}

/// Canonical phrase for `n` with an explicit zero style.
pub fn number_to_text_with(n: Number, zero: ZeroStyle) -> String {
    let mut n = n.get() as usize;
    if n == 0 && zero == ZeroStyle::Word {
        return ONES_WORDS[0].to_string();
    }

    // Decided once for the whole number
    let separator = if n < 100 { '-' } else { ' ' };
    let mut text = String::new();

    if n >= 1000 {
        text.push_str(ONES_WORDS[n / 1000]);
        text.push(' ');
        text.push_str(THOUSAND_WORD);
        text.push(' ');
        n %= 1000;
    }
    if n >= 100 {
        text.push_str(ONES_WORDS[n / 100]);
        text.push(' ');
        text.push_str(HUNDRED_WORD);
        text.push(' ');
        n %= 100;
    }
    if n > 0 {
        if n < 20 {
            text.push_str(ONES_WORDS[n]);
        } else {
            text.push_str(TENS_WORDS[n / 10]);
            // never "thirty zero"
            if n % 10 > 0 {
                text.push(separator);
                text.push_str(ONES_WORDS[n % 10]);
            }
        }
    }

    text.trim().to_string()
}

impl Number {
    /// Canonical phrase using [`ZeroStyle::Elided`].
    pub fn phrase(self) -> String {
        number_to_text_with(self, ZeroStyle::Elided)
    }
}

/// The three lines of a solution, each newline-terminated.
///
/// ```
/// let solutions = haiku_search::find_haiku_equations().unwrap();
/// assert_eq!(
///     haiku_search::render_solution(&solutions[0]),
///     "one hundred seven\nplus one hundred ninety three\nequals three hundred\n"
/// );
/// ```
pub fn render_solution(solution: &Solution) -> String {
    render_solution_with(solution, ZeroStyle::Elided)
}

/// [`render_solution`] with an explicit zero style.
pub fn render_solution_with(solution: &Solution, zero: ZeroStyle) -> String {
    solution_lines(solution, zero)
        .iter()
        .map(|line| format!("{}\n", line))
        .collect()
}

fn solution_lines(solution: &Solution, zero: ZeroStyle) -> [String; 3] {
    let [a, b, c] = solution.lines();
    [
        number_to_text_with(a, zero),
        format!("{} {}", PLUS_WORD, number_to_text_with(b, zero)),
        format!("{} {}", EQUALS_WORD, number_to_text_with(c, zero)),
    ]
}

/// Count syllables in a rendered phrase word by word.
///
/// Words are separated by spaces or hyphens and must belong to the number
/// vocabulary. This is independent of the syllable table and is used to
/// cross-check it.
///
/// A phrase longer than 255 syllables fails with
/// [`HaikuError::PhraseTooLong`].
pub fn phrase_syllables(phrase: &str) -> Result<u8> {
    phrase
        .split([' ', '-'])
        .filter(|word| !word.is_empty())
        .try_fold(0u8, |total, word| {
            let count = word_syllables(word).ok_or_else(|| HaikuError::UnknownWord {
                word: word.to_string(),
            })?;
            total
                .checked_add(count)
                .ok_or_else(|| HaikuError::PhraseTooLong {
                    words: phrase.split([' ', '-']).filter(|w| !w.is_empty()).count(),
                })
        })
}

/// Syllables on each rendered line of `solution`, counted from the text.
pub fn line_syllables(solution: &Solution) -> Result<[u8; 3]> {
    let [a, b, c] = solution_lines(solution, ZeroStyle::Elided);
    Ok([
        phrase_syllables(&a)?,
        phrase_syllables(&b)?,
        phrase_syllables(&c)?,
    ])
}
