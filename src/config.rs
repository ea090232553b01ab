// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::HaikuError;
use crate::memo::{SyllableKey, SyllableTable};

/// Default cap on engine steps. The 5-7-5 search needs about half a million.
pub const DEFAULT_STEP_LIMIT: u64 = 10_000_000;

/// Syllables required on each of the three lines, operator words included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HaikuForm {
    pub lines: [u8; 3],
}

impl HaikuForm {
    pub const CLASSIC: HaikuForm = HaikuForm { lines: [5, 7, 5] };

    pub fn new(first: u8, second: u8, third: u8) -> Self {
        Self {
            lines: [first, second, third],
        }
    }

    /// Syllables each number must carry once the operator words are removed.
    ///
    /// Line 2 starts with "plus" and line 3 with "equals". A line too short
    /// to hold its operator yields `None`, meaning no number can fill it.
    pub fn number_targets(&self, table: &SyllableTable) -> [Option<u8>; 3] {
        [
            Some(self.lines[0]),
            self.lines[1].checked_sub(table.get(SyllableKey::Plus)),
            self.lines[2].checked_sub(table.get(SyllableKey::Equals)),
        ]
    }
}

impl Default for HaikuForm {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl fmt::Display for HaikuForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.lines;
        write!(f, "{}-{}-{}", a, b, c)
    }
}

impl FromStr for HaikuForm {
    type Err = HaikuError;

    /// Parse "5,7,5" (commas or dashes).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HaikuError::InvalidForm {
            input: s.to_string(),
        };
        let counts = s
            .split([',', '-'])
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        match counts.as_slice() {
            &[a, b, c] => Ok(HaikuForm::new(a, b, c)),
            _ => Err(invalid()),
        }
    }
}

/// Everything that controls one search run. Rendering options are passed to
/// [`crate::render`] separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub form: HaikuForm,
    /// Abort with [`HaikuError::SearchExhausted`] after this many engine steps.
    pub step_limit: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            form: HaikuForm::CLASSIC,
            step_limit: Some(DEFAULT_STEP_LIMIT),
        }
    }
}
