// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for table lookups, rendering and search.

use thiserror::Error;

/// Errors surfaced by the library.
///
/// Bad input is reported here. A malformed predicate program is a bug and
/// panics inside the engine instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HaikuError {
    /// An integer outside `[0, 9999]` reached the renderer or the table.
    #[error("{value} is outside the supported range 0..=9999")]
    Domain { value: u64 },

    /// The engine ran more steps than its configured limit.
    #[error("search did not complete within {limit} steps")]
    SearchExhausted { limit: u64 },

    /// A phrase contained a word that is not part of the number vocabulary.
    #[error("'{word}' is not a known number word")]
    UnknownWord { word: String },

    /// A phrase had more syllables than a count can hold.
    #[error("phrase of {words} words has more than 255 syllables")]
    PhraseTooLong { words: usize },

    /// A haiku form could not be parsed.
    #[error("invalid haiku form '{input}' (expected three counts such as 5,7,5)")]
    InvalidForm { input: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HaikuError>;
