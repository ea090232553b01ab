// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for arithmetic haikus.
//!
//! A haiku equation is a triple `A + B = C` with every number in `0..=9999`
//! whose English reading
//!
//! ```text
//! A
//! plus B
//! equals C
//! ```
//!
//! scans as 5, 7 and 5 syllables. For example:
//!
//! ```text
//! one hundred seven
//! plus one hundred ninety three
//! equals three hundred
//! ```
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed data that never changes during search:
//! - Syllable counts for every number and operator word
//! - Per-line candidate domains, filtered by each line's syllable target
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state that changes during search, tracked on the trail:
//! - Trail - records assignment changes for O(1) backtracking
//! - Line assignments
//! - Found solutions and statistics (append-only, not trailed)
//!
//! # Search Algorithm
//!
//! Filter-then-join on a backtracking predicate engine:
//!
//! 1. **Filter**: each line is checked against its own syllable count, once per number
//! 2. **ChooseLine**: the first two lines range over their filtered domains
//! 3. **Sum**: the third line is forced to `A + B` and must be in its domain
//!
//! The work is about |domain 1| × |domain 2| sum checks instead of 10^12
//! triples.

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod memo;
pub mod number;
pub mod predicates;
pub mod render;
pub mod search;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use config::{HaikuForm, SearchConfig};
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::{HaikuError, Result};
pub use memo::SyllableTable;
pub use number::Number;
pub use render::{number_to_text, render_solution, ZeroStyle};
pub use search::{find_haiku_equations, find_with_config, SearchReport, Solution};
pub use trail::Trail;

/// Build the syllable table for 0-9999 and the operator words.
pub fn build_syllable_table() -> SyllableTable {
    SyllableTable::build()
}
