// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! - `vocabulary`: fixed number words and their syllable counts
//! - `syllables`: the 0-9999 syllable table
//! - `domains`: per-line candidates after unary filtering

pub mod domains;
pub mod syllables;
pub mod vocabulary;

pub use domains::{Domains, Line};
pub use syllables::{SyllableKey, SyllableTable};
