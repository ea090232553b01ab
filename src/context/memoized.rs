// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed data (Tier 1: MEMO).

use strum::IntoEnumIterator;
use tracing::debug;

use crate::config::HaikuForm;
use crate::memo::{Domains, Line, SyllableTable};

/// Immutable precomputed data (Tier 1: MEMO).
///
/// Computed once when a context is created and never changed during search.
/// At roughly 25 KB it is cheap to clone into independent contexts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoizedData {
    /// The form the domains were filtered for.
    pub form: HaikuForm,

    /// Syllables for every number and operator word.
    pub table: SyllableTable,

    /// Per-line candidates satisfying the unary syllable constraints.
    pub domains: Domains,
}

impl MemoizedData {
    /// Build the syllable table and filter the line domains for `form`.
    pub fn new(form: HaikuForm) -> Self {
        let table = SyllableTable::build();
        let domains = Domains::filter(&table, &form);

        for line in Line::iter() {
            debug!(?line, candidates = domains.len(line), "filtered line domain");
        }

        Self {
            form,
            table,
            domains,
        }
    }
}

impl Default for MemoizedData {
    fn default() -> Self {
        Self::new(HaikuForm::CLASSIC)
    }
}
