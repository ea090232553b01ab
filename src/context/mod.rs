// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure that combines:
//! - Tier 1 (MEMO): the syllable table and filtered line domains
//! - Tier 2 (DYNAMIC): line assignments with trail-based backtracking,
//!   found solutions and statistics
//!
//! Multiple independent SearchContext instances can operate on copies of the
//! same MEMO data.

mod dynamic;
mod memoized;

pub use dynamic::DynamicState;
pub use memoized::MemoizedData;

use crate::config::HaikuForm;
use crate::memo::Line;
use crate::number::Number;
use crate::state::statistics::Statistics;
use crate::trail::Trail;

/// Search context combining MEMO and DYNAMIC state.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     memo: MemoizedData,        // Tier 1: Immutable, shared
///     trail: Trail,              // Tier 2: Mutable, owned
///     state: DynamicState,       // Tier 2: Mutable, owned
///     statistics: Statistics,    // Not trailed
/// }
/// ```
///
/// # Example
///
/// ```
/// use haiku_search::context::SearchContext;
/// use haiku_search::memo::Line;
/// use haiku_search::Number;
///
/// let mut ctx = SearchContext::new();
/// let checkpoint = ctx.trail.len();
/// ctx.assign(Line::First, Number::new(107).unwrap());
/// assert_eq!(ctx.assignment(Line::First), Number::new(107).ok());
/// ctx.rewind_to(checkpoint);
/// assert_eq!(ctx.assignment(Line::First), None);
/// ```
#[derive(Debug)]
pub struct SearchContext {
    /// Immutable precomputed data (Tier 1)
    pub memo: MemoizedData,
    /// Trail for O(1) backtracking (Tier 2)
    pub trail: Trail,
    /// Mutable search state (Tier 2)
    pub state: DynamicState,
    /// Counters, never rewound
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context for the classic 5-7-5 form.
    pub fn new() -> Self {
        Self::with_memo(MemoizedData::default())
    }

    /// Create a context for an arbitrary form.
    pub fn for_form(form: HaikuForm) -> Self {
        Self::with_memo(MemoizedData::new(form))
    }

    /// Create a search context with existing MEMO data.
    ///
    /// This is useful for independent searches that share the same MEMO data.
    pub fn with_memo(memo: MemoizedData) -> Self {
        Self {
            memo,
            trail: Trail::new(),
            state: DynamicState::new(),
            statistics: Statistics::new(),
        }
    }

    /// Assign a line variable, recording the old value on the trail.
    pub fn assign(&mut self, line: Line, value: Number) {
        let slot = line.index();
        self.trail.record_change(slot, self.state.assignments[slot]);
        self.state.assignments[slot] = value.get() as u64;
    }

    /// Current value of a line variable.
    pub fn assignment(&self, line: Line) -> Option<Number> {
        self.state.assignment(line)
    }

    /// Undo every trailed write made after trail position `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        let assignments = &mut self.state.assignments;
        self.trail
            .rewind_to(checkpoint, |slot, old| assignments[slot] = old);
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}
