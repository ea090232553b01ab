// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the search algorithm.
//! Each predicate represents a step of the filter-then-join search.
//!
//! # Organization
//!
//! - `initialize`: InitializePredicate for checking the MEMO domains
//! - `choose`: ChooseLinePredicate, one choice point per line variable
//! - `join`: SumPredicate and RecordSolutionPredicate
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod choose;
pub mod initialize;
pub mod join;

pub use choose::ChooseLinePredicate;
pub use initialize::InitializePredicate;
pub use join::{RecordSolutionPredicate, SumPredicate};

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending a program with
/// it makes the engine enumerate every solution.
///
/// # Example
///
/// ```
/// use haiku_search::engine::EngineBuilder;
/// use haiku_search::predicates::{ChooseLinePredicate, FailPredicate};
/// use haiku_search::context::SearchContext;
/// use haiku_search::memo::Line;
///
/// let mut ctx = SearchContext::new();
/// let engine = EngineBuilder::new()
///     .add(Box::new(ChooseLinePredicate::new(Line::Third)))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all third-line choices then fail
/// let result = engine.search(&mut ctx).unwrap();
/// assert!(result.is_none()); // Failed - engine consumed
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Predicate that suspends execution, handing control back to the caller
/// with the current assignment intact.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
