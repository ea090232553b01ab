// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail so that line
//! assignments are restored automatically on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution follows a WAM-like model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! Every try/retry call is one step. An optional step limit turns a runaway
//! search into [`HaikuError::SearchExhausted`].
//!
//! # Example
//!
//! ```
//! use haiku_search::engine::EngineBuilder;
//! use haiku_search::predicates::{ChooseLinePredicate, SuspendPredicate};
//! use haiku_search::context::SearchContext;
//! use haiku_search::memo::Line;
//!
//! let mut ctx = SearchContext::new();
//! let engine = EngineBuilder::new()
//!     .add(Box::new(ChooseLinePredicate::new(Line::First)))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Engine is consumed, returns Some(engine) if suspended
//! let engine = engine.search(&mut ctx).unwrap();
//! assert!(engine.is_some());
//! assert_eq!(ctx.assignment(Line::First).map(|n| n.get()), Some(107));
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use tracing::{debug, trace};

use crate::context::SearchContext;
use crate::error::{HaikuError, Result};
use crate::state::statistics::Counters;

/// Maximum depth of the predicate stack.
const MAX_STACK_SIZE: usize = 1000;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Abort after this many try/retry calls.
    step_limit: Option<u64>,

    /// try/retry calls made by this engine so far.
    steps: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates and no step limit.
    ///
    /// Prefer [`EngineBuilder`], which guarantees a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(MAX_STACK_SIZE),
            step_limit: None,
            steps: 0,
        }
    }

    /// Run the search until it suspends or exhausts.
    ///
    /// Consumes the engine and returns:
    /// - `Ok(Some(engine))` if suspended - can resume by calling search() again
    /// - `Ok(None)` if exhausted (backtracked past first predicate)
    /// - `Err(SearchExhausted)` if the step limit was reached first
    ///
    /// Results are delivered through side effects on `ctx`.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without FAIL or SUSPEND),
    /// or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Result<Option<Self>> {
        if self.stack.is_empty() {
            // Fresh start
            if self.predicates.is_empty() {
                return Ok(None); // Empty is exhausted
            }
            self.stack.push(StackEntry::new(0, 0, ctx.trail.len()));
        } else {
            // Resuming after Suspend: treat the suspending predicate as failed
            self.stack.pop();
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                debug!(
                    tries = ctx.statistics.get(Counters::Tries),
                    retries = ctx.statistics.get(Counters::Retries),
                    "search exhausted"
                );
                return Ok(None);
            };

            if let Some(limit) = self.step_limit {
                if self.steps >= limit {
                    debug!(limit, "step limit reached");
                    return Err(HaikuError::SearchExhausted { limit });
                }
            }

            // Rewind trail to this entry's checkpoint
            ctx.rewind_to(entry.trail_checkpoint);

            let pred_idx = entry.predicate_index;
            let round = entry.round;

            if !entry.in_choice_mode {
                // Call mode: try_pred
                self.steps += 1;
                ctx.statistics.increment_counter(Counters::Tries);
                let result = self.predicates[pred_idx].try_pred(ctx, round);
                trace!(predicate = self.predicates[pred_idx].name(), round, ?result, "try");

                match result {
                    PredicateResult::Success => {
                        self.mark_deterministic();
                        self.push_next_predicate(ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.mark_deterministic();
                        self.push_same_predicate(ctx);
                    }
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.trail_checkpoint = ctx.trail.len();
                        }
                    }
                    PredicateResult::Suspend => {
                        debug!(predicate = self.predicates[pred_idx].name(), "suspended");
                        return Ok(Some(self));
                    }
                }
            } else {
                // Choice mode: retry_pred
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.steps += 1;
                ctx.statistics.increment_counter(Counters::Retries);
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(ctx),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    /// A predicate that succeeded in call mode has no alternatives: leave its
    /// entry in choice mode with nothing left to try, so backtracking pops it.
    fn mark_deterministic(&mut self) {
        if let Some(entry) = self.stack.last_mut() {
            entry.in_choice_mode = true;
            entry.current_choice = 0;
            entry.num_choices = 0;
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn push_next_predicate(&mut self, ctx: &SearchContext) {
        let next_index = self.stack.last().map_or(0, |e| e.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All predicate programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack
            .push(StackEntry::new(next_index, 0, ctx.trail.len()));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext) {
        let (pred_index, next_round) = self
            .stack
            .last()
            .map_or((0, 0), |e| (e.predicate_index, e.round + 1));

        self.stack
            .push(StackEntry::new(pred_index, next_round, ctx.trail.len()));
    }

}

/// Builder for predicate programs.
///
/// ```
/// use haiku_search::engine::EngineBuilder;
/// use haiku_search::predicates::FailPredicate;
/// use haiku_search::context::SearchContext;
///
/// let mut ctx = SearchContext::new();
/// let engine = EngineBuilder::new()
///     .terminal(Box::new(FailPredicate))
///     .build();
/// assert!(engine.search(&mut ctx).unwrap().is_none());
/// ```
#[derive(Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
    step_limit: Option<u64>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Abort the search after `limit` steps (`None` for no limit).
    pub fn step_limit(mut self, limit: Option<u64>) -> Self {
        self.step_limit = limit;
        self
    }

    /// Close the program with a terminal predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder { inner: self }
    }
}

/// An [`EngineBuilder`] whose program ends with a terminal predicate.
pub struct TerminatedBuilder {
    inner: EngineBuilder,
}

impl TerminatedBuilder {
    /// Abort the search after `limit` steps (`None` for no limit).
    pub fn step_limit(mut self, limit: Option<u64>) -> Self {
        self.inner.step_limit = limit;
        self
    }

    pub fn build(self) -> SearchEngine {
        let mut engine = SearchEngine::new(self.inner.predicates);
        engine.step_limit = self.inner.step_limit;
        engine
    }
}
