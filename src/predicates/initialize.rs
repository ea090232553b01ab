// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! InitializePredicate - Checks the MEMO domains and freezes the trail.
//!
//! The line domains are filtered when the context is built. This predicate
//! runs exactly once at the start of the search, reports their sizes and
//! cuts the search short when a line has no candidates at all.

use strum::IntoEnumIterator;
use tracing::info;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::memo::Line;

/// InitializePredicate performs the one-time start of a search.
///
/// This predicate is deterministic and runs exactly once (round=0 only).
/// It never backtracks and never produces choices.
#[derive(Debug)]
pub struct InitializePredicate;

impl Predicate for InitializePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        assert_eq!(
            round, 0,
            "InitializePredicate must be called exactly once with round=0"
        );

        let domains = &ctx.memo.domains;
        let sizes: Vec<usize> = Line::iter().map(|line| domains.len(line)).collect();
        info!(form = %ctx.memo.form, ?sizes, "searching for haiku equations");

        if domains.any_empty() {
            info!("a line has no candidates; nothing to search");
            return PredicateResult::Failure;
        }

        // Nothing before this point may be undone.
        ctx.trail.freeze();
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Initialize"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HaikuForm;

    #[test]
    fn test_initialize_round_0() {
        let mut ctx = SearchContext::new();
        let mut pred = InitializePredicate;

        let result = pred.try_pred(&mut ctx, 0);
        assert_eq!(result, PredicateResult::Success);
    }

    #[test]
    fn test_initialize_empty_domain_fails() {
        let mut pred = InitializePredicate;

        // "equals" alone is two syllables, so a one-syllable third line is unfillable
        let mut ctx = SearchContext::for_form(HaikuForm::new(5, 7, 1));
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Failure);

        let mut ctx = SearchContext::for_form(HaikuForm::new(1, 7, 5));
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Success);
    }

    #[test]
    #[should_panic(expected = "must be called exactly once with round=0")]
    fn test_initialize_round_1_panics() {
        let mut ctx = SearchContext::new();
        let mut pred = InitializePredicate;

        // Should panic on round != 0
        pred.try_pred(&mut ctx, 1);
    }

    #[test]
    #[should_panic(expected = "retry_pred should never be called")]
    fn test_initialize_retry_panics() {
        let mut ctx = SearchContext::new();
        let mut pred = InitializePredicate;

        // Should panic - InitializePredicate never creates choices
        pred.retry_pred(&mut ctx, 0, 0);
    }
}
