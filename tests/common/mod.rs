// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use haiku_search::context::SearchContext;
use haiku_search::memo::Line;
use haiku_search::{Number, Predicate, PredicateResult};

/// A predicate that pins the first line to a specific value.
///
/// This is used in tests to search the solutions for a known first line,
/// bypassing the first-line enumeration.
#[allow(dead_code)]
#[derive(Debug)]
pub struct FixedFirstLinePredicate(pub u32);

impl Predicate for FixedFirstLinePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let Ok(value) = Number::new(self.0) else {
            eprintln!("Could not set first line to {}", self.0);
            return PredicateResult::Failure;
        };
        if !ctx.memo.domains.candidates(Line::First).contains(&value) {
            return PredicateResult::Failure;
        }
        ctx.assign(Line::First, value);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "FixedFirstLine"
    }
}

/// Shorthand for a validated number.
#[allow(dead_code)]
pub fn n(value: u32) -> Number {
    Number::new(value).unwrap()
}
