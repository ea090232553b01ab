// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ChooseLinePredicate - Assigns a line variable from its filtered domain.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::memo::Line;

/// Tries each candidate of one line's domain in ascending order.
///
/// # Choices
///
/// For the first and third lines every candidate is a choice. For the second
/// line, once the first is assigned, only candidates that keep the sum within
/// 9999 are offered. The domain is sorted, so they are a prefix of it.
#[derive(Debug)]
pub struct ChooseLinePredicate {
    line: Line,
}

impl ChooseLinePredicate {
    pub fn new(line: Line) -> Self {
        Self { line }
    }
}

impl Predicate for ChooseLinePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let domains = &ctx.memo.domains;
        let count = match (self.line, ctx.assignment(Line::First)) {
            (Line::Second, Some(first)) => domains.second_line_bound(first),
            _ => domains.len(self.line),
        };

        if count == 0 {
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(count)
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        _round: usize,
        choice: usize,
    ) -> PredicateResult {
        let Some(&value) = ctx.memo.domains.candidates(self.line).get(choice) else {
            return PredicateResult::Failure;
        };
        ctx.assign(self.line, value);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        match self.line {
            Line::First => "ChooseFirstLine",
            Line::Second => "ChooseSecondLine",
            Line::Third => "ChooseThirdLine",
        }
    }
}
