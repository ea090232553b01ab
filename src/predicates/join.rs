// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicates that close a candidate pair into a solution.
//!
//! - `SumPredicate` joins the first two lines under `A + B = C`
//! - `RecordSolutionPredicate` stores the completed triple

use tracing::trace;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::memo::Line;
use crate::search::Solution;
use crate::state::statistics::Counters;

/// Computes the third line from the first two and checks its syllables.
///
/// Deterministic: the sum is the only possible value for the third line, so
/// this never offers choices.
#[derive(Debug)]
pub struct SumPredicate;

impl Predicate for SumPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let (Some(first), Some(second)) = (ctx.assignment(Line::First), ctx.assignment(Line::Second))
        else {
            panic!("SumPredicate requires both addends to be assigned");
        };
        ctx.statistics.increment_counter(Counters::JoinChecks);

        match first.checked_add(second) {
            Some(sum) if ctx.memo.domains.is_third_line(sum) => {
                ctx.assign(Line::Third, sum);
                PredicateResult::Success
            }
            _ => {
                ctx.statistics.increment_counter(Counters::SumRejected);
                PredicateResult::Failure
            }
        }
    }

    fn name(&self) -> &str {
        "Sum"
    }
}

/// Appends the current assignment to the solution list.
#[derive(Debug)]
pub struct RecordSolutionPredicate;

impl Predicate for RecordSolutionPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let (Some(first), Some(second), Some(third)) = (
            ctx.assignment(Line::First),
            ctx.assignment(Line::Second),
            ctx.assignment(Line::Third),
        ) else {
            panic!("RecordSolutionPredicate requires all three lines to be assigned");
        };

        let solution = Solution::from_lines(first, second, third);
        trace!(%solution, "found");
        ctx.state.solutions.push(solution);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "RecordSolution"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::Number;

    fn n(value: u32) -> Number {
        Number::new(value).unwrap()
    }

    #[test]
    fn test_sum_accepts_three_syllables() {
        let mut ctx = SearchContext::new();
        ctx.assign(Line::First, n(107));
        ctx.assign(Line::Second, n(193));

        assert_eq!(SumPredicate.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert_eq!(ctx.assignment(Line::Third), Some(n(300)));
        assert_eq!(ctx.statistics.get(Counters::JoinChecks), 1);
        assert_eq!(ctx.statistics.get(Counters::SumRejected), 0);
    }

    #[test]
    fn test_sum_rejects_wrong_syllables() {
        let mut ctx = SearchContext::new();
        ctx.assign(Line::First, n(107));
        ctx.assign(Line::Second, n(194)); // 301: three hundred one

        assert_eq!(SumPredicate.try_pred(&mut ctx, 0), PredicateResult::Failure);
        assert_eq!(ctx.assignment(Line::Third), None);
        assert_eq!(ctx.statistics.get(Counters::SumRejected), 1);
    }

    #[test]
    fn test_sum_rejects_overflow() {
        let mut ctx = SearchContext::new();
        ctx.assign(Line::First, n(9000));
        ctx.assign(Line::Second, n(1000));
        assert_eq!(SumPredicate.try_pred(&mut ctx, 0), PredicateResult::Failure);
    }

    #[test]
    #[should_panic(expected = "requires both addends")]
    fn test_sum_requires_assignments() {
        let mut ctx = SearchContext::new();
        SumPredicate.try_pred(&mut ctx, 0);
    }

    #[test]
    fn test_record_solution() {
        let mut ctx = SearchContext::new();
        ctx.assign(Line::First, n(107));
        ctx.assign(Line::Second, n(193));
        ctx.assign(Line::Third, n(300));

        assert_eq!(
            RecordSolutionPredicate.try_pred(&mut ctx, 0),
            PredicateResult::Success
        );
        assert_eq!(
            ctx.state.solutions,
            vec![Solution::from_lines(n(107), n(193), n(300))]
        );
    }
}
