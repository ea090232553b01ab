// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Equation search: every `A + B = C` that scans as a haiku.
//!
//! The search runs the predicate program
//!
//! ```text
//! Initialize, ChooseLine(First), ChooseLine(Second), Sum, RecordSolution, Fail
//! ```
//!
//! Each line's domain is already filtered by its own syllable count, so the
//! engine only walks pairs from the first two domains and joins them through
//! the sum. The terminal `Fail` drives it through every pair.

use std::fmt;

use tracing::info;

use crate::config::{HaikuForm, SearchConfig};
use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::error::Result;
use crate::memo::{Line, SyllableTable};
use crate::number::Number;
use crate::predicates::{
    ChooseLinePredicate, FailPredicate, InitializePredicate, RecordSolutionPredicate,
    SumPredicate,
};
use crate::state::statistics::{Counters, Statistics};

/// One haiku equation.
///
/// Only the search creates these, so every value satisfies
/// `first + second == third` and the syllable pattern it was searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Solution {
    line_1: Number,
    line_2: Number,
    line_3: Number,
}

impl Solution {
    pub(crate) fn from_lines(line_1: Number, line_2: Number, line_3: Number) -> Self {
        debug_assert_eq!(line_1.checked_add(line_2), Some(line_3));
        Self {
            line_1,
            line_2,
            line_3,
        }
    }

    /// `A`
    pub fn first(&self) -> Number {
        self.line_1
    }

    /// `B`
    pub fn second(&self) -> Number {
        self.line_2
    }

    /// `C`
    pub fn third(&self) -> Number {
        self.line_3
    }

    pub fn lines(&self) -> [Number; 3] {
        [self.line_1, self.line_2, self.line_3]
    }

    /// Number value on `line`.
    pub fn line(&self, line: Line) -> Number {
        self.lines()[line.index()]
    }

    /// Check the arithmetic and the per-line syllable targets of `form`.
    pub fn satisfies(&self, table: &SyllableTable, form: &HaikuForm) -> bool {
        let targets = form.number_targets(table);
        self.line_1.checked_add(self.line_2) == Some(self.line_3)
            && self
                .lines()
                .iter()
                .zip(targets)
                .all(|(&n, target)| Some(table.of(n)) == target)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} = {}", self.line_1, self.line_2, self.line_3)
    }
}

/// Outcome of a completed search.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Every solution, ascending by first then second line.
    pub solutions: Vec<Solution>,
    pub statistics: Statistics,
}

/// Build the search program for a context.
pub fn haiku_program(step_limit: Option<u64>) -> SearchEngine {
    EngineBuilder::new()
        .add(Box::new(InitializePredicate))
        .add(Box::new(ChooseLinePredicate::new(Line::First)))
        .add(Box::new(ChooseLinePredicate::new(Line::Second)))
        .add(Box::new(SumPredicate))
        .add(Box::new(RecordSolutionPredicate))
        .add(Statistics::counting_predicate(Counters::Solutions, None))
        .terminal(Box::new(FailPredicate))
        .step_limit(step_limit)
        .build()
}

/// Run the full search in `ctx`, leaving the solutions in `ctx.state`.
pub fn run(ctx: &mut SearchContext, step_limit: Option<u64>) -> Result<()> {
    // The program ends in Fail, so it never suspends.
    haiku_program(step_limit).search(ctx)?;
    Ok(())
}

/// Find every solution for `config.form`.
pub fn find_with_config(config: &SearchConfig) -> Result<SearchReport> {
    let mut ctx = SearchContext::for_form(config.form);
    run(&mut ctx, config.step_limit)?;
    let solutions = std::mem::take(&mut ctx.state.solutions);

    info!(
        solutions = solutions.len(),
        join_checks = ctx.statistics.get(Counters::JoinChecks),
        tries = ctx.statistics.get(Counters::Tries),
        retries = ctx.statistics.get(Counters::Retries),
        "search complete"
    );

    Ok(SearchReport {
        solutions,
        statistics: ctx.statistics,
    })
}

/// Find every 5-7-5 haiku equation.
///
/// ```
/// let solutions = haiku_search::find_haiku_equations().unwrap();
/// assert_eq!(solutions.len(), 279);
/// assert_eq!(solutions[0].to_string(), "107 + 193 = 300");
/// ```
pub fn find_haiku_equations() -> Result<Vec<Solution>> {
    Ok(find_with_config(&SearchConfig::default())?.solutions)
}
