// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Candidate domains for the three line variables.
//!
//! Each line carries a unary constraint on its own syllable count. Filtering
//! all 10000 values against it once leaves a few hundred candidates per line,
//! and the search only joins those.

use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

use crate::config::HaikuForm;
use crate::memo::SyllableTable;
use crate::number::Number;

/// One of the three search variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter)]
#[repr(u8)]
pub enum Line {
    /// `A`
    First,
    /// `plus B`
    Second,
    /// `equals C`
    Third,
}

impl Line {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Per-line candidate lists, sorted ascending, plus a membership bitmap for
/// the third line so the sum check is O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domains {
    candidates: [Vec<Number>; 3],
    third_member: Box<[bool]>,
}

impl Domains {
    /// Filter every number against the per-line syllable targets of `form`.
    pub fn filter(table: &SyllableTable, form: &HaikuForm) -> Self {
        let candidates: [Vec<Number>; 3] = form.number_targets(table).map(|target| match target {
            Some(count) => table.numbers_with(count).collect(),
            None => Vec::new(),
        });

        let mut third_member = vec![false; Number::COUNT].into_boxed_slice();
        for n in &candidates[Line::Third.index()] {
            third_member[n.index()] = true;
        }

        Self {
            candidates,
            third_member,
        }
    }

    /// Candidates for `line`, ascending.
    #[inline]
    pub fn candidates(&self, line: Line) -> &[Number] {
        &self.candidates[line.index()]
    }

    /// Number of candidates for `line`.
    #[inline]
    pub fn len(&self, line: Line) -> usize {
        self.candidates[line.index()].len()
    }

    /// True when some line has no candidates, so no solution can exist.
    pub fn any_empty(&self) -> bool {
        self.candidates.iter().any(Vec::is_empty)
    }

    /// How many second-line candidates can be added to `first` without
    /// leaving the range. They form a prefix of the sorted candidate list.
    pub fn second_line_bound(&self, first: Number) -> usize {
        let headroom = Number::MAX.get() - first.get();
        self.candidates(Line::Second)
            .partition_point(|n| n.get() <= headroom)
    }

    /// Whether `n` satisfies the third line's syllable constraint.
    #[inline]
    pub fn is_third_line(&self, n: Number) -> bool {
        self.third_member[n.index()]
    }
}
