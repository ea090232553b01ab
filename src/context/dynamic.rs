// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state (Tier 2: DYNAMIC).

use strum::EnumCount;

use crate::memo::Line;
use crate::number::Number;
use crate::search::Solution;

/// Slot value meaning "not yet assigned".
pub(crate) const UNASSIGNED: u64 = u64::MAX;

/// Mutable search state (Tier 2: DYNAMIC).
///
/// `assignments` is written only through the trail, so backtracking restores
/// it. `solutions` is append-only output and is not trailed.
#[derive(Debug)]
pub struct DynamicState {
    /// Current value of each line variable, indexed by [`Line`].
    ///
    /// Note: Stored as u64 to work with the trail system.
    pub(crate) assignments: [u64; Line::COUNT],

    /// Every solution recorded so far, in discovery order.
    pub solutions: Vec<Solution>,
}

impl DynamicState {
    pub fn new() -> Self {
        Self {
            assignments: [UNASSIGNED; Line::COUNT],
            solutions: Vec::new(),
        }
    }

    /// The value assigned to `line`, if any.
    pub fn assignment(&self, line: Line) -> Option<Number> {
        match self.assignments[line.index()] {
            UNASSIGNED => None,
            value => Some(Number::from_index(value as usize)),
        }
    }
}

impl Default for DynamicState {
    fn default() -> Self {
        Self::new()
    }
}
