// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validated integers in the supported range `[0, 9999]`.

use std::fmt;

use crate::error::{HaikuError, Result};

/// An integer in `[0, 9999]`.
///
/// Every table lookup and rendering call goes through this type, so the
/// range check happens once at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number(u16);

impl Number {
    /// Largest supported value.
    pub const MAX: Number = Number(9999);

    /// Number of distinct values (`0..=9999`).
    pub const COUNT: usize = Self::MAX.0 as usize + 1;

    /// Validate `value`, failing with [`HaikuError::Domain`] if it is too large.
    pub fn new(value: u32) -> Result<Self> {
        if value <= Self::MAX.0 as u32 {
            Ok(Number(value as u16))
        } else {
            Err(HaikuError::Domain {
                value: value as u64,
            })
        }
    }

    /// Build from a value already known to be in range.
    pub(crate) const fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::COUNT);
        Number(index as u16)
    }

    #[inline]
    pub fn get(self) -> u16 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    /// Sum of two numbers, if it stays in range.
    pub fn checked_add(self, other: Number) -> Option<Number> {
        let sum = self.0 + other.0;
        (sum <= Self::MAX.0).then_some(Number(sum))
    }

    /// Iterate over every supported value in ascending order.
    pub fn all() -> impl Iterator<Item = Number> {
        (0..=Self::MAX.0).map(Number)
    }
}

impl TryFrom<u32> for Number {
    type Error = HaikuError;

    fn try_from(value: u32) -> Result<Self> {
        Number::new(value)
    }
}

impl From<Number> for u32 {
    fn from(n: Number) -> u32 {
        n.0 as u32
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
