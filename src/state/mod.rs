// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state support.
//!
//! - `statistics`: counters bumped by predicates during search

pub mod statistics;
