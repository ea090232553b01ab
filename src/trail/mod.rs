// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking.
//!
//! Every trailed write records the slot it touched and the value it
//! replaced. Rewinding to an earlier trail position replays those records in
//! reverse, restoring the state the engine saw at that position.

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrailEntry {
    /// Which slot of the dynamic state was written
    slot: usize,
    /// The value before the write
    old_value: u64,
}

/// The trail system for O(1) backtracking.
///
/// Each SearchContext owns its own trail. The engine remembers trail
/// positions ([`Trail::len`]) on its stack and rewinds to them.
#[derive(Debug)]
pub struct Trail {
    /// All trail entries recorded so far
    entries: Vec<TrailEntry>,
    /// Position below which rewinding is not allowed
    frozen_checkpoint: Option<usize>,
}

impl Trail {
    /// Maximum trail size. A haiku search holds at most one entry per line.
    const MAX_SIZE: usize = 1024;

    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(64),
            frozen_checkpoint: None,
        }
    }

    /// Rewind to an absolute trail position, handing each undone entry to
    /// `restore` newest first.
    ///
    /// Positions below the frozen point are clamped to it.
    pub fn rewind_to(&mut self, checkpoint: usize, mut restore: impl FnMut(usize, u64)) {
        let floor = self.frozen_checkpoint.unwrap_or(0);
        let checkpoint = checkpoint.max(floor);
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                restore(entry.slot, entry.old_value);
            }
        }
    }

    /// Freeze the trail at the current position.
    ///
    /// After freezing, no backtracking past this point is allowed.
    pub fn freeze(&mut self) {
        self.frozen_checkpoint = Some(self.entries.len());
    }

    /// Record a state change in the trail.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds MAX_SIZE (indicates a bug in the search algorithm).
    pub(crate) fn record_change(&mut self, slot: usize, old_value: u64) {
        if self.entries.len() >= Self::MAX_SIZE {
            panic!("Trail overflow: exceeded {} entries", Self::MAX_SIZE);
        }

        self.entries.push(TrailEntry { slot, old_value });
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Slots written through a trail, restored by rewinding it.
    fn write(trail: &mut Trail, slots: &mut [u64], slot: usize, value: u64) {
        trail.record_change(slot, slots[slot]);
        slots[slot] = value;
    }

    #[test]
    fn test_trail_new() {
        let trail = Trail::new();
        assert_eq!(trail.len(), 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_rewind_to_position() {
        let mut trail = Trail::new();
        let mut slots = [0u64; 2];

        write(&mut trail, &mut slots, 0, 5);
        let position = trail.len();
        write(&mut trail, &mut slots, 1, 6);
        write(&mut trail, &mut slots, 1, 7);

        trail.rewind_to(position, |slot, old| slots[slot] = old);
        assert_eq!(slots, [5, 0]);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_nested_positions() {
        let mut trail = Trail::new();
        let mut slots = [0u64; 1];

        write(&mut trail, &mut slots, 0, 1);
        let outer = trail.len();
        write(&mut trail, &mut slots, 0, 2);
        let inner = trail.len();
        write(&mut trail, &mut slots, 0, 3);

        trail.rewind_to(inner, |slot, old| slots[slot] = old);
        assert_eq!(slots[0], 2);
        trail.rewind_to(outer, |slot, old| slots[slot] = old);
        assert_eq!(slots[0], 1);
        trail.rewind_to(0, |slot, old| slots[slot] = old);
        assert_eq!(slots[0], 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_rewind_to_current_position_is_noop() {
        let mut trail = Trail::new();
        let mut slots = [0u64; 1];
        write(&mut trail, &mut slots, 0, 4);

        trail.rewind_to(trail.len(), |_, _| panic!("nothing to restore"));
        assert_eq!(slots[0], 4);
    }

    #[test]
    fn test_freeze() {
        let mut trail = Trail::new();
        let mut slots = [0u64; 3];

        write(&mut trail, &mut slots, 0, 10);
        write(&mut trail, &mut slots, 1, 20);
        trail.freeze();
        write(&mut trail, &mut slots, 2, 30);

        // Cannot rewind past freeze point
        trail.rewind_to(0, |slot, old| slots[slot] = old);
        assert_eq!(slots, [10, 20, 0]);
        assert_eq!(trail.len(), 2);
    }

    #[test]
    #[should_panic(expected = "Trail overflow")]
    fn test_trail_overflow() {
        let mut trail = Trail::new();
        for i in 0..Trail::MAX_SIZE + 1 {
            trail.record_change(i, 0);
        }
    }
}
