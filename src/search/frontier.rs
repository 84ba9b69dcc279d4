//! Min-priority frontier.
//!
//! An array-backed binary min-heap keyed by F = G + H. Insertion sifts up
//! from the last slot; extraction moves the last entry to the root and sifts
//! down. The heap refuses to grow past a fixed capacity: there is no eviction
//! policy, so running out of room is a fatal search error.

use super::arena::StateId;

/// Default frontier capacity (2^22 entries).
pub const DEFAULT_CAPACITY: usize = 1 << 22;

/// Errors raised by frontier operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrontierError {
    #[error("the queue exceeded its limit of {capacity} entries")]
    CapacityExceeded { capacity: usize },
}

/// How entries with equal F are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Whatever the heap's structural placement yields.
    #[default]
    Heap,
    /// Lowest board fingerprint first, for reproducible expansion traces.
    LowestFingerprint,
}

/// A queued state with its cost breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub state: StateId,
    pub fingerprint: u32,
    /// Total estimate, G + H.
    pub f: u32,
    /// Moves from the start.
    pub g: u32,
    /// Heuristic estimate to the goal.
    pub h: u32,
}

/// Binary min-heap of frontier entries.
#[derive(Debug)]
pub struct Frontier {
    items: Vec<FrontierEntry>,
    capacity: usize,
    tie_break: TieBreak,
}

impl Frontier {
    /// Creates an empty frontier holding at most `capacity` entries.
    ///
    /// Storage grows on demand; only the bound is fixed up front.
    pub fn new(capacity: usize, tie_break: TieBreak) -> Self {
        Frontier {
            items: Vec::new(),
            capacity,
            tie_break,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the entry `extract_min` would return, without removing it.
    pub fn peek_min(&self) -> Option<&FrontierEntry> {
        self.items.first()
    }

    /// Returns true if entry `a` must sit above entry `b`.
    #[inline]
    fn precedes(&self, a: &FrontierEntry, b: &FrontierEntry) -> bool {
        match self.tie_break {
            TieBreak::Heap => a.f < b.f,
            TieBreak::LowestFingerprint => (a.f, a.fingerprint) < (b.f, b.fingerprint),
        }
    }

    /// Queues an entry.
    pub fn insert(&mut self, entry: FrontierEntry) -> Result<(), FrontierError> {
        if self.items.len() >= self.capacity {
            return Err(FrontierError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.items.push(entry);
        let mut i = self.items.len() - 1;
        while i != 0 {
            let parent = (i - 1) / 2;
            if !self.precedes(&self.items[i], &self.items[parent]) {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
        Ok(())
    }

    /// Removes and returns the entry with the smallest F, or `None` when empty.
    pub fn extract_min(&mut self) -> Option<FrontierEntry> {
        if self.items.is_empty() {
            return None;
        }
        let root = self.items.swap_remove(0);
        self.sift_down(0);
        Some(root)
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;

            if left < len && self.precedes(&self.items[left], &self.items[smallest]) {
                smallest = left;
            }
            if right < len && self.precedes(&self.items[right], &self.items[smallest]) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.items.swap(i, smallest);
            i = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::search::arena::StateArena;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn entry(state: StateId, f: u32, fingerprint: u32) -> FrontierEntry {
        FrontierEntry {
            state,
            fingerprint,
            f,
            g: f,
            h: 0,
        }
    }

    fn root_id() -> StateId {
        StateArena::new().insert_root(Board::initial())
    }

    #[test]
    fn empty_frontier_yields_none() {
        let mut frontier = Frontier::new(8, TieBreak::Heap);
        assert!(frontier.extract_min().is_none());
        assert!(frontier.peek_min().is_none());
    }

    #[test]
    fn extracts_in_nondecreasing_f_order() {
        let id = root_id();
        let mut rng = StdRng::seed_from_u64(42);
        let mut frontier = Frontier::new(DEFAULT_CAPACITY, TieBreak::Heap);
        for _ in 0..500 {
            let f = rng.gen_range(0..40);
            frontier.insert(entry(id, f, rng.gen())).unwrap();
        }
        assert_eq!(frontier.len(), 500);

        let mut last = 0;
        while let Some(e) = frontier.extract_min() {
            assert!(e.f >= last, "f went from {} to {}", last, e.f);
            last = e.f;
        }
        assert!(frontier.is_empty());
    }

    #[test]
    fn interleaved_insert_and_extract_stay_ordered() {
        let id = root_id();
        let mut frontier = Frontier::new(64, TieBreak::Heap);
        for f in [9, 3, 7] {
            frontier.insert(entry(id, f, 0)).unwrap();
        }
        assert_eq!(frontier.extract_min().unwrap().f, 3);
        frontier.insert(entry(id, 1, 0)).unwrap();
        frontier.insert(entry(id, 8, 0)).unwrap();
        let order: Vec<u32> = std::iter::from_fn(|| frontier.extract_min())
            .map(|e| e.f)
            .collect();
        assert_eq!(order, vec![1, 7, 8, 9]);
    }

    #[test]
    fn lowest_fingerprint_breaks_ties() {
        let id = root_id();
        let mut frontier = Frontier::new(64, TieBreak::LowestFingerprint);
        for fp in [50, 10, 40, 20, 30] {
            frontier.insert(entry(id, 5, fp)).unwrap();
        }
        frontier.insert(entry(id, 4, 99)).unwrap();
        let order: Vec<u32> = std::iter::from_fn(|| frontier.extract_min())
            .map(|e| e.fingerprint)
            .collect();
        assert_eq!(order, vec![99, 10, 20, 30, 40, 50]);
    }

    #[test]
    fn insert_past_capacity_fails() {
        let id = root_id();
        let mut frontier = Frontier::new(2, TieBreak::Heap);
        frontier.insert(entry(id, 1, 0)).unwrap();
        frontier.insert(entry(id, 2, 0)).unwrap();
        assert_eq!(
            frontier.insert(entry(id, 3, 0)),
            Err(FrontierError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(frontier.len(), 2);

        // Extracting frees a slot again.
        frontier.extract_min();
        assert!(frontier.insert(entry(id, 3, 0)).is_ok());
    }

    #[test]
    fn clear_empties_frontier() {
        let id = root_id();
        let mut frontier = Frontier::new(4, TieBreak::Heap);
        frontier.insert(entry(id, 1, 0)).unwrap();
        frontier.clear();
        assert!(frontier.is_empty());
        assert_eq!(frontier.capacity(), 4);
    }
}
