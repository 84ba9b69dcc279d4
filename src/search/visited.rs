//! Visited-state bookkeeping.
//!
//! Both algorithms consult the visited set before queuing a successor. They
//! differ in when a fingerprint is recorded, which is the point of the
//! comparison: A* records a state when it is expanded, branch-and-bound
//! records it as soon as it is queued.

use std::collections::HashSet;

/// When a state's fingerprint enters the visited set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupPolicy {
    /// Record when the state is popped from the frontier. A state may be
    /// queued several times before its first expansion.
    RecordOnExpand,
    /// Record when the state is pushed onto the frontier. No state is ever
    /// queued twice.
    RecordOnGenerate,
}

/// Set of board fingerprints seen during the current run.
#[derive(Debug, Default)]
pub struct Visited {
    seen: HashSet<u32>,
}

impl Visited {
    pub fn new() -> Self {
        Visited {
            seen: HashSet::new(),
        }
    }

    #[inline]
    pub fn seen(&self, fingerprint: u32) -> bool {
        self.seen.contains(&fingerprint)
    }

    #[inline]
    pub fn record(&mut self, fingerprint: u32) {
        self.seen.insert(fingerprint);
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }
}
