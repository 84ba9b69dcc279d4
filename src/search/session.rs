//! Per-run search context.
//!
//! A `Session` owns everything one search run touches: the arena of generated
//! states, the frontier, the visited set, the solution path and the
//! expansion counter. It is passed explicitly to every driver call and reset
//! in full between runs so that nothing leaks from one algorithm to the next.

use crate::board::Board;

use super::arena::{Node, StateArena, StateId};
use super::frontier::{Frontier, TieBreak};
use super::visited::Visited;

/// Mutable state of a single search run.
#[derive(Debug)]
pub struct Session {
    pub(super) initial: Board,
    pub(super) goal: Board,
    pub(super) arena: StateArena,
    pub(super) frontier: Frontier,
    pub(super) visited: Visited,
    pub(super) solution_path: Vec<Board>,
    pub(super) current: StateId,
    pub(super) expansions: u64,
}

impl Session {
    /// Creates a session positioned on `initial`, searching for `goal`.
    pub fn new(initial: Board, goal: Board, capacity: usize, tie_break: TieBreak) -> Self {
        let mut arena = StateArena::new();
        let current = arena.insert_root(initial);
        Session {
            initial,
            goal,
            arena,
            frontier: Frontier::new(capacity, tie_break),
            visited: Visited::new(),
            solution_path: Vec::new(),
            current,
            expansions: 0,
        }
    }

    /// Discards every generated state, the frontier, the visited set and the
    /// solution path, and puts the current state back on the initial layout.
    pub fn reset(&mut self) {
        self.frontier.clear();
        self.visited.clear();
        self.solution_path.clear();
        self.arena.clear();
        self.current = self.arena.insert_root(self.initial);
        self.expansions = 0;
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }

    pub fn current(&self) -> &Node {
        self.arena.get(self.current)
    }

    pub fn current_board(&self) -> &Board {
        self.arena.board(self.current)
    }

    /// Returns true once the current state matches the goal cell for cell.
    pub fn is_solved(&self) -> bool {
        self.current_board().equals_goal(&self.goal)
    }

    /// Number of times the driver has expanded a state this run.
    pub fn expansions(&self) -> u64 {
        self.expansions
    }

    /// Number of states stored in the arena, the root included.
    pub fn generated(&self) -> usize {
        self.arena.len()
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn visited(&self) -> &Visited {
        &self.visited
    }

    pub fn arena(&self) -> &StateArena {
        &self.arena
    }

    /// The path found by the last successful `solve`, start first.
    pub fn solution_path(&self) -> &[Board] {
        &self.solution_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::frontier::DEFAULT_CAPACITY;

    #[test]
    fn new_session_sits_on_initial() {
        let session = Session::new(Board::initial(), Board::goal(), DEFAULT_CAPACITY, TieBreak::Heap);
        assert_eq!(session.current_board(), &Board::initial());
        assert_eq!(session.current().move_depth, 0);
        assert_eq!(session.current().parent, None);
        assert_eq!(session.expansions(), 0);
        assert_eq!(session.generated(), 1);
        assert!(!session.is_solved());
    }

    #[test]
    fn session_starting_on_goal_is_solved() {
        let session = Session::new(Board::goal(), Board::goal(), 16, TieBreak::Heap);
        assert!(session.is_solved());
    }
}
