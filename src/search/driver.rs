//! Best-first search driver.
//!
//! One control loop serves both algorithms: pop the cheapest frontier entry,
//! stop if it is the goal, otherwise queue its unseen successors scored by
//! F = G + H. The algorithms differ only in H (cycle distance for A*, zero
//! for branch-and-bound) and in when a state counts as visited.

use log::{debug, info, log_enabled, trace, Level};

use crate::board::Board;
use crate::eval::heuristic;
use crate::movegen::successors;

use super::frontier::{FrontierEntry, FrontierError};
use super::session::Session;
use super::visited::DedupPolicy;

/// Errors that end a search run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no more possibilities after {expansions} expansions")]
    FrontierExhausted { expansions: u64 },

    #[error(transparent)]
    Frontier(#[from] FrontierError),
}

/// The two search strategies being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    AStar,
    BranchAndBound,
}

impl Algorithm {
    /// Display name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::AStar => "A-Star",
            Algorithm::BranchAndBound => "Branch and Bound",
        }
    }

    pub const fn dedup_policy(self) -> DedupPolicy {
        match self {
            Algorithm::AStar => DedupPolicy::RecordOnExpand,
            Algorithm::BranchAndBound => DedupPolicy::RecordOnGenerate,
        }
    }

    /// H for a candidate board. Branch-and-bound never consults the heuristic.
    #[inline]
    pub fn estimate(self, board: &Board, goal: &Board) -> u32 {
        match self {
            Algorithm::AStar => heuristic(board, goal),
            Algorithm::BranchAndBound => 0,
        }
    }
}

/// Where the driver stands after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Running,
    Solved,
}

/// A completed search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub algorithm: Algorithm,
    /// Boards from the start to the goal, inclusive.
    pub path: Vec<Board>,
    /// Move depth of the goal state; always `path.len() - 1`.
    pub moves: u32,
    pub expansions: u64,
    /// States stored in the arena over the run, the start included.
    pub generated: usize,
}

/// Advances the search by one expansion.
///
/// Expands the current state, queues its unseen successors, then makes the
/// cheapest frontier entry current. A session already on the goal returns
/// `Solved` without expanding.
pub fn step(session: &mut Session, algorithm: Algorithm) -> Result<SearchStatus, SearchError> {
    if session.is_solved() {
        return Ok(SearchStatus::Solved);
    }

    session.expansions += 1;
    let policy = algorithm.dedup_policy();
    let parent = session.current;
    let parent_board = *session.arena.board(parent);

    for mv in successors(&parent_board) {
        let fingerprint = mv.board.fingerprint();
        if session.visited.seen(fingerprint) {
            continue;
        }

        let h = algorithm.estimate(&mv.board, &session.goal);
        let state = session.arena.insert_child(parent, mv.board);
        let g = session.arena.get(state).move_depth;
        let f = g + h;
        debug!(
            "discovered {} -> {} (fp {}): f={} g={} h={}",
            mv.from, mv.to, fingerprint, f, g, h
        );
        if log_enabled!(Level::Trace) {
            trace!("\n{}", mv.board);
        }

        session.frontier.insert(FrontierEntry {
            state,
            fingerprint,
            f,
            g,
            h,
        })?;

        if policy == DedupPolicy::RecordOnGenerate {
            session.visited.record(fingerprint);
        }
    }

    let entry = session
        .frontier
        .extract_min()
        .ok_or(SearchError::FrontierExhausted {
            expansions: session.expansions,
        })?;
    session.current = entry.state;
    if policy == DedupPolicy::RecordOnExpand {
        session.visited.record(entry.fingerprint);
    }
    debug!("selected route with cost {} (g={} h={})", entry.f, entry.g, entry.h);

    if session.is_solved() {
        Ok(SearchStatus::Solved)
    } else {
        Ok(SearchStatus::Running)
    }
}

/// Runs `algorithm` from the session's current state until the goal is
/// reached, then records and returns the path.
pub fn solve(session: &mut Session, algorithm: Algorithm) -> Result<Solution, SearchError> {
    info!(
        "{}: searching from\n{}for\n{}",
        algorithm.name(),
        session.current_board(),
        session.goal
    );

    while step(session, algorithm)? == SearchStatus::Running {}

    let path = session.arena.path_to(session.current);
    let moves = session.current().move_depth;
    session.solution_path = path.clone();

    info!(
        "{}: solved in {} moves after {} expansions ({} states generated)",
        algorithm.name(),
        moves,
        session.expansions,
        session.arena.len()
    );

    Ok(Solution {
        algorithm,
        path,
        moves,
        expansions: session.expansions,
        generated: session.arena.len(),
    })
}
