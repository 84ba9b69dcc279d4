//! Engine state management.
//!
//! Holds the start and goal layouts, the solver options, and the search
//! session. Each run resets the session, times the search, and produces a
//! report, so two algorithms can be compared on equal footing.

use std::time::Instant;

use log::info;

use crate::board::Board;
use crate::report::RunReport;
use crate::search::{solve, Algorithm, SearchError, Session, Solution, TieBreak, DEFAULT_CAPACITY};

/// Options shared by every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum number of entries the frontier may hold.
    pub frontier_capacity: usize,
    /// Ordering among frontier entries with equal F.
    pub tie_break: TieBreak,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            frontier_capacity: DEFAULT_CAPACITY,
            tie_break: TieBreak::Heap,
        }
    }
}

/// A finished run: the solution and its timing summary.
#[derive(Debug, Clone)]
pub struct Run {
    pub solution: Solution,
    pub report: RunReport,
}

/// Holds the session and options between runs.
pub struct Engine {
    config: SolverConfig,
    session: Session,
}

impl Engine {
    /// Creates an engine searching from `initial` to `goal`.
    pub fn new(initial: Board, goal: Board, config: SolverConfig) -> Self {
        let session = Session::new(initial, goal, config.frontier_capacity, config.tie_break);
        Engine { config, session }
    }

    /// Creates an engine for the standard puzzle with default options.
    pub fn standard() -> Self {
        Engine::new(Board::initial(), Board::goal(), SolverConfig::default())
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Resets the session and solves with `algorithm`, timing the search only.
    pub fn run(&mut self, algorithm: Algorithm) -> Result<Run, SearchError> {
        self.session.reset();

        let start = Instant::now();
        let solution = solve(&mut self.session, algorithm)?;
        let elapsed = start.elapsed();

        info!(
            "{}: {} expansions in {:.1}us",
            algorithm.name(),
            solution.expansions,
            elapsed.as_secs_f64() * 1_000_000.0
        );
        let report = RunReport::new(&solution, elapsed);
        Ok(Run { solution, report })
    }

    /// Runs each algorithm in turn with a fresh session, stopping at the first error.
    pub fn compare(&mut self, algorithms: &[Algorithm]) -> Result<Vec<Run>, SearchError> {
        let mut runs = Vec::with_capacity(algorithms.len());
        for &algorithm in algorithms {
            runs.push(self.run(algorithm)?);
        }
        Ok(runs)
    }
}
