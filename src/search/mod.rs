//! Search and planning.
//!
//! Best-first search over board states with two interchangeable policies:
//! A* guided by the cycle-distance heuristic, and branch-and-bound ordered by
//! moves alone.

pub mod arena;
pub mod driver;
pub mod frontier;
pub mod session;
pub mod visited;

pub use arena::{Node, StateArena, StateId};
pub use driver::{solve, step, Algorithm, SearchError, SearchStatus, Solution};
pub use frontier::{Frontier, FrontierEntry, FrontierError, TieBreak, DEFAULT_CAPACITY};
pub use session::Session;
pub use visited::{DedupPolicy, Visited};
