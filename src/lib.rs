//! Four Knights puzzle solver library.
//!
//! Exposes the board representation, move generation, heuristic, search
//! engine, layout notation and reporting for use by integration tests, the
//! benchmarks, and the binary entry point.

pub mod board;
pub mod engine;
pub mod eval;
pub mod movegen;
pub mod protocol;
pub mod report;
pub mod search;
