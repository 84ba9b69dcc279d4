//! Run reports.
//!
//! Formats search results for people and for tools: a comma-separated
//! summary table, a JSON array, and the solution path drawn board by board.

use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;

use crate::protocol::encode_layout;
use crate::search::Solution;

/// Summary of a single search run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub algorithm: String,
    /// Wall-clock time spent searching, in microseconds.
    pub elapsed_us: f64,
    pub expansions: u64,
    /// Length of the solution found.
    pub moves: u32,
    /// States stored over the run, the start included.
    pub generated: usize,
    /// Solution boards in layout notation, start first.
    pub path: Vec<String>,
}

impl RunReport {
    pub fn new(solution: &Solution, elapsed: Duration) -> Self {
        RunReport {
            algorithm: solution.algorithm.name().to_string(),
            elapsed_us: elapsed.as_secs_f64() * 1_000_000.0,
            expansions: solution.expansions,
            moves: solution.moves,
            generated: solution.generated,
            path: solution.path.iter().map(encode_layout).collect(),
        }
    }
}

/// Writes the summary table: a header line then one line per run.
pub fn write_table<W: Write>(reports: &[RunReport], out: &mut W) -> io::Result<()> {
    writeln!(out, "Type, Time (microseconds), Expansions")?;
    for r in reports {
        writeln!(out, "{}, {:.6}, {}", r.algorithm, r.elapsed_us, r.expansions)?;
    }
    out.flush()
}

/// Writes the reports as a pretty-printed JSON array.
pub fn write_json<W: Write>(reports: &[RunReport], out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)?;
    out.flush()
}

/// Writes every board on the solution path as a 3×3 grid, blank-line separated.
pub fn write_path<W: Write>(solution: &Solution, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}: final game route ({} steps):",
        solution.algorithm.name(),
        solution.moves
    )?;
    for board in &solution.path {
        writeln!(out, "{}", board)?;
    }
    out.flush()
}
