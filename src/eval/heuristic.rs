//! Cycle-distance heuristic.
//!
//! The eight outer cells form a single cycle under the knight-move graph and
//! every legal move advances one knight exactly one step around it. The sum
//! over knights of the shorter way round the cycle to each knight's goal cell
//! is therefore an admissible and consistent estimate of the remaining moves.
//!
//! The cell-to-cell cycle distances are computed once via `LazyLock`.

use std::sync::LazyLock;

use crate::board::{cycle_position, Board, CELL_COUNT, CYCLE_LEN};

/// Cycle distance between every pair of outer cells. Centre entries are unused.
static CYCLE_DIST: LazyLock<[[u8; CELL_COUNT]; CELL_COUNT]> = LazyLock::new(build_cycle_dist);

fn build_cycle_dist() -> [[u8; CELL_COUNT]; CELL_COUNT] {
    let mut dist = [[0u8; CELL_COUNT]; CELL_COUNT];
    for (a, row) in dist.iter_mut().enumerate() {
        let Some(pa) = cycle_position(a) else {
            continue;
        };
        for (b, d) in row.iter_mut().enumerate() {
            let Some(pb) = cycle_position(b) else {
                continue;
            };
            let diff = pa.abs_diff(pb);
            *d = diff.min(CYCLE_LEN - diff) as u8;
        }
    }
    dist
}

/// Returns the number of cycle steps between two outer cells.
#[inline]
pub fn cycle_distance(a: usize, b: usize) -> u32 {
    CYCLE_DIST[a][b] as u32
}

/// Estimates the moves needed to turn `board` into `goal`.
///
/// For every knight on the goal, adds the cycle distance from where that
/// knight stands on `board` to where it stands on `goal`.
pub fn heuristic(board: &Board, goal: &Board) -> u32 {
    let mut h = 0u32;
    for (goal_cell, &piece) in goal.cells().iter().enumerate() {
        if piece.is_empty() {
            continue;
        }
        if let Some(cell) = board.position_of(piece) {
            h += cycle_distance(cell, goal_cell);
        }
    }
    h
}
