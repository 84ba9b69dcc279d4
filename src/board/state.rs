//! Board snapshot representation.
//!
//! A `Board` is the complete placement of the four knights across the nine
//! cells. It is `Copy`, never mutated after construction, and carries no
//! provenance; parent links and move depth live in the search arena.

use std::fmt;

use super::adjacency::{CELL_COUNT, CENTER};
use super::piece::{Piece, ALL_KNIGHTS};

/// Errors raised when a cell array does not describe a legal position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("centre cell must be empty, found '{0}'")]
    OccupiedCenter(char),

    #[error("knight '{piece}' appears {count} times, expected exactly once")]
    KnightCount { piece: char, count: usize },
}

/// A complete 9-cell board snapshot.
///
/// Uses a fixed-size array indexed by cell number for O(1) lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Piece; CELL_COUNT],
}

use Piece::*;

#[rustfmt::skip]
const INITIAL_CELLS: [Piece; CELL_COUNT] = [
    BlackA, Empty, BlackB,
    Empty, Empty, Empty,
    WhiteA, Empty, WhiteB,
];

#[rustfmt::skip]
const GOAL_CELLS: [Piece; CELL_COUNT] = [
    WhiteB, Empty, WhiteA,
    Empty, Empty, Empty,
    BlackB, Empty, BlackA,
];

impl Board {
    /// The standard starting layout: black knights on the top row, white on the bottom.
    pub const fn initial() -> Self {
        Board { cells: INITIAL_CELLS }
    }

    /// The standard goal layout: both pairs swapped and mirrored.
    pub const fn goal() -> Self {
        Board { cells: GOAL_CELLS }
    }

    /// Builds a board from raw cells, checking the four-knight invariant.
    pub fn from_cells(cells: [Piece; CELL_COUNT]) -> Result<Self, BoardError> {
        if !cells[CENTER].is_empty() {
            return Err(BoardError::OccupiedCenter(cells[CENTER].glyph()));
        }
        for knight in ALL_KNIGHTS {
            let count = cells.iter().filter(|&&c| c == knight).count();
            if count != 1 {
                return Err(BoardError::KnightCount {
                    piece: knight.glyph(),
                    count,
                });
            }
        }
        Ok(Board { cells })
    }

    /// Returns the contents of a cell.
    #[inline]
    pub fn cell(&self, index: usize) -> Piece {
        self.cells[index]
    }

    /// Returns all nine cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Piece; CELL_COUNT] {
        &self.cells
    }

    /// Returns the cell currently holding `piece`, if any.
    pub fn position_of(&self, piece: Piece) -> Option<usize> {
        self.cells.iter().position(|&c| c == piece)
    }

    /// Base-5 positional encoding of the cells: cell k contributes `value * 5^k`.
    ///
    /// Injective over all boards, so it stands in for structural equality in
    /// the visited set.
    pub fn fingerprint(&self) -> u32 {
        let mut code = 0u32;
        let mut place = 1u32;
        for cell in self.cells.iter() {
            code += cell.value() * place;
            place *= 5;
        }
        code
    }

    /// Cell-wise comparison against a goal layout.
    #[inline]
    pub fn equals_goal(&self, goal: &Board) -> bool {
        self.cells == goal.cells
    }

    /// Returns a copy with the piece on `from` moved to `to`.
    ///
    /// The caller guarantees `from -> to` is a knight move onto an empty cell.
    pub(crate) fn with_move(&self, from: usize, to: usize) -> Board {
        debug_assert!(!self.cells[from].is_empty());
        debug_assert!(self.cells[to].is_empty());
        let mut cells = self.cells;
        cells[to] = cells[from];
        cells[from] = Piece::Empty;
        Board { cells }
    }

    /// Renders the board as a 3×3 grid of glyphs, one row per line.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(3) {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
