//! Layout notation encoding and decoding.
//!
//! A layout is a compact single-line form of a board, in the spirit of chess
//! FEN: three rows of three glyphs separated by '/', top row first.
//!
//! Glyphs: `.` empty, `B` black knight A, `b` black knight B, `W` white
//! knight A, `w` white knight B. The standard start is `B.b/.../W.w` and the
//! standard goal is `w.W/.../b.B`.

use crate::board::{Board, BoardError, Piece, CELL_COUNT};

/// Number of rows (and columns) on the board.
const SIDE: usize = 3;

/// Errors that can occur during layout parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("expected 3 rows separated by '/', got {0}")]
    WrongRowCount(usize),

    #[error("row {row} must have 3 cells, got '{text}'")]
    WrongRowWidth { row: usize, text: String },

    #[error("unknown cell glyph: '{0}'")]
    UnknownGlyph(char),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Parses a layout string into a validated board.
pub fn parse_layout(s: &str) -> Result<Board, LayoutError> {
    let rows: Vec<&str> = s.trim().split('/').collect();
    if rows.len() != SIDE {
        return Err(LayoutError::WrongRowCount(rows.len()));
    }

    let mut cells = [Piece::Empty; CELL_COUNT];
    for (r, row) in rows.iter().enumerate() {
        if row.chars().count() != SIDE {
            return Err(LayoutError::WrongRowWidth {
                row: r + 1,
                text: row.to_string(),
            });
        }
        for (c, glyph) in row.chars().enumerate() {
            cells[r * SIDE + c] = Piece::from_glyph(glyph).ok_or(LayoutError::UnknownGlyph(glyph))?;
        }
    }

    Ok(Board::from_cells(cells)?)
}

/// Encodes a board as a layout string.
pub fn encode_layout(board: &Board) -> String {
    let mut result = String::with_capacity(CELL_COUNT + SIDE - 1);
    for (i, cell) in board.cells().iter().enumerate() {
        if i > 0 && i % SIDE == 0 {
            result.push('/');
        }
        result.push(cell.glyph());
    }
    result
}
