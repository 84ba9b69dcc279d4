//! Board representation.
//!
//! Contains the piece type, the knight-move adjacency graph, and the
//! immutable board snapshot.

pub mod adjacency;
pub mod piece;
pub mod state;

pub use adjacency::{
    cycle_position, destinations, is_knight_move, CELL_COUNT, CENTER, CYCLE_LEN, CYCLE_ORDER,
    KNIGHT_MOVES,
};
pub use piece::{Piece, ALL_KNIGHTS};
pub use state::{Board, BoardError};
