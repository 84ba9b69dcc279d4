//! Knight-move graph on the 3×3 board.
//!
//! Cells are numbered row-major from 0 (a1) to 8 (c3). Every cell other than
//! the centre has exactly two knight moves that stay on the board; the centre
//! has none. All data is compile-time `static`.

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The centre cell (b2). Never a move source or destination.
pub const CENTER: usize = 4;

/// Number of cells on the knight-move cycle.
pub const CYCLE_LEN: usize = 8;

/// Legal knight destinations for each cell. `None` only for the centre.
pub static KNIGHT_MOVES: [Option<[usize; 2]>; CELL_COUNT] = [
    Some([5, 7]),
    Some([6, 8]),
    Some([3, 7]),
    Some([2, 8]),
    None,
    Some([0, 6]),
    Some([1, 5]),
    Some([0, 2]),
    Some([1, 3]),
];

/// The eight non-centre cells in the order they are visited walking the knight
/// graph, which is a single 8-cycle.
pub static CYCLE_ORDER: [usize; CYCLE_LEN] = [6, 1, 8, 3, 2, 7, 0, 5];

/// Returns the two knight destinations from `cell`, or an empty slice for the centre.
#[inline]
pub fn destinations(cell: usize) -> &'static [usize] {
    match &KNIGHT_MOVES[cell] {
        Some(dests) => dests.as_slice(),
        None => &[],
    }
}

/// Returns true if a knight can move between the two cells in one step.
#[inline]
pub fn is_knight_move(from: usize, to: usize) -> bool {
    from < CELL_COUNT && destinations(from).contains(&to)
}

/// Returns the position of `cell` in `CYCLE_ORDER`, or `None` for the centre.
#[inline]
pub fn cycle_position(cell: usize) -> Option<usize> {
    CYCLE_ORDER.iter().position(|&c| c == cell)
}
