//! Legal move generation.
//!
//! A knight may jump to either of its two knight-move destinations when that
//! cell is empty. Successors are produced lazily in cell order, so calling
//! `successors` twice on equal boards yields the same sequence.

use rand::Rng;

use crate::board::{destinations, Board, CELL_COUNT, CENTER};

/// A single knight jump and the board it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: usize,
    pub to: usize,
    pub board: Board,
}

/// Lazy iterator over the successors of a board.
///
/// Yields at most eight moves: four knights with two destinations each,
/// minus any destination already occupied.
pub struct Successors {
    board: Board,
    cell: usize,
    slot: usize,
}

impl Iterator for Successors {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        while self.cell < CELL_COUNT {
            let from = self.cell;
            if from == CENTER || self.board.cell(from).is_empty() {
                self.cell += 1;
                self.slot = 0;
                continue;
            }

            let dests = destinations(from);
            while self.slot < dests.len() {
                let to = dests[self.slot];
                self.slot += 1;
                if self.board.cell(to).is_empty() {
                    return Some(Move {
                        from,
                        to,
                        board: self.board.with_move(from, to),
                    });
                }
            }

            self.cell += 1;
            self.slot = 0;
        }
        None
    }
}

/// Enumerates every legal successor of `board`.
pub fn successors(board: &Board) -> Successors {
    Successors {
        board: *board,
        cell: 0,
        slot: 0,
    }
}

/// Plays `steps` uniformly random legal moves starting from `board`.
///
/// Every reachable position has at least one legal move, so the walk never
/// stalls.
pub fn random_walk(board: &Board, steps: usize, rng: &mut impl Rng) -> Board {
    let mut current = *board;
    for _ in 0..steps {
        let moves: Vec<Move> = successors(&current).collect();
        if moves.is_empty() {
            break;
        }
        let idx = rng.gen_range(0..moves.len());
        current = moves[idx].board;
    }
    current
}
