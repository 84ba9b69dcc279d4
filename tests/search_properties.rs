//! Whole-state-space properties of the board model, heuristic and search.
//!
//! The reachable space is small (280 positions), so these tests enumerate it
//! exhaustively with a breadth-first search from the goal and compare the
//! library against those exact distances.

use std::collections::{HashMap, HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::SeedableRng;

use fourknights::board::{is_knight_move, Board, Piece, ALL_KNIGHTS, CENTER};
use fourknights::eval::heuristic;
use fourknights::movegen::{random_walk, successors};
use fourknights::search::{solve, Algorithm, Session, TieBreak, DEFAULT_CAPACITY};

/// Exact move distance from every reachable board to `target`.
///
/// Knight jumps are reversible, so distances from the target equal
/// distances to it.
fn bfs_distances(target: Board) -> HashMap<Board, u32> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(target, 0);
    queue.push_back(target);
    while let Some(board) = queue.pop_front() {
        let d = dist[&board];
        for m in successors(&board) {
            if !dist.contains_key(&m.board) {
                dist.insert(m.board, d + 1);
                queue.push_back(m.board);
            }
        }
    }
    dist
}

fn assert_legal_path(path: &[Board]) {
    for pair in path.windows(2) {
        let legal = successors(&pair[0]).any(|m| m.board == pair[1]);
        assert!(legal, "illegal transition\n{}->\n{}", pair[0], pair[1]);
    }
}

#[test]
fn reachable_space_has_280_positions() {
    let dist = bfs_distances(Board::goal());
    assert_eq!(dist.len(), 280);
    assert_eq!(dist[&Board::initial()], 16);
    assert_eq!(dist.values().copied().max(), Some(16));
}

#[test]
fn every_reachable_board_keeps_four_distinct_knights() {
    for board in bfs_distances(Board::initial()).keys() {
        assert_eq!(board.cell(CENTER), Piece::Empty);
        let occupied = board.cells().iter().filter(|c| !c.is_empty()).count();
        assert_eq!(occupied, 4);
        for knight in ALL_KNIGHTS {
            assert_eq!(board.cells().iter().filter(|&&c| c == knight).count(), 1);
        }
    }
}

#[test]
fn fingerprint_is_injective_over_reachable_space() {
    let boards: Vec<Board> = bfs_distances(Board::initial()).into_keys().collect();
    let fingerprints: HashSet<u32> = boards.iter().map(|b| b.fingerprint()).collect();
    assert_eq!(fingerprints.len(), boards.len());

    for board in &boards {
        let copy = Board::from_cells(*board.cells()).unwrap();
        assert_eq!(copy.fingerprint(), board.fingerprint());
    }
}

#[test]
fn heuristic_is_admissible() {
    let goal = Board::goal();
    for (board, d) in bfs_distances(goal) {
        let h = heuristic(&board, &goal);
        assert!(h <= d, "h={} exceeds true distance {} for\n{}", h, d, board);
    }
}

#[test]
fn heuristic_is_consistent() {
    let goal = Board::goal();
    for board in bfs_distances(goal).keys() {
        let h = heuristic(board, &goal);
        for m in successors(board) {
            assert!(h <= heuristic(&m.board, &goal) + 1);
        }
    }
}

#[test]
fn every_transition_follows_the_adjacency_table() {
    for board in bfs_distances(Board::goal()).keys() {
        for m in successors(board) {
            assert!(is_knight_move(m.from, m.to));
        }
    }
}

#[test]
fn astar_is_optimal_from_scrambled_starts() {
    let goal = Board::goal();
    let dist = bfs_distances(goal);
    for seed in 1..=25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = random_walk(&goal, 40, &mut rng);
        let mut session = Session::new(start, goal, DEFAULT_CAPACITY, TieBreak::Heap);
        let solution = solve(&mut session, Algorithm::AStar).unwrap();
        assert_eq!(solution.moves, dist[&start], "seed {}", seed);
        assert_eq!(solution.path.len() as u32, solution.moves + 1);
        assert_legal_path(&solution.path);
    }
}

#[test]
fn branch_and_bound_reaches_goal_from_scrambled_starts() {
    let goal = Board::goal();
    for seed in 1..=25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = random_walk(&goal, 40, &mut rng);
        let mut session = Session::new(start, goal, DEFAULT_CAPACITY, TieBreak::Heap);
        let solution = solve(&mut session, Algorithm::BranchAndBound).unwrap();
        assert_eq!(solution.path.first(), Some(&start));
        assert_eq!(solution.path.last(), Some(&goal));
        assert_legal_path(&solution.path);
    }
}

#[test]
fn shared_session_reset_between_algorithms() {
    let mut session = Session::new(Board::initial(), Board::goal(), DEFAULT_CAPACITY, TieBreak::Heap);
    let astar = solve(&mut session, Algorithm::AStar).unwrap();
    session.reset();
    let bnb = solve(&mut session, Algorithm::BranchAndBound).unwrap();

    assert_eq!(astar.moves, 16);
    assert_eq!(bnb.path.first(), Some(&Board::initial()));
    assert_eq!(bnb.path.last(), Some(&Board::goal()));
    assert_legal_path(&bnb.path);
    assert_eq!(session.solution_path(), bnb.path.as_slice());
}

#[test]
fn both_tie_breaks_find_shortest_path() {
    for tie_break in [TieBreak::Heap, TieBreak::LowestFingerprint] {
        let mut session = Session::new(Board::initial(), Board::goal(), DEFAULT_CAPACITY, tie_break);
        let solution = solve(&mut session, Algorithm::AStar).unwrap();
        assert_eq!(solution.moves, 16, "{:?}", tie_break);
    }
}
