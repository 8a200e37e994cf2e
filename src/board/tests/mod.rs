//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `types.rs` - coordinates, piece ids, grid layout and screen geometry
//! - `movegen.rs` - raw move generation per piece type
//! - `check.rs` - check detection, legal move filter, checkmate
//! - `castling.rs` - castle availability and execution
//! - `make_move.rs` - move execution, captures, history, selection
//! - `promotion.rs` - promotion detection and replacement
//! - `proptest.rs` - Property-based tests over random games

mod types;

use super::{Board, BoardBuilder, Coordinate, Move};

/// Parse algebraic notation, e.g. `sq("e2") == Coordinate::new(4, 6)`.
pub(super) fn sq(s: &str) -> Coordinate {
    s.parse().unwrap()
}

pub(super) fn mv(from: &str, to: &str) -> Move {
    Move::new(sq(from), sq(to))
}

/// Board from a piece-placement string, row 0 (rank 8) first.
pub(super) fn board(placement: &str) -> Board {
    BoardBuilder::from_placement(placement)
        .unwrap()
        .build()
        .unwrap()
}

/// Sorted raw destinations of the piece on `from`.
pub(super) fn raw_targets(board: &Board, from: &str) -> Vec<Coordinate> {
    let mut targets = board.piece_at(sq(from)).unwrap().possible_moves(board.grid());
    targets.sort();
    targets
}

pub(super) fn squares(list: &[&str]) -> Vec<Coordinate> {
    let mut out: Vec<Coordinate> = list.iter().map(|s| sq(s)).collect();
    out.sort();
    out
}
