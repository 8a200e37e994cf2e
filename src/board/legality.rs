//! Check detection and the legal move filter.
//!
//! Legality is decided by brute force: every raw move is played on a scratch
//! grid and rejected if it leaves the mover's king attacked. With at most 32
//! pieces this is cheap enough to run on every query.

use super::grid::Grid;
use super::movegen::raw_moves;
use super::state::Board;
use super::types::{Color, Coordinate, Move};

impl Board {
    /// Whether any opposing piece on `grid` attacks `color`'s king.
    #[must_use]
    pub fn is_king_checked(&self, grid: &Grid, color: Color) -> bool {
        let Some(king) = grid.king(color) else {
            return false;
        };
        grid.pieces_of(color.opponent())
            .any(|(from, id)| raw_moves(grid, from, id, self.moved_flag(id)).contains(&king))
    }

    /// Every move `color` may make on `grid` without exposing its own king.
    ///
    /// Castles are included when `grid` still holds the registry's king.
    #[must_use]
    pub fn get_possible_moves(&self, grid: &Grid, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, id) in grid.pieces_of(color) {
            for to in raw_moves(grid, from, id, self.moved_flag(id)) {
                let mv = Move::new(from, to);
                if !self.is_king_checked(&grid.simulate_move(mv), color) {
                    moves.push(mv);
                }
            }
        }
        if let Some(king) = self.king(color).filter(|k| grid.get(k.pos()) == Some(k.id())) {
            moves.extend(self.get_castle_moves(grid, king));
        }
        moves
    }

    /// Legal moves for `color` in the live position.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.get_possible_moves(&self.grid, color)
    }

    /// Legal destinations for the piece on `from`, for highlighting.
    #[must_use]
    pub fn legal_destinations(&self, from: Coordinate) -> Vec<Coordinate> {
        let Some(color) = self.grid.color_at(from) else {
            return Vec::new();
        };
        self.legal_moves(color)
            .into_iter()
            .filter(|mv| mv.from == from)
            .map(|mv| mv.to)
            .collect()
    }

    /// `grid` with `mv` applied; `grid` itself is left untouched.
    #[inline]
    #[must_use]
    pub fn simulate_move(grid: &Grid, mv: Move) -> Grid {
        grid.simulate_move(mv)
    }

    /// Checked and without a legal reply.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_checked(color) && self.legal_moves(color).is_empty()
    }

    /// Not in check, yet nothing to play.
    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_king_checked(&self.grid, color) && self.legal_moves(color).is_empty()
    }
}
