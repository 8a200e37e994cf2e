//! Raw move generation.
//!
//! Every generator is a pure function of the grid and the moving piece. King
//! safety is ignored here; the board filters the results.

mod kings;
mod knights;
mod pawns;
pub(crate) mod sliders;

use super::grid::Grid;
use super::types::{Coordinate, PieceId, PieceType};
use sliders::SliderType;

/// Destinations reachable by the piece `id` standing on `from`.
pub(crate) fn raw_moves(grid: &Grid, from: Coordinate, id: PieceId, moved: bool) -> Vec<Coordinate> {
    let color = id.color;
    match id.kind {
        PieceType::Pawn => pawns::pawn_moves(grid, from, color, moved),
        PieceType::Knight => knights::knight_moves(grid, from, color),
        PieceType::Bishop => sliders::slider_moves(grid, from, color, SliderType::Bishop),
        PieceType::Rook => sliders::slider_moves(grid, from, color, SliderType::Rook),
        PieceType::Queen => sliders::slider_moves(grid, from, color, SliderType::Queen),
        PieceType::King => kings::king_moves(grid, from, color),
    }
}
