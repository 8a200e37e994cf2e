use super::super::grid::Grid;
use super::super::types::{Color, Coordinate};

pub(crate) fn pawn_moves(
    grid: &Grid,
    from: Coordinate,
    color: Color,
    moved: bool,
) -> Vec<Coordinate> {
    let mut moves = Vec::with_capacity(4);
    let dir = color.pawn_direction();

    // Diagonals only when there is something to take
    for dx in [-1, 1] {
        if let Some(to) = from.offset(dx, dir) {
            if grid.color_at(to) == Some(color.opponent()) {
                moves.push(to);
            }
        }
    }

    let Some(one) = from.offset(0, dir).filter(|&to| !grid.is_occupied(to)) else {
        return moves;
    };
    moves.push(one);

    if !moved {
        if let Some(two) = one.offset(0, dir).filter(|&to| !grid.is_occupied(to)) {
            moves.push(two);
        }
    }
    moves
}
