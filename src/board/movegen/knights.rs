use super::super::grid::Grid;
use super::super::types::{Color, Coordinate};

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
];

pub(crate) fn knight_moves(grid: &Grid, from: Coordinate, color: Color) -> Vec<Coordinate> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| from.offset(dx, dy))
        .filter(|&to| grid.color_at(to) != Some(color))
        .collect()
}
