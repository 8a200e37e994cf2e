use super::super::grid::Grid;
use super::super::types::{Color, Coordinate};
use super::sliders::{cast_rays, ALL_DIRECTIONS};

/// Queen rays cut down to a single step.
pub(crate) fn king_moves(grid: &Grid, from: Coordinate, color: Color) -> Vec<Coordinate> {
    cast_rays(grid, from, color, &ALL_DIRECTIONS, Some(1))
}
