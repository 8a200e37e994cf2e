use super::super::grid::Grid;
use super::super::types::{Color, Coordinate};

pub(crate) const ORTHOGONALS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
pub(crate) const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];
pub(crate) const ALL_DIRECTIONS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (1, 1),
    (-1, 1),
];

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    pub(crate) const fn directions(self) -> &'static [(i32, i32)] {
        match self {
            SliderType::Bishop => &DIAGONALS,
            SliderType::Rook => &ORTHOGONALS,
            SliderType::Queen => &ALL_DIRECTIONS,
        }
    }
}

/// Walk one ray from `from`, at most `limit` steps.
///
/// Empty cells are pushed; the first occupied cell ends the ray and is pushed
/// only when it holds a piece of the other color.
pub(crate) fn ray(
    grid: &Grid,
    from: Coordinate,
    color: Color,
    (dx, dy): (i32, i32),
    limit: Option<usize>,
    out: &mut Vec<Coordinate>,
) {
    let mut pos = from;
    let mut steps = 0;
    while limit.map_or(true, |max| steps < max) {
        let Some(next) = pos.offset(dx, dy) else {
            break;
        };
        steps += 1;
        match grid.color_at(next) {
            None => out.push(next),
            Some(occupant) => {
                if occupant != color {
                    out.push(next);
                }
                break;
            }
        }
        pos = next;
    }
}

pub(crate) fn cast_rays(
    grid: &Grid,
    from: Coordinate,
    color: Color,
    directions: &[(i32, i32)],
    limit: Option<usize>,
) -> Vec<Coordinate> {
    let mut moves = Vec::new();
    for &dir in directions {
        ray(grid, from, color, dir, limit, &mut moves);
    }
    moves
}

pub(crate) fn slider_moves(
    grid: &Grid,
    from: Coordinate,
    color: Color,
    slider: SliderType,
) -> Vec<Coordinate> {
    cast_rays(grid, from, color, slider.directions(), None)
}
