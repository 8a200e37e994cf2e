//! The 8x8 occupancy grid.
//!
//! Cells hold `PieceId` handles into the board's registry, never pieces.
//! Grids are `Copy`, so legality checks simulate moves on scratch copies
//! without touching the live board.

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{CastleSide, Color, Coordinate, Move, PieceId, PieceType, BOARD_SIZE};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

static STARTING_GRID: Lazy<Grid> = Lazy::new(|| {
    let mut grid = Grid::empty();
    for color in Color::BOTH {
        let home = color.home_row();
        let pawns = color.pawn_start_row();
        let mut counts = [0u8; 6];
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let slot = &mut counts[kind.code() as usize - 1];
            *slot += 1;
            let id = PieceId::new(*slot, color, *kind);
            grid.set(Coordinate::new(col as i32, home), Some(id));
        }
        for col in 0..BOARD_SIZE {
            let id = PieceId::new(col as u8 + 1, color, PieceType::Pawn);
            grid.set(Coordinate::new(col, pawns), Some(id));
        }
    }
    grid
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    cells: [[Option<PieceId>; 8]; 8],
}

impl Grid {
    #[must_use]
    pub const fn empty() -> Self {
        Grid {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard initial layout.
    #[must_use]
    pub fn starting() -> Self {
        *STARTING_GRID
    }

    /// Occupant of `pos`; off-board coordinates are empty.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Coordinate) -> Option<PieceId> {
        if pos.in_bounds() {
            self.cells[pos.row()][pos.col()]
        } else {
            None
        }
    }

    /// Off-board writes are ignored.
    #[inline]
    pub fn set(&mut self, pos: Coordinate, id: Option<PieceId>) {
        if pos.in_bounds() {
            self.cells[pos.row()][pos.col()] = id;
        }
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, pos: Coordinate) -> bool {
        self.get(pos).is_some()
    }

    #[inline]
    #[must_use]
    pub fn color_at(&self, pos: Coordinate) -> Option<Color> {
        self.get(pos).map(|id| id.color)
    }

    /// Occupied cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, PieceId)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|id| (Coordinate::new(col as i32, row as i32), id))
            })
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Coordinate, PieceId)> + '_ {
        self.iter().filter(move |(_, id)| id.color == color)
    }

    #[must_use]
    pub fn find(&self, id: PieceId) -> Option<Coordinate> {
        self.iter().find(|(_, cell)| *cell == id).map(|(pos, _)| pos)
    }

    /// Position of `color`'s king, if it is on this grid.
    #[must_use]
    pub fn king(&self, color: Color) -> Option<Coordinate> {
        self.pieces_of(color)
            .find(|(_, id)| id.kind == PieceType::King)
            .map(|(pos, _)| pos)
    }

    /// A copy of this grid with `mv` applied.
    ///
    /// King moves of two columns also carry the matching rook across, so a
    /// castle looks the same here as on the live board.
    #[must_use]
    pub fn simulate_move(&self, mv: Move) -> Grid {
        let mut next = *self;
        let Some(id) = next.get(mv.from) else {
            return next;
        };
        next.set(mv.from, None);
        next.set(mv.to, Some(id));
        if id.kind == PieceType::King && mv.from.y == mv.to.y {
            if let Some(side) = CastleSide::from_direction(mv.dx()) {
                let rook_from = Coordinate::new(side.rook_col(), mv.from.y);
                let rook_to = Coordinate::new(mv.to.x - side.direction(), mv.to.y);
                if let Some(rook) = next.get(rook_from).filter(|r| r.kind == PieceType::Rook) {
                    next.set(rook_from, None);
                    next.set(rook_to, Some(rook));
                }
            }
        }
        next
    }

    /// Legacy integer layout: 0 for empty, the piece uid otherwise.
    #[must_use]
    pub fn to_uids(&self) -> [[u16; 8]; 8] {
        let mut out = [[0; 8]; 8];
        for (pos, id) in self.iter() {
            out[pos.row()][pos.col()] = id.uid();
        }
        out
    }
}
