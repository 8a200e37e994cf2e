use super::grid::Grid;
use super::movegen::sliders::ray;
use super::state::Board;
use super::types::{CastleSide, Coordinate, Move, MoveRecord, Piece, PieceId, PieceType};

impl Board {
    /// Castle moves available to `king` on `grid`, at most one per side.
    #[must_use]
    pub fn get_castle_moves(&self, grid: &Grid, king: &Piece) -> Vec<Move> {
        if king.kind() != PieceType::King
            || king.has_moved()
            || self.is_king_checked(grid, king.color())
        {
            return Vec::new();
        }
        CastleSide::BOTH
            .into_iter()
            .filter_map(|side| self.castle_move(grid, king, side))
            .collect()
    }

    fn castle_move(&self, grid: &Grid, king: &Piece, side: CastleSide) -> Option<Move> {
        let color = king.color();
        let from = king.pos();
        let rook_pos = Coordinate::new(side.rook_col(), from.y);
        self.castling_rook(grid, king.id(), rook_pos)?;

        // A rook's ray from the king must run straight into our rook
        let mut path = Vec::new();
        ray(grid, from, color, (side.direction(), 0), None, &mut path);
        // The king lands strictly between its start and the rook
        let gap = (rook_pos.x - from.x).unsigned_abs() as usize - 1;
        if gap < 2 || path.len() != gap || path.iter().any(|&cell| grid.is_occupied(cell)) {
            return None;
        }

        let cross = from.offset(side.direction(), 0)?;
        let land = from.offset(2 * side.direction(), 0)?;
        let exposed = [cross, land]
            .into_iter()
            .any(|step| self.is_king_checked(&grid.simulate_move(Move::new(from, step)), color));
        (!exposed).then_some(Move::new(from, land))
    }

    /// Unmoved rook of the king's color on `rook_pos`.
    fn castling_rook(&self, grid: &Grid, king: PieceId, rook_pos: Coordinate) -> Option<PieceId> {
        grid.get(rook_pos)
            .filter(|id| id.kind == PieceType::Rook && id.color == king.color)
            .filter(|id| !self.moved_flag(*id))
    }

    /// Side being castled when `king` plays `mv`, if it is a castle at all.
    pub(crate) fn castle_side(&self, king: PieceId, mv: Move) -> Option<CastleSide> {
        if king.kind != PieceType::King || mv.from.y != mv.to.y || self.moved_flag(king) {
            return None;
        }
        let side = CastleSide::from_direction(mv.dx())?;
        if (side.rook_col() - mv.from.x).abs() < 3 {
            return None;
        }
        self.castling_rook(&self.grid, king, Coordinate::new(side.rook_col(), mv.from.y))
            .map(|_| side)
    }

    /// Move king and rook together.
    pub(crate) fn execute_castle(&mut self, king: PieceId, mv: Move, side: CastleSide) -> MoveRecord {
        let rook_from = Coordinate::new(side.rook_col(), mv.from.y);
        let rook_to = Coordinate::new(mv.to.x - side.direction(), mv.to.y);
        let rook = self.grid.get(rook_from);

        self.grid = self.grid.simulate_move(mv);
        if let Some(piece) = self.pieces.get_mut(&king) {
            piece.pos = mv.to;
            piece.moved = true;
        }
        if let Some(piece) = rook.and_then(|id| self.pieces.get_mut(&id)) {
            piece.pos = rook_to;
            piece.moved = true;
        }

        self.narrator
            .log(&format!("{} castles {side}", king.color));
        log::debug!("castle {side}: king {mv}, rook {rook_from}-{rook_to}");

        MoveRecord {
            piece: king,
            from: mv.from,
            to: mv.to,
            captured: None,
            castle: Some(side),
            promotion: None,
            check: false,
        }
    }
}
