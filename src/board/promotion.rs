use super::error::BoardError;
use super::state::Board;
use super::types::{Color, Coordinate, Piece, PieceId, PieceType};

/// Highest instance number a legacy three-digit uid can carry
const MAX_INSTANCE: u8 = 9;

impl Board {
    /// A pawn of `color` standing on the opponent's back rank.
    #[must_use]
    pub fn promotions(&self, color: Color) -> Option<&Piece> {
        self.pieces_for_color(color)
            .find(|p| p.kind() == PieceType::Pawn && p.pos().y == color.promotion_row())
    }

    /// Replace the pawn on `square` with a new piece of `kind`.
    ///
    /// The pawn leaves the registry and the new piece takes the lowest
    /// instance number never used by that color and kind, so ids stay unique
    /// across the captured list too. The most recent history entry, when it
    /// is this color's move, gets the recomputed check bit, and the promotion
    /// itself only when that move was the pawn's arrival on `square`.
    pub fn promote(&mut self, square: Coordinate, kind: PieceType) -> Result<PieceId, BoardError> {
        if !kind.is_promotion_choice() {
            return Err(BoardError::InvalidPromotion { piece: kind });
        }
        let pawn = self
            .grid
            .get(square)
            .filter(|id| id.kind == PieceType::Pawn && square.y == id.color.promotion_row())
            .ok_or(BoardError::NotPromotable { square })?;
        let color = pawn.color;
        let id = self.free_id(color, kind)?;

        self.pieces.remove(&pawn);
        let mut piece = Piece::new(id, square);
        piece.moved = true;
        self.pieces.insert(id, piece);
        self.grid.set(square, Some(id));

        self.refresh_check_flags();
        let check = self.is_checked(color.opponent());
        if let Some(last) = self.history.last_mut().filter(|r| r.piece.color == color) {
            if last.piece == pawn && last.to == square {
                last.promotion = Some(kind);
            }
            last.check = check;
        }

        self.narrator
            .log(&format!("{color} pawn promoted to {kind} on {square}"));
        Ok(id)
    }

    fn free_id(&self, color: Color, kind: PieceType) -> Result<PieceId, BoardError> {
        (1..=MAX_INSTANCE)
            .map(|n| PieceId::new(n, color, kind))
            .find(|id| {
                !self.pieces.contains_key(id) && !self.captured.iter().any(|p| p.id() == *id)
            })
            .ok_or(BoardError::InstancesExhausted { color, piece: kind })
    }
}
