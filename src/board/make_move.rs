use super::error::BoardError;
use super::state::Board;
use super::types::{Move, MoveRecord, PieceId};

impl Board {
    /// Execute `mv` without checking that it is legal.
    ///
    /// Fails only when `mv.from` is empty. Castles are recognised by a king
    /// moving two columns toward an unmoved rook of its own color. The
    /// selection is cleared and both kings' check flags are re-evaluated.
    pub fn make_move(&mut self, mv: Move) -> Result<MoveRecord, BoardError> {
        let id = self
            .grid
            .get(mv.from)
            .ok_or(BoardError::NoPieceAt { square: mv.from })?;
        let color = id.color;

        // Whatever check we were in is assumed handled by this move
        self.set_check_flag(color, false);

        let mut record = match self.castle_side(id, mv) {
            Some(side) => self.execute_castle(id, mv, side),
            None => self.plain_move(id, mv),
        };

        self.selected = None;
        self.refresh_check_flags();
        record.check = self.is_checked(color.opponent());
        if record.check {
            log::debug!("{} king in check after {record}", color.opponent());
        }
        self.history.push(record.clone());
        Ok(record)
    }

    fn plain_move(&mut self, id: PieceId, mv: Move) -> MoveRecord {
        let captured = self.grid.get(mv.to);
        if let Some(victim) = captured {
            if let Some(piece) = self.pieces.remove(&victim) {
                log::debug!("{} captured {} on {}", id.color, victim.kind, mv.to);
                self.captured.push(piece);
            }
        }

        self.grid.set(mv.from, None);
        self.grid.set(mv.to, Some(id));
        if let Some(piece) = self.pieces.get_mut(&id) {
            piece.pos = mv.to;
            piece.moved = true;
        }

        MoveRecord {
            piece: id,
            from: mv.from,
            to: mv.to,
            captured,
            castle: None,
            promotion: None,
            check: false,
        }
    }
}
