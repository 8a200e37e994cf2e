//! Move representation and move history records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Coordinate, PieceId, PieceType};

/// A request to move whatever stands on `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Coordinate,
    pub to: Coordinate,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Coordinate, to: Coordinate) -> Self {
        Move { from, to }
    }

    /// Column distance travelled, signed
    #[inline]
    #[must_use]
    pub const fn dx(self) -> i32 {
        self.to.x - self.from.x
    }
}

impl From<(Coordinate, Coordinate)> for Move {
    fn from((from, to): (Coordinate, Coordinate)) -> Self {
        Move::new(from, to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Which rook takes part in a castle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Queenside, CastleSide::Kingside];

    /// Column direction the king travels
    #[inline]
    #[must_use]
    pub const fn direction(self) -> i32 {
        match self {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        }
    }

    /// Starting column of this side's rook
    #[inline]
    #[must_use]
    pub const fn rook_col(self) -> i32 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    #[must_use]
    pub const fn from_direction(dx: i32) -> Option<CastleSide> {
        match dx {
            2 => Some(CastleSide::Kingside),
            -2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::Kingside => write!(f, "kingside"),
            CastleSide::Queenside => write!(f, "queenside"),
        }
    }
}

/// What an executed move did, kept in the board's history.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub piece: PieceId,
    pub from: Coordinate,
    pub to: Coordinate,
    pub captured: Option<PieceId>,
    pub castle: Option<CastleSide>,
    pub promotion: Option<PieceType>,
    /// The move left the opponent's king in check
    pub check: bool,
}

impl MoveRecord {
    #[inline]
    #[must_use]
    pub const fn as_move(&self) -> Move {
        Move::new(self.from, self.to)
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.castle {
            Some(CastleSide::Kingside) => f.write_str("O-O")?,
            Some(CastleSide::Queenside) => f.write_str("O-O-O")?,
            None => {
                let sep = if self.captured.is_some() { 'x' } else { '-' };
                let piece = match self.piece.kind {
                    PieceType::Pawn => String::new(),
                    kind => kind.to_char().to_ascii_uppercase().to_string(),
                };
                write!(f, "{piece}{}{sep}{}", self.from, self.to)?;
            }
        }
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.to_char().to_ascii_uppercase())?;
        }
        Ok(())
    }
}
