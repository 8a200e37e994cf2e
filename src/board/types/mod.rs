//! Core board types.
//!
//! - `Coordinate` - grid positions and pixel-space vectors
//! - `Piece`, `PieceId`, `PieceType` and `Color` - piece model
//! - `Move`, `MoveRecord` and `CastleSide` - move representation

mod coord;
mod moves;
mod piece;

pub use coord::{Coordinate, BOARD_SIZE};
pub use moves::{CastleSide, Move, MoveRecord};
pub use piece::{Color, Piece, PieceId, PieceType, PROMOTION_CHOICES};
