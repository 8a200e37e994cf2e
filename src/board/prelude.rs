//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use cyberchess::board::prelude::*;
//!
//! let board = Board::default();
//! assert!(!board.is_checkmate(Color::White));
//! ```

pub use super::{
    Board, BoardBuilder, BoardConfig, BoardError, Color, Coordinate, Grid, Move, MoveRecord,
    Piece, PieceId, PieceType,
};
