//! Board representation and rules.
//!
//! The board owns every live piece in a registry keyed by [`PieceId`] and
//! mirrors their placement in an 8x8 [`Grid`] of ids. Raw moves come from
//! per-piece generators; legality is decided by simulating each move on a
//! copy of the grid and rejecting those that leave the mover's king attacked.
//!
//! # Example
//! ```
//! use cyberchess::board::{Board, Color, Coordinate, Move};
//!
//! let mut board = Board::default();
//! let moves = board.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//!
//! let e2e4 = Move::new(Coordinate::new(4, 6), Coordinate::new(4, 4));
//! assert!(moves.contains(&e2e4));
//! board.make_move(e2e4).unwrap();
//! ```

mod builder;
mod castling;
mod config;
mod display;
mod error;
mod grid;
mod legality;
mod make_move;
mod movegen;
mod narrator;
pub mod prelude;
mod promotion;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use config::{BoardConfig, DEFAULT_TILE_SIZE};
pub use error::{BoardError, ConfigError, CoordinateError, LayoutError};
pub use grid::Grid;
pub use narrator::{LogNarrator, MemoryNarrator, Narrator, NarratorHandle};
pub use state::Board;
pub use types::{
    CastleSide, Color, Coordinate, Move, MoveRecord, Piece, PieceId, PieceType, BOARD_SIZE,
    PROMOTION_CHOICES,
};
