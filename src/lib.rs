//! Rules engine for a two-player chess game.
//!
//! [`board`] tracks pieces, generates and filters moves, and executes them
//! (castling and promotion included). [`player`] turns clicks or random
//! choices into moves, and [`game`] alternates turns until checkmate.

pub mod board;
pub mod game;
pub mod player;
pub mod sync;

pub use board::{Board, Color, Coordinate, Move, Piece, PieceType};
pub use game::{Game, GameConfig, GameState, Outcome};
pub use player::{HumanPlayer, Player, PlayerKind, RandomPlayer};
pub use sync::SharedGame;
