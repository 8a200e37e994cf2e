//! Error types for board operations.

use std::fmt;

use super::types::{Color, Coordinate, PieceType};

/// Error type for board queries and commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A piece was required at a square that is empty
    NoPieceAt { square: Coordinate },
    /// The side has no king on the board
    NoKing { color: Color },
    /// The square does not hold a pawn waiting for promotion
    NotPromotable { square: Coordinate },
    /// Pawns can only become queen, rook, bishop or knight
    InvalidPromotion { piece: PieceType },
    /// Every instance number for this color and kind is taken
    InstancesExhausted { color: Color, piece: PieceType },
    /// Legacy uid that does not decode to a piece
    InvalidUid { uid: u16 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::NoPieceAt { square } => write!(f, "No piece at index {square}"),
            BoardError::NoKing { color } => write!(f, "No {color} king on the board"),
            BoardError::NotPromotable { square } => {
                write!(f, "No pawn awaiting promotion at {square}")
            }
            BoardError::InvalidPromotion { piece } => {
                write!(f, "Cannot promote a pawn to a {piece}")
            }
            BoardError::InstancesExhausted { color, piece } => {
                write!(f, "No free instance number for another {color} {piece}")
            }
            BoardError::InvalidUid { uid } => write!(f, "Invalid piece uid {uid}"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for coordinate parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// Coordinate outside the 8x8 grid
    OutOfBounds { x: i32, y: i32 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::OutOfBounds { x, y } => {
                write!(f, "Coordinate ({x}, {y}) out of bounds (must be 0-7)")
            }
            CoordinateError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

/// Error type for piece-placement layout strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Layout must describe exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character
    InvalidPiece { char: char },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// More pieces of one kind than instance numbers allow
    TooManyPieces { color: Color, piece: PieceType },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongRankCount { found } => {
                write!(f, "Layout must have 8 ranks, found {found}")
            }
            LayoutError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in layout")
            }
            LayoutError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            LayoutError::TooManyPieces { color, piece } => {
                write!(f, "Too many {color} {piece} pieces in layout")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Error type for malformed configuration, raised at construction time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Player type name not recognised
    UnknownPlayer { name: String },
    /// Tile size must be positive
    InvalidTileSize { size: i32 },
    /// Padding cannot be negative
    InvalidPadding { padding: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownPlayer { name } => {
                write!(f, "Unknown player type '{name}', expected 'human' or 'random AI'")
            }
            ConfigError::InvalidTileSize { size } => {
                write!(f, "Tile size must be positive, found {size}")
            }
            ConfigError::InvalidPadding { padding } => {
                write!(f, "Padding must not be negative, found {padding}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
