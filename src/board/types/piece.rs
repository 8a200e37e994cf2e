//! Piece, piece identity and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Coordinate;
use crate::board::error::BoardError;
use crate::board::grid::Grid;
use crate::board::movegen;

/// Chess piece types, numbered as in the legacy uid encoding.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    /// All piece types in uid order
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Legacy uid digit (1..=6)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Rook => 2,
            PieceType::Knight => 3,
            PieceType::Bishop => 4,
            PieceType::Queen => 5,
            PieceType::King => 6,
        }
    }

    #[must_use]
    pub const fn from_code(code: u16) -> Option<PieceType> {
        match code {
            1 => Some(PieceType::Pawn),
            2 => Some(PieceType::Rook),
            3 => Some(PieceType::Knight),
            4 => Some(PieceType::Bishop),
            5 => Some(PieceType::Queen),
            6 => Some(PieceType::King),
            _ => None,
        }
    }

    /// Parse a piece from a character (p, r, n, b, q, k), either case
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'r' => Some(PieceType::Rook),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Rook => 'r',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    /// Whether a pawn may be promoted to this type
    #[inline]
    #[must_use]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceType::Queen | PieceType::Rook | PieceType::Bishop | PieceType::Knight
        )
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceType::Pawn => "pawn",
            PieceType::Rook => "rook",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        };
        f.write_str(name)
    }
}

/// Promotion choices offered to a player, queen first
pub const PROMOTION_CHOICES: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

/// Piece colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, white first
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Legacy uid digit (black = 1, white = 2)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Color::Black => 1,
            Color::White => 2,
        }
    }

    #[must_use]
    pub const fn from_code(code: u16) -> Option<Color> {
        match code {
            1 => Some(Color::Black),
            2 => Some(Color::White),
            _ => None,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step (white moves toward row 0)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn pawn_start_row(self) -> i32 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// The opponent's back rank
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> i32 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// The row this color's king and rooks start on
    #[inline]
    #[must_use]
    pub const fn home_row(self) -> i32 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Identity of a live piece: which instance of which kind for which side.
///
/// The grid stores these as handles into the board's piece registry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId {
    pub instance: u8,
    pub color: Color,
    pub kind: PieceType,
}

impl PieceId {
    #[inline]
    #[must_use]
    pub const fn new(instance: u8, color: Color, kind: PieceType) -> Self {
        PieceId {
            instance,
            color,
            kind,
        }
    }

    /// Legacy `{instance}{color}{type}` integer, e.g. 126 for the white king.
    #[inline]
    #[must_use]
    pub const fn uid(self) -> u16 {
        self.instance as u16 * 100 + self.color.code() * 10 + self.kind.code()
    }

    /// Decode a legacy uid.
    pub fn from_uid(uid: u16) -> Result<Self, BoardError> {
        let instance = uid / 100;
        let color = Color::from_code(uid / 10 % 10);
        let kind = PieceType::from_code(uid % 10);
        match (instance, color, kind) {
            (1..=9, Some(color), Some(kind)) => Ok(PieceId::new(instance as u8, color, kind)),
            _ => Err(BoardError::InvalidUid { uid }),
        }
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} #{}", self.color, self.kind, self.instance)
    }
}

/// A piece owned by the board's registry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub(crate) id: PieceId,
    pub(crate) pos: Coordinate,
    pub(crate) moved: bool,
    pub(crate) checked: bool,
}

impl Piece {
    #[must_use]
    pub const fn new(id: PieceId, pos: Coordinate) -> Self {
        Piece {
            id,
            pos,
            moved: false,
            checked: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.id.color
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceType {
        self.id.kind
    }

    #[inline]
    #[must_use]
    pub const fn pos(&self) -> Coordinate {
        self.pos
    }

    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.pos.row()
    }

    #[inline]
    #[must_use]
    pub const fn col(&self) -> usize {
        self.pos.col()
    }

    /// Whether the piece has moved since the game started
    #[inline]
    #[must_use]
    pub const fn has_moved(&self) -> bool {
        self.moved
    }

    /// Check flag; only ever set on kings
    #[inline]
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Raw destinations on `grid`, ignoring king safety.
    #[must_use]
    pub fn possible_moves(&self, grid: &Grid) -> Vec<Coordinate> {
        movegen::raw_moves(grid, self.pos, self.id, self.moved)
    }
}
