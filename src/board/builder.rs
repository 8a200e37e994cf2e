//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece, or from a piece-placement
//! string in the style of a FEN board field.
//!
//! # Example
//! ```
//! use cyberchess::board::{BoardBuilder, Color, Coordinate, PieceType};
//!
//! let board = BoardBuilder::new()
//!     .piece(Coordinate::new(4, 7), Color::White, PieceType::King)
//!     .piece(Coordinate::new(4, 0), Color::Black, PieceType::King)
//!     .piece(Coordinate::new(0, 6), Color::White, PieceType::Pawn)
//!     .build()
//!     .unwrap();
//! assert!(board.is_consistent());
//! ```

use super::config::BoardConfig;
use super::error::LayoutError;
use super::grid::Grid;
use super::state::Board;
use super::types::{Color, Coordinate, PieceId, PieceType, BOARD_SIZE};

const MAX_INSTANCES: u8 = 9;

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Coordinate, Color, PieceType)>,
    moved: Vec<Coordinate>,
    config: BoardConfig,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            moved: Vec::new(),
            config: BoardConfig::default(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        builder.pieces = Grid::starting()
            .iter()
            .map(|(pos, id)| (pos, id.color, id.kind))
            .collect();
        builder
    }

    /// Parse a piece-placement string: eight ranks separated by `/`, row 0
    /// (black's home rank) first, uppercase for white, digits for runs of
    /// empty cells. `"4k3/8/8/8/8/8/8/4K3"` is a bare-kings position.
    pub fn from_placement(placement: &str) -> Result<Self, LayoutError> {
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != BOARD_SIZE as usize {
            return Err(LayoutError::WrongRankCount { found: ranks.len() });
        }

        let mut builder = Self::new();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(run) = c.to_digit(10) {
                    col += run as usize;
                } else {
                    let kind = PieceType::from_char(c).ok_or(LayoutError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if col < BOARD_SIZE as usize {
                        builder
                            .pieces
                            .push((Coordinate::new(col as i32, row as i32), color, kind));
                    }
                    col += 1;
                }
                if col > BOARD_SIZE as usize {
                    return Err(LayoutError::TooManyFiles { rank: row, files: col });
                }
            }
        }
        Ok(builder)
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, pos: Coordinate, color: Color, kind: PieceType) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(p, _, _)| *p != pos);
        self.pieces.push((pos, color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, pos: Coordinate) -> Self {
        self.pieces.retain(|(p, _, _)| *p != pos);
        self
    }

    /// Mark the piece on `pos` as having moved already.
    #[must_use]
    pub fn moved(mut self, pos: Coordinate) -> Self {
        self.moved.push(pos);
        self
    }

    #[must_use]
    pub fn config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the board.
    ///
    /// Instance numbers are handed out per color and kind in placement
    /// order. Pawns away from their starting row count as moved.
    pub fn build(mut self) -> Result<Board, LayoutError> {
        self.pieces.sort_by_key(|(pos, _, _)| (pos.y, pos.x));

        let mut grid = Grid::empty();
        let mut counts = [[0u8; 6]; 2];
        for &(pos, color, kind) in &self.pieces {
            let slot = &mut counts[color.index()][kind.code() as usize - 1];
            if *slot == MAX_INSTANCES {
                return Err(LayoutError::TooManyPieces { color, piece: kind });
            }
            *slot += 1;
            grid.set(pos, Some(PieceId::new(*slot, color, kind)));
        }

        let mut board = Board::from_grid(grid, self.config);
        for piece in board.pieces.values_mut() {
            let stray_pawn =
                piece.kind() == PieceType::Pawn && piece.pos.y != piece.color().pawn_start_row();
            if stray_pawn || self.moved.contains(&piece.pos) {
                piece.moved = true;
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build().unwrap();
        let standard = Board::default();

        assert_eq!(built.grid(), standard.grid());
    }

    #[test]
    fn test_empty_board() {
        let board = BoardBuilder::new()
            .piece(Coordinate::new(4, 7), Color::White, PieceType::King)
            .piece(Coordinate::new(4, 0), Color::Black, PieceType::King)
            .build()
            .unwrap();

        assert!(board.piece_at(Coordinate::new(4, 7)).is_some());
        assert!(board.piece_at(Coordinate::new(4, 0)).is_some());
        assert!(board.piece_at(Coordinate::new(0, 0)).is_none());
        assert_eq!(board.pieces().count(), 2);
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(Coordinate::new(0, 7)) // white rook on a1
            .build()
            .unwrap();

        assert!(board.piece_at(Coordinate::new(0, 7)).is_none());
        assert!(board.piece_at(Coordinate::new(1, 7)).is_some());
    }

    #[test]
    fn test_placement_matches_starting_position() {
        let board = BoardBuilder::from_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(board.grid(), &Grid::starting());
    }

    #[test]
    fn test_placement_errors() {
        assert_eq!(
            BoardBuilder::from_placement("8/8/8").unwrap_err(),
            LayoutError::WrongRankCount { found: 3 }
        );
        assert_eq!(
            BoardBuilder::from_placement("4x3/8/8/8/8/8/8/8").unwrap_err(),
            LayoutError::InvalidPiece { char: 'x' }
        );
        assert_eq!(
            BoardBuilder::from_placement("9/8/8/8/8/8/8/8").unwrap_err(),
            LayoutError::TooManyFiles { rank: 0, files: 9 }
        );
    }

    #[test]
    fn test_stray_pawns_and_marked_pieces_count_as_moved() {
        let board = BoardBuilder::from_placement("4k3/8/8/8/3P4/8/P7/4K2R")
            .unwrap()
            .moved(Coordinate::new(7, 7))
            .build()
            .unwrap();

        assert!(board.piece_at(Coordinate::new(3, 4)).unwrap().has_moved());
        assert!(!board.piece_at(Coordinate::new(0, 6)).unwrap().has_moved());
        assert!(board.piece_at(Coordinate::new(7, 7)).unwrap().has_moved());
        assert!(!board.piece_at(Coordinate::new(4, 7)).unwrap().has_moved());
    }
}
