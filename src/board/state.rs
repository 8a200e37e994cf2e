use std::collections::BTreeMap;

use super::config::BoardConfig;
use super::error::BoardError;
use super::grid::Grid;
use super::narrator::{Narrator, NarratorHandle};
use super::types::{Color, Coordinate, MoveRecord, Piece, PieceId, PieceType};

/// Board state: the occupancy grid plus the registry that owns the pieces.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) grid: Grid,
    pub(crate) pieces: BTreeMap<PieceId, Piece>,
    pub(crate) captured: Vec<Piece>,
    pub(crate) selected: Option<Coordinate>,
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) config: BoardConfig,
    pub(crate) narrator: NarratorHandle,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Board {
    /// A board in the starting position.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Board::from_grid(Grid::starting(), config)
    }

    /// Register one unmoved piece per occupied cell of `grid`.
    pub(crate) fn from_grid(grid: Grid, config: BoardConfig) -> Self {
        let pieces = grid
            .iter()
            .map(|(pos, id)| (id, Piece::new(id, pos)))
            .collect();
        let mut board = Board {
            grid,
            pieces,
            captured: Vec::new(),
            selected: None,
            history: Vec::new(),
            config,
            narrator: NarratorHandle::default(),
        };
        board.refresh_check_flags();
        board
    }

    #[must_use]
    pub fn with_narrator(mut self, narrator: impl Narrator + 'static) -> Self {
        self.narrator = NarratorHandle::new(narrator);
        self
    }

    pub fn set_narrator(&mut self, narrator: NarratorHandle) {
        self.narrator = narrator;
    }

    #[must_use]
    pub fn narrator(&self) -> &NarratorHandle {
        &self.narrator
    }

    /// Throw away all pieces and rebuild the starting position.
    pub fn new_game(&mut self) {
        let narrator = self.narrator.clone();
        *self = Board::new(self.config);
        self.narrator = narrator;
        log::debug!("board reset to starting position");
    }

    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<Coordinate> {
        self.selected
    }

    /// Captured pieces in capture order
    #[inline]
    #[must_use]
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Live pieces, ordered by id
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    pub fn pieces_for_color(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces.values().filter(move |p| p.color() == color)
    }

    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    #[inline]
    #[must_use]
    pub fn is_piece_at(&self, pos: Coordinate) -> bool {
        self.grid.is_occupied(pos)
    }

    #[must_use]
    pub fn piece_at(&self, pos: Coordinate) -> Option<&Piece> {
        self.grid.get(pos).and_then(|id| self.pieces.get(&id))
    }

    /// Like [`Board::piece_at`] for callers that require a piece to be there.
    pub fn get_piece_at(&self, pos: Coordinate) -> Result<&Piece, BoardError> {
        self.piece_at(pos)
            .ok_or(BoardError::NoPieceAt { square: pos })
    }

    #[must_use]
    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces_for_color(color)
            .find(|p| p.kind() == PieceType::King)
    }

    pub fn get_king(&self, color: Color) -> Result<&Piece, BoardError> {
        self.king(color).ok_or(BoardError::NoKing { color })
    }

    /// Check flag of `color`'s king.
    #[must_use]
    pub fn is_checked(&self, color: Color) -> bool {
        self.king(color).is_some_and(Piece::is_checked)
    }

    /// Grid cell under pixel `px`.
    #[must_use]
    pub fn px_to_grid(&self, px: Coordinate) -> Option<Coordinate> {
        self.config.px_to_grid(px)
    }

    /// Toggle the selection.
    ///
    /// With nothing selected, `pos` becomes selected when it holds a piece of
    /// `color`. With anything selected, the selection is cleared. Returns the
    /// new selection.
    pub fn select(&mut self, pos: Coordinate, color: Color) -> Option<Coordinate> {
        self.selected = match self.selected {
            Some(_) => None,
            None => self
                .piece_at(pos)
                .filter(|p| p.color() == color)
                .map(|_| pos),
        };
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Registry and grid agree: each piece sits on its own cell, and every
    /// occupied cell names a live piece.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let registry_ok = self
            .pieces
            .iter()
            .all(|(id, piece)| piece.id == *id && self.grid.get(piece.pos) == Some(*id));
        let grid_ok = self.grid.iter().all(|(pos, id)| {
            self.pieces.get(&id).is_some_and(|p| p.pos == pos)
        });
        registry_ok && grid_ok && self.grid.iter().count() == self.pieces.len()
    }

    pub(crate) fn moved_flag(&self, id: PieceId) -> bool {
        self.pieces.get(&id).is_some_and(|p| p.moved)
    }

    pub(crate) fn set_check_flag(&mut self, color: Color, checked: bool) {
        if let Some(king) = self
            .pieces
            .values_mut()
            .find(|p| p.color() == color && p.kind() == PieceType::King)
        {
            king.checked = checked;
        }
    }

    /// Recompute both kings' check flags from the live grid.
    pub(crate) fn refresh_check_flags(&mut self) {
        for color in Color::BOTH {
            let checked = self.is_king_checked(&self.grid, color);
            self.set_check_flag(color, checked);
        }
    }
}
