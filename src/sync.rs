//! Shared access to a running game.
//!
//! Several input sources (a UI thread, a network listener) may feed the same
//! game. Every mutation goes through one mutex, so turns are applied one at
//! a time in arrival order.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::board::{BoardError, Coordinate, MoveRecord, PieceType};
use crate::game::{Game, GameState, Outcome};

/// A cloneable handle to one game.
#[derive(Clone, Debug)]
pub struct SharedGame(Arc<Mutex<Game>>);

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }

    /// Lock the game for a multi-step read or update.
    pub fn lock(&self) -> MutexGuard<'_, Game> {
        self.0.lock()
    }

    pub fn click(&self, px: Coordinate) -> Result<Option<MoveRecord>, BoardError> {
        self.0.lock().click(px)
    }

    pub fn click_cell(&self, cell: Coordinate) -> Result<Option<MoveRecord>, BoardError> {
        self.0.lock().click_cell(cell)
    }

    pub fn choose_promotion(&self, kind: PieceType) -> Result<Option<MoveRecord>, BoardError> {
        self.0.lock().choose_promotion(kind)
    }

    pub fn tick(&self) -> Result<Option<MoveRecord>, BoardError> {
        self.0.lock().tick()
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.0.lock().state()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.0.lock().outcome()
    }

    /// Run `f` against the locked game.
    pub fn with<T>(&self, f: impl FnOnce(&mut Game) -> T) -> T {
        f(&mut self.0.lock())
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame::new(game)
    }
}
