//! Turn coordinator.
//!
//! Alternates the two players, runs the promotion sub-flow, keeps the move
//! log and declares the end of the game. Input arrives one event at a time
//! (`click`, `choose_promotion`, `tick`); nothing here blocks.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    Board, BoardConfig, BoardError, Color, ConfigError, Coordinate, MoveRecord, Narrator, Piece,
    PieceType,
};
use crate::player::{Player, PlayerKind};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Checkmate { winner: Color },
    /// `stuck` is not in check but has no legal move
    Stalemate { stuck: Color },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "Check mate! WINNER: {winner}"),
            Outcome::Stalemate { stuck } => write!(f, "Stalemate! {stuck} has no legal moves"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    AwaitingMove,
    /// The side to move must pick a replacement for the pawn on `pawn`
    Promoting { pawn: Coordinate },
    Over(Outcome),
}

/// Who plays which color, and how the board sits on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    pub white: PlayerKind,
    pub black: PlayerKind,
    pub board: BoardConfig,
    /// Seeds random players; black uses `seed + 1`
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            white: PlayerKind::Human,
            black: PlayerKind::RandomAi,
            board: BoardConfig::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse player type names such as `"human"` or `"random AI"`.
    pub fn from_names(white: &str, black: &str) -> Result<Self, ConfigError> {
        Ok(GameConfig {
            white: white.parse()?,
            black: black.parse()?,
            ..GameConfig::default()
        })
    }
}

#[derive(Debug)]
pub struct Game {
    board: Board,
    players: [Box<dyn Player>; 2],
    turn: Color,
    moves: u32,
    state: GameState,
    move_log: Vec<String>,
    pending: Option<MoveRecord>,
}

impl Game {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let white = config.white.make(Color::White, config.seed);
        let black = config
            .black
            .make(Color::Black, config.seed.map(|s| s.wrapping_add(1)));
        Game::with_players(Board::new(config.board), white, black)
    }

    /// Start from an arbitrary position with white to move.
    #[must_use]
    pub fn with_players(board: Board, white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        let mut game = Game {
            board,
            players: [white, black],
            turn: Color::White,
            moves: 0,
            state: GameState::AwaitingMove,
            move_log: Vec::new(),
            pending: None,
        };
        game.update_state();
        game
    }

    #[must_use]
    pub fn with_narrator(mut self, narrator: impl Narrator + 'static) -> Self {
        self.board = self.board.with_narrator(narrator);
        self
    }

    pub fn new_game(&mut self) {
        self.board.new_game();
        for player in &mut self.players {
            player.reset();
        }
        self.turn = Color::White;
        self.moves = 0;
        self.move_log.clear();
        self.pending = None;
        self.state = GameState::AwaitingMove;
        log::info!("new game started");
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Over(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Completed turns
    #[inline]
    #[must_use]
    pub fn moves_played(&self) -> u32 {
        self.moves
    }

    /// One line per completed turn, e.g. `[001] e2-e4`
    #[must_use]
    pub fn move_log(&self) -> &[String] {
        &self.move_log
    }

    #[must_use]
    pub fn player(&self, color: Color) -> &dyn Player {
        self.players[color.index()].as_ref()
    }

    #[must_use]
    pub fn is_machine_turn(&self) -> bool {
        self.player(self.turn).kind().is_machine()
    }

    /// A mouse click at pixel `px`. Only human turns react.
    ///
    /// Returns the move when the click completed a turn.
    pub fn click(&mut self, px: Coordinate) -> Result<Option<MoveRecord>, BoardError> {
        match self.board.px_to_grid(px) {
            Some(cell) => self.click_cell(cell),
            None => {
                log::debug!("click at {px} is outside the board");
                Ok(None)
            }
        }
    }

    /// A click already resolved to a grid cell.
    pub fn click_cell(&mut self, cell: Coordinate) -> Result<Option<MoveRecord>, BoardError> {
        if self.state != GameState::AwaitingMove || self.is_machine_turn() {
            return Ok(None);
        }
        self.play_turn(Some(cell))
    }

    /// The human's answer to a pending promotion.
    pub fn choose_promotion(&mut self, kind: PieceType) -> Result<Option<MoveRecord>, BoardError> {
        match self.state {
            GameState::Promoting { pawn } if !self.is_machine_turn() => {
                self.resolve_promotion(pawn, Some(kind))
            }
            _ => Ok(None),
        }
    }

    /// Per-frame update: machine players act without waiting for input.
    pub fn tick(&mut self) -> Result<Option<MoveRecord>, BoardError> {
        if !self.is_machine_turn() {
            return Ok(None);
        }
        match self.state {
            GameState::AwaitingMove => self.play_turn(None),
            GameState::Promoting { pawn } => self.resolve_promotion(pawn, None),
            GameState::Over(_) => Ok(None),
        }
    }

    /// Tick until the game ends, a human is to move, or `max_plies` turns
    /// have been tried.
    pub fn play_out(&mut self, max_plies: u32) -> Result<Option<Outcome>, BoardError> {
        for _ in 0..max_plies {
            if self.outcome().is_some() || !self.is_machine_turn() {
                break;
            }
            self.tick()?;
        }
        Ok(self.outcome())
    }

    fn play_turn(&mut self, pos: Option<Coordinate>) -> Result<Option<MoveRecord>, BoardError> {
        let player = &mut self.players[self.turn.index()];
        let Some(record) = player.play(&mut self.board, pos)? else {
            return Ok(None);
        };

        if let Some(pawn) = self.board.promotions(self.turn).map(Piece::pos) {
            log::info!("{} pawn on {pawn} awaiting promotion", self.turn);
            self.state = GameState::Promoting { pawn };
            self.pending = Some(record);
            if self.is_machine_turn() {
                return self.resolve_promotion(pawn, None);
            }
            return Ok(None);
        }
        self.finish_turn(record)
    }

    fn resolve_promotion(
        &mut self,
        pawn: Coordinate,
        choice: Option<PieceType>,
    ) -> Result<Option<MoveRecord>, BoardError> {
        let piece = self.board.get_piece_at(pawn)?.clone();
        let player = &mut self.players[self.turn.index()];
        let Some(kind) = player.promote(&self.board, &piece, choice) else {
            log::debug!("no valid promotion choice yet for {pawn}");
            return Ok(None);
        };
        self.board.promote(pawn, kind)?;
        self.state = GameState::AwaitingMove;

        let Some(mut record) = self.pending.take() else {
            return Ok(None);
        };
        // A pawn left on the far rank by the setup is not this move's doing
        if record.piece == piece.id() && record.to == pawn {
            record.promotion = Some(kind);
        }
        record.check = self.board.is_checked(self.turn.opponent());
        self.finish_turn(record)
    }

    fn finish_turn(&mut self, record: MoveRecord) -> Result<Option<MoveRecord>, BoardError> {
        self.log_move(&record);
        self.turn = self.turn.opponent();
        self.update_state();
        Ok(Some(record))
    }

    fn log_move(&mut self, record: &MoveRecord) {
        self.moves += 1;
        let mut line = format!("[{:03}] {record}", self.moves);
        if record.check {
            line.push_str(" check!");
        }
        log::debug!("{line}");
        self.move_log.push(line);
    }

    fn update_state(&mut self) {
        let outcome = if self.board.is_checkmate(self.turn) {
            Outcome::Checkmate {
                winner: self.turn.opponent(),
            }
        } else if self.board.is_stalemate(self.turn) {
            Outcome::Stalemate { stuck: self.turn }
        } else {
            return;
        };
        self.board.narrator().log(&outcome.to_string());
        log::info!("game over after {} moves: {outcome}", self.moves);
        self.state = GameState::Over(outcome);
    }
}
