//! Players: whoever decides the next move for one color.
//!
//! The coordinator drives both kinds through the same [`Player`] trait and
//! only reads [`Player::kind`] to decide whether to wait for a click.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    Board, BoardError, Color, ConfigError, Coordinate, Move, MoveRecord, Piece, PieceType,
    PROMOTION_CHOICES,
};

/// Player type tag, also the factory for concrete players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlayerKind {
    Human,
    RandomAi,
}

impl PlayerKind {
    /// Machines play as soon as it is their turn.
    #[inline]
    #[must_use]
    pub const fn is_machine(self) -> bool {
        matches!(self, PlayerKind::RandomAi)
    }

    /// Build a player of this kind. `seed` makes random players repeatable.
    #[must_use]
    pub fn make(self, color: Color, seed: Option<u64>) -> Box<dyn Player> {
        match self {
            PlayerKind::Human => Box::new(HumanPlayer::new(color)),
            PlayerKind::RandomAi => match seed {
                Some(seed) => Box::new(RandomPlayer::seeded(color, seed)),
                None => Box::new(RandomPlayer::new(color)),
            },
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::RandomAi => write!(f, "random AI"),
        }
    }
}

impl FromStr for PlayerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "random ai" | "random" | "machine" => Ok(PlayerKind::RandomAi),
            _ => Err(ConfigError::UnknownPlayer {
                name: s.to_string(),
            }),
        }
    }
}

pub trait Player: fmt::Debug + Send {
    fn color(&self) -> Color;

    fn kind(&self) -> PlayerKind;

    /// React to one input. `pos` is the clicked cell for humans and ignored
    /// by machines. Returns the executed move, or `None` when nothing moved.
    fn play(
        &mut self,
        board: &mut Board,
        pos: Option<Coordinate>,
    ) -> Result<Option<MoveRecord>, BoardError>;

    /// Pick the replacement for `pawn`. `choice` is what the promotion widget
    /// reported, if anything.
    fn promote(
        &mut self,
        board: &Board,
        pawn: &Piece,
        choice: Option<PieceType>,
    ) -> Option<PieceType>;

    /// Forget any half-finished interaction.
    fn reset(&mut self) {}
}

/// Two clicks per move: pick up, then put down.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    color: Color,
    considering: Option<Coordinate>,
}

impl HumanPlayer {
    #[must_use]
    pub const fn new(color: Color) -> Self {
        HumanPlayer {
            color,
            considering: None,
        }
    }

    /// Cell picked up by the first click, if any
    #[must_use]
    pub const fn considering(&self) -> Option<Coordinate> {
        self.considering
    }
}

impl Player for HumanPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    fn play(
        &mut self,
        board: &mut Board,
        pos: Option<Coordinate>,
    ) -> Result<Option<MoveRecord>, BoardError> {
        let Some(pos) = pos else {
            return Ok(None);
        };

        let Some(from) = self.considering.take() else {
            self.considering = board.select(pos, self.color);
            return Ok(None);
        };

        board.select(pos, self.color);
        let mv = Move::new(from, pos);
        if board.legal_moves(self.color).contains(&mv) {
            board.make_move(mv).map(Some)
        } else {
            log::debug!("{} did not click on a possible square: {mv}", self.color);
            board.clear_selection();
            Ok(None)
        }
    }

    fn promote(
        &mut self,
        _board: &Board,
        _pawn: &Piece,
        choice: Option<PieceType>,
    ) -> Option<PieceType> {
        choice.filter(|kind| kind.is_promotion_choice())
    }

    fn reset(&mut self) {
        self.considering = None;
    }
}

/// Plays a uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomPlayer<R = StdRng> {
    color: Color,
    rng: R,
}

impl RandomPlayer<StdRng> {
    #[must_use]
    pub fn new(color: Color) -> Self {
        RandomPlayer::with_rng(color, StdRng::from_entropy())
    }

    #[must_use]
    pub fn seeded(color: Color, seed: u64) -> Self {
        RandomPlayer::with_rng(color, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPlayer<R> {
    pub const fn with_rng(color: Color, rng: R) -> Self {
        RandomPlayer { color, rng }
    }
}

impl<R: Rng + fmt::Debug + Send> Player for RandomPlayer<R> {
    fn color(&self) -> Color {
        self.color
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::RandomAi
    }

    fn play(
        &mut self,
        board: &mut Board,
        _pos: Option<Coordinate>,
    ) -> Result<Option<MoveRecord>, BoardError> {
        let moves = board.legal_moves(self.color);
        let Some(&choice) = moves.choose(&mut self.rng) else {
            log::warn!("{} has no legal move to play", self.color);
            return Ok(None);
        };
        log::debug!("{} AI choosing {choice}", self.color);
        board.make_move(choice).map(Some)
    }

    fn promote(
        &mut self,
        _board: &Board,
        _pawn: &Piece,
        _choice: Option<PieceType>,
    ) -> Option<PieceType> {
        PROMOTION_CHOICES.choose(&mut self.rng).copied()
    }
}
