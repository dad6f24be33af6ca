use thiserror::Error;

use crate::card::{Card, CardKind, Color, TopCard};

/// Everything that can fail while constructing or driving a game. All
/// variants are local validation failures surfaced synchronously; a call
/// that fails validation leaves the game untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("player count {0} is outside the supported 2..=15 range")]
    InvalidPlayerCount(usize),
    #[error("{color} does not pair with a {kind:?} card")]
    InvalidCard { color: Color, kind: CardKind },
    #[error("player index {0} is out of range")]
    InvalidPlayerIndex(usize),
    #[error("not the specified player's turn")]
    NotPlayersTurn,
    #[error("hand index {0} is out of range")]
    InvalidCardIndex(usize),
    #[error("{card} is not playable on {top}")]
    CardNotPlayable { card: Card, top: TopCard },
    #[error("a black card needs a color choice")]
    MissingColorChoice,
    #[error("the chosen color must be one of the four wheel colors")]
    InvalidColorChoice,
    #[error("the game is already finished")]
    GameAlreadyFinished,
    #[error("the deck has {remaining} drawable cards left, {requested} requested")]
    DeckExhausted { requested: usize, remaining: usize },
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
