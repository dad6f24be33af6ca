//! Turn-based engine for an Uno-style matching/shedding card game.
//!
//! The engine covers deck construction and dealing, the reversible turn
//! cycle, card playability and the play-resolution state machine that
//! applies special-card effects and detects a winner. Reading a move from
//! a human or choosing one for an automated opponent is left to callers,
//! which interact solely through [`Game`]'s public surface.

pub mod card;
mod constants;
pub mod deck;
pub mod error;
pub mod game;
pub mod player;
pub mod turn;

pub use crate::card::{Card, CardKind, Color, TopCard};
pub use crate::deck::Deck;
pub use crate::error::{GameError, Result};
pub use crate::game::Game;
pub use crate::player::Player;
pub use crate::turn::TurnCycle;
