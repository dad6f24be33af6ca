use ocho::{Color, Game};

/// A selected move: pick up from the deck, or play the hand card at an
/// index, with the color a black card should assume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Draw,
    Play { card: usize, color: Option<Color> },
}

/// Move selection over the engine's public read surface. One
/// implementation asks a human, the other decides for itself.
pub trait Strategy {
    fn select(&mut self, game: &Game, seat: usize) -> Move;
}
