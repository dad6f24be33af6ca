use crate::card::{Card, TopCard};
use crate::constants::INITIAL_HAND_SIZE;

/// A seated player: an identity and the hand it holds. Hands are mutated
/// by the engine alone; callers only get read access.
#[derive(Debug)]
pub struct Player {
    id: usize,
    hand: Vec<Card>,
}

impl Player {
    /// Players enter the game with the 7 cards dealt at setup.
    pub(crate) fn new(id: usize, cards: Vec<Card>) -> Self {
        debug_assert_eq!(cards.len(), INITIAL_HAND_SIZE);
        Self { id, hand: cards }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Whether any held card may be played on `top`.
    pub fn can_play(&self, top: &TopCard) -> bool {
        self.hand.iter().any(|card| top.allows(card))
    }

    pub(crate) fn card(&self, index: usize) -> Option<&Card> {
        self.hand.get(index)
    }

    pub(crate) fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    pub(crate) fn remove_card(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }
}
