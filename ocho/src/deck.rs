use std::collections::VecDeque;

use rand::{seq::SliceRandom, thread_rng};

use crate::{
    card::{Card, CardKind, Color},
    constants::*,
    error::{GameError, Result},
};

/// The single backing sequence serving as both the draw source and the
/// discard record. The back of the buffer is the top/current card; forced
/// draws consume from the front so the top end stays undisturbed. Dealing
/// also takes from the back, which is sound because it only happens at
/// setup, before any card has been played.
#[derive(Debug)]
pub struct Deck(VecDeque<Card>);

impl Deck {
    /// Enumerates the full 108-card set. A shuffled deck gets a uniform
    /// random permutation; an unshuffled one keeps the reverse of the
    /// enumeration order so deals are reproducible.
    pub fn build(shuffled: bool) -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK);

        for color in Color::wheel() {
            for kind in NUMBER_SLOTS_PER_COLOR {
                cards.push(Card::new(color, *kind).expect("number kinds pair with wheel colors"));
            }
            for kind in SPECIAL_SLOTS_PER_COLOR {
                cards.push(Card::new(color, *kind).expect("special kinds pair with wheel colors"));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::new(Color::Black, CardKind::Wild).expect("wild is a black kind"));
        }
        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(
                Card::new(Color::Black, CardKind::WildDrawFour).expect("wild draw is a black kind"),
            );
        }

        if shuffled {
            cards.shuffle(&mut thread_rng());
        } else {
            cards.reverse();
        }

        Self(cards.into())
    }

    /// Builds a deck from an explicit order, the back of the list on top.
    /// Lets tests and experiments stack known hands.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self(cards.into())
    }

    /// Removes and returns `count` cards from the top end.
    pub(crate) fn deal(&mut self, count: usize) -> Result<Vec<Card>> {
        if self.0.len() < count {
            return Err(GameError::DeckExhausted {
                requested: count,
                remaining: self.0.len(),
            });
        }
        Ok((0..count)
            .map(|_| self.0.pop_back().expect("length checked above"))
            .collect())
    }

    /// Removes and returns `count` cards from the bottom end for a forced
    /// draw. The current card never leaves the top, and the discard record
    /// is never reshuffled back in, so a long enough game exhausts this
    /// end.
    pub(crate) fn draw_penalty(&mut self, count: usize) -> Result<Vec<Card>> {
        if self.0.len() <= count {
            return Err(GameError::DeckExhausted {
                requested: count,
                remaining: self.0.len().saturating_sub(1),
            });
        }
        Ok((0..count)
            .map(|_| self.0.pop_front().expect("length checked above"))
            .collect())
    }

    /// Appends a played card, making it the new current card.
    pub(crate) fn push_played(&mut self, card: Card) {
        self.0.push_back(card);
    }

    pub(crate) fn top_card(&self) -> Option<Card> {
        self.0.back().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_card_count_new_deck() {
        assert_eq!(Deck::build(false).len(), TOTAL_CARDS_IN_DECK);
        assert_eq!(Deck::build(true).len(), TOTAL_CARDS_IN_DECK);
    }

    #[test]
    fn unshuffled_decks_are_reproducible() {
        let first = Deck::build(false);
        let second = Deck::build(false);
        assert_eq!(first.0, second.0);
    }

    #[test]
    fn unshuffled_top_is_the_first_enumerated_card() {
        let deck = Deck::build(false);
        assert_eq!(
            deck.top_card(),
            Some(Card::new(Color::Red, CardKind::N0).unwrap())
        );
    }

    #[test]
    fn deal_and_penalty_draw_take_opposite_ends() {
        let mut deck = Deck::build(false);

        let dealt = deck.deal(1).unwrap();
        assert_eq!(dealt, vec![Card::new(Color::Red, CardKind::N0).unwrap()]);

        // The last enumerated cards are the black ones, so they sit at
        // the penalty end of an unshuffled deck.
        let drawn = deck.draw_penalty(1).unwrap();
        assert_eq!(
            drawn,
            vec![Card::new(Color::Black, CardKind::WildDrawFour).unwrap()]
        );

        assert_eq!(deck.len(), TOTAL_CARDS_IN_DECK - 2);
    }

    #[test]
    fn dealing_conserves_the_card_count() {
        let mut deck = Deck::build(true);
        let dealt = deck.deal(7).unwrap();
        assert_eq!(dealt.len() + deck.len(), TOTAL_CARDS_IN_DECK);
    }

    #[test]
    fn deal_fails_when_not_enough_cards_remain() {
        let mut deck = Deck::from_cards(vec![Card::new(Color::Red, CardKind::N1).unwrap()]);
        let error = deck.deal(2).unwrap_err();
        assert_eq!(
            error,
            GameError::DeckExhausted {
                requested: 2,
                remaining: 1
            }
        );
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn penalty_draw_never_consumes_the_current_card() {
        let mut deck = Deck::from_cards(vec![
            Card::new(Color::Red, CardKind::N1).unwrap(),
            Card::new(Color::Red, CardKind::N2).unwrap(),
        ]);
        let error = deck.draw_penalty(2).unwrap_err();
        assert_eq!(
            error,
            GameError::DeckExhausted {
                requested: 2,
                remaining: 1
            }
        );
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn played_cards_become_the_new_top() {
        let mut deck = Deck::build(false);
        let wild = Card::new(Color::Black, CardKind::Wild).unwrap();
        deck.push_played(wild);
        assert_eq!(deck.top_card(), Some(wild));
    }
}
