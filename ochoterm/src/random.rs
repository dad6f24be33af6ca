use ocho::{Color, Game};
use rand::{seq::IteratorRandom, thread_rng};

use crate::strategy::{Move, Strategy};

/// Automated opponent that picks uniformly among the currently legal
/// plays, drawing when none exists.
pub struct Random;

impl Strategy for Random {
    fn select(&mut self, game: &Game, seat: usize) -> Move {
        let mut rng = thread_rng();
        let top = game.current_card();
        let player = game
            .player(seat)
            .expect("the session only asks for seated players");

        let playable = player
            .hand()
            .iter()
            .enumerate()
            .filter(|(_, card)| top.allows(card));

        match playable.choose(&mut rng) {
            Some((index, card)) => {
                let color = (card.color() == Color::Black).then(|| {
                    Color::wheel()
                        .choose(&mut rng)
                        .expect("the wheel is never empty")
                });
                Move::Play { card: index, color }
            }
            None => Move::Draw,
        }
    }
}
