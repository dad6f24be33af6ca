use tracing::{debug, info};

use crate::card::{CardKind, Color, TopCard};
use crate::constants::{INITIAL_HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::deck::Deck;
use crate::error::{GameError, Result};
use crate::player::Player;
use crate::turn::TurnCycle;

/// The game state machine. Owns the deck, the seated players and the turn
/// cycle; it is mutated only through [`Game::play`] and never hands out a
/// mutable reference to any of them.
#[derive(Debug)]
pub struct Game {
    deck: Deck,
    players: Vec<Player>,
    cycle: TurnCycle,
    active_color: Color,
    winner: Option<usize>,
}

impl Game {
    /// Seats `player_count` players, deals 7 cards each and selects seat 0
    /// to act first. The remaining top of the deck is the opening card and
    /// its own color the opening color in effect.
    pub fn new(player_count: usize, shuffled: bool) -> Result<Self> {
        Self::from_deck(player_count, Deck::build(shuffled))
    }

    /// Same as [`Game::new`] over an explicit deck, letting tests and
    /// experiments stack known hands.
    pub fn from_deck(player_count: usize, mut deck: Deck) -> Result<Self> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(GameError::InvalidPlayerCount(player_count));
        }

        let players = (0..player_count)
            .map(|id| Ok(Player::new(id, deck.deal(INITIAL_HAND_SIZE)?)))
            .collect::<Result<Vec<_>>>()?;

        let opening = deck.top_card().ok_or(GameError::DeckExhausted {
            requested: 1,
            remaining: 0,
        })?;

        let mut cycle = TurnCycle::new(player_count);
        cycle.advance();

        debug!(player_count, opening = %opening, "game set up");

        Ok(Self {
            deck,
            players,
            cycle,
            active_color: opening.color(),
            winner: None,
        })
    }

    /// Resolves one move for `player`: a voluntary draw when `card_index`
    /// is absent, otherwise playing the hand card at `card_index`, with
    /// `color_choice` naming the color a black card assumes.
    ///
    /// A failed validation leaves the game untouched. A `DeckExhausted`
    /// from a forced draw aborts resolution mid-way; the discard record is
    /// never reshuffled back into the draw source.
    pub fn play(
        &mut self,
        player: usize,
        card_index: Option<usize>,
        color_choice: Option<Color>,
    ) -> Result<()> {
        if player >= self.players.len() {
            return Err(GameError::InvalidPlayerIndex(player));
        }
        if self.winner.is_some() {
            return Err(GameError::GameAlreadyFinished);
        }
        if self.cycle.current() != Some(player) {
            return Err(GameError::NotPlayersTurn);
        }

        let Some(card_index) = card_index else {
            // A voluntary pick-up: one card, one step, no effects.
            let drawn = self.deck.draw_penalty(1)?;
            self.players[player].add_cards(drawn);
            debug!(player, "picked up a card");
            self.cycle.advance();
            return Ok(());
        };

        let top = self.current_card();
        let card = match self.players[player].card(card_index) {
            Some(card) => *card,
            None => return Err(GameError::InvalidCardIndex(card_index)),
        };
        if !top.allows(&card) {
            return Err(GameError::CardNotPlayable { card, top });
        }
        if card.color() == Color::Black {
            match color_choice {
                None => return Err(GameError::MissingColorChoice),
                Some(Color::Black) => return Err(GameError::InvalidColorChoice),
                Some(_) => {}
            }
        }

        // Validation is complete; the move is committed from here on. The
        // played card goes on top before effects resolve, so its rules
        // govern the following turns immediately.
        let played = self.players[player].remove_card(card_index);
        self.deck.push_played(played);
        self.active_color = match played.color() {
            Color::Black => color_choice.expect("validated above for black cards"),
            color => color,
        };

        debug!(player, card = %played, color_in_effect = %self.active_color, "card played");

        match played.kind() {
            CardKind::Skip => {
                // Step over the next seat; the unconditional advance
                // below then lands on the one after.
                self.cycle.advance();
            }
            CardKind::Reverse => {
                self.cycle.reverse();
            }
            CardKind::DrawTwo => {
                let victim = self.cycle.advance();
                self.force_draw(victim, 2)?;
            }
            CardKind::WildDrawFour => {
                let victim = self.cycle.advance();
                self.force_draw(victim, 4)?;
            }
            CardKind::Wild
            | CardKind::N0
            | CardKind::N1
            | CardKind::N2
            | CardKind::N3
            | CardKind::N4
            | CardKind::N5
            | CardKind::N6
            | CardKind::N7
            | CardKind::N8
            | CardKind::N9 => {}
        }

        if self.players[player].hand_size() == 0 {
            // Winning ends the final turn on the spot: no further advance,
            // the cycle freezes on the winner.
            self.winner = Some(player);
            info!(player, "hand emptied, game finished");
        } else {
            self.cycle.advance();
        }

        Ok(())
    }

    /// The seat whose turn it is. Frozen once the game finishes.
    pub fn current_player(&self) -> usize {
        self.cycle
            .current()
            .expect("the cycle is advanced at setup")
    }

    /// The top of the discard record with its live color in effect.
    pub fn current_card(&self) -> TopCard {
        let card = self
            .deck
            .top_card()
            .expect("the current card never leaves the deck after setup");
        TopCard::new(card, self.active_color)
    }

    /// True while nobody has won and every seat still holds at least one
    /// card.
    pub fn is_active(&self) -> bool {
        self.winner.is_none() && self.players.iter().all(|player| player.hand_size() > 0)
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    pub fn player(&self, index: usize) -> Result<&Player> {
        self.players
            .get(index)
            .ok_or(GameError::InvalidPlayerIndex(index))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    fn force_draw(&mut self, player: usize, count: usize) -> Result<()> {
        let cards = self.deck.draw_penalty(count)?;
        self.players[player].add_cards(cards);
        debug!(player, count, "forced draw");
        Ok(())
    }
}
