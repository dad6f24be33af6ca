use color_eyre::eyre::{eyre, Result};
use ocho::Game;
use rand::{thread_rng, Rng};
use tracing::debug;

use crate::human::Human;
use crate::random::Random;
use crate::strategy::{Move, Strategy};

/// One console game: the engine plus a human seat among automated
/// opponents.
pub struct Session {
    game: Game,
    human_seat: usize,
    human: Human,
    opponents: Random,
}

impl Session {
    pub fn new(players: usize, seat: Option<usize>, shuffled: bool) -> Result<Self> {
        let game = Game::new(players, shuffled)?;
        let human_seat = match seat {
            Some(seat) if seat < players => seat,
            Some(seat) => return Err(eyre!("seat {seat} is out of range for {players} players")),
            None => thread_rng().gen_range(0..players),
        };

        println!("The game begins. You are player {human_seat}.");

        Ok(Self {
            game,
            human_seat,
            human: Human,
            opponents: Random,
        })
    }

    /// Drives the table until somebody wins. A dry deck ends the session
    /// with the engine's error.
    pub fn run(&mut self) -> Result<()> {
        while self.game.is_active() {
            let seat = self.game.current_player();
            let selected = if seat == self.human_seat {
                self.human.select(&self.game, seat)
            } else {
                self.opponents.select(&self.game, seat)
            };
            debug!(seat, ?selected, "applying move");
            self.apply(seat, selected)?;
        }

        if let Some(winner) = self.game.winner() {
            if winner == self.human_seat {
                println!("You win!");
            } else {
                println!("Player {winner} wins!");
            }
        }

        Ok(())
    }

    fn apply(&mut self, seat: usize, selected: Move) -> Result<()> {
        match selected {
            Move::Draw => {
                self.game.play(seat, None, None)?;
                println!("Player {seat} picked up.");
            }
            Move::Play { card, color } => {
                self.game.play(seat, Some(card), color)?;
                println!("Player {seat} played {}.", self.game.current_card());
            }
        }
        Ok(())
    }
}
