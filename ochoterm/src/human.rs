use std::io::{self, Write};

use ocho::{Card, Color, Game};

use crate::strategy::{Move, Strategy};

/// Interactive strategy that reads the human's choice from stdin,
/// re-prompting until it names a legal one.
pub struct Human;

impl Strategy for Human {
    fn select(&mut self, game: &Game, seat: usize) -> Move {
        let top = game.current_card();
        let player = game
            .player(seat)
            .expect("the session only asks for seated players");

        println!("\nCurrent card: {top}");
        print_hand(player.hand());

        if !player.can_play(&top) {
            println!("No playable card, you pick up.");
            return Move::Draw;
        }

        loop {
            let input = prompt("Card to play (index, or 'd' to draw): ");
            let input = input.trim();
            if input.eq_ignore_ascii_case("d") {
                return Move::Draw;
            }
            let Ok(index) = input.parse::<usize>() else {
                println!("Enter the index shown next to a card, or 'd'.");
                continue;
            };
            let Some(card) = player.hand().get(index) else {
                println!("Index out of range.");
                continue;
            };
            if !top.allows(card) {
                println!("{card} cannot go on {top}.");
                continue;
            }
            let color = (card.color() == Color::Black).then(prompt_color);
            return Move::Play { card: index, color };
        }
    }
}

fn print_hand(hand: &[Card]) {
    println!("Your hand:");
    for (index, card) in hand.iter().enumerate() {
        println!("  [{index}] {card}");
    }
}

fn prompt_color() -> Color {
    loop {
        let input = prompt("Color (red/yellow/green/blue): ");
        match input.trim().parse::<Color>() {
            Ok(Color::Black) | Err(_) => println!("Pick one of the four wheel colors."),
            Ok(color) => return color,
        }
    }
}

fn prompt(message: &str) -> String {
    print!("{message}");
    if io::stdout().flush().is_err() {
        eprintln!("failed to flush stdout");
    }
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        eprintln!("failed to read input");
        input.clear();
    }
    input
}
