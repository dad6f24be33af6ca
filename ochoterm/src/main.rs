mod human;
mod random;
mod session;
mod strategy;

use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::session::Session;

/// Console table for an Uno-style matching game: one human seat against
/// automated opponents.
#[derive(Debug, Parser)]
struct Args {
    /// Number of seated players.
    #[arg(long, default_value_t = 4)]
    players: usize,

    /// Seat the human plays from; picked at random when omitted.
    #[arg(long)]
    seat: Option<usize>,

    /// Skip shuffling for a reproducible deal.
    #[arg(long)]
    unshuffled: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    Session::new(args.players, args.seat, !args.unshuffled)?.run()
}
