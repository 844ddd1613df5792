use std::io;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use broadside::{init_logging, Session};

/// Console Battleship against a computer opponent.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fix RNG seed for reproducible games (e.g., --seed 12345)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    println!("Welcome to Battleship!");
    println!("---------------------");
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }

    let rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(rng, stdin.lock(), stdout.lock())?;
    session.run()?;
    Ok(())
}
