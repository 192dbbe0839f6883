//! Words Virtuoso - CLI
//!
//! Loads a dictionary and a candidate list, draws a secret, and runs one
//! game on the console.

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use words_virtuoso::{
    game::{Game, LineReader},
    launcher::{BANNER, pick_secret, prepare},
    logging,
    output::{AnsiRenderer, PlainRenderer, Renderer},
};

#[derive(Parser)]
#[command(
    name = "words_virtuoso",
    about = "Guess the secret 5-letter word",
    version,
    author
)]
struct Cli {
    /// Dictionary file, then candidate file (one word per line)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Seed for choosing the secret (reproducible games)
    #[arg(long)]
    seed: Option<u64>,

    /// Print hints as plain text instead of coloured letters
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let setup = match prepare(&cli.files) {
        Ok(setup) => setup,
        Err(e) => {
            println!("Error: {e}");
            return Ok(());
        }
    };
    println!("{BANNER}");

    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let secret = pick_secret(&setup.candidates, &mut rng)
        .context("no candidate words to choose from")?;

    let renderer: &dyn Renderer = if cli.no_color {
        &PlainRenderer
    } else {
        &AnsiRenderer
    };

    let mut game = Game::new(secret, &setup.dictionary, renderer);
    let mut input = LineReader::new(io::stdin().lock());
    let mut out = io::stdout().lock();
    game.play(&mut input, &mut out)
        .context("console I/O failed")?;

    Ok(())
}
