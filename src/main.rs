//! Goban: a Go rules engine.
//!
//! ## Usage
//!
//! - `goban` - Show a demo
//! - `goban gtp` - Start GTP server for GUI integration
//! - `goban random --moves 200 --seed 42` - Play random legal moves and print the board
//!
//! Logs go to stderr and are filtered with `RUST_LOG` (default `warn`).

use std::io;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use goban::board::{Point, Stone};
use goban::constants::{DEFAULT_SIZE, MAX_SIZE};
use goban::coord::str_coord;
use goban::game::Game;
use goban::gtp::GtpEngine;
use goban::playout::random_playout;

/// Goban: a Go rules engine
#[derive(Parser)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (NxN)
    #[arg(long, short, global = true, default_value_t = DEFAULT_SIZE)]
    size: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp,
    /// Run a simple demo of the rules
    Demo,
    /// Play random legal moves and print the final board
    Random {
        /// Maximum number of moves to play
        #[arg(long, default_value_t = 200)]
        moves: usize,
        /// Seed for the random number generator
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if !(1..=MAX_SIZE).contains(&cli.size) {
        bail!("board size must be between 1 and {MAX_SIZE} (got {})", cli.size);
    }

    match cli.command {
        Some(Commands::Gtp) => {
            let mut engine = GtpEngine::new(cli.size);
            engine.run(io::stdin().lock(), io::stdout().lock())?;
        }
        Some(Commands::Random { moves, seed }) => run_random(cli.size, moves, seed),
        Some(Commands::Demo) | None => run_demo(cli.size),
    }
    Ok(())
}

fn run_random(size: usize, moves: usize, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    info!(size, moves, seed, "random playout");
    let mut game = Game::new(size);
    let mut rng = fastrand::Rng::with_seed(seed);
    let played = random_playout(&mut game, moves, &mut rng);

    println!("Seed {seed}: {played} moves played\n");
    println!("{}", game.board());
    println!("{} to move", game.current_player());
    for color in [Stone::Black, Stone::White] {
        println!("{color} captured {}", game.captures(color));
    }
}

fn run_demo(size: usize) {
    println!("Goban: Go rules engine\n");

    if size < 3 {
        println!("The demo needs a board of at least 3x3.");
        return;
    }

    let mut game = Game::new(size);

    // Black surrounds a white stone in the corner and captures it.
    let moves = [(1, 0), (0, 0), (0, 1)];
    for (row, col) in moves {
        let pt = Point::new(row, col);
        let player = game.current_player();
        let result = game.try_play(pt);
        println!("{player} at {}: {result:?}", str_coord(pt, size));
    }
    println!("{}", game.board());

    // White may not play back into the corner: no liberties, no capture.
    let pt = Point::new(0, 0);
    let player = game.current_player();
    match game.try_play(pt) {
        Ok(n) => println!("{player} at {}: captured {n}", str_coord(pt, size)),
        Err(e) => println!("{player} at {}: {e}", str_coord(pt, size)),
    }
    println!("{} to move", game.current_player());
}
