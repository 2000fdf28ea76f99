use std::io;

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use minefield_core::{Board, BoardConfig, Game, GameStatus, MineGenerator, RandomMineGenerator};
use rand::RngExt;

use crate::input::HELP;
use crate::play::{PlayOutcome, play};

mod input;
mod play;

/// Terminal minesweeper: uncover every mine-free field without stepping on a
/// mine.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board rows (3-9)
    #[arg(long, default_value_t = 6)]
    rows: u8,

    /// Board columns (3-9)
    #[arg(long, default_value_t = 6)]
    cols: u8,

    /// Number of hidden mines
    #[arg(long, default_value_t = 6)]
    mines: u16,

    /// Seed for the mine layout; random when not given
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity.tracing_level_filter())
        .with_target(false)
        .init();

    let config = BoardConfig::new((cli.rows, cli.cols), cli.mines)?;
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let mine_coords = RandomMineGenerator::new(seed).generate(&config);
    let board = Board::from_mine_coords(config.size, &mine_coords)?;
    let mut game = Game::new(board);

    println!("{HELP}");
    println!();
    println!(
        "Secret Service reports that there are {} mines on that meadow... but where?",
        config.mines
    );
    println!("Uncover all non-mine fields before someone steps on a wrong one. Beware though!");
    println!("Minesweeper's first mistake is also their last...");

    let stdin = io::stdin();
    let stdout = io::stdout();
    match play(&mut game, stdin.lock(), stdout.lock())? {
        PlayOutcome::InputClosed => {}
        PlayOutcome::Finished(status) => {
            println!("\n{}", game.board());
            if matches!(status, GameStatus::Won) {
                println!("\n🥵 YOU WIN!");
            } else {
                println!("\nYOU DIE! 🪦");
            }
        }
    }
    Ok(())
}
