mod text_ui;

use anyhow::{Context, Result};
use clap::Parser;
use minesweeper::{Game, GameConfig, SizeType, DEFAULT_MINE_COUNT, DEFAULT_SIZE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Minesweeper in the terminal", long_about = None)]
struct Cli {
    /// Number of rows and columns of the board.
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: SizeType,
    /// Number of mines, must leave at least one safe field.
    #[arg(long, default_value_t = DEFAULT_MINE_COUNT)]
    mines: SizeType,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(cli.log_level)
        .init();

    let config = GameConfig::new(cli.size, cli.mines).context("Can not start the game")?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(size = config.size, mine_count = config.mine_count, seed = ?cli.seed, "starting game");

    let mut game = Game::with_rng(config, &mut rng)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    text_ui::run(&mut game, stdin.lock(), stdout.lock(), &mut rng)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_arguments() {
        let cli = Cli::try_parse_from(["minesweeper_demo"]).unwrap();
        assert_eq!(8, cli.size);
        assert_eq!(10, cli.mines);
        assert_eq!(None, cli.seed);
        assert_eq!(Level::WARN, cli.log_level);
    }

    #[test]
    fn custom_arguments() {
        let cli = Cli::try_parse_from([
            "minesweeper_demo",
            "--size",
            "5",
            "--mines",
            "3",
            "--seed",
            "12345",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(5, cli.size);
        assert_eq!(3, cli.mines);
        assert_eq!(Some(12345), cli.seed);
        assert_eq!(Level::DEBUG, cli.log_level);
    }

    #[test]
    fn invalid_arguments() {
        assert!(Cli::try_parse_from(["minesweeper_demo", "--size", "-1"]).is_err());
        assert!(Cli::try_parse_from(["minesweeper_demo", "--log-level", "loud"]).is_err());
    }
}
