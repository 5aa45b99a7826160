use anyhow::{bail, Context, Result};
use minesweeper::{Game, GameOutcome, RevealOutcome, SizeType};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const HELP: &str = "Commands:
  <row> <column>  reveal a field
  reset, r        start a new game
  help, h         show this help
  quit, q         leave the game";

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Command {
    Reveal(SizeType, SizeType),
    Reset,
    Help,
    Quit,
}

/// `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] => Ok(None),
        ["q"] | ["quit"] => Ok(Some(Command::Quit)),
        ["r"] | ["reset"] => Ok(Some(Command::Reset)),
        ["h"] | ["help"] => Ok(Some(Command::Help)),
        [row, col] => {
            let row = row
                .parse::<SizeType>()
                .with_context(|| format!("Invalid row: {}", row))?;
            let col = col
                .parse::<SizeType>()
                .with_context(|| format!("Invalid column: {}", col))?;
            Ok(Some(Command::Reveal(row, col)))
        }
        _ => bail!("Unknown command: {}", line.trim()),
    }
}

pub fn render(game: &Game) -> Result<String> {
    let show_mines = game.outcome().is_terminal();
    let width = game.size().saturating_sub(1).to_string().len();
    let mut rendered = " ".repeat(width);
    for col in 0..game.size() {
        rendered.push_str(&format!(" {:>width$}", col, width = width));
    }
    for row in 0..game.size() {
        rendered.push_str(&format!("\n{:>width$}", row, width = width));
        for col in 0..game.size() {
            let repr = game.get_char_repr(row, col, show_mines)?;
            rendered.push_str(&format!(" {:>width$}", repr, width = width));
        }
    }
    Ok(rendered)
}

fn report_outcome<O: Write>(game: &Game, output: &mut O) -> Result<()> {
    writeln!(output, "{}", render(game)?)?;
    match game.outcome() {
        GameOutcome::Won => writeln!(output, "Congratulations! You cleared the board.")?,
        GameOutcome::Lost => writeln!(output, "BOOM! You hit a mine! Game over.")?,
        GameOutcome::InProgress => (),
    }
    Ok(())
}

/// Plays until `quit` or the end of the input. Reveals are refused once the
/// game is over; only `reset` starts it again.
pub fn run<I: BufRead, O: Write, R: Rng>(
    game: &mut Game,
    input: I,
    mut output: O,
    rng: &mut R,
) -> Result<()> {
    writeln!(output, "{}", render(game)?)?;

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                writeln!(output, "{}", error)?;
                continue;
            }
        };
        debug!(?command, "received command");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Reset => {
                game.reset_with_rng(rng)?;
                info!("new game started");
                writeln!(output, "{}", render(game)?)?;
            }
            Command::Reveal(_, _) if game.outcome().is_terminal() => {
                writeln!(output, "The game is over, type `reset` to play again.")?;
            }
            Command::Reveal(row, col) => match game.reveal_cell(row, col) {
                Ok(RevealOutcome::AlreadyRevealed) => {
                    writeln!(output, "Field ({}, {}) is already revealed.", row, col)?
                }
                Ok(_) => report_outcome(game, &mut output)?,
                Err(error) => writeln!(output, "{}", error)?,
            },
        }
    }

    output.flush()?;
    Ok(())
}
