use std::io::{self, BufRead, Write};

use minefield_core::{Game, GameStatus};

use crate::input::{HELP, parse_command};

/// How a terminal session ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The game reached a win or a loss.
    Finished(GameStatus),
    /// The input stream closed before the game ended.
    InputClosed,
}

/// Drives the game turn by turn until it finishes or the input runs dry.
/// Every runtime game error is reported to `output` and the turn is retried;
/// parse and flag errors additionally re-print the usage help.
pub fn play<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    mut output: W,
) -> io::Result<PlayOutcome> {
    while !game.status().is_finished() {
        writeln!(output)?;
        writeln!(output, "{}", game.board())?;
        write!(output, "❓ ")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            return Ok(PlayOutcome::InputClosed);
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{err}")?;
                writeln!(output, "{HELP}")?;
                continue;
            }
        };

        if command.flag {
            if let Err(err) = game.toggle_flag(command.coords) {
                writeln!(output, "{err}")?;
                writeln!(output, "{HELP}")?;
            }
            continue;
        }

        if let Err(err) = game.reveal(command.coords) {
            writeln!(output, "{err}")?;
        }
    }

    Ok(PlayOutcome::Finished(game.status()))
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}
