use minefield_core::{Coord, Coord2};
use thiserror::Error;

pub const HELP: &str = "
In each step, type ROW and COLUMN, confirm with [ENTER]

To flag a mine, add 'f' at the end

Examples:
22  - defuse field in row 2 and column 2
13f - flag field in row 1 and column 3 as mine";

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input")]
    InvalidFormat,
}

/// One parsed player intent: a target cell, and whether to flag it instead of
/// revealing it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub coords: Coord2,
    pub flag: bool,
}

/// Parses one input line: two 1-indexed digits, optionally followed by `f`.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let chars: Vec<char> = line.chars().collect();
    if chars.len() < 2 || chars.len() > 3 {
        return Err(InputError::InvalidFormat);
    }

    let row = parse_axis(chars[0])?;
    let col = parse_axis(chars[1])?;
    let flag = match chars.get(2) {
        None => false,
        Some('f') => true,
        Some(_) => return Err(InputError::InvalidFormat),
    };

    Ok(Command { coords: (row, col), flag })
}

// rows and columns are labeled with a 1-indexed sequence
fn parse_axis(c: char) -> Result<Coord, InputError> {
    match c.to_digit(10) {
        Some(digit @ 1..=9) => Ok((digit - 1) as Coord),
        _ => Err(InputError::InvalidFormat),
    }
}
