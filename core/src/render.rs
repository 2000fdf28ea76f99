use core::fmt::{self, Write as _};

use crate::*;

const HIDDEN: char = '🟩';
const FLAG: char = '🚩';
const MINE: char = '💣';

/// Row and column labels share one circled-digit alphabet, 1-indexed for the
/// player.
fn label_glyph(index: Coord) -> char {
    debug_assert!(index < BoardConfig::MAX_AXIS);
    char::from_u32('⒈' as u32 + u32::from(index)).unwrap()
}

/// Fullwidth digit for a revealed cell's adjacent-mine count.
fn count_glyph(count: u8) -> char {
    debug_assert!(count <= 8);
    char::from_u32('０' as u32 + u32::from(count)).unwrap()
}

fn cell_glyph(cell: Cell) -> char {
    if cell.is_flagged() {
        FLAG
    } else if !cell.is_revealed() {
        HIDDEN
    } else if cell.is_mine() {
        MINE
    } else {
        count_glyph(cell.adjacent_mines())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.size();

        f.write_str(" ")?;
        for col in 0..cols {
            write!(f, " {}", label_glyph(col))?;
        }
        writeln!(f)?;

        for row in 0..rows {
            write!(f, "{} ", label_glyph(row))?;
            for col in 0..cols {
                f.write_char(cell_glyph(self[(row, col)]))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
