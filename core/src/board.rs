use core::ops::Index;

use ndarray::Array2;

use crate::*;

/// The full grid of cells plus the operations on them.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Builds a board with the given mines armed. Mine coordinates must be
    /// pairwise distinct; the generator guarantees this for random games.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mines: CellCount = mine_coords
            .len()
            .try_into()
            .map_err(|_| GameError::TooManyMines)?;
        BoardConfig::new(size, mines)?;

        let mut cells: Array2<Cell> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidMineCoords);
            }
            cells[coords.to_nd_index()].is_mine = true;
        }

        let mine_count = cells
            .iter()
            .filter(|cell| cell.is_mine)
            .count()
            .try_into()
            .unwrap();
        Ok(Self { cells, mine_count })
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self[coords]
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// Uncovers one cell. A detonated mine's adjacency count is never
    /// computed; no neighbor cells are uncovered either way.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        if self[coords].is_revealed {
            return Err(GameError::AlreadyRevealed);
        }

        if self[coords].is_mine {
            self.cells[coords.to_nd_index()].is_revealed = true;
            log::debug!("Revealed mine at {:?}", coords);
            return Ok(RevealOutcome::Exploded);
        }

        let adjacent_mines = self.adjacent_mine_count(coords);
        let cell = &mut self.cells[coords.to_nd_index()];
        cell.is_revealed = true;
        cell.adjacent_mines = adjacent_mines;
        log::debug!("Revealed cell at {:?}, adjacent mines: {}", coords, adjacent_mines);
        Ok(RevealOutcome::Safe)
    }

    /// Flips the flag marker. Revealed cells can be flagged too; the marker
    /// only affects rendering.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];
        cell.is_flagged = !cell.is_flagged;
        Ok(())
    }

    /// End-of-game disclosure: every mine is uncovered, flagged on a win and
    /// bare on a loss. Non-mine cells keep their state.
    pub fn reveal_all_mines(&mut self, won: bool) {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_mine) {
            cell.is_revealed = true;
            cell.is_flagged = won;
        }
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        neighbors(coords, self.size())
            .filter(|&pos| self[pos].is_mine)
            .count()
            .try_into()
            .unwrap()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
