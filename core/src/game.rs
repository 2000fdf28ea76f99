use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Every non-mine cell was revealed.
    Won,
    /// A mine was revealed.
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no moves can be made anymore.
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Represents one game from the first move to the final disclosure.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    board: Board,
    revealed_count: CellCount,
    status: GameStatus,
}

impl Game {
    pub fn new(board: Board) -> Self {
        let mut game = Self {
            board,
            revealed_count: 0,
            status: GameStatus::default(),
        };
        // a board with no safe cells is won before the first turn
        if game.board.safe_cell_count() == 0 {
            game.end(true);
        }
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Non-mine cells revealed so far. Failed reveals never advance this.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.check_in_progress()?;

        let outcome = self.board.reveal(coords)?;
        match outcome {
            RevealOutcome::Exploded => self.end(false),
            RevealOutcome::Safe => {
                self.revealed_count += 1;
                if self.revealed_count == self.board.safe_cell_count() {
                    self.end(true);
                }
            }
        }
        Ok(outcome)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<()> {
        self.check_in_progress()?;
        self.board.toggle_flag(coords)
    }

    fn end(&mut self, won: bool) {
        self.status = if won { GameStatus::Won } else { GameStatus::Lost };
        self.board.reveal_all_mines(won);
        log::debug!("Game ended, won: {}", won);
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: Coord2, mines: &[Coord2]) -> Game {
        Game::new(Board::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn revealing_every_safe_cell_wins() {
        let mut game = game((3, 3), &[(0, 0)]);

        for coords in [(2, 2), (0, 1), (1, 0), (1, 1), (0, 2), (2, 0), (1, 2), (2, 1)] {
            assert_eq!(game.status(), GameStatus::InProgress);
            assert_eq!(game.reveal(coords).unwrap(), RevealOutcome::Safe);
        }

        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.board().cell_at((0, 0)).is_revealed());
        assert!(game.board().cell_at((0, 0)).is_flagged());
    }

    #[test]
    fn revealing_the_mine_first_loses() {
        let mut game = game((3, 3), &[(0, 0)]);

        assert_eq!(game.reveal((0, 0)).unwrap(), RevealOutcome::Exploded);

        assert_eq!(game.status(), GameStatus::Lost);
        assert!(game.board().cell_at((0, 0)).is_revealed());
        assert!(!game.board().cell_at((0, 0)).is_flagged());
    }

    #[test]
    fn failed_reveals_do_not_advance_the_counter() {
        let mut game = game((3, 3), &[(0, 0)]);
        game.reveal((1, 1)).unwrap();

        assert_eq!(game.reveal((9, 9)), Err(GameError::OutOfBounds));
        assert_eq!(game.reveal((1, 1)), Err(GameError::AlreadyRevealed));
        assert_eq!(game.revealed_count(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn flags_never_affect_the_win_condition() {
        let mut game = game((3, 3), &[(0, 0)]);

        game.toggle_flag((0, 0)).unwrap();
        game.toggle_flag((2, 2)).unwrap();

        assert_eq!(game.revealed_count(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn moves_after_the_end_are_rejected() {
        let mut game = game((3, 3), &[(0, 0)]);
        game.reveal((0, 0)).unwrap();

        assert_eq!(game.reveal((1, 1)), Err(GameError::AlreadyEnded));
        assert_eq!(game.toggle_flag((1, 1)), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn all_mine_board_is_won_at_construction() {
        let coords: Vec<Coord2> = (0..3)
            .flat_map(|row| (0..3).map(move |col| (row, col)))
            .collect();
        let game = game((3, 3), &coords);

        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.board().cell_at((1, 1)).is_flagged());
    }
}
