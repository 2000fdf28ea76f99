use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board size")]
    InvalidSize,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Invalid mine coordinates")]
    InvalidMineCoords,
    #[error("Invalid row or column")]
    OutOfBounds,
    #[error("Field already defused")]
    AlreadyRevealed,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
