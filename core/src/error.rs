use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoordinate,
    #[error("No unrevealed cell left to pick")]
    NoMovesAvailable,
    #[error("Mine count must be between 1 and the number of cells")]
    InvalidMineCount,
    #[error("Board size must be at least 1")]
    InvalidBoardSize,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("It is not the AI's turn")]
    NotAiTurn,
}

pub type Result<T> = core::result::Result<T, GameError>;
