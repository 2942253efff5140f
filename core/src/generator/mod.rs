use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    /// Produces a fresh board for `config`, failing when the mine count cannot fit.
    fn generate(&mut self, config: GameConfig) -> Result<Board>;
}

pub(crate) fn validate_config(config: GameConfig) -> Result<()> {
    if config.size == 0 {
        return Err(GameError::InvalidBoardSize);
    }
    if config.mines == 0 || config.mines > config.total_cells() {
        return Err(GameError::InvalidMineCount);
    }
    Ok(())
}
