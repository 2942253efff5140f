use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;
pub use heuristic::*;
pub use observation::*;
pub use random::*;

mod heuristic;
mod observation;
mod random;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn selector(self) -> &'static dyn MoveSelector {
        match self {
            Self::Easy => &EasySelector,
            Self::Medium => &MediumSelector,
            Self::Hard => &HardSelector,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

/// Picks the next cell to reveal. Implementations never mutate the game.
pub trait MoveSelector {
    /// Fails with [`GameError::NoMovesAvailable`] when every cell is already open.
    fn select_move(&self, obs: &Observation<'_>, rng: &mut dyn RngCore) -> Result<Coord2>;
}

fn pick_random(cells: &[Coord2], rng: &mut dyn RngCore) -> Result<Coord2> {
    cells.choose(rng).copied().ok_or(GameError::NoMovesAvailable)
}

fn pick_random_unrevealed(obs: &Observation<'_>, rng: &mut dyn RngCore) -> Result<Coord2> {
    let hidden: Vec<_> = obs.unrevealed().collect();
    pick_random(&hidden, rng)
}

/// AI player with its own random stream.
#[derive(Clone, Debug)]
pub struct AiEngine {
    difficulty: Difficulty,
    rng: SmallRng,
}

impl AiEngine {
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn select_move(&mut self, state: &GameState) -> Result<Coord2> {
        self.select_from(&state.observation())
    }

    pub fn select_from(&mut self, obs: &Observation<'_>) -> Result<Coord2> {
        let coords = self.difficulty.selector().select_move(obs, &mut self.rng)?;
        log::debug!("AI ({:?}) picked {:?}", self.difficulty, coords);
        Ok(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn every_tier_picks_an_unrevealed_cell() {
        let board = Board::from_mine_coords(4, &[(0, 0), (3, 3)]).unwrap();
        let revealed = Array2::from_shape_fn([4, 4], |(x, _)| x < 2);
        let obs = Observation::new(&board, &revealed).unwrap();

        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut ai = AiEngine::new(difficulty, 9);
            for _ in 0..16 {
                let coords = ai.select_from(&obs).unwrap();
                assert!(!obs.is_revealed(coords), "{difficulty:?} picked {coords:?}");
            }
        }
    }

    #[test]
    fn every_tier_fails_without_moves() {
        let board = Board::from_mine_coords(3, &[(1, 1)]).unwrap();
        let revealed = Array2::from_elem([3, 3], true);
        let obs = Observation::new(&board, &revealed).unwrap();

        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(
                AiEngine::new(difficulty, 0).select_from(&obs),
                Err(GameError::NoMovesAvailable)
            );
        }
    }

    #[test]
    fn select_move_reads_game_state_without_changing_it() {
        let mut state = GameState::new_game(GameConfig::default(), 4).unwrap();
        state.reveal((5, 5));
        let revealed = state.revealed_count();

        let coords = AiEngine::new(Difficulty::Medium, 4)
            .select_move(&state)
            .unwrap();

        assert!(!state.is_revealed(coords));
        assert_eq!(state.revealed_count(), revealed);
    }

    #[test]
    fn same_seed_same_moves() {
        let board = Board::from_mine_coords(6, &[(1, 1), (4, 2)]).unwrap();
        let revealed = Array2::from_elem([6, 6], false);
        let obs = Observation::new(&board, &revealed).unwrap();

        let mut first = AiEngine::new(Difficulty::Easy, 77);
        let mut second = AiEngine::new(Difficulty::Easy, 77);

        for _ in 0..8 {
            assert_eq!(first.select_from(&obs), second.select_from(&obs));
        }
    }
}
