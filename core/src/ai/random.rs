use alloc::vec::Vec;
use rand::RngCore;

use super::*;

/// Clicks any hidden cell, mine or not.
#[derive(Copy, Clone, Debug, Default)]
pub struct EasySelector;

impl MoveSelector for EasySelector {
    fn select_move(&self, obs: &Observation<'_>, rng: &mut dyn RngCore) -> Result<Coord2> {
        pick_random_unrevealed(obs, rng)
    }
}

/// Oracle that peeks at the real board and only clicks safe cells while any are left.
#[derive(Copy, Clone, Debug, Default)]
pub struct HardSelector;

impl MoveSelector for HardSelector {
    fn select_move(&self, obs: &Observation<'_>, rng: &mut dyn RngCore) -> Result<Coord2> {
        let safe: Vec<_> = obs
            .unrevealed()
            .filter(|&pos| !obs.true_value(pos).is_mine())
            .collect();

        if safe.is_empty() {
            pick_random_unrevealed(obs, rng)
        } else {
            pick_random(&safe, rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn easy_covers_every_hidden_cell() {
        let board = Board::from_mine_coords(2, &[(0, 0)]).unwrap();
        let revealed = Array2::from_elem([2, 2], false);
        let obs = Observation::new(&board, &revealed).unwrap();
        let mut rng = SmallRng::seed_from_u64(3);

        let mut seen = Array2::from_elem([2, 2], false);
        for _ in 0..200 {
            let coords = EasySelector.select_move(&obs, &mut rng).unwrap();
            seen[coords.to_nd_index()] = true;
        }

        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn hard_never_picks_a_mine_while_safe_cells_remain() {
        let mines = [(0, 0), (1, 3), (2, 2), (4, 4), (3, 0)];
        let board = Board::from_mine_coords(5, &mines).unwrap();
        let revealed = Array2::from_elem([5, 5], false);
        let obs = Observation::new(&board, &revealed).unwrap();
        let mut rng = SmallRng::seed_from_u64(8);

        for _ in 0..200 {
            let coords = HardSelector.select_move(&obs, &mut rng).unwrap();
            assert!(!board.contains_mine(coords), "picked mine at {coords:?}");
        }
    }

    #[test]
    fn hard_falls_back_to_mines_when_only_mines_remain() {
        let board = Board::from_mine_coords(2, &[(0, 0), (1, 1)]).unwrap();
        let revealed = Array2::from_shape_fn([2, 2], |(x, y)| x != y);
        let obs = Observation::new(&board, &revealed).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);

        let coords = HardSelector.select_move(&obs, &mut rng).unwrap();

        assert!(board.contains_mine(coords));
    }
}
