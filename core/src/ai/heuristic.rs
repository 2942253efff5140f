use rand::RngCore;

use super::*;

/// Local mine likelihood of a hidden cell, judged from its open numbered neighbors.
///
/// Each neighbor showing `n > 0` contributes `n / hidden cells around it`; the
/// cell's risk is the largest contribution, or 0 with no such neighbor.
pub fn risk_at(obs: &Observation<'_>, coords: Coord2) -> f32 {
    obs.iter_neighbors(coords)
        .filter_map(|pos| match obs.revealed_value(pos) {
            Some(CellValue::Count(count)) if count > 0 => Some((pos, count)),
            _ => None,
        })
        .filter_map(|(pos, count)| {
            let hidden = obs.unrevealed_neighbor_count(pos);
            (hidden > 0).then(|| f32::from(count) / f32::from(hidden))
        })
        .fold(0.0, f32::max)
}

/// Greedy one-step heuristic: takes the first zero-risk cell, else the least risky one.
#[derive(Copy, Clone, Debug, Default)]
pub struct MediumSelector;

impl MoveSelector for MediumSelector {
    fn select_move(&self, obs: &Observation<'_>, rng: &mut dyn RngCore) -> Result<Coord2> {
        let mut best: Option<(Coord2, f32)> = None;

        for coords in obs.unrevealed() {
            let risk = risk_at(obs, coords);
            if risk == 0.0 {
                log::trace!("Zero risk at {:?}", coords);
                return Ok(coords);
            }
            if best.is_none_or(|(_, best_risk)| risk < best_risk) {
                best = Some((coords, risk));
            }
        }

        match best {
            Some((coords, risk)) => {
                log::trace!("Lowest risk {} at {:?}", risk, coords);
                Ok(coords)
            }
            None => pick_random_unrevealed(obs, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn pick(board: &Board, revealed: &Array2<bool>) -> Result<Coord2> {
        let obs = Observation::new(board, revealed).unwrap();
        MediumSelector.select_move(&obs, &mut SmallRng::seed_from_u64(0))
    }

    /// 5x5 board, mine at (3, 3), the block around (2, 2) open except the mine.
    fn single_hidden_neighbor() -> (Board, Array2<bool>) {
        let board = Board::from_mine_coords(5, &[(3, 3)]).unwrap();
        let revealed = Array2::from_shape_fn([5, 5], |(x, y)| {
            (1..=3).contains(&x) && (1..=3).contains(&y) && (x, y) != (3, 3)
        });
        (board, revealed)
    }

    #[test]
    fn lone_hidden_neighbor_of_a_one_has_full_risk() {
        let (board, revealed) = single_hidden_neighbor();
        let obs = Observation::new(&board, &revealed).unwrap();

        assert_eq!(obs.revealed_value((2, 2)), Some(CellValue::Count(1)));
        assert_eq!(obs.unrevealed_neighbor_count((2, 2)), 1);
        assert_eq!(risk_at(&obs, (3, 3)), 1.0);
    }

    #[test]
    fn zero_risk_cell_elsewhere_wins_over_full_risk() {
        let (board, revealed) = single_hidden_neighbor();

        // (0, 0) only touches the open zero at (1, 1)
        assert_eq!(pick(&board, &revealed), Ok((0, 0)));
    }

    #[test]
    fn full_risk_cell_is_taken_when_nothing_else_is_hidden() {
        let board = Board::from_mine_coords(5, &[(3, 3)]).unwrap();
        let revealed = Array2::from_shape_fn([5, 5], |pos| pos != (3, 3));

        assert_eq!(pick(&board, &revealed), Ok((3, 3)));
    }

    #[test]
    fn picks_lowest_risk_candidate() {
        // top two rows open, mine at (2, 0)
        let board = Board::from_mine_coords(3, &[(2, 0)]).unwrap();
        let revealed = Array2::from_shape_fn([3, 3], |(x, _)| x < 2);
        let obs = Observation::new(&board, &revealed).unwrap();

        assert_eq!(risk_at(&obs, (2, 0)), 0.5);
        assert_eq!(risk_at(&obs, (2, 1)), 0.5);
        assert_eq!(risk_at(&obs, (2, 2)), 1.0 / 3.0);
        assert_eq!(pick(&board, &revealed), Ok((2, 2)));
    }

    #[test]
    fn ties_go_to_the_first_cell_in_row_major_order() {
        // the open 1 at (0, 1) sees both hidden cells equally
        let board = Board::from_mine_coords(2, &[(1, 0)]).unwrap();
        let revealed = Array2::from_shape_fn([2, 2], |(x, _)| x == 0);
        let obs = Observation::new(&board, &revealed).unwrap();

        assert_eq!(risk_at(&obs, (1, 0)), risk_at(&obs, (1, 1)));
        assert_eq!(pick(&board, &revealed), Ok((1, 0)));
    }

    #[test]
    fn untouched_board_starts_at_the_first_cell() {
        let board = Board::from_mine_coords(4, &[(0, 0)]).unwrap();
        let revealed = Array2::from_elem([4, 4], false);

        assert_eq!(pick(&board, &revealed), Ok((0, 0)));
    }
}
