use rand::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::index;

use super::*;

/// Purely random layout: mines go to distinct cells drawn uniformly without replacement.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator {
    rng: SmallRng,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Board> {
        validate_config(config)?;

        let size = usize::from(config.size);
        let mut board = Board::empty(config.size);

        for idx in index::sample(&mut self.rng, size * size, config.mines.into()) {
            // idx < size * size, so both parts fit in Coord
            let coords = ((idx / size) as Coord, (idx % size) as Coord);
            board.place_mine(coords);
        }

        if board.mine_count() != config.mines {
            log::warn!(
                "Generated board count mismatch, actual: {}, requested: {}",
                board.mine_count(),
                config.mines
            );
        }
        log::debug!(
            "Generated {0}x{0} board with {1} mines",
            config.size,
            board.mine_count()
        );
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_counts_consistent(board: &Board) {
        for coords in board.iter_coords() {
            match board[coords] {
                CellValue::Mine => {}
                CellValue::Count(count) => {
                    assert_eq!(count, board.adjacent_mine_count(coords), "at {coords:?}")
                }
            }
        }
    }

    #[test]
    fn places_exact_mine_count() {
        let mut generator = RandomBoardGenerator::new(7);

        for mines in [1, 10, 15, 20, 99, 100] {
            let board = generator
                .generate(GameConfig::new_unchecked(10, mines))
                .unwrap();
            let placed = board.cells().iter().filter(|cell| cell.is_mine()).count();

            assert_eq!(placed, usize::from(mines));
            assert_eq!(board.mine_count(), mines);
        }
    }

    #[test]
    fn adjacency_counts_match_layout() {
        for seed in 0..32 {
            let board = RandomBoardGenerator::new(seed)
                .generate(GameConfig::new(10, 20))
                .unwrap();
            assert_counts_consistent(&board);
        }
    }

    #[test]
    fn same_seed_same_board() {
        let config = GameConfig::default();
        let first = RandomBoardGenerator::new(42).generate(config).unwrap();
        let second = RandomBoardGenerator::new(42).generate(config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn consecutive_boards_differ() {
        let mut generator = RandomBoardGenerator::new(42);
        let config = GameConfig::new(10, 20);

        let first = generator.generate(config).unwrap();
        let boards_differ = (0..8).any(|_| generator.generate(config).unwrap() != first);

        assert!(boards_differ);
    }

    #[test]
    fn rejects_impossible_mine_counts() {
        let mut generator = RandomBoardGenerator::new(0);

        assert_eq!(
            generator.generate(GameConfig::new_unchecked(3, 10)),
            Err(GameError::InvalidMineCount)
        );
        assert_eq!(
            generator.generate(GameConfig::new_unchecked(3, 0)),
            Err(GameError::InvalidMineCount)
        );
        assert_eq!(
            generator.generate(GameConfig::new_unchecked(0, 1)),
            Err(GameError::InvalidBoardSize)
        );
    }
}
