use alloc::collections::VecDeque;
use core::num::Saturating;
use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Playing
    }
}

/// A single game from first click to win or loss.
///
/// Owns the board and the reveal and flag masks; they only change through
/// [`reveal`](Self::reveal), [`toggle_flag`](Self::toggle_flag),
/// [`check_victory`](Self::check_victory) and [`restart`](Self::restart).
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    revealed: Array2<bool>,
    flagged: Array2<bool>,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    status: GameStatus,
    first_move_pending: bool,
    triggered_mine: Option<Coord2>,
    generator: RandomBoardGenerator,
}

impl GameState {
    /// Fresh game with the mine count of `config` clamped into `MIN_MINES..=MAX_MINES`.
    pub fn new_game(config: GameConfig, seed: u64) -> Result<Self> {
        let config = config.with_mines(config.mines.into());
        let mut generator = RandomBoardGenerator::new(seed);
        let board = generator.generate(config)?;
        Ok(Self::with_generator(board, generator))
    }

    /// Starts a game on a fixed board; a first click on a mine still re-rolls it from `seed`.
    pub fn from_board(board: Board, seed: u64) -> Self {
        Self::with_generator(board, RandomBoardGenerator::new(seed))
    }

    fn with_generator(board: Board, generator: RandomBoardGenerator) -> Self {
        let size = usize::from(board.size());
        Self {
            board,
            revealed: Array2::from_elem([size, size], false),
            flagged: Array2::from_elem([size, size], false),
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
            status: GameStatus::Playing,
            first_move_pending: true,
            triggered_mine: None,
            generator,
        }
    }

    /// Replaces the board with a fresh one of the same size, clamping `mines`.
    pub fn restart(&mut self, mines: i64) -> Result<()> {
        let config = self.board.game_config().with_mines(mines);
        let board = self.generator.generate(config)?;
        log::debug!("Restarted with {} mines", config.mines);

        let generator = self.generator.clone();
        *self = Self::with_generator(board, generator);
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn size(&self) -> Coord {
        self.board.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn flag_count(&self) -> CellCount {
        self.flagged_count.0
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    /// Mines left to flag as shown to the player, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.board.mine_count() as isize) - (self.flagged_count.0 as isize)
    }

    pub fn is_first_move_pending(&self) -> bool {
        self.first_move_pending
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.board.validate_coords(coords).is_ok() && self.revealed[coords.to_nd_index()]
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.board.validate_coords(coords).is_ok() && self.flagged[coords.to_nd_index()]
    }

    /// Value of a revealed cell; hidden cells stay hidden until the final reveal after a loss.
    pub fn cell_value(&self, coords: Coord2) -> Option<CellValue> {
        self.is_revealed(coords).then(|| self.board[coords])
    }

    /// Read-only view of the board and reveal mask for move selection.
    pub fn observation(&self) -> Observation<'_> {
        Observation::from_parts(&self.board, &self.revealed)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        let Ok(coords) = self.board.validate_coords(coords) else {
            log::debug!("Ignoring flag at {:?}: {}", coords, GameError::InvalidCoordinate);
            return MarkOutcome::NoChange;
        };

        if self.status.is_finished() || self.revealed[coords.to_nd_index()] {
            return MarkOutcome::NoChange;
        }

        let flag = &mut self.flagged[coords.to_nd_index()];
        *flag = !*flag;
        if *flag {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        log::debug!("Flag at {:?} set to {}", coords, *flag);
        MarkOutcome::Changed
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let Ok(coords) = self.board.validate_coords(coords) else {
            log::debug!("Ignoring reveal at {:?}: {}", coords, GameError::InvalidCoordinate);
            return RevealOutcome::NoChange;
        };

        if self.status.is_finished() || self.revealed[coords.to_nd_index()] {
            return RevealOutcome::NoChange;
        }

        if self.first_move_pending {
            self.make_first_move_safe(coords);
            self.first_move_pending = false;
        }

        if self.board.contains_mine(coords) {
            log::debug!("Mine hit at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.status = GameStatus::Lost;
            self.reveal_everything();
            return RevealOutcome::HitMine;
        }

        self.flood_reveal(coords);

        if self.check_victory() {
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Whether every safe cell is revealed; marks the game won the first time it holds.
    ///
    /// A lost game never turns into a win, even though its final reveal uncovers everything.
    pub fn check_victory(&mut self) -> bool {
        match self.status {
            GameStatus::Won => true,
            GameStatus::Lost => false,
            GameStatus::Playing => {
                let cleared = Zip::from(&self.revealed)
                    .and(self.board.cells())
                    .all(|&revealed, &value| revealed || value.is_mine());
                if cleared {
                    log::debug!("Board cleared");
                    self.status = GameStatus::Won;
                }
                cleared
            }
        }
    }

    fn make_first_move_safe(&mut self, coords: Coord2) {
        if !self.board.contains_mine(coords) {
            return;
        }

        let config = self.board.game_config();
        if config.mines >= config.total_cells() {
            log::warn!("Cannot make first move safe, board has no safe cell");
            return;
        }

        let mut rerolls = 0u32;
        while self.board.contains_mine(coords) {
            match self.generator.generate(config) {
                Ok(board) => self.board = board,
                Err(err) => {
                    log::warn!("Could not regenerate board: {}", err);
                    return;
                }
            }
            rerolls += 1;
        }
        log::debug!("First move at {:?} re-rolled the board {} times", coords, rerolls);
    }

    fn reveal_cell(&mut self, coords: Coord2) {
        self.revealed[coords.to_nd_index()] = true;
        self.revealed_count += 1;

        let flag = &mut self.flagged[coords.to_nd_index()];
        if *flag {
            *flag = false;
            self.flagged_count -= 1;
        }
    }

    fn flood_reveal(&mut self, start: Coord2) {
        let mut to_visit = VecDeque::from([start]);

        while let Some(visit_coords) = to_visit.pop_front() {
            if self.revealed[visit_coords.to_nd_index()] {
                continue;
            }

            let CellValue::Count(count) = self.board[visit_coords] else {
                log::trace!("Skipping mine at {:?}", visit_coords);
                continue;
            };

            self.reveal_cell(visit_coords);
            log::trace!("Revealed {:?}, mine count: {}", visit_coords, count);

            if count == 0 {
                to_visit.extend(
                    self.board
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| !self.revealed[pos.to_nd_index()]),
                );
            }
        }
    }

    fn reveal_everything(&mut self) {
        self.revealed.fill(true);
        self.revealed_count = Saturating(self.board.total_cells());
        self.flagged.fill(false);
        self.flagged_count = Saturating(0);
    }
}
