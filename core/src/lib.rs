#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use ai::*;
pub use controller::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod ai;
mod controller;
mod engine;
mod error;
mod generator;
mod tile;
mod types;

/// Smallest mine count a player can choose.
pub const MIN_MINES: CellCount = 10;

/// Largest mine count a player can choose.
pub const MAX_MINES: CellCount = 20;

/// Smallest board side accepted by [`GameConfig::new`], so that [`MAX_MINES`] always leaves safe cells.
pub const MIN_SIZE: Coord = 5;

pub const DEFAULT_SIZE: Coord = 10;

/// Clamps a user-chosen mine count into `MIN_MINES..=MAX_MINES`.
pub fn clamp_mine_count(mines: i64) -> CellCount {
    // both bounds fit in CellCount
    mines.clamp(MIN_MINES.into(), MAX_MINES.into()) as CellCount
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Config for a user-facing game, with the mine count clamped and the board large enough to hold it.
    pub fn new(size: Coord, mines: i64) -> Self {
        Self::new_unchecked(size.max(MIN_SIZE), clamp_mine_count(mines))
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }

    /// Same board size with a new, clamped mine count.
    pub fn with_mines(self, mines: i64) -> Self {
        Self::new_unchecked(self.size, clamp_mine_count(mines))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SIZE, MIN_MINES)
    }
}

/// Square grid of cell values, each either a mine or its adjacency count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<CellValue>,
    mine_count: CellCount,
}

impl Board {
    pub(crate) fn empty(size: Coord) -> Self {
        let size = usize::from(size);
        Self {
            cells: Array2::default([size, size]),
            mine_count: 0,
        }
    }

    /// Marks `coords` as a mine and bumps the count of every non-mine neighbor.
    ///
    /// Returns `false` when the cell already held a mine.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        if self[coords].is_mine() {
            return false;
        }

        self.cells[coords.to_nd_index()] = CellValue::Mine;
        self.mine_count += 1;
        for pos in self.iter_neighbors(coords) {
            if let CellValue::Count(count) = &mut self.cells[pos.to_nd_index()] {
                *count += 1;
            }
        }
        true
    }

    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidBoardSize);
        }

        let mut board = Self::empty(size);
        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            board.place_mine(coords);
        }
        Ok(board)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoordinate)
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        area(self.size())
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    /// Counts mines around `coords` from scratch, independent of the stored value.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most eight neighbors
        self.iter_neighbors(coords)
            .filter(|&pos| self.contains_mine(pos))
            .count() as u8
    }

    pub fn cells(&self) -> &Array2<CellValue> {
        &self.cells
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub fn iter_coords(&self) -> CellIter {
        self.cells.iter_coords()
    }
}

impl Index<Coord2> for Board {
    type Output = CellValue;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.cells[(x as usize, y as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
