use ndarray::Array2;

use crate::*;

/// What a move selector gets to look at: the board and which cells are open.
///
/// Flags are deliberately absent, so selectors may pick a flagged cell.
#[derive(Copy, Clone, Debug)]
pub struct Observation<'a> {
    board: &'a Board,
    revealed: &'a Array2<bool>,
}

impl<'a> Observation<'a> {
    pub fn new(board: &'a Board, revealed: &'a Array2<bool>) -> Result<Self> {
        let obs = Self::from_parts(board, revealed);
        obs.validate()?;
        Ok(obs)
    }

    pub(crate) fn from_parts(board: &'a Board, revealed: &'a Array2<bool>) -> Self {
        Self { board, revealed }
    }

    pub fn validate(&self) -> Result<()> {
        if self.revealed.dim() != self.board.cells().dim() {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(())
    }

    pub fn size(&self) -> Coord {
        self.board.size()
    }

    /// Out-of-bounds cells count as hidden.
    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    /// Value of an open cell as the player sees it.
    pub fn revealed_value(&self, coords: Coord2) -> Option<CellValue> {
        self.is_revealed(coords).then(|| self.board[coords])
    }

    /// True content of any cell, hidden or not. Only an oracle should read this.
    pub(crate) fn true_value(&self, coords: Coord2) -> CellValue {
        self.board[coords]
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.board.iter_neighbors(coords)
    }

    /// Hidden cells in row-major order.
    pub fn unrevealed(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.board.iter_coords().filter(|&pos| !self.is_revealed(pos))
    }

    pub fn unrevealed_neighbor_count(&self, coords: Coord2) -> u8 {
        // at most eight neighbors
        self.iter_neighbors(coords)
            .filter(|&pos| !self.is_revealed(pos))
            .count() as u8
    }
}
