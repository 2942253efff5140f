use ndarray::Array2;

/// Single coordinate axis used for the board side length and positions.
pub type Coord = u8;

/// Count type used for mine counts, flag counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, `x` being the row and `y` the column.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a square board with the given side.
pub const fn area(size: Coord) -> CellCount {
    let size = size as CellCount;
    size.saturating_mul(size)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        NeighborIter::new(index, (clip(rows), clip(cols)))
    }
}

pub trait CellIterExt {
    /// Every position of the grid in row-major order.
    fn iter_coords(&self) -> CellIter;
}

impl<T> CellIterExt for Array2<T> {
    fn iter_coords(&self) -> CellIter {
        let (rows, cols) = self.dim();
        CellIter::new((clip(rows), clip(cols)))
    }
}

fn clip(len: usize) -> Coord {
    len.try_into().unwrap_or(Coord::MAX)
}

/// Moore neighborhood, row offset first.
const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it stays on the grid.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let next_x = coords.0.checked_add_signed(delta.0)?;
    let next_y = coords.1.checked_add_signed(delta.1)?;
    (next_x < bounds.0 && next_y < bounds.1).then_some((next_x, next_y))
}

/// Neighbors of a cell clipped at the grid edges, the cell itself excluded.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = DISPLACEMENTS.get(usize::from(self.index)) {
            self.index += 1;
            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
        None
    }
}

/// Row-major walk over a grid.
#[derive(Debug)]
pub struct CellIter {
    bounds: Coord2,
    next: Option<Coord2>,
}

impl CellIter {
    pub fn new(bounds: Coord2) -> Self {
        let next = (bounds.0 > 0 && bounds.1 > 0).then_some((0, 0));
        Self { bounds, next }
    }
}

impl Iterator for CellIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let (x, y) = current;
        self.next = if y + 1 < self.bounds.1 {
            Some((x, y + 1))
        } else if x + 1 < self.bounds.0 {
            Some((x + 1, 0))
        } else {
            None
        };
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (10, 10)).collect();
        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        assert_eq!(NeighborIter::new((4, 4), (10, 10)).count(), 8);
        assert!(NeighborIter::new((4, 4), (10, 10)).all(|pos| pos != (4, 4)));
    }

    #[test]
    fn far_edge_is_clipped() {
        let neighbors: Vec<_> = NeighborIter::new((9, 5), (10, 10)).collect();
        assert_eq!(neighbors.len(), 5);
        assert!(neighbors.iter().all(|&(x, y)| x < 10 && y < 10));
    }

    #[test]
    fn cell_iter_is_row_major() {
        let coords: Vec<_> = CellIter::new((2, 3)).collect();
        assert_eq!(coords, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(CellIter::new((0, 4)).count(), 0);
    }

    #[test]
    fn area_saturates() {
        assert_eq!(area(10), 100);
        assert_eq!(area(Coord::MAX), 65025);
    }
}
