//! Occupancy grid over an Aztec diamond
//!
//! A square array of cells overlaid on the diamond mask. Each cell is either
//! blocked, free, or occupied by exactly one domino. The grid is never
//! resized in place; a larger diamond gets a freshly built grid seeded from
//! the live tiles.

use ndarray::Array2;

use crate::io::error::{Result, TilingError};
use crate::spatial::coordinate::Coordinate;
use crate::spatial::diamond::DiamondMask;
use crate::spatial::tiles::Domino;

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Outside the diamond, never occupied
    Blocked,
    /// Inside the diamond and not covered
    Free,
    /// Covered by the given domino
    Occupied(Domino),
}

/// Square occupancy grid of side `2 * half_size`
///
/// Cells are indexed `[x, y]`.
#[derive(Debug, Clone)]
pub struct Grid {
    mask: DiamondMask,
    cells: Array2<Cell>,
}

impl Grid {
    /// Create an empty grid for the given half size
    ///
    /// # Errors
    ///
    /// Returns an error if `half_size` is zero
    pub fn new(half_size: usize) -> Result<Self> {
        let mask = DiamondMask::new(half_size)?;
        let side = mask.side();
        let cells = Array2::from_shape_fn((side, side), |(i, j)| {
            if mask.is_blocked(i, j) {
                Cell::Blocked
            } else {
                Cell::Free
            }
        });

        Ok(Self { mask, cells })
    }

    /// Create a grid and place every given domino on it
    ///
    /// # Errors
    ///
    /// Returns an error if `half_size` is zero, or if any domino leaves the
    /// grid or lands on a cell that is blocked or already taken
    pub fn with_dominoes<'a, I>(half_size: usize, dominoes: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Domino>,
    {
        let mut grid = Self::new(half_size)?;
        for domino in dominoes {
            grid.put(domino)?;
        }
        Ok(grid)
    }

    /// Half the side length
    pub const fn half_size(&self) -> usize {
        self.mask.half_size()
    }

    /// Side length
    pub const fn side(&self) -> usize {
        self.mask.side()
    }

    /// The diamond mask this grid was built from
    pub const fn mask(&self) -> &DiamondMask {
        &self.mask
    }

    /// State of the cell at a coordinate
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate lies outside the grid
    pub fn cell(&self, coordinate: Coordinate) -> Result<Cell> {
        let index = self.index(coordinate)?;
        self.cells
            .get(index)
            .copied()
            .ok_or(TilingError::OutOfBounds {
                coordinate,
                side: self.side(),
            })
    }

    /// Whether the cell at a coordinate is free
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate lies outside the grid
    pub fn is_free(&self, coordinate: Coordinate) -> Result<bool> {
        Ok(matches!(self.cell(coordinate)?, Cell::Free))
    }

    /// The domino covering a coordinate, if any
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate lies outside the grid
    pub fn get(&self, coordinate: Coordinate) -> Result<Option<Domino>> {
        match self.cell(coordinate)? {
            Cell::Occupied(domino) => Ok(Some(domino)),
            Cell::Blocked | Cell::Free => Ok(None),
        }
    }

    /// Mark both cells of a domino as occupied by it
    ///
    /// Both cells are checked before either is written, so a failed put
    /// leaves the grid untouched.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` or `CellNotFree` if either cell cannot take the domino
    pub fn put(&mut self, domino: &Domino) -> Result<()> {
        self.put_all(std::slice::from_ref(domino))
    }

    /// Place a freshly filled pair, validating all four cells first
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` or `CellNotFree` if any cell cannot be taken
    pub fn put_pair(&mut self, pair: &[Domino; 2]) -> Result<()> {
        self.put_all(pair)
    }

    /// Mark both cells of a domino as free again
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds`, or `CellNotOccupied` if either cell is not
    /// covered by this domino
    pub fn remove(&mut self, domino: &Domino) -> Result<()> {
        let mut indices = Vec::with_capacity(2);
        for coordinate in domino.cells() {
            let index = self.index(coordinate)?;
            match self.cells.get(index) {
                Some(Cell::Occupied(occupant)) if occupant.id() == domino.id() => {
                    indices.push(index);
                }
                _ => return Err(TilingError::CellNotOccupied { coordinate }),
            }
        }

        for index in indices {
            if let Some(cell) = self.cells.get_mut(index) {
                *cell = Cell::Free;
            }
        }
        Ok(())
    }

    /// Number of free cells
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|c| matches!(c, Cell::Free)).count()
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, Cell::Occupied(_)))
            .count()
    }

    /// Number of blocked cells
    pub fn blocked_count(&self) -> usize {
        self.mask.blocked_count()
    }

    /// Every coordinate of the grid, outer loop over `x`, inner over `y`
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let side = self.side() as i32;
        (0..side).flat_map(move |x| (0..side).map(move |y| Coordinate::new(x, y)))
    }

    fn put_all(&mut self, dominoes: &[Domino]) -> Result<()> {
        let mut targets = Vec::with_capacity(dominoes.len() * 2);
        for domino in dominoes {
            for coordinate in domino.cells() {
                let index = self.index(coordinate)?;
                let free = matches!(self.cells.get(index), Some(Cell::Free));
                if !free || targets.iter().any(|(taken, _)| *taken == index) {
                    return Err(TilingError::CellNotFree { coordinate });
                }
                targets.push((index, *domino));
            }
        }

        for (index, domino) in targets {
            if let Some(cell) = self.cells.get_mut(index) {
                *cell = Cell::Occupied(domino);
            }
        }
        Ok(())
    }

    // Grid indices for a coordinate, rejecting anything outside [0, side)
    fn index(&self, coordinate: Coordinate) -> Result<[usize; 2]> {
        let side = self.side();
        match (usize::try_from(coordinate.x), usize::try_from(coordinate.y)) {
            (Ok(x), Ok(y)) if x < side && y < side => Ok([x, y]),
            _ => Err(TilingError::OutOfBounds { coordinate, side }),
        }
    }
}
