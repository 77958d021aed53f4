//! Domino shuffling over a growing Aztec diamond
//!
//! A [`Tiling`] runs the fill → zap → expand rotation. Each phase mutates the
//! grid and the tile list together, then reports the change to its renderer
//! and waits for the acknowledgment before moving on. The renderer paces the
//! tiling but never influences its logical evolution.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::io::error::{Result, TilingError};
use crate::render::Renderer;
use crate::spatial::coordinate::{Coordinate, shift};
use crate::spatial::grid::{Cell, Grid};
use crate::spatial::tiles::{Domino, Tile, TileId, TileIdAllocator, random_pair};

/// A random domino tiling of an Aztec diamond, grown by shuffling
///
/// Starts at half size 1 with an empty grid and no tiles.
pub struct Tiling<R: Renderer, G: Rng = StdRng> {
    size: usize,
    tiles: Vec<Tile<R::Handle>>,
    grid: Grid,
    ids: TileIdAllocator,
    renderer: R,
    rng: G,
}

impl<R: Renderer> Tiling<R, StdRng> {
    /// Create a tiling whose coin flips come from operating system entropy
    ///
    /// # Errors
    ///
    /// Returns an error if the initial grid cannot be built
    pub fn new(renderer: R) -> Result<Self> {
        Self::with_rng(renderer, StdRng::from_os_rng())
    }

    /// Create a tiling with reproducible coin flips
    ///
    /// # Errors
    ///
    /// Returns an error if the initial grid cannot be built
    pub fn with_seed(renderer: R, seed: u64) -> Result<Self> {
        Self::with_rng(renderer, StdRng::seed_from_u64(seed))
    }
}

impl<R: Renderer, G: Rng> Tiling<R, G> {
    /// Create a tiling drawing its coin flips from `rng`
    ///
    /// # Errors
    ///
    /// Returns an error if the initial grid cannot be built
    pub fn with_rng(renderer: R, rng: G) -> Result<Self> {
        Ok(Self {
            size: 1,
            tiles: Vec::new(),
            grid: Grid::new(1)?,
            ids: TileIdAllocator::new(),
            renderer,
            rng,
        })
    }

    /// Current half size, i.e. the order of the diamond
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Current grid side length
    pub const fn side(&self) -> usize {
        self.size * 2
    }

    /// Live tiles in placement order
    pub fn tiles(&self) -> &[Tile<R::Handle>] {
        &self.tiles
    }

    /// Current occupancy grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The renderer receiving notifications
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer
    pub const fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Give up the tiling and keep its renderer
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Cover every free cell with randomly shaped domino pairs
    ///
    /// Cells are scanned with `x` in the outer loop and `y` in the inner loop.
    /// At each free cell one coin flip chooses two stacked horizontal
    /// dominoes (facing up and down) or two side-by-side vertical dominoes
    /// (facing left and right) covering the 2x2 block anchored there. Each
    /// pair is reported to the renderer as it is placed.
    ///
    /// # Errors
    ///
    /// Returns an error if a pair cannot be placed, which means the grid
    /// was not in a state produced by a preceding expand, or if the renderer
    /// fails
    pub async fn fill(&mut self) -> Result<()> {
        let side = self.grid.side() as i32;
        for i in 0..side {
            for j in 0..side {
                let anchor = Coordinate::new(i, j);
                if !self.grid.is_free(anchor)? {
                    continue;
                }

                let pair = random_pair(&mut self.rng, anchor, &mut self.ids)?;
                self.grid.put_pair(&pair)?;
                self.tiles.extend(pair.map(Tile::new));

                let new_tiles = self.tiles.last_chunk_mut::<2>().ok_or_else(|| {
                    TilingError::InvariantViolation {
                        reason: "a filled pair is missing from the tile list".to_string(),
                    }
                })?;
                self.renderer.render_fill(new_tiles).await?;
            }
        }

        self.renderer.step_complete().await
    }

    /// Annihilate every pair of adjacent dominoes facing each other
    ///
    /// Cells are scanned over `[0, side - 1)` on both axes. A collision is
    /// only looked for from a domino facing right or down, towards the cell
    /// it faces, so each facing pair is found once. Removed tiles leave the
    /// grid immediately and cannot match again in the same scan.
    ///
    /// # Errors
    ///
    /// Returns an error if grid and tile list disagree, or if the renderer fails
    pub async fn zap(&mut self) -> Result<()> {
        let limit = self.grid.side() as i32 - 1;
        for i in 0..limit {
            for j in 0..limit {
                let coordinate = Coordinate::new(i, j);
                let Some(domino) = self.grid.get(coordinate)? else {
                    continue;
                };
                if !domino.orientation().is_outward() {
                    continue;
                }

                let facing = shift(coordinate, domino.orientation());
                let Some(neighbor) = self.grid.get(facing)? else {
                    continue;
                };
                if neighbor.orientation() != domino.orientation().opposite() {
                    continue;
                }

                self.grid.remove(&domino)?;
                self.grid.remove(&neighbor)?;
                let pair = [self.take_tile(domino.id())?, self.take_tile(neighbor.id())?];
                self.renderer.render_zap(pair).await?;
            }
        }

        self.renderer.step_complete().await
    }

    /// Grow the diamond by one ring and slide every domino along its facing
    ///
    /// Every cell `c` of a tile becomes `translate(shift(c, facing))`; the
    /// grid is rebuilt from scratch for the new size. Must follow a zap. If
    /// the moved tiles do not fit, the tiling is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CellNotFree` or `OutOfBounds` if the moved tiles do not fit
    /// the larger diamond, or an error from the renderer
    pub async fn expand(&mut self) -> Result<()> {
        let size = self.size + 1;
        let moved: Vec<Domino> = self
            .tiles
            .iter()
            .map(|tile| tile.domino().advanced())
            .collect();
        let grid = Grid::with_dominoes(size, &moved)?;

        self.size = size;
        self.grid = grid;
        self.tiles = std::mem::take(&mut self.tiles)
            .into_iter()
            .zip(moved)
            .map(|(tile, domino)| tile.with_domino(domino))
            .collect();

        let side = self.side();
        self.renderer.render_expand(&mut self.tiles, side).await?;
        self.renderer.step_complete().await
    }

    /// Check that the tile list and grid occupancy describe the same tiling
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` describing the first disagreement found
    pub fn check_invariants(&self) -> Result<()> {
        let violation =
            |reason: String| -> Result<()> { Err(TilingError::InvariantViolation { reason }) };

        if self.grid.half_size() != self.size {
            return violation(format!(
                "grid half size {} differs from tiling size {}",
                self.grid.half_size(),
                self.size
            ));
        }

        let mut ids = HashSet::with_capacity(self.tiles.len());
        let mut covered = HashSet::with_capacity(self.tiles.len() * 2);
        for tile in &self.tiles {
            if !ids.insert(tile.id()) {
                return violation(format!("tile {} is listed twice", tile.id()));
            }
            for cell in tile.cells() {
                if !covered.insert(cell) {
                    return violation(format!("cell {cell} is covered by two tiles"));
                }
                match self.grid.cell(cell)? {
                    Cell::Occupied(domino) if domino == *tile.domino() => {}
                    _ => {
                        return violation(format!(
                            "tile {} covers {cell} but the grid does not record it",
                            tile.id()
                        ));
                    }
                }
            }
        }

        for coordinate in self.grid.coordinates() {
            if let Some(domino) = self.grid.get(coordinate)? {
                if !ids.contains(&domino.id()) {
                    return violation(format!(
                        "grid records tile {} at {coordinate} which is not live",
                        domino.id()
                    ));
                }
            }
        }

        Ok(())
    }

    // Remove a tile from the live list, keeping the order of the rest
    fn take_tile(&mut self, id: TileId) -> Result<Tile<R::Handle>> {
        let index = self
            .tiles
            .iter()
            .position(|tile| tile.id() == id)
            .ok_or(TilingError::TileNotFound { id })?;
        Ok(self.tiles.remove(index))
    }
}
