//! Domino tiles, their identities and random pair creation

use std::fmt;

use rand::Rng;

use crate::io::error::{Result, TilingError};
use crate::spatial::coordinate::{
    Coordinate, Orientation, horizontal_pair, shift, translate, vertical_pair,
};

/// Identity of a tile within one tiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out tile identities in increasing order
#[derive(Debug, Clone, Default)]
pub struct TileIdAllocator {
    next: u64,
}

impl TileIdAllocator {
    /// Create an allocator starting at zero
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Take the next unused identity
    pub const fn allocate(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next += 1;
        id
    }
}

/// The geometric part of a tile: identity, two adjacent cells and a facing
///
/// This is what the grid stores for each occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Domino {
    id: TileId,
    cells: [Coordinate; 2],
    orientation: Orientation,
}

impl Domino {
    /// Create a domino, checking that its cells and facing agree
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if the cells are not edge-adjacent, or if a
    /// horizontal pair does not face up/down, or a vertical pair left/right
    pub fn new(id: TileId, cells: [Coordinate; 2], orientation: Orientation) -> Result<Self> {
        let [a, b] = cells;
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();
        let well_formed = match (dx, dy) {
            (1, 0) => orientation.is_horizontal_facing(),
            (0, 1) => !orientation.is_horizontal_facing(),
            _ => false,
        };

        if well_formed {
            Ok(Self {
                id,
                cells,
                orientation,
            })
        } else {
            Err(TilingError::MalformedTile { cells, orientation })
        }
    }

    /// Identity of the tile this domino belongs to
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// The two covered cells, anchor first
    pub const fn cells(&self) -> [Coordinate; 2] {
        self.cells
    }

    /// Facing direction
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the domino covers the given cell
    pub fn covers(&self, coordinate: Coordinate) -> bool {
        self.cells.contains(&coordinate)
    }

    /// The domino after sliding one step along its facing and recentering
    /// for a grid one ring larger
    #[must_use]
    pub fn advanced(&self) -> Self {
        Self {
            cells: self
                .cells
                .map(|cell| translate(shift(cell, self.orientation))),
            ..*self
        }
    }
}

/// A live tile: a domino plus the renderer's presentation handle
///
/// The handle starts empty and is only ever written by a renderer; the
/// tiling carries it along through expansion without reading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile<H> {
    domino: Domino,
    handle: Option<H>,
}

impl<H> Tile<H> {
    /// Wrap a freshly placed domino with no handle yet
    pub const fn new(domino: Domino) -> Self {
        Self {
            domino,
            handle: None,
        }
    }

    /// The tile's geometry
    pub const fn domino(&self) -> &Domino {
        &self.domino
    }

    /// Identity of the tile
    pub const fn id(&self) -> TileId {
        self.domino.id
    }

    /// The two covered cells
    pub const fn cells(&self) -> [Coordinate; 2] {
        self.domino.cells
    }

    /// Facing direction
    pub const fn orientation(&self) -> Orientation {
        self.domino.orientation
    }

    /// Presentation handle, if a renderer has attached one
    pub const fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    /// Mutable access to the presentation handle slot
    pub const fn handle_mut(&mut self) -> &mut Option<H> {
        &mut self.handle
    }

    /// Take the presentation handle out of the tile
    pub const fn take_handle(&mut self) -> Option<H> {
        self.handle.take()
    }

    pub(crate) fn with_domino(self, domino: Domino) -> Self {
        Self {
            domino,
            handle: self.handle,
        }
    }
}

/// Shape of a freshly filled 2x2 block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairShape {
    /// Two horizontal dominoes stacked, the top facing up and the bottom down
    Horizontal,
    /// Two vertical dominoes side by side, the left facing left and the right right
    Vertical,
}

impl PairShape {
    /// Draw a shape from one uniformly random boolean
    pub fn random<G: Rng + ?Sized>(rng: &mut G) -> Self {
        if rng.random::<bool>() {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    /// The two dominoes covering the 2x2 block whose upper-left cell is `anchor`
    ///
    /// # Errors
    ///
    /// Never fails for the shapes built here; the error is propagated from
    /// domino validation
    pub fn dominoes(self, anchor: Coordinate, ids: &mut TileIdAllocator) -> Result<[Domino; 2]> {
        let (first, second) = match self {
            Self::Horizontal => (
                (horizontal_pair(anchor), Orientation::Up),
                (
                    horizontal_pair(shift(anchor, Orientation::Down)),
                    Orientation::Down,
                ),
            ),
            Self::Vertical => (
                (vertical_pair(anchor), Orientation::Left),
                (
                    vertical_pair(shift(anchor, Orientation::Right)),
                    Orientation::Right,
                ),
            ),
        };

        Ok([
            Domino::new(ids.allocate(), first.0, first.1)?,
            Domino::new(ids.allocate(), second.0, second.1)?,
        ])
    }
}

/// Create a randomly shaped pair of dominoes facing away from each other
///
/// # Errors
///
/// Propagates domino validation errors
pub fn random_pair<G: Rng + ?Sized>(
    rng: &mut G,
    anchor: Coordinate,
    ids: &mut TileIdAllocator,
) -> Result<[Domino; 2]> {
    PairShape::random(rng).dominoes(anchor, ids)
}
