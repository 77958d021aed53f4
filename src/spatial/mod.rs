//! Spatial data structures for the diamond and its dominoes
//!
//! This module contains spatial-related functionality including:
//! - Coordinates, orientations and the geometry between them
//! - The Aztec diamond blocked-cell mask
//! - Domino tiles and random pair creation
//! - The occupancy grid

/// Coordinates, orientations and pure geometric helpers
pub mod coordinate;
/// Aztec diamond mask
pub mod diamond;
/// Occupancy grid over the diamond
pub mod grid;
/// Domino tiles and their identities
pub mod tiles;

pub use coordinate::{Coordinate, Orientation};
pub use grid::{Cell, Grid};
pub use tiles::{Domino, Tile, TileId};
