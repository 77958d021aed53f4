//! Random domino tilings of the Aztec diamond, grown by domino shuffling
//!
//! Each cycle fills every free cell of the diamond with randomly oriented
//! domino pairs, annihilates pairs of dominoes that face each other, then
//! grows the diamond by one ring and slides every survivor one step along
//! its facing. Every change is reported to a renderer, which paces the
//! shuffle through the futures it returns.

#![forbid(unsafe_code)]

/// The shuffle phases and the driver that rotates through them
pub mod algorithm;
/// Command line, configuration, errors and output
pub mod io;
/// Renderers receiving shuffle notifications
pub mod render;
/// Coordinates, the diamond mask, dominoes and the occupancy grid
pub mod spatial;

pub use io::error::{Result, TilingError};
