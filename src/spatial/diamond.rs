//! Blocked-cell mask of an Aztec diamond inscribed in a square grid

use bitvec::prelude::*;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::coordinate::Coordinate;

/// Blocked/free mask for a square grid of side `2 * half_size`
///
/// Cells outside the diamond are blocked. The mask is computed once per
/// size from one quadrant and mirrored into the other three, so it is
/// symmetric under every quadrant reflection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiamondMask {
    half_size: usize,
    blocked: BitVec,
}

impl DiamondMask {
    /// Compute the mask for the given half size
    ///
    /// # Errors
    ///
    /// Returns an error if `half_size` is zero
    pub fn new(half_size: usize) -> Result<Self> {
        if half_size == 0 {
            return Err(invalid_parameter(
                "half_size",
                &half_size,
                &"an Aztec diamond needs a half size of at least 1",
            ));
        }

        let side = half_size * 2;
        let mut blocked = bitvec![0; side * side];

        for i in 0..half_size {
            for j in 0..half_size {
                let fill = i + j + 2 <= half_size;
                let mirrored_i = side - 1 - i;
                let mirrored_j = side - 1 - j;
                blocked.set(i * side + j, fill);
                blocked.set(mirrored_i * side + j, fill);
                blocked.set(i * side + mirrored_j, fill);
                blocked.set(mirrored_i * side + mirrored_j, fill);
            }
        }

        Ok(Self { half_size, blocked })
    }

    /// Half the side length
    pub const fn half_size(&self) -> usize {
        self.half_size
    }

    /// Side length of the square grid
    pub const fn side(&self) -> usize {
        self.half_size * 2
    }

    /// Whether the cell at grid indices `(i, j)` lies outside the diamond
    ///
    /// Indices outside the square count as blocked.
    pub fn is_blocked(&self, i: usize, j: usize) -> bool {
        let side = self.side();
        if i >= side || j >= side {
            return true;
        }
        self.blocked.get(i * side + j).as_deref() == Some(&true)
    }

    /// Whether a coordinate lies inside the diamond
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        match (usize::try_from(coordinate.x), usize::try_from(coordinate.y)) {
            (Ok(i), Ok(j)) => !self.is_blocked(i, j),
            _ => false,
        }
    }

    /// Number of blocked cells
    pub fn blocked_count(&self) -> usize {
        self.blocked.count_ones()
    }

    /// Number of cells inside the diamond
    ///
    /// Equals `2n(n + 1)` for half size `n`.
    pub fn free_count(&self) -> usize {
        self.blocked.count_zeros()
    }
}
