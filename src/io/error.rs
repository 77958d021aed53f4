//! Error types for tiling operations, rendering and output

use std::fmt;
use std::path::PathBuf;

use crate::spatial::coordinate::{Coordinate, Orientation};
use crate::spatial::tiles::TileId;

/// Main error type for all tiling operations
///
/// The grid and shuffle variants are contract violations raised by the
/// algorithm itself; they abort the running phase and are never retried.
#[derive(Debug)]
pub enum TilingError {
    /// A coordinate falls outside `[0, side)` on either axis
    OutOfBounds {
        /// The offending coordinate
        coordinate: Coordinate,
        /// Side length of the grid that was accessed
        side: usize,
    },

    /// A domino was placed on a cell that is blocked or already occupied
    CellNotFree {
        /// The cell that was not free
        coordinate: Coordinate,
    },

    /// A domino was removed from a cell it does not occupy
    CellNotOccupied {
        /// The cell that did not hold the domino
        coordinate: Coordinate,
    },

    /// Two cells do not form a domino with the given orientation
    ///
    /// Horizontal pairs must face up or down, vertical pairs left or right.
    MalformedTile {
        /// The two cells that were supplied
        cells: [Coordinate; 2],
        /// The orientation that was supplied
        orientation: Orientation,
    },

    /// The grid references a tile the live tile list no longer holds
    TileNotFound {
        /// Identifier found in the grid
        id: TileId,
    },

    /// Tile list and grid occupancy disagree
    InvariantViolation {
        /// Description of the first disagreement found
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The presenting side of a renderer went away before acknowledging
    RendererDisconnected,

    /// Writing rendered output failed
    Output {
        /// Description of the write that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save an image or animation to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coordinate, side } => {
                write!(
                    f,
                    "Coordinate {coordinate} is outside the {side}x{side} grid"
                )
            }
            Self::CellNotFree { coordinate } => {
                write!(f, "Cell {coordinate} is not free")
            }
            Self::CellNotOccupied { coordinate } => {
                write!(f, "Cell {coordinate} is not occupied by the removed tile")
            }
            Self::MalformedTile { cells, orientation } => {
                write!(
                    f,
                    "Cells {} and {} do not form a domino facing {orientation}",
                    cells[0], cells[1]
                )
            }
            Self::TileNotFound { id } => {
                write!(f, "Tile {id} is in the grid but not in the tile list")
            }
            Self::InvariantViolation { reason } => {
                write!(f, "Tiling invariant violated: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::RendererDisconnected => {
                write!(f, "Renderer disconnected before acknowledging a notification")
            }
            Self::Output { operation, source } => {
                write!(f, "Output error during {operation}: {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::Output { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

impl From<futures::channel::oneshot::Canceled> for TilingError {
    fn from(_: futures::channel::oneshot::Canceled) -> Self {
        Self::RendererDisconnected
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error raised while writing rendered output
pub const fn output_error(operation: &'static str, source: std::io::Error) -> TilingError {
    TilingError::Output { operation, source }
}

/// Create the parent directory of an output path if it is missing
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn ensure_parent_dir(path: &std::path::Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if parent.as_os_str().is_empty() {
            return Ok(());
        }
        std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
