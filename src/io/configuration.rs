//! Shuffle constants and runtime configuration defaults

use crate::spatial::coordinate::Orientation;

// Default values for configurable parameters
/// Order of the Aztec diamond generated when none is requested
pub const DEFAULT_ORDER: usize = 16;

// Safety limit to prevent excessive memory allocation
/// Largest order the command line accepts
pub const MAX_ORDER: usize = 2_048;
/// Largest order the frame renderer accepts; captured scenes grow with the
/// fourth power of the order
pub const MAX_FRAMES_ORDER: usize = 32;

/// Fixed seed used by benchmarks and examples
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Edge length of one grid cell in exported images, in pixels
pub const DEFAULT_CELL_SIZE_PX: u32 = 8;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// Multiplier applied to the delay of the final GIF frame
pub const FINAL_FRAME_HOLD_FACTOR: u32 = 25;

/// Colour of cells outside the diamond
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 0];
/// Colour of uncovered cells inside the diamond
pub const FREE_COLOR: [u8; 4] = [235, 235, 235, 255];

/// Fill colour of a domino facing the given direction
pub const fn orientation_color(orientation: Orientation) -> [u8; 4] {
    match orientation {
        // yellow
        Orientation::Left => [255, 255, 0, 255],
        // dodger blue
        Orientation::Up => [30, 144, 255, 255],
        // indian red
        Orientation::Right => [205, 92, 92, 255],
        // lime green
        Orientation::Down => [50, 205, 50, 255],
    }
}

/// Suffix of the default PNG output file
pub const PNG_SUFFIX: &str = "_tiling.png";
/// Suffix of the default GIF output file
pub const GIF_SUFFIX: &str = "_shuffle.gif";
