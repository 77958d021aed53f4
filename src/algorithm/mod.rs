/// Phase rotation for stepping or running a tiling
pub mod driver;
/// The fill, zap and expand phases of domino shuffling
pub mod tiling;

pub use driver::{Driver, Phase};
pub use tiling::Tiling;
