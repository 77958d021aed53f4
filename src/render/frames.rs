//! Frame capture and GIF generation for shuffle animations

use std::collections::BTreeMap;
use std::path::Path;

use image::{Frame, Rgba, RgbaImage};

use crate::io::configuration::{
    BACKGROUND_COLOR, FINAL_FRAME_HOLD_FACTOR, FREE_COLOR, VIEWER_MIN_FRAME_DELAY_MS,
    orientation_color,
};
use crate::io::error::{Result, TilingError, ensure_parent_dir, invalid_parameter};
use crate::render::{FramePolicy, Renderer};
use crate::spatial::diamond::DiamondMask;
use crate::spatial::coordinate::Coordinate;
use crate::spatial::tiles::{Tile, TileId};

/// A tile as drawn: its cells and the colour from its handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    /// Covered cells
    pub cells: [Coordinate; 2],
    /// Fill colour
    pub color: [u8; 4],
}

/// Scene captured at one point of the animation
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Grid side length when captured
    pub side: usize,
    /// Every sprite on the board, ordered by tile id
    pub sprites: Vec<Sprite>,
}

/// Captures the evolving scene for post-processing into an animation
///
/// Every tile becomes a sprite whose handle is its fill colour. Fill assigns
/// the colour for the domino's facing; expansion keeps whatever colour the
/// tiles carry. Snapshots are taken per notification or per phase. Frames
/// are rasterised one at a time while exporting, centred on a canvas sized
/// for the largest grid seen so that tiles stay put across expansions.
pub struct FrameRenderer {
    policy: FramePolicy,
    cell_px: u32,
    side: usize,
    scene: BTreeMap<TileId, Sprite>,
    snapshots: Vec<Snapshot>,
}

impl FrameRenderer {
    /// Create a frame renderer drawing `cell_px` pixels per grid cell
    ///
    /// # Errors
    ///
    /// Returns an error if `cell_px` is zero
    pub fn new(policy: FramePolicy, cell_px: u32) -> Result<Self> {
        if cell_px == 0 {
            return Err(invalid_parameter(
                "cell_px",
                &cell_px,
                &"cells need at least one pixel",
            ));
        }

        Ok(Self {
            policy,
            cell_px,
            side: 2,
            scene: BTreeMap::new(),
            snapshots: Vec::new(),
        })
    }

    /// Captured snapshots, oldest first
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Number of captured snapshots
    pub const fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Rasterise one snapshot on a canvas of `canvas_side` cells
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot's side is not a valid diamond size
    pub fn rasterize(&self, snapshot: &Snapshot, canvas_side: usize) -> Result<RgbaImage> {
        let mask = DiamondMask::new(snapshot.side / 2)?;
        let margin = canvas_side.saturating_sub(snapshot.side) / 2;
        let px = canvas_side as u32 * self.cell_px;
        let mut img = RgbaImage::from_pixel(px, px, Rgba(BACKGROUND_COLOR));

        for x in 0..snapshot.side {
            for y in 0..snapshot.side {
                if !mask.is_blocked(x, y) {
                    self.paint_cell(&mut img, x + margin, y + margin, FREE_COLOR);
                }
            }
        }

        for sprite in &snapshot.sprites {
            for cell in sprite.cells {
                let (Ok(x), Ok(y)) = (usize::try_from(cell.x), usize::try_from(cell.y)) else {
                    continue;
                };
                self.paint_cell(&mut img, x + margin, y + margin, sprite.color);
            }
        }

        Ok(img)
    }

    /// Export the captured snapshots as an animated GIF
    ///
    /// Frames are skipped when the requested delay is shorter than viewers
    /// support, keeping the apparent speed. The last frame is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No snapshots were captured
    /// - The frame delay is zero
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.snapshots.is_empty() {
            return Err(invalid_parameter(
                "snapshots",
                &0,
                &"no frames captured for the animation",
            ));
        }
        if frame_delay_ms == 0 {
            return Err(invalid_parameter(
                "frame_delay_ms",
                &frame_delay_ms,
                &"frames need a positive delay",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        ensure_parent_dir(output_path)?;
        let file = std::fs::File::create(output_path).map_err(|e| TilingError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let image_error = |e: image::ImageError| TilingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        };
        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .set_repeat(image::codecs::gif::Repeat::Infinite)
            .map_err(image_error)?;

        let canvas_side = self
            .snapshots
            .iter()
            .map(|snapshot| snapshot.side)
            .max()
            .unwrap_or(self.side);
        let last = self.snapshots.len() - 1;

        // One frame in memory at a time
        for (index, snapshot) in self.snapshots.iter().enumerate() {
            if index % skip_factor != 0 && index != last {
                continue;
            }
            let delay = if index == last {
                effective_delay_ms * FINAL_FRAME_HOLD_FACTOR
            } else {
                effective_delay_ms
            };
            let frame = Frame::from_parts(
                self.rasterize(snapshot, canvas_side)?,
                0,
                0,
                image::Delay::from_numer_denom_ms(delay, 1),
            );
            encoder.encode_frame(frame).map_err(image_error)?;
        }

        Ok(())
    }

    fn paint_cell(&self, img: &mut RgbaImage, x: usize, y: usize, color: [u8; 4]) {
        let x0 = x as u32 * self.cell_px;
        let y0 = y as u32 * self.cell_px;
        for px in x0..x0 + self.cell_px {
            for py in y0..y0 + self.cell_px {
                if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                    *pixel = Rgba(color);
                }
            }
        }
    }

    fn capture(&mut self) {
        self.snapshots.push(Snapshot {
            side: self.side,
            sprites: self.scene.values().copied().collect(),
        });
    }

    fn capture_notification(&mut self) {
        if self.policy == FramePolicy::EveryNotification {
            self.capture();
        }
    }
}

impl Renderer for FrameRenderer {
    type Handle = [u8; 4];

    async fn render_fill(&mut self, pair: &mut [Tile<[u8; 4]>; 2]) -> Result<()> {
        for tile in pair.iter_mut() {
            let color = orientation_color(tile.orientation());
            *tile.handle_mut() = Some(color);
            let sprite = Sprite {
                cells: tile.cells(),
                color,
            };
            self.scene.insert(tile.id(), sprite);
        }
        self.capture_notification();
        Ok(())
    }

    async fn render_zap(&mut self, pair: [Tile<[u8; 4]>; 2]) -> Result<()> {
        for tile in &pair {
            self.scene.remove(&tile.id());
        }
        self.capture_notification();
        Ok(())
    }

    async fn render_expand(&mut self, tiles: &mut [Tile<[u8; 4]>], side: usize) -> Result<()> {
        self.side = side;
        self.scene = tiles
            .iter()
            .filter_map(|tile| {
                let &color = tile.handle()?;
                let sprite = Sprite {
                    cells: tile.cells(),
                    color,
                };
                Some((tile.id(), sprite))
            })
            .collect();
        self.capture_notification();
        Ok(())
    }

    async fn step_complete(&mut self) -> Result<()> {
        if self.policy == FramePolicy::EveryStep {
            self.capture();
        }
        Ok(())
    }
}
