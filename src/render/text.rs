use std::collections::BTreeMap;
use std::io::Write;

use crate::io::error::{Result, output_error};
use crate::render::{FramePolicy, Renderer};
use crate::spatial::coordinate::{Coordinate, Orientation};
use crate::spatial::diamond::DiamondMask;
use crate::spatial::tiles::{Tile, TileId};

const BLOCKED_GLYPH: char = ' ';
const FREE_GLYPH: char = '.';

/// Glyph drawn for a domino with the given facing
pub const fn glyph(orientation: Orientation, arrows: bool) -> char {
    match (orientation, arrows) {
        (Orientation::Up, true) => '^',
        (Orientation::Right, true) => '>',
        (Orientation::Down, true) => 'v',
        (Orientation::Left, true) => '<',
        (Orientation::Up, false) => 'U',
        (Orientation::Right, false) => 'R',
        (Orientation::Down, false) => 'D',
        (Orientation::Left, false) => 'L',
    }
}

/// Draws the diamond as ASCII frames
///
/// Blocked cells are blank, free cells are dots and each domino cell shows
/// the glyph held in its tile's handle. Fill assigns the glyph for the
/// domino's facing; expansion redraws whatever glyph the tiles carry, and
/// tiles without one are not drawn.
pub struct TextRenderer<W: Write> {
    out: W,
    policy: FramePolicy,
    arrows: bool,
    side: usize,
    scene: BTreeMap<TileId, ([Coordinate; 2], char)>,
    frames: usize,
    steps: usize,
}

impl<W: Write> TextRenderer<W> {
    /// Create a text renderer writing to `out`
    pub const fn new(out: W, policy: FramePolicy, arrows: bool) -> Self {
        Self {
            out,
            policy,
            arrows,
            side: 2,
            scene: BTreeMap::new(),
            frames: 0,
            steps: 0,
        }
    }

    /// Number of frames written so far
    pub const fn frames(&self) -> usize {
        self.frames
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render the current scene as lines of text
    ///
    /// # Errors
    ///
    /// Returns an error if the tracked side length is not a valid diamond size
    pub fn render_lines(&self) -> Result<Vec<String>> {
        let mask = DiamondMask::new(self.side / 2)?;
        let mut canvas: Vec<Vec<char>> = (0..self.side)
            .map(|y| {
                (0..self.side)
                    .map(|x| {
                        if mask.is_blocked(x, y) {
                            BLOCKED_GLYPH
                        } else {
                            FREE_GLYPH
                        }
                    })
                    .collect()
            })
            .collect();

        for &(cells, symbol) in self.scene.values() {
            for cell in cells {
                let (Ok(x), Ok(y)) = (usize::try_from(cell.x), usize::try_from(cell.y)) else {
                    continue;
                };
                if let Some(slot) = canvas.get_mut(y).and_then(|row| row.get_mut(x)) {
                    *slot = symbol;
                }
            }
        }

        Ok(canvas
            .into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect())
    }

    fn draw(&mut self, caption: &str) -> Result<()> {
        let lines = self.render_lines()?;
        writeln!(self.out, "{caption}").map_err(|e| output_error("write frame", e))?;
        for line in lines {
            writeln!(self.out, "{line}").map_err(|e| output_error("write frame", e))?;
        }
        writeln!(self.out).map_err(|e| output_error("write frame", e))?;
        self.out
            .flush()
            .map_err(|e| output_error("flush frame", e))?;
        self.frames += 1;
        Ok(())
    }

    fn draw_notification(&mut self, caption: &str) -> Result<()> {
        match self.policy {
            FramePolicy::EveryNotification => self.draw(caption),
            FramePolicy::EveryStep => Ok(()),
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    type Handle = char;

    async fn render_fill(&mut self, pair: &mut [Tile<char>; 2]) -> Result<()> {
        for tile in pair.iter_mut() {
            let symbol = glyph(tile.orientation(), self.arrows);
            *tile.handle_mut() = Some(symbol);
            self.scene.insert(tile.id(), (tile.cells(), symbol));
        }
        self.draw_notification("fill")
    }

    async fn render_zap(&mut self, pair: [Tile<char>; 2]) -> Result<()> {
        for tile in &pair {
            self.scene.remove(&tile.id());
        }
        self.draw_notification("zap")
    }

    async fn render_expand(&mut self, tiles: &mut [Tile<char>], side: usize) -> Result<()> {
        self.side = side;
        self.scene = tiles
            .iter()
            .filter_map(|tile| tile.handle().map(|&symbol| (tile.id(), (tile.cells(), symbol))))
            .collect();
        self.draw_notification(&format!("expand to {side}x{side}"))
    }

    async fn step_complete(&mut self) -> Result<()> {
        self.steps += 1;
        match self.policy {
            FramePolicy::EveryStep => {
                let caption = format!("step {}", self.steps);
                self.draw(&caption)
            }
            FramePolicy::EveryNotification => Ok(()),
        }
    }
}
