use crate::io::error::Result;
use crate::render::Renderer;
use crate::spatial::tiles::Tile;

/// Running totals of the notifications a renderer has received
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Pairs placed by fills
    pub fills: usize,
    /// Pairs annihilated by zaps
    pub zaps: usize,
    /// Expansions
    pub expands: usize,
    /// Completed phases
    pub steps: usize,
    /// Side length reported by the latest expansion
    pub side: usize,
}

/// Renderer that presents nothing and acknowledges immediately
#[derive(Debug, Clone)]
pub struct Headless {
    stats: RenderStats,
}

impl Default for Headless {
    fn default() -> Self {
        Self::new()
    }
}

impl Headless {
    /// Create a headless renderer
    pub const fn new() -> Self {
        Self {
            stats: RenderStats {
                fills: 0,
                zaps: 0,
                expands: 0,
                steps: 0,
                side: 2,
            },
        }
    }

    /// Notifications received so far
    pub const fn stats(&self) -> RenderStats {
        self.stats
    }
}

impl Renderer for Headless {
    type Handle = ();

    async fn render_fill(&mut self, pair: &mut [Tile<()>; 2]) -> Result<()> {
        for tile in pair {
            *tile.handle_mut() = Some(());
        }
        self.stats.fills += 1;
        Ok(())
    }

    async fn render_zap(&mut self, _pair: [Tile<()>; 2]) -> Result<()> {
        self.stats.zaps += 1;
        Ok(())
    }

    async fn render_expand(&mut self, _tiles: &mut [Tile<()>], side: usize) -> Result<()> {
        self.stats.expands += 1;
        self.stats.side = side;
        Ok(())
    }

    async fn step_complete(&mut self) -> Result<()> {
        self.stats.steps += 1;
        Ok(())
    }
}
