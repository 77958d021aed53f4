//! Command-line interface for growing and exporting Aztec diamond tilings

use crate::algorithm::driver::Driver;
use crate::algorithm::tiling::Tiling;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE_PX, DEFAULT_ORDER, GIF_FRAME_DELAY_MS, GIF_SUFFIX, MAX_FRAMES_ORDER,
    MAX_ORDER, PNG_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_tiling_png;
use crate::io::progress::CycleProgress;
use crate::render::{FramePolicy, FrameRenderer, Headless, Renderer, TextRenderer};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// How the shuffle is presented while it runs
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RendererKind {
    /// No live output, only a progress bar
    Headless,
    /// ASCII frames on standard output
    Text,
    /// Coloured frames collected into an animated GIF
    Frames,
}

#[derive(Parser)]
#[command(name = "domino-shuffle")]
#[command(
    author,
    version,
    about = "Grow a random domino tiling of the Aztec diamond by domino shuffling"
)]
/// Command-line arguments for the shuffling tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Order of the final Aztec diamond
    #[arg(short, long, default_value_t = DEFAULT_ORDER)]
    pub order: usize,

    /// Random seed for reproducible tilings (operating system entropy if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Presentation of the running shuffle
    #[arg(short, long, value_enum, default_value_t = RendererKind::Headless)]
    pub renderer: RendererKind,

    /// Draw one frame per phase instead of one per notification
    #[arg(short, long)]
    pub batched: bool,

    /// Draw text frames with arrows instead of letters
    #[arg(short, long)]
    pub arrows: bool,

    /// Edge length of a grid cell in exported images, in pixels
    #[arg(short = 'c', long, default_value_t = DEFAULT_CELL_SIZE_PX)]
    pub cell_size: u32,

    /// Delay between GIF frames in milliseconds
    #[arg(short = 'd', long, default_value_t = GIF_FRAME_DELAY_MS)]
    pub frame_delay: u32,

    /// Directory receiving exported images
    #[arg(short = 'O', long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Export the final tiling as a PNG image
    #[arg(short, long)]
    pub png: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    ///
    /// The text renderer owns standard output, so no bar is drawn next to it.
    pub fn should_show_progress(&self) -> bool {
        !self.quiet && self.renderer != RendererKind::Text
    }

    /// Frame policy selected by the `--batched` flag
    pub const fn frame_policy(&self) -> FramePolicy {
        if self.batched {
            FramePolicy::EveryStep
        } else {
            FramePolicy::EveryNotification
        }
    }

    /// Validate argument combinations clap cannot express
    ///
    /// # Errors
    ///
    /// Returns an error if the order, cell size or frame delay is out of range,
    /// or if the order is too large to capture as frames
    pub fn validate(&self) -> Result<()> {
        if self.order == 0 || self.order > MAX_ORDER {
            return Err(invalid_parameter(
                "order",
                &self.order,
                &format!("must be between 1 and {MAX_ORDER}"),
            ));
        }
        if self.renderer == RendererKind::Frames && self.order > MAX_FRAMES_ORDER {
            return Err(invalid_parameter(
                "order",
                &self.order,
                &format!("frame capture supports orders up to {MAX_FRAMES_ORDER}"),
            ));
        }
        if self.cell_size == 0 {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &"must be positive",
            ));
        }
        if self.frame_delay == 0 {
            return Err(invalid_parameter(
                "frame_delay",
                &self.frame_delay,
                &"must be positive",
            ));
        }
        Ok(())
    }
}

/// Runs one shuffle according to the command line and writes its outputs
pub struct Shuffler {
    cli: Cli,
}

impl Shuffler {
    /// Create a shuffler for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Grow the diamond to the requested order and export the results
    ///
    /// # Errors
    ///
    /// Returns an error if validation, shuffling, rendering or export fails
    pub fn run(&self) -> Result<()> {
        self.cli.validate()?;

        match self.cli.renderer {
            RendererKind::Headless => {
                let tiling = self.animate(Headless::new())?;
                self.export_png(&tiling)?;
            }
            RendererKind::Text => {
                let renderer = TextRenderer::new(
                    std::io::stdout().lock(),
                    self.cli.frame_policy(),
                    self.cli.arrows,
                );
                let tiling = self.animate(renderer)?;
                self.export_png(&tiling)?;
            }
            RendererKind::Frames => {
                let renderer = FrameRenderer::new(self.cli.frame_policy(), self.cli.cell_size)?;
                let tiling = self.animate(renderer)?;
                self.export_png(&tiling)?;

                let gif_path = self.output_path(GIF_SUFFIX);
                tiling
                    .renderer()
                    .export_gif(&gif_path, self.cli.frame_delay)?;
                self.notify_written(&gif_path);
            }
        }

        Ok(())
    }

    /// Path of an output file with the given suffix
    pub fn output_path(&self, suffix: &str) -> PathBuf {
        self.cli
            .output_dir
            .join(format!("aztec{}{suffix}", self.cli.order))
    }

    fn animate<R: Renderer>(&self, renderer: R) -> Result<Tiling<R>> {
        let tiling = match self.cli.seed {
            Some(seed) => Tiling::with_seed(renderer, seed)?,
            None => Tiling::new(renderer)?,
        };

        let progress = if self.cli.should_show_progress() {
            CycleProgress::new(self.cli.order)
        } else {
            CycleProgress::hidden()
        };

        let mut driver = Driver::new(tiling);
        futures::executor::block_on(driver.run_until(self.cli.order, |phase, tiling| {
            progress.update(tiling.size(), phase);
        }))?;

        let tiling = driver.into_tiling();
        progress.finish(tiling.tiles().len());
        Ok(tiling)
    }

    fn export_png<R: Renderer>(&self, tiling: &Tiling<R>) -> Result<()> {
        if !self.cli.png {
            return Ok(());
        }
        let png_path = self.output_path(PNG_SUFFIX);
        export_tiling_png(tiling.grid(), self.cli.cell_size, &png_path)?;
        self.notify_written(&png_path);
        Ok(())
    }

    #[allow(clippy::print_stderr)]
    fn notify_written(&self, path: &Path) {
        if !self.cli.quiet {
            eprintln!("Wrote {}", path.display());
        }
    }
}
