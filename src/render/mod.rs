//! Presentation of a running tiling
//!
//! The tiling reports every mutation to a [`Renderer`] and waits on the
//! returned future before continuing. Renderers decide how, and how often,
//! the tiling is presented:
//! - `headless` counts notifications and draws nothing
//! - `text` draws ASCII frames to any writer
//! - `frames` captures coloured frames and exports an animated GIF
//! - `channel` forwards notifications to a separate presenter that
//!   acknowledges them explicitly

use std::future::Future;

use crate::io::error::Result;
use crate::spatial::tiles::Tile;

/// Message channel to an external presenter with explicit acknowledgments
pub mod channel;
/// Coloured frame capture and GIF export
pub mod frames;
/// Notification counting without output
pub mod headless;
/// ASCII frame output
pub mod text;

pub use channel::{AckPolicy, ChannelRenderer, Notification, Presenter, RenderEvent};
pub use frames::FrameRenderer;
pub use headless::{Headless, RenderStats};
pub use text::TextRenderer;

/// How often a frame-producing renderer draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FramePolicy {
    /// One frame after every fill, zap and expand notification
    #[default]
    EveryNotification,
    /// One frame per completed phase
    EveryStep,
}

/// Receives ordered lifecycle notifications from a tiling
///
/// Each method returns a future the tiling awaits before its next mutation
/// or notification. Resolution is the only effect the tiling observes.
pub trait Renderer {
    /// Opaque per-tile presentation data, owned and written only by the renderer
    type Handle;

    /// Two tiles were placed together by a fill
    ///
    /// The renderer may attach handles to the new tiles.
    fn render_fill(
        &mut self,
        pair: &mut [Tile<Self::Handle>; 2],
    ) -> impl Future<Output = Result<()>>;

    /// Exactly two facing tiles were annihilated by a zap
    fn render_zap(&mut self, pair: [Tile<Self::Handle>; 2]) -> impl Future<Output = Result<()>>;

    /// Every surviving tile moved for a grid of the given side length
    fn render_expand(
        &mut self,
        tiles: &mut [Tile<Self::Handle>],
        side: usize,
    ) -> impl Future<Output = Result<()>>;

    /// All notifications of the current phase have been issued
    fn step_complete(&mut self) -> impl Future<Output = Result<()>>;
}
