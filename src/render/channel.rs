//! Notifications forwarded to an external presenter over a channel
//!
//! The tiling side holds a [`ChannelRenderer`]; the presenting side holds the
//! matching [`Presenter`]. Every notification travels with a oneshot
//! acknowledgment handle, and the tiling cannot make progress past a
//! notification until the presenter acknowledges it (immediately, or at the
//! end of the phase when acknowledgments are batched).

use futures::StreamExt;
use futures::channel::{mpsc, oneshot};
use futures::future::{FutureExt, join_all};

use crate::io::error::{Result, TilingError};
use crate::render::Renderer;
use crate::spatial::tiles::{Domino, Tile};

/// When the renderer waits for acknowledgments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AckPolicy {
    /// Wait for every notification to be acknowledged before returning
    #[default]
    Stepwise,
    /// Return immediately and wait for all outstanding acknowledgments when
    /// the phase completes
    Batched,
}

/// What happened to the tiling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A pair of dominoes was placed
    Fill([Domino; 2]),
    /// A pair of facing dominoes was annihilated
    Zap([Domino; 2]),
    /// All dominoes moved for a larger grid
    Expand {
        /// Every live domino after the move
        dominoes: Vec<Domino>,
        /// New grid side length
        side: usize,
    },
    /// A phase finished issuing notifications
    StepComplete,
}

/// A notification awaiting acknowledgment
#[derive(Debug)]
pub struct RenderEvent {
    /// The notification itself
    pub notification: Notification,
    ack: oneshot::Sender<()>,
}

impl RenderEvent {
    /// Signal the tiling that this notification has been presented
    pub fn acknowledge(self) {
        // The tiling may already have stopped waiting; nothing is owed then.
        self.ack.send(()).ok();
    }
}

/// Receiving end of a [`ChannelRenderer`]
pub struct Presenter {
    events: mpsc::UnboundedReceiver<RenderEvent>,
}

impl Presenter {
    /// Wait for the next notification
    ///
    /// Returns `None` once the renderer has been dropped and every queued
    /// notification has been received.
    pub async fn next_event(&mut self) -> Option<RenderEvent> {
        self.events.next().await
    }

    /// Take the next notification if one is already queued
    pub fn try_event(&mut self) -> Option<RenderEvent> {
        self.events.next().now_or_never().flatten()
    }

    /// Acknowledge every queued notification, returning them in order
    pub fn acknowledge_queued(&mut self) -> Vec<Notification> {
        let mut seen = Vec::new();
        while let Some(event) = self.try_event() {
            seen.push(event.notification.clone());
            event.acknowledge();
        }
        seen
    }

    /// Acknowledge notifications as they arrive until the renderer is dropped
    ///
    /// Returns how many notifications were presented.
    pub async fn run<F>(mut self, mut present: F) -> usize
    where
        F: FnMut(&Notification),
    {
        let mut count = 0;
        while let Some(event) = self.next_event().await {
            present(&event.notification);
            event.acknowledge();
            count += 1;
        }
        count
    }
}

/// Renderer that forwards notifications to a [`Presenter`]
///
/// Tile handles are sequence numbers in order of placement.
pub struct ChannelRenderer {
    events: mpsc::UnboundedSender<RenderEvent>,
    policy: AckPolicy,
    pending: Vec<oneshot::Receiver<()>>,
    next_sequence: u64,
}

/// Create a connected renderer and presenter
pub fn channel(policy: AckPolicy) -> (ChannelRenderer, Presenter) {
    let (sender, receiver) = mpsc::unbounded();
    (
        ChannelRenderer {
            events: sender,
            policy,
            pending: Vec::new(),
            next_sequence: 0,
        },
        Presenter { events: receiver },
    )
}

impl ChannelRenderer {
    /// Acknowledgment policy in effect
    pub const fn policy(&self) -> AckPolicy {
        self.policy
    }

    /// Number of acknowledgments not yet awaited
    pub const fn pending(&self) -> usize {
        self.pending.len()
    }

    fn send(&mut self, notification: Notification) -> Result<oneshot::Receiver<()>> {
        let (ack, acknowledged) = oneshot::channel();
        self.events
            .unbounded_send(RenderEvent { notification, ack })
            .map_err(disconnected)?;
        Ok(acknowledged)
    }

    async fn notify(&mut self, notification: Notification) -> Result<()> {
        let acknowledged = self.send(notification)?;
        match self.policy {
            AckPolicy::Stepwise => Ok(acknowledged.await?),
            AckPolicy::Batched => {
                self.pending.push(acknowledged);
                Ok(())
            }
        }
    }
}

fn disconnected<E>(_: E) -> TilingError {
    TilingError::RendererDisconnected
}

impl Renderer for ChannelRenderer {
    type Handle = u64;

    async fn render_fill(&mut self, pair: &mut [Tile<u64>; 2]) -> Result<()> {
        for tile in pair.iter_mut() {
            *tile.handle_mut() = Some(self.next_sequence);
            self.next_sequence += 1;
        }
        let notification = Notification::Fill(pair.each_ref().map(|tile| *tile.domino()));
        self.notify(notification).await
    }

    async fn render_zap(&mut self, pair: [Tile<u64>; 2]) -> Result<()> {
        let notification = Notification::Zap(pair.map(|tile| *tile.domino()));
        self.notify(notification).await
    }

    async fn render_expand(&mut self, tiles: &mut [Tile<u64>], side: usize) -> Result<()> {
        let notification = Notification::Expand {
            dominoes: tiles.iter().map(|tile| *tile.domino()).collect(),
            side,
        };
        self.notify(notification).await
    }

    async fn step_complete(&mut self) -> Result<()> {
        let acknowledged = self.send(Notification::StepComplete)?;
        self.pending.push(acknowledged);
        for outcome in join_all(self.pending.drain(..)).await {
            outcome?;
        }
        Ok(())
    }
}
