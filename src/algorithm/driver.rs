//! Phase rotation for stepping or running a tiling

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;

use crate::algorithm::tiling::Tiling;
use crate::io::error::{Result, invalid_parameter};
use crate::render::Renderer;

/// One phase of the shuffle rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Cover free cells with random pairs
    Fill,
    /// Annihilate facing pairs
    Zap,
    /// Grow the diamond and slide dominoes
    Expand,
}

impl Phase {
    /// The phase that runs after this one
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Fill => Self::Zap,
            Self::Zap => Self::Expand,
            Self::Expand => Self::Fill,
        }
    }

    /// Lowercase display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Zap => "zap",
            Self::Expand => "expand",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs the phases of a tiling in their fixed rotation
///
/// The rotation always starts with a fill. Stopping is simply not calling
/// [`Driver::step`] again; the tiling stays consistent between steps.
pub struct Driver<R: Renderer, G: Rng = StdRng> {
    tiling: Tiling<R, G>,
    phase: Phase,
    steps: usize,
}

impl<R: Renderer, G: Rng> Driver<R, G> {
    /// Drive a fresh tiling, starting with a fill
    pub const fn new(tiling: Tiling<R, G>) -> Self {
        Self {
            tiling,
            phase: Phase::Fill,
            steps: 0,
        }
    }

    /// The phase the next step will run
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of steps run so far
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// The driven tiling
    pub const fn tiling(&self) -> &Tiling<R, G> {
        &self.tiling
    }

    /// Give up the driver and keep the tiling
    pub fn into_tiling(self) -> Tiling<R, G> {
        self.tiling
    }

    /// Label of the current diamond, e.g. `A(3)`
    pub fn order_label(&self) -> String {
        format!("A({})", self.tiling.size())
    }

    /// Run the current phase and advance the rotation
    ///
    /// Returns the phase that ran. On error the rotation does not advance.
    ///
    /// # Errors
    ///
    /// Propagates errors from the phase
    pub async fn step(&mut self) -> Result<Phase> {
        let phase = self.phase;
        match phase {
            Phase::Fill => self.tiling.fill().await?,
            Phase::Zap => self.tiling.zap().await?,
            Phase::Expand => self.tiling.expand().await?,
        }
        self.phase = phase.next();
        self.steps += 1;
        Ok(phase)
    }

    /// Run steps until the rotation is back at fill
    ///
    /// # Errors
    ///
    /// Propagates errors from the phases
    pub async fn cycle(&mut self) -> Result<()> {
        loop {
            self.step().await?;
            if self.phase == Phase::Fill {
                return Ok(());
            }
        }
    }

    /// Shuffle until the diamond has the given order and is completely tiled
    ///
    /// Stops right after the fill of A(`order`). `observer` is called after
    /// every step with the phase that ran and the resulting tiling.
    ///
    /// # Errors
    ///
    /// Returns an error if A(`order`) can no longer be filled, or propagates
    /// errors from the phases
    pub async fn run_until<F>(&mut self, order: usize, mut observer: F) -> Result<()>
    where
        F: FnMut(Phase, &Tiling<R, G>),
    {
        let size = self.tiling.size();
        let reachable = order > size || (order == size && self.phase != Phase::Expand);
        if !reachable {
            return Err(invalid_parameter(
                "order",
                &order,
                &format!("the diamond is already past A({size})"),
            ));
        }

        while !(self.tiling.size() == order && self.phase == Phase::Zap) {
            let phase = self.step().await?;
            observer(phase, &self.tiling);
        }
        Ok(())
    }
}
