//! Terminal progress for long shuffles

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::algorithm::driver::Phase;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {prefix} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar counting diamond orders up to a target
///
/// Position is the current order; the message shows the phase that just ran.
pub struct CycleProgress {
    bar: ProgressBar,
}

impl CycleProgress {
    /// Create a bar for growing the diamond up to `target_order`
    pub fn new(target_order: usize) -> Self {
        let bar = ProgressBar::new(target_order as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix("A(1)");
        bar.set_position(1);
        Self { bar }
    }

    /// A bar that draws nothing, for quiet runs
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Report the phase that just ran and the resulting order
    pub fn update(&self, order: usize, phase: Phase) {
        self.bar.set_position(order as u64);
        self.bar.set_prefix(format!("A({order})"));
        self.bar.set_message(phase.name());
    }

    /// Current position of the bar
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish and leave the final state on screen
    pub fn finish(&self, tiles: usize) {
        self.bar.finish_with_message(format!("done, {tiles} dominoes"));
    }
}
