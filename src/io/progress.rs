//! Spinner reporting discovered components and expansions

use crate::io::configuration::PROGRESS_TICK;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} [{elapsed_precise}] {pos} components ({per_sec}) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Live exploration counters, shared by every worker
///
/// The spinner position is the number of distinct components found; the
/// message shows how many have been expanded so far.
pub struct ExplorationProgress {
    bar: ProgressBar,
    expanded: AtomicU64,
}

impl ExplorationProgress {
    /// Visible spinner when `visible`, otherwise a hidden one
    pub fn new(visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new_spinner();
            bar.set_style(SPINNER_STYLE.clone());
            bar.enable_steady_tick(PROGRESS_TICK);
            bar
        } else {
            ProgressBar::hidden()
        };
        Self {
            bar,
            expanded: AtomicU64::new(0),
        }
    }

    /// Spinner that never draws
    pub fn hidden() -> Self {
        Self::new(false)
    }

    /// A new component entered the queue
    pub fn discovered(&self) {
        self.bar.inc(1);
    }

    /// A component left the queue and all its neighbours were visited
    pub fn expanded(&self) {
        let expanded = self.expanded.fetch_add(1, Ordering::Relaxed) + 1;
        self.bar.set_message(format!("{expanded} expanded"));
    }

    /// Components discovered so far
    pub fn discovered_count(&self) -> u64 {
        self.bar.position()
    }

    /// Components expanded so far
    pub fn expanded_count(&self) -> u64 {
        self.expanded.load(Ordering::Relaxed)
    }

    /// Freeze the spinner with a closing message
    pub fn finish(&self) {
        self.bar.finish_with_message(format!("{} expanded", self.expanded_count()));
    }
}
