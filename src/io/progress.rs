//! Terminal spinner driven by placement search events

use crate::algorithm::observer::SearchObserver;
use crate::io::configuration::{PROGRESS_TICK_MS, PROGRESS_TICK_PLACEMENTS};
use crate::spatial::placement::Layout;
use crate::spatial::transform::Transformation;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Shows search depth and backtrack counts while the solver runs
///
/// Redraws are throttled to one every few hundred placements so the
/// spinner costs almost nothing relative to the search.
pub struct SearchProgress {
    bar: ProgressBar,
    cells: usize,
    placements: u64,
    backtracks: u64,
    deepest: usize,
}

impl SearchProgress {
    /// Create a spinner for a layout with `cells` cells
    pub fn new(cells: usize) -> Self {
        Self::with_bar(ProgressBar::new_spinner(), cells)
    }

    /// Create a spinner that draws nowhere, for quiet runs and tests
    pub fn hidden(cells: usize) -> Self {
        Self::with_bar(ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden()), cells)
    }

    fn with_bar(bar: ProgressBar, cells: usize) -> Self {
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_prefix(format!("0/{cells}"));
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        Self {
            bar,
            cells,
            placements: 0,
            backtracks: 0,
            deepest: 0,
        }
    }

    /// Placements seen so far
    pub const fn placements(&self) -> u64 {
        self.placements
    }

    /// Backtracks seen so far
    pub const fn backtracks(&self) -> u64 {
        self.backtracks
    }

    /// Most cells filled at once
    pub const fn deepest(&self) -> usize {
        self.deepest
    }

    fn redraw(&self, depth: usize) {
        self.bar.set_prefix(format!("{depth}/{}", self.cells));
        self.bar.set_message(format!(
            "deepest {} | {} placements | {} backtracks",
            self.deepest, self.placements, self.backtracks
        ));
    }

    /// Stop the spinner and leave a summary line
    pub fn finish(&self, solved: bool) {
        let outcome = if solved { "assembled" } else { "no arrangement" };
        self.bar.finish_with_message(format!(
            "{outcome} after {} placements and {} backtracks",
            self.placements, self.backtracks
        ));
    }
}

impl SearchObserver for SearchProgress {
    fn on_place(&mut self, depth: usize, _tile_id: u64, _transformation: Transformation) {
        self.placements += 1;
        self.deepest = self.deepest.max(depth);
        if self.placements.is_multiple_of(PROGRESS_TICK_PLACEMENTS) || depth == self.cells {
            self.redraw(depth);
        }
    }

    fn on_backtrack(&mut self, _depth: usize, _tile_id: u64, _transformation: Transformation) {
        self.backtracks += 1;
    }

    fn on_dead_end(&mut self, layout: &Layout) {
        if self.backtracks.is_multiple_of(PROGRESS_TICK_PLACEMENTS) {
            self.redraw(layout.filled());
        }
    }
}
