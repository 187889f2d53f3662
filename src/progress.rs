//! Progress reporting for the linear scans of the analysis pipeline.
//!
//! Scans own a [`PercentTicker`] and push whole-percent updates into a
//! [`ProgressReporter`] supplied by the caller, so no progress state outlives
//! a single scan.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::IsTerminal;

/// Receives progress for one scan at a time.
pub trait ProgressReporter {
    /// A new scan over `total` items starts.
    fn begin(&mut self, message: &str, total: usize);
    /// Completion of the running scan reached `percent` (0..=100).
    fn set_percent(&mut self, percent: u64);
    /// The running scan is done.
    fn finish(&mut self);
}

/// Converts item indices into monotonically increasing whole percentages.
///
/// Only percentages strictly above the last emitted one are returned, which
/// throttles reporting to at most 101 updates per scan.
#[derive(Debug, Clone)]
pub struct PercentTicker {
    total: usize,
    last: Option<u64>,
}

impl PercentTicker {
    pub fn new(total: usize) -> Self {
        Self { total, last: None }
    }

    /// Percentage reached once the item at `index` is being processed.
    ///
    /// The last item always maps to 100; a scan over a single item is
    /// complete at its first tick rather than dividing by zero.
    pub fn percent_at(&self, index: usize) -> u64 {
        if self.total <= 1 {
            return 100;
        }
        let last_index = (self.total - 1) as u64;
        (index.min(self.total - 1) as u64 * 100) / last_index
    }

    pub fn tick(&mut self, index: usize) -> Option<u64> {
        let percent = self.percent_at(index);
        match self.last {
            Some(last) if percent <= last => None,
            _ => {
                self.last = Some(percent);
                Some(percent)
            }
        }
    }
}

/// Drives `ticker` for `index` and forwards any new percentage.
pub fn report_tick(ticker: &mut PercentTicker, index: usize, reporter: &mut dyn ProgressReporter) {
    if let Some(percent) = ticker.tick(index) {
        reporter.set_percent(percent);
    }
}

/// Terminal progress bar on stderr.
pub struct BarReporter {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl BarReporter {
    /// Bars are drawn only when enabled and stderr is a terminal.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: enabled && std::io::stderr().is_terminal(),
            bar: None,
        }
    }
}

impl ProgressReporter for BarReporter {
    fn begin(&mut self, message: &str, _total: usize) {
        let bar = if self.enabled {
            ProgressBar::with_draw_target(Some(100), ProgressDrawTarget::stderr())
        } else {
            ProgressBar::hidden()
        };
        let template = "[{bar:50.cyan/blue}] {percent:>3}% {msg}";
        if let Ok(style) = ProgressStyle::default_bar().template(template) {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.set_message(message.to_string());
        self.bar = Some(bar);
    }

    fn set_percent(&mut self, percent: u64) {
        if let Some(bar) = &self.bar {
            bar.set_position(percent);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

/// Discards all progress.
#[derive(Debug, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn begin(&mut self, _message: &str, _total: usize) {}
    fn set_percent(&mut self, _percent: u64) {}
    fn finish(&mut self) {}
}
