//! Progress display across monitor passes

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PASS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Passes: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar advanced once per finished pass
pub struct ProgressManager {
    bar: ProgressBar,
    failures: usize,
}

impl ProgressManager {
    /// Create a bar over `pass_count` passes
    pub fn new(pass_count: usize) -> Self {
        let bar = ProgressBar::new(pass_count as u64);
        bar.set_style(PASS_STYLE.clone());
        Self { bar, failures: 0 }
    }

    /// Show which monitor is being generated
    pub fn start_pass(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    /// Advance past a finished pass
    pub fn complete_pass(&mut self, succeeded: bool) {
        if !succeeded {
            self.failures += 1;
        }
        self.bar.inc(1);
    }

    /// Number of passes reported as failed
    pub const fn failures(&self) -> usize {
        self.failures
    }

    /// Clean up the bar with a summary message
    pub fn finish(&self) {
        if self.failures == 0 {
            self.bar.finish_with_message("all wallpapers written");
        } else {
            self.bar
                .finish_with_message(format!("{} pass(es) failed", self.failures));
        }
    }
}
