use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Per-entry progress bar on stderr. Hidden when disabled so call sites
/// never have to branch.
pub struct Progress {
    enabled: bool,
    bar: ProgressBar,
}

impl Progress {
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self {
                enabled: false,
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
        bar.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("##-"),
        );
        bar.enable_steady_tick(Duration::from_millis(120));
        bar.set_message("posts");

        Self { enabled: true, bar }
    }

    pub fn set_total(&self, total: usize) {
        if self.enabled {
            self.bar.set_length(total as u64);
        }
    }

    pub fn entry_done(&self, title: &str) {
        if self.enabled {
            self.bar.inc(1);
            self.bar.set_message(title.to_string());
        }
    }

    pub fn finish(&self) {
        if self.enabled {
            self.bar.finish_and_clear();
        }
    }
}
