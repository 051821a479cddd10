use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::core::types::FetchResult;
use crate::ui::output::format_progress_line;

/// Prints one status line per completed fetch and, when enabled, keeps a
/// progress bar on stderr below those lines.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    show_lines: bool,
}

impl ProgressReporter {
    pub fn new(total_urls: usize, show_bar: bool, show_lines: bool) -> Self {
        let bar = show_bar.then(|| {
            let pb = ProgressBar::new(total_urls as u64);
            if let Ok(style) = ProgressStyle::default_bar().template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} URLs checked ({eta})",
            ) {
                pb.set_style(style.progress_chars("#>-"));
            }
            pb.enable_steady_tick(Duration::from_millis(120));
            pb
        });

        Self { bar, show_lines }
    }

    /// Record one completed fetch
    pub fn report(&self, result: &FetchResult) {
        if self.show_lines {
            let line = format_progress_line(result);
            match &self.bar {
                Some(pb) => pb.suspend(|| println!("{line}")),
                None => println!("{line}"),
            }
        }

        if let Some(pb) = &self.bar {
            pb.inc(1);
        }
    }

    pub fn finish_and_clear(&self) {
        if let Some(pb) = &self.bar {
            pb.finish_and_clear();
        }
    }

    #[cfg(test)]
    fn position(&self) -> Option<u64> {
        self.bar.as_ref().map(ProgressBar::position)
    }
}
