//! Scoped progress indicator for pipeline steps.

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner handle for one step.
///
/// Created by [`Status::begin`] and closed by [`Status::finish`]. Dropping an
/// unfinished handle clears the spinner, so error paths never leave it running.
pub struct Status {
    bar: Option<ProgressBar>,
}

impl Status {
    /// Start a spinner on stderr. Without a terminal no spinner is drawn.
    pub fn begin(message: &str) -> Self {
        tracing::debug!(step = message, "begin");
        if !std::io::stderr().is_terminal() {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            bar.set_style(
                style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
            );
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar: Some(bar) }
    }

    /// Run `f` with the spinner hidden so its output does not share the line.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        match self.bar {
            Some(ref bar) => bar.suspend(f),
            None => f(),
        }
    }

    /// Close the spinner and clear its line.
    pub fn finish(self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Status {
    fn drop(&mut self) {
        if let Some(ref bar) = self.bar
            && !bar.is_finished()
        {
            bar.finish_and_clear();
        }
    }
}
