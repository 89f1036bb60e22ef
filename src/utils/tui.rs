//! Terminal feedback for slow steps.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TICKS: &[&str] = &["-", "\\", "|", "/"];

/// Run `work` behind a stderr spinner, clearing it once `work` returns.
pub fn with_spinner<T>(message: String, work: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(TICKS)
        .template("{msg} {spinner}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = work();
    spinner.finish_and_clear();
    result
}
