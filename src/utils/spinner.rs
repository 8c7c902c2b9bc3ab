use console::Term;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Spinner drawn on stderr while the external tool runs.
///
/// Hidden entirely when stderr is not a terminal or when disabled, so piped
/// output and tests never see spinner frames.
pub struct ToolSpinner {
    pb: ProgressBar,
}

impl ToolSpinner {
    const TICK_RATE: Duration = Duration::from_millis(80);
    const TEMPLATE: &'static str = "{spinner:.green} {msg}";

    /// Start a spinner with `message`, visible only on an interactive stderr.
    pub fn start(message: impl Into<String>, enabled: bool) -> Self {
        let pb = if enabled && Term::stderr().is_term() {
            let pb = ProgressBar::new_spinner();
            pb.set_draw_target(ProgressDrawTarget::stderr());
            pb.set_style(
                ProgressStyle::with_template(Self::TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.enable_steady_tick(Self::TICK_RATE);
            pb
        } else {
            ProgressBar::hidden()
        };
        pb.set_message(message.into());
        ToolSpinner { pb }
    }

    pub fn is_hidden(&self) -> bool {
        self.pb.is_hidden()
    }

    /// Stop the spinner and clear it from the terminal.
    pub fn stop(&self) {
        self.pb.finish_and_clear();
    }
}

impl Drop for ToolSpinner {
    fn drop(&mut self) {
        if !self.pb.is_finished() {
            self.pb.finish_and_clear();
        }
    }
}
