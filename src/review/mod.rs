//! Stack display and review-command workflow
//!
//! Runs the stack tool, short-circuits on already-landed output, presents the
//! stack and writes the review command for the chosen commit to a panel.

use crate::cli::panel::PanelDisplay;
use crate::cli::picker::SelectionPresenter;
use crate::config::Settings;
use crate::errors::{Result, StackReviewError};
use crate::stack::{ReviewBase, Stack};
use crate::tool::{run_blocking, CommandRunner};
use crate::utils::spinner::ToolSpinner;
use std::sync::Arc;
use tracing::{debug, info};

/// What the stack tool reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackOutcome {
    /// Nothing left to review; the tool's message, verbatim
    Landed(String),
    Stack(Stack),
}

/// How an interactive stack display ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    Landed,
    Dismissed,
    Review(ReviewBase),
}

/// Classify cleaned tool output. Landed output is never parsed.
pub fn interpret_output(output: String, landed_marker: &str) -> StackOutcome {
    if output.contains(landed_marker) {
        debug!("Stack tool reports the stack has landed");
        StackOutcome::Landed(output)
    } else {
        StackOutcome::Stack(Stack::parse(&output))
    }
}

/// Run the stack verb and classify its output
pub async fn load_stack(
    runner: Arc<dyn CommandRunner>,
    settings: &Settings,
    progress: bool,
) -> Result<StackOutcome> {
    let spinner = ToolSpinner::start("Reading commit stack...", progress);
    let output = run_blocking(runner, &settings.tool.stack_verb).await;
    spinner.stop();
    Ok(interpret_output(output?, &settings.display.landed_marker))
}

/// The command a reviewer runs for `base`, e.g. `mdm git review BASE+2`
pub fn review_command(prefix: &str, base: ReviewBase) -> String {
    format!("{prefix} {base}")
}

/// Instructions shown when the stack tool cannot be found
pub fn missing_tool_message(settings: &Settings) -> String {
    format!(
        "Error: stack review requires mdm (looked for {}).\n\
         \n\
         Please install it and try again:\n\
         \n  {}\n",
        settings.tool.path.display(),
        settings.tool.install_url
    )
}

/// Show the install instructions for a missing tool. Other errors are left
/// to the caller.
pub fn surface_failure(
    err: &StackReviewError,
    panel: &mut dyn PanelDisplay,
    settings: &Settings,
) -> Result<()> {
    if err.is_command_not_found() {
        panel.show(&missing_tool_message(settings))?;
    }
    Ok(())
}

/// Present a loaded stack and write the review command for the choice
pub fn choose_review(
    outcome: StackOutcome,
    presenter: &dyn SelectionPresenter,
    panel: &mut dyn PanelDisplay,
    settings: &Settings,
) -> Result<ReviewOutcome> {
    let stack = match outcome {
        StackOutcome::Landed(message) => {
            panel.show(&message)?;
            return Ok(ReviewOutcome::Landed);
        }
        StackOutcome::Stack(stack) => stack,
    };

    let selection = presenter.select(&stack.display_items(), stack.default_index())?;
    match stack.try_resolve(selection)? {
        None => {
            debug!("Stack picker dismissed");
            Ok(ReviewOutcome::Dismissed)
        }
        Some(base) => {
            let command = review_command(&settings.tool.review_command, base);
            info!("Selected review base {}", base);
            panel.show(&command)?;
            Ok(ReviewOutcome::Review(base))
        }
    }
}

/// The whole interaction: load, present, resolve, write
pub async fn show_stack(
    runner: Arc<dyn CommandRunner>,
    presenter: &dyn SelectionPresenter,
    panel: &mut dyn PanelDisplay,
    settings: &Settings,
    progress: bool,
) -> Result<ReviewOutcome> {
    match load_stack(runner, settings, progress).await {
        Ok(outcome) => choose_review(outcome, presenter, panel, settings),
        Err(err) => {
            surface_failure(&err, panel, settings)?;
            Err(err)
        }
    }
}
