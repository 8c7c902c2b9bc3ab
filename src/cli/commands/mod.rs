pub mod completions;
pub mod config;
pub mod review;
pub mod review_base;
pub mod stack;
pub mod version;

use crate::cli::panel::TerminalPanel;
use crate::config::Settings;
use crate::errors::Result;
use crate::review::{load_stack, surface_failure, StackOutcome};
use crate::tool::{CommandRunner, GitStackTool};
use std::sync::Arc;

/// The configured stack tool
pub(crate) fn stack_tool(settings: &Settings) -> Arc<dyn CommandRunner> {
    Arc::new(GitStackTool::new(settings.tool.path.clone()))
}

/// Load the stack for a non-interactive command, showing install
/// instructions on the terminal if the tool is missing
pub(crate) async fn load_for_terminal(settings: &Settings) -> Result<StackOutcome> {
    match load_stack(stack_tool(settings), settings, true).await {
        Ok(outcome) => Ok(outcome),
        Err(err) => {
            let mut panel = TerminalPanel::stdout(&settings.display.panel_name);
            surface_failure(&err, &mut panel, settings)?;
            Err(err)
        }
    }
}
