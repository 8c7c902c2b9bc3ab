use super::stack_tool;
use crate::cli::output::Output;
use crate::cli::panel::{BufferPanel, TerminalPanel};
use crate::cli::picker::DialoguerPicker;
use crate::config::Settings;
use crate::errors::Result;
use crate::review::{show_stack, ReviewOutcome};

/// Pick a stack entry interactively and show its review command
pub async fn run(settings: &Settings, print: bool) -> Result<()> {
    let picker = DialoguerPicker::new("Review against which commit?");

    if print {
        let mut panel = BufferPanel::new(&settings.display.panel_name);
        let result = show_stack(stack_tool(settings), &picker, &mut panel, settings, true).await;
        if panel.writes() > 0 {
            println!("{}", panel.content());
        }
        return result.map(|_| ());
    }

    let mut panel = TerminalPanel::stdout(&settings.display.panel_name);
    let outcome = show_stack(stack_tool(settings), &picker, &mut panel, settings, true).await?;
    if let ReviewOutcome::Review(_) = outcome {
        Output::tip("Run the command above to open the review");
    }
    Ok(())
}
