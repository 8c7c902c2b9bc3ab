use super::load_for_terminal;
use crate::config::Settings;
use crate::errors::Result;
use crate::review::StackOutcome;

/// Print the stack's display entries, newest first
pub async fn run(settings: &Settings, json: bool) -> Result<()> {
    match load_for_terminal(settings).await? {
        StackOutcome::Landed(message) => println!("{message}"),
        StackOutcome::Stack(stack) if json => {
            println!("{}", serde_json::to_string_pretty(&stack)?);
        }
        StackOutcome::Stack(stack) => {
            for line in stack.lines() {
                println!("{}", line.display());
            }
        }
    }
    Ok(())
}
