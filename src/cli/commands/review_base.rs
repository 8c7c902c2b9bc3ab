use super::load_for_terminal;
use crate::config::Settings;
use crate::errors::Result;
use crate::review::StackOutcome;
use crate::stack::Selection;

/// Print the review base for a top-indexed stack entry
pub async fn run(settings: &Settings, index: usize) -> Result<()> {
    let stack = match load_for_terminal(settings).await? {
        StackOutcome::Landed(message) => {
            println!("{message}");
            return Ok(());
        }
        StackOutcome::Stack(stack) => stack,
    };

    if let Some(base) = stack.try_resolve(Selection::Chosen(index))? {
        println!("{base}");
    }
    Ok(())
}
