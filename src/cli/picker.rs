use crate::errors::Result;
use crate::stack::Selection;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Select};

/// Presents display strings for a single choice
pub trait SelectionPresenter {
    /// `default` is the index highlighted first. Dismissal is
    /// [`Selection::Dismissed`], never an error.
    fn select(&self, items: &[String], default: usize) -> Result<Selection>;
}

/// Interactive picker on the terminal; Esc or `q` dismisses it
pub struct DialoguerPicker {
    prompt: String,
}

impl DialoguerPicker {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

impl SelectionPresenter for DialoguerPicker {
    fn select(&self, items: &[String], default: usize) -> Result<Selection> {
        let chosen = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(&self.prompt)
            .items(items)
            .default(default)
            .interact_on_opt(&Term::stderr())?;

        Ok(Selection::from(chosen))
    }
}
