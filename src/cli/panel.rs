use crate::errors::{Result, StackReviewError};
use console::{style, Term};

/// A named, read-only output surface for messages
pub trait PanelDisplay {
    /// Replace the panel's content with `message` and show it
    fn show(&mut self, message: &str) -> Result<()>;
}

/// Panel rendered as a framed block on a terminal.
///
/// Showing a new message erases the block drawn by the previous one, but only
/// on an interactive terminal; piped output can only be appended to.
pub struct TerminalPanel {
    name: String,
    term: Term,
    drawn_lines: usize,
}

impl TerminalPanel {
    pub fn stdout(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            term: Term::stdout(),
            drawn_lines: 0,
        }
    }

    /// The panel id as the editor would spell it
    pub fn id(&self) -> String {
        format!("output.{}", self.name)
    }

    /// Framed lines for `message`: title, one line per message line, rule
    fn render(&self, message: &str) -> Vec<String> {
        let title = format!("── {} ", self.id());
        let rule = "─".repeat(title.chars().count());
        let mut lines = vec![style(title).dim().to_string()];
        lines.extend(message.split('\n').map(str::to_string));
        lines.push(style(rule).dim().to_string());
        lines
    }
}

impl PanelDisplay for TerminalPanel {
    fn show(&mut self, message: &str) -> Result<()> {
        if self.drawn_lines > 0 && self.term.is_term() {
            self.term.clear_last_lines(self.drawn_lines)?;
        }

        let lines = self.render(message);
        for line in &lines {
            self.term.write_line(line)?;
        }
        self.drawn_lines = lines.len();
        Ok(())
    }
}

/// In-memory panel that keeps content, visibility and the read-only flag
#[derive(Debug, Default, Clone)]
pub struct BufferPanel {
    name: String,
    content: String,
    visible: bool,
    read_only: bool,
    writes: usize,
}

impl BufferPanel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Number of messages shown so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Append text as a user edit would; rejected once the panel is read-only
    pub fn insert(&mut self, text: &str) -> Result<()> {
        if self.read_only {
            return Err(StackReviewError::validation(format!(
                "Panel '{}' is read-only",
                self.name
            )));
        }
        self.content.push_str(text);
        Ok(())
    }
}

impl PanelDisplay for BufferPanel {
    fn show(&mut self, message: &str) -> Result<()> {
        self.read_only = false;
        self.content.clear();
        self.insert(message)?;
        self.visible = true;
        self.read_only = true;
        self.writes += 1;
        Ok(())
    }
}
