use crate::errors::{Result, StackReviewError};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Leading `* <7-char hash> ` with an optional `(tag) ` after it.
static COMMIT_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\* [a-z0-9]{7} (?:\([^)]+\) )?").expect("Invalid commit prefix regex")
});

const BASE: &str = "BASE";

/// One commit line from the stack tool output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackLine {
    raw: String,
    display: String,
}

impl StackLine {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let display = COMMIT_PREFIX_REGEX.replace(&raw, "").into_owned();
        Self { raw, display }
    }

    /// The line exactly as the tool printed it
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The line with its hash and tag prefix removed
    pub fn display(&self) -> &str {
        &self.display
    }
}

/// Commits under review, newest first. Index 0 is the top of the stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Stack {
    lines: Vec<StackLine>,
}

impl Stack {
    /// Parse tool output into a stack.
    ///
    /// Splits on `\n` only and keeps every line, empty ones included.
    pub fn parse(raw_text: &str) -> Self {
        let lines: Vec<StackLine> = raw_text.split('\n').map(StackLine::new).collect();
        tracing::debug!("Parsed stack with {} entries", lines.len());
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[StackLine] {
        &self.lines
    }

    /// Display strings in stack order, ready for a picker
    pub fn display_items(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.display.clone()).collect()
    }

    /// The entry a picker should highlight first: the bottom of the stack.
    pub fn default_index(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    /// Compute the review base for a selection.
    ///
    /// A dismissed picker resolves to `None`.
    ///
    /// # Panics
    ///
    /// Panics if a chosen index is not below `self.len()`. Pickers only offer
    /// valid indices; use [`Stack::try_resolve`] for unchecked input.
    pub fn resolve(&self, selection: Selection) -> Option<ReviewBase> {
        match selection {
            Selection::Dismissed => None,
            Selection::Chosen(index) => {
                assert!(
                    index < self.len(),
                    "selection {index} out of range for stack of {}",
                    self.len()
                );
                Some(ReviewBase::from_offset(top_index_to_bottom_offset(
                    self.len(),
                    index,
                )))
            }
        }
    }

    /// Like [`Stack::resolve`], but rejects an out-of-range index.
    pub fn try_resolve(&self, selection: Selection) -> Result<Option<ReviewBase>> {
        if let Selection::Chosen(index) = selection {
            if index >= self.len() {
                return Err(StackReviewError::validation(format!(
                    "Index {index} is out of range: the stack has {} entries (valid: 0..={})",
                    self.len(),
                    self.default_index()
                )));
            }
        }
        Ok(self.resolve(selection))
    }
}

/// Convert a top-indexed position (0 = newest) to an offset from the bottom.
pub fn top_index_to_bottom_offset(len: usize, top_index: usize) -> usize {
    len - top_index - 1
}

/// Inverse of [`top_index_to_bottom_offset`].
pub fn bottom_offset_to_top_index(len: usize, offset: usize) -> usize {
    len - offset - 1
}

/// A picker outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Top-indexed position of the chosen entry
    Chosen(usize),
    /// The picker was closed without choosing
    Dismissed,
}

impl Selection {
    /// Map an editor-style callback index, where `-1` means dismissed.
    pub fn from_menu_index(index: i64) -> Self {
        usize::try_from(index).map_or(Selection::Dismissed, Selection::Chosen)
    }
}

impl From<Option<usize>> for Selection {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Selection::Dismissed, Selection::Chosen)
    }
}

/// The commit a review diff is computed against: `BASE` or `BASE+<k>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReviewBase {
    offset: usize,
}

impl ReviewBase {
    pub fn from_offset(offset: usize) -> Self {
        Self { offset }
    }

    /// Commits above the bottom-most stacked commit's parent
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for ReviewBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.offset == 0 {
            write!(f, "{BASE}")
        } else {
            write!(f, "{BASE}+{}", self.offset)
        }
    }
}

impl FromStr for ReviewBase {
    type Err = StackReviewError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || StackReviewError::validation(format!("Invalid review base: {s}"));
        let rest = s.strip_prefix(BASE).ok_or_else(invalid)?;
        if rest.is_empty() {
            return Ok(Self::from_offset(0));
        }
        let offset: usize = rest
            .strip_prefix('+')
            .and_then(|n| n.parse().ok())
            .ok_or_else(invalid)?;
        // `BASE+0` is never produced; the bottom is spelled `BASE`
        if offset == 0 {
            return Err(invalid());
        }
        Ok(Self::from_offset(offset))
    }
}
