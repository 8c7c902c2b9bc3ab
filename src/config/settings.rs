use crate::errors::{Result, StackReviewError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the stack tool lives relative to the home directory unless configured
const DEFAULT_TOOL_SUBPATH: &str = "Projects/material-motion-tools/contributor_tools/git/git";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tool: ToolConfig,
    pub display: DisplayConfig,
}

/// The external git-stack tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Executable to run
    pub path: PathBuf,
    /// Verb that prints the current stack
    pub stack_verb: String,
    /// Command prefix printed in front of the review base
    pub review_command: String,
    /// Install instructions shown when the tool is missing
    pub install_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Name of the output panel
    pub panel_name: String,
    /// Substring meaning the stack has already landed
    pub landed_marker: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            path: default_tool_path(),
            stack_verb: "tree".to_string(),
            review_command: "mdm git review".to_string(),
            install_url: "https://material-motion.github.io/material-motion/team/essentials/frequent_contributors/tools".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            panel_name: "phabricator_panel".to_string(),
            landed_marker: "already landed".to_string(),
        }
    }
}

/// Default tool location under the home directory
pub fn default_tool_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(DEFAULT_TOOL_SUBPATH)
}

impl Settings {
    /// Load settings from a file, falling back to defaults when it is missing
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| StackReviewError::config(format!("Failed to read config file: {e}")))?;

        let settings: Settings = serde_json::from_str(&content)
            .map_err(|e| StackReviewError::config(format!("Failed to parse config file: {e}")))?;

        Ok(settings)
    }

    /// Save settings to a file, creating its directory if needed
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StackReviewError::config(format!("Failed to create config directory: {e}"))
                })?;
            }
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| StackReviewError::config(format!("Failed to serialize config: {e}")))?;

        fs::write(path, content)
            .map_err(|e| StackReviewError::config(format!("Failed to write config file: {e}")))?;

        tracing::info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Replace the tool path, e.g. from a command-line override
    pub fn with_tool_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.tool.path = path;
        }
        self
    }

    /// All recognised configuration keys
    pub fn keys() -> &'static [&'static str] {
        &[
            "tool.path",
            "tool.stack_verb",
            "tool.review_command",
            "tool.install_url",
            "display.panel_name",
            "display.landed_marker",
        ]
    }

    fn split_key(key: &str) -> Result<(&str, &str)> {
        key.split_once('.')
            .filter(|(_, field)| !field.contains('.'))
            .ok_or_else(|| StackReviewError::config(format!("Invalid config key format: {key}")))
    }

    /// Update a configuration value by key
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match Self::split_key(key)? {
            ("tool", "path") => self.tool.path = PathBuf::from(value),
            ("tool", "stack_verb") => self.tool.stack_verb = value.to_string(),
            ("tool", "review_command") => self.tool.review_command = value.to_string(),
            ("tool", "install_url") => self.tool.install_url = value.to_string(),
            ("display", "panel_name") => self.display.panel_name = value.to_string(),
            ("display", "landed_marker") => self.display.landed_marker = value.to_string(),
            _ => return Err(StackReviewError::config(format!("Unknown config key: {key}"))),
        }
        Ok(())
    }

    /// Get a configuration value by key
    pub fn get_value(&self, key: &str) -> Result<String> {
        let value = match Self::split_key(key)? {
            ("tool", "path") => return Ok(self.tool.path.display().to_string()),
            ("tool", "stack_verb") => &self.tool.stack_verb,
            ("tool", "review_command") => &self.tool.review_command,
            ("tool", "install_url") => &self.tool.install_url,
            ("display", "panel_name") => &self.display.panel_name,
            ("display", "landed_marker") => &self.display.landed_marker,
            _ => return Err(StackReviewError::config(format!("Unknown config key: {key}"))),
        };
        Ok(value.clone())
    }

    /// Restore a single key to its default value
    pub fn unset_value(&mut self, key: &str) -> Result<()> {
        let defaults = Settings::default();
        let value = defaults.get_value(key)?;
        self.set_value(key, &value)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.tool.path.as_os_str().is_empty() {
            return Err(StackReviewError::config("tool.path must not be empty"));
        }

        let required = [
            ("tool.stack_verb", &self.tool.stack_verb),
            ("tool.review_command", &self.tool.review_command),
            ("display.panel_name", &self.display.panel_name),
            ("display.landed_marker", &self.display.landed_marker),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(StackReviewError::config(format!("{key} must not be empty")));
            }
        }

        Ok(())
    }
}
