pub mod settings;

pub use settings::{default_tool_path, DisplayConfig, Settings, ToolConfig};

use crate::errors::{Result, StackReviewError};
use std::path::{Path, PathBuf};

/// Get the configuration directory (~/.stack-review/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| StackReviewError::config("Could not find home directory"))?;
    Ok(home_dir.join(".stack-review"))
}

/// Resolve the settings file: an explicit path wins over the default location
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(get_config_dir()?.join("config.json")),
    }
}

/// Load, override and validate settings once at startup
pub fn load_settings(explicit: Option<&Path>, tool_path: Option<PathBuf>) -> Result<Settings> {
    let path = resolve_config_path(explicit)?;
    let settings = Settings::load_from_file(&path)?.with_tool_path(tool_path);
    settings.validate()?;
    tracing::debug!("Using stack tool at {}", settings.tool.path.display());
    Ok(settings)
}
