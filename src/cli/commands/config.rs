use crate::cli::output::Output;
use crate::cli::ConfigAction;
use crate::config::Settings;
use crate::errors::Result;
use std::path::Path;

/// Handle configuration commands
pub async fn run(action: &ConfigAction, config_file: &Path) -> Result<()> {
    match action {
        ConfigAction::Set { key, value } => set_config_value(config_file, key, value).await,
        ConfigAction::Get { key } => get_config_value(config_file, key).await,
        ConfigAction::List => list_config_values(config_file).await,
        ConfigAction::Unset { key } => unset_config_value(config_file, key).await,
    }
}

async fn set_config_value(config_file: &Path, key: &str, value: &str) -> Result<()> {
    let mut settings = Settings::load_from_file(config_file)?;
    settings.set_value(key, value)?;
    settings.validate()?;
    settings.save_to_file(config_file)?;

    Output::success(format!("Configuration updated: {key} = {value}"));

    if key == "tool.path" && !Path::new(value).exists() {
        Output::tip(format!("{value} does not exist yet; install mdm there or update the path"));
    }

    Ok(())
}

async fn get_config_value(config_file: &Path, key: &str) -> Result<()> {
    let settings = Settings::load_from_file(config_file)?;
    println!("{}", settings.get_value(key)?);
    Ok(())
}

async fn list_config_values(config_file: &Path) -> Result<()> {
    let settings = Settings::load_from_file(config_file)?;

    Output::section("Stack Review Configuration");
    Output::sub_item(format!("File: {}", config_file.display()));
    for key in Settings::keys() {
        Output::key_value(key, settings.get_value(key)?);
    }

    Ok(())
}

async fn unset_config_value(config_file: &Path, key: &str) -> Result<()> {
    let mut settings = Settings::load_from_file(config_file)?;
    settings.unset_value(key)?;
    settings.save_to_file(config_file)?;

    Output::success(format!("Configuration value reset: {key}"));
    Ok(())
}
