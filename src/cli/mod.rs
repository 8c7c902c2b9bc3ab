pub mod commands;
pub mod output;
pub mod panel;
pub mod picker;

use crate::config::{load_settings, resolve_config_path, Settings};
use crate::errors::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sr")]
#[command(about = "Stack Review - pick a commit from your stack and get its review command")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to the git-stack tool (overrides tool.path)
    #[arg(long, global = true, value_name = "PATH")]
    pub git_path: Option<PathBuf>,

    /// Settings file to use instead of ~/.stack-review/config.json
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the current stack, newest commit first
    Stack {
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the review base for a stack entry
    ReviewBase {
        /// Entry position, 0 = top of the stack (newest)
        index: usize,
    },

    /// Pick a stack entry and show its review command
    Review {
        /// Print the bare command instead of the output panel
        #[arg(long)]
        print: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Set a configuration value
    Set {
        /// Configuration key (e.g., tool.path)
        key: String,
        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// List all configuration values
    List,

    /// Reset a configuration value to its default
    Unset {
        /// Configuration key
        key: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        // Set up logging based on verbosity
        self.setup_logging();

        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        match &self.command {
            Commands::Stack { json } => commands::stack::run(&self.settings()?, *json).await,
            Commands::ReviewBase { index } => {
                commands::review_base::run(&self.settings()?, *index).await
            }
            Commands::Review { print } => commands::review::run(&self.settings()?, *print).await,
            Commands::Config { action } => {
                let path = resolve_config_path(self.config.as_deref())?;
                commands::config::run(action, &path).await
            }
            Commands::Completions { shell } => commands::completions::generate_completions(*shell),
            Commands::Version => commands::version::run().await,
        }
    }

    /// Settings resolved once, with command-line overrides applied
    fn settings(&self) -> Result<Settings> {
        load_settings(self.config.as_deref(), self.git_path.clone())
    }

    fn setup_logging(&self) {
        let level = if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr);

        if self.no_color {
            subscriber.with_ansi(false).init();
        } else {
            subscriber.init();
        }
    }
}
