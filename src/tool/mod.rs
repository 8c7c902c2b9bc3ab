//! External git-stack tool invocation
//!
//! The tool is run as `<path> <verb>` and its stdout is returned with escape
//! codes and the final newline removed.

use crate::errors::{Result, StackReviewError};
use crate::utils::ansi::clean_output_bytes;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;
use std::sync::Arc;
use tracing::{debug, warn};

/// Runs one verb of the stack tool and returns its cleaned stdout
pub trait CommandRunner: Send + Sync {
    fn run(&self, verb: &str) -> Result<String>;
}

/// The real tool, executed as a child process
#[derive(Debug, Clone)]
pub struct GitStackTool {
    path: PathBuf,
}

impl GitStackTool {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CommandRunner for GitStackTool {
    fn run(&self, verb: &str) -> Result<String> {
        debug!("Running {} {}", self.path.display(), verb);

        let output = Command::new(&self.path)
            .arg(verb)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    StackReviewError::command_not_found(self.path.display().to_string())
                }
                _ => StackReviewError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = clean_output_bytes(&output.stderr);
            warn!("{} {} exited with {}", self.path.display(), verb, output.status);
            return Err(StackReviewError::CommandFailed {
                status: output.status.to_string(),
                stderr,
            });
        }

        let stdout = clean_output_bytes(&output.stdout);
        debug!("Tool returned {} bytes", stdout.len());
        Ok(stdout)
    }
}

/// Run the tool on the blocking pool and wait for it to finish
pub async fn run_blocking(runner: Arc<dyn CommandRunner>, verb: &str) -> Result<String> {
    let verb = verb.to_string();
    tokio::task::spawn_blocking(move || runner.run(&verb))
        .await
        .map_err(|e| StackReviewError::Io(std::io::Error::other(e)))?
}
