/// Stack Review Error Types
#[derive(Debug, thiserror::Error)]
pub enum StackReviewError {
    /// The external git-stack tool could not be found at the configured path
    #[error("Command not found: {path}")]
    CommandNotFound { path: String },

    /// The external git-stack tool ran but exited unsuccessfully
    #[error("Command failed with {status}: {stderr}")]
    CommandFailed { status: String, stderr: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Terminal prompt errors
    #[error("Input error: {0}")]
    Input(#[from] dialoguer::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StackReviewError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StackReviewError::Config(msg.into())
    }

    pub fn validation<S: Into<String>>(msg: S) -> Self {
        StackReviewError::Validation(msg.into())
    }

    pub fn command_not_found<S: Into<String>>(path: S) -> Self {
        StackReviewError::CommandNotFound { path: path.into() }
    }

    pub fn is_command_not_found(&self) -> bool {
        matches!(self, StackReviewError::CommandNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, StackReviewError>;
