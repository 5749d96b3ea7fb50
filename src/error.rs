use std::path::PathBuf;

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error during file or directory I/O
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Store file exists but does not hold valid JSON
    #[error("could not decode '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Error while serializing the store
    #[error("json error: {0}")]
    Encode(#[from] serde_json::Error),
    /// A user with the same email is already stored
    #[error("user already exists: '{email}'")]
    DuplicateUser { email: String },
    /// Selection or removal index outside of the stored users
    #[error("index {index} out of range, {len} users stored")]
    Index { index: usize, len: usize },
    /// External command could not be spawned or exited unsuccessfully
    #[error("command `{command}` failed: {reason}")]
    Process { command: String, reason: String },
    /// Error during input validation
    #[error("validation error: {0}")]
    Validation(String),
    /// Error when user input fails or is cancelled
    #[error("prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),
    /// The OS does not report a configuration directory
    #[error("failed to find the configuration directory")]
    ConfigDirNotFound,
    /// The OS does not report a home directory
    #[error("failed to find the home directory")]
    HomeDirNotFound,
}
