use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for proctor-jobs operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Jobs root directory could not be listed.
    #[error("Failed to read jobs directory '{path}': {source}")]
    JobsRootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Metadata file content is not a JSON object.
    #[error("Failed to parse metadata file '{path}': {details}")]
    MetadataParse { path: PathBuf, details: String },

    /// Metadata object has no string `name` field.
    #[error("Metadata file '{path}' has no string 'name' field")]
    MissingJobName { path: PathBuf },

    /// Container engine command exited unsuccessfully or could not be spawned.
    #[error("{command} exited with non-zero code ({details})")]
    ContainerEngine { command: String, details: String },

    /// Coordinator answered with something other than 201 Created.
    #[error("Coordinator responded with status {status}: {body}")]
    CoordinatorRejected { status: u16, body: String },

    /// JSON serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Coordinator could not be reached.
    #[error("HTTP request to coordinator failed: {0}")]
    Http(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
