use std::path::PathBuf;

use crate::domain::{AppError, ImageReference};

pub const DEFAULT_TEAM_NAME: &str = "test";
pub const DEFAULT_CONTAINER_REGISTRY: &str = "docker.io/proctorscripts";
pub const DEFAULT_METADATA_FILE_NAME: &str = "metadata.json";

/// Settings shared by the publisher and the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobsConfig {
    /// Root directory whose immediate subdirectories are jobs.
    pub jobs_path: PathBuf,
    /// Team prefix of every image name.
    pub team_name: String,
    /// Registry host and path prefix.
    pub container_registry: String,
    /// Name of the metadata file inside each job directory.
    pub metadata_file_name: String,
}

impl JobsConfig {
    /// Configuration for `jobs_path` with every other option at its default.
    pub fn new(jobs_path: impl Into<PathBuf>) -> Self {
        Self {
            jobs_path: jobs_path.into(),
            team_name: DEFAULT_TEAM_NAME.to_string(),
            container_registry: DEFAULT_CONTAINER_REGISTRY.to_string(),
            metadata_file_name: DEFAULT_METADATA_FILE_NAME.to_string(),
        }
    }

    pub fn image_reference(&self, job_name: &str) -> ImageReference {
        ImageReference::for_job(&self.container_registry, &self.team_name, job_name)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.jobs_path.as_os_str().is_empty() {
            return Err(AppError::config_error("jobs path must not be empty"));
        }
        if self.team_name.trim().is_empty() {
            return Err(AppError::config_error("team name must not be empty"));
        }
        if self.container_registry.trim().is_empty() {
            return Err(AppError::config_error("container registry must not be empty"));
        }
        if self.metadata_file_name.trim().is_empty() {
            return Err(AppError::config_error("metadata file name must not be empty"));
        }
        if self.metadata_file_name.contains(['/', '\\']) {
            return Err(AppError::config_error(format!(
                "metadata file name '{}' must not contain a path separator",
                self.metadata_file_name
            )));
        }
        Ok(())
    }
}
