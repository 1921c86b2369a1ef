use std::fmt;

use crate::domain::AppError;

use super::JobsConfig;

pub const DEFAULT_CONTAINER_ENGINE: &str = "docker";

/// Registry login credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistryCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for RegistryCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Configuration for the image publisher.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    pub jobs: JobsConfig,
    pub credentials: RegistryCredentials,
    /// Container engine executable (`docker`, `podman`, or a path).
    pub container_engine: String,
}

impl PublishConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.jobs.validate()?;
        if self.credentials.username.trim().is_empty() {
            return Err(AppError::config_error("registry username must not be empty"));
        }
        if self.container_engine.trim().is_empty() {
            return Err(AppError::config_error("container engine must not be empty"));
        }
        Ok(())
    }
}
