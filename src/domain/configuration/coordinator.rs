use std::time::Duration;

use url::Url;

use crate::domain::AppError;

use super::JobsConfig;

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SETTLE_DELAY_SECS: u64 = 2;

/// Coordinator endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinatorConfig {
    /// Endpoint receiving the job metadata batch.
    pub uri: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl CoordinatorConfig {
    pub fn new(uri: Url) -> Self {
        Self { uri, timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("HTTP timeout must be greater than 0"));
        }
        if !matches!(self.uri.scheme(), "http" | "https") {
            return Err(AppError::config_error(format!(
                "coordinator URI '{}' must use http or https",
                self.uri
            )));
        }
        Ok(())
    }
}

/// Configuration for the metadata notifier.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    pub jobs: JobsConfig,
    pub coordinator: CoordinatorConfig,
    /// Pause before scanning the jobs root.
    pub settle_delay: Duration,
}

impl NotifyConfig {
    pub fn new(jobs: JobsConfig, coordinator: CoordinatorConfig) -> Self {
        Self { jobs, coordinator, settle_delay: Duration::from_secs(DEFAULT_SETTLE_DELAY_SECS) }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.jobs.validate()?;
        self.coordinator.validate()
    }
}
