//! Process configuration models.
//!
//! Each binary builds its configuration once from flags and environment and
//! hands it to the command explicitly.

mod coordinator;
mod jobs;
mod publish;

pub use coordinator::{
    CoordinatorConfig, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_SETTLE_DELAY_SECS, NotifyConfig,
};
pub use jobs::{
    DEFAULT_CONTAINER_REGISTRY, DEFAULT_METADATA_FILE_NAME, DEFAULT_TEAM_NAME, JobsConfig,
};
pub use publish::{DEFAULT_CONTAINER_ENGINE, PublishConfig, RegistryCredentials};
