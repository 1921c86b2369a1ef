//! API Facade for the application.
//!
//! Wires the production adapters to the commands.

use crate::adapters::{ContainerEngineCommand, FilesystemJobCatalog, HttpCoordinatorClient};
use crate::app::commands::{notify, publish};
use crate::domain::{AppError, NotifyConfig, PublishConfig};

pub use crate::app::commands::notify::NotifyOutcome;
pub use crate::app::commands::publish::PublishOutcome;

/// Build and push every job image under the configured jobs root.
pub fn publish(config: &PublishConfig) -> Result<PublishOutcome, AppError> {
    config.validate()?;

    let catalog = FilesystemJobCatalog::from_config(&config.jobs);
    let engine = ContainerEngineCommand::new(&config.container_engine);
    publish::execute(config, &catalog, &engine)
}

/// Submit every job's metadata and image reference to the coordinator.
pub fn notify(config: &NotifyConfig) -> Result<NotifyOutcome, AppError> {
    config.validate()?;

    let catalog = FilesystemJobCatalog::from_config(&config.jobs);
    let coordinator = HttpCoordinatorClient::new(&config.coordinator)?;
    notify::execute(config, &catalog, &coordinator)
}
