pub mod configuration;
pub mod error;
pub mod image_reference;
pub mod job_metadata;

pub use configuration::{
    CoordinatorConfig, JobsConfig, NotifyConfig, PublishConfig, RegistryCredentials,
};
pub use error::AppError;
pub use image_reference::ImageReference;
pub use job_metadata::{IMAGE_NAME_KEY, JobMetadata};
