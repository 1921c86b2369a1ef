//! Container engine port definition.

use std::path::Path;

use crate::domain::{AppError, ImageReference, RegistryCredentials};

/// Port for the container engine operations the publisher needs.
pub trait ContainerEngine {
    /// Authenticate against the registry.
    fn login(&self, credentials: &RegistryCredentials) -> Result<(), AppError>;

    /// Build the image in `context_dir`, tagging it with `image`.
    fn build(&self, image: &ImageReference, context_dir: &Path) -> Result<(), AppError>;

    /// Push a previously built image.
    fn push(&self, image: &ImageReference) -> Result<(), AppError>;
}
