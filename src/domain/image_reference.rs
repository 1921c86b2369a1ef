use std::fmt;

use serde::Serialize;

/// Tag applied to every job image.
pub const IMAGE_TAG: &str = "latest";

/// Fully qualified container image reference for a job.
///
/// Both the publisher and the notifier derive references through
/// [`ImageReference::for_job`], so the image pushed to the registry and the
/// name reported to the coordinator always agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageReference(String);

impl ImageReference {
    /// Build `{registry}/{team}-{job_name}:latest`.
    pub fn for_job(registry: &str, team: &str, job_name: &str) -> Self {
        Self(format!("{}/{}-{}:{}", registry, team, job_name, IMAGE_TAG))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ImageReference> for String {
    fn from(val: ImageReference) -> Self {
        val.0
    }
}
