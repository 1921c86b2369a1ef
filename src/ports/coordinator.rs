//! Coordinator (proctord) port definition.

use crate::domain::{AppError, JobMetadata};

/// Port for reporting job metadata to the coordinator.
pub trait Coordinator {
    /// Submit the full job collection in one request.
    ///
    /// Succeeds only when the coordinator acknowledges with `201 Created`.
    fn submit_jobs(&self, jobs: &[JobMetadata]) -> Result<(), AppError>;
}
