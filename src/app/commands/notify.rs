//! Report every job's metadata and image reference to the coordinator.

use std::thread;

use tracing::{debug, info};

use crate::domain::{AppError, JobMetadata, JobsConfig, NotifyConfig};
use crate::ports::{Coordinator, JobCatalog};

#[derive(Debug, Default, PartialEq)]
pub struct NotifyOutcome {
    /// Number of jobs submitted to the coordinator.
    pub submitted: usize,
}

/// Read every job's metadata and attach its image reference under `image_name`.
///
/// Directories without a metadata file contribute nothing.
pub fn collect_jobs(
    config: &JobsConfig,
    catalog: &impl JobCatalog,
) -> Result<Vec<JobMetadata>, AppError> {
    let mut jobs = Vec::new();
    for job in catalog.job_dirs()? {
        println!("Processing {}", job.metadata_path.display());

        if let Some(metadata) = catalog.read_metadata(&job)? {
            let image = config.image_reference(metadata.name());
            debug!(job = metadata.name(), image = %image, "collected job metadata");
            jobs.push(metadata.with_image_name(&image));
        }
    }
    Ok(jobs)
}

/// Wait for the settle delay, collect all jobs, and submit them in one batch.
pub fn execute(
    config: &NotifyConfig,
    catalog: &impl JobCatalog,
    coordinator: &impl Coordinator,
) -> Result<NotifyOutcome, AppError> {
    if !config.settle_delay.is_zero() {
        debug!(delay = ?config.settle_delay, "waiting before scanning jobs");
        thread::sleep(config.settle_delay);
    }

    let jobs = collect_jobs(&config.jobs, catalog)?;
    coordinator.submit_jobs(&jobs)?;

    info!(count = jobs.len(), "submitted job metadata");
    Ok(NotifyOutcome { submitted: jobs.len() })
}
