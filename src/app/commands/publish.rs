//! Build and push one image per job directory.

use std::path::PathBuf;

use tracing::info;

use crate::domain::{AppError, ImageReference, PublishConfig};
use crate::ports::{ContainerEngine, JobCatalog};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct PublishOutcome {
    /// Images built and pushed, in processing order.
    pub published: Vec<ImageReference>,
    /// Job directories without a metadata file.
    pub skipped: Vec<PathBuf>,
}

/// Publish every job under the jobs root.
///
/// The registry login happens once, right before the first build. The first
/// failing engine command aborts the run; images already pushed stay pushed.
pub fn execute(
    config: &PublishConfig,
    catalog: &impl JobCatalog,
    engine: &impl ContainerEngine,
) -> Result<PublishOutcome, AppError> {
    let mut outcome = PublishOutcome::default();
    let mut logged_in = false;

    for job in catalog.job_dirs()? {
        let Some(metadata) = catalog.read_metadata(&job)? else {
            println!("{} doesn't have metadata_file", job.path.display());
            outcome.skipped.push(job.path);
            continue;
        };

        let image = config.jobs.image_reference(metadata.name());

        if !logged_in {
            engine.login(&config.credentials)?;
            logged_in = true;
        }

        println!("===== build and push image =====");
        engine.build(&image, job.path())?;
        engine.push(&image)?;

        info!(job = metadata.name(), image = %image, "published job image");
        outcome.published.push(image);
    }

    Ok(outcome)
}
