//! Job catalog port definition.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, JobMetadata};

/// A job directory found under the jobs root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDirectory {
    /// Job directory path; also the image build context.
    pub path: PathBuf,
    /// Candidate metadata file inside the directory. It may not exist.
    pub metadata_path: PathBuf,
}

impl JobDirectory {
    pub fn new(path: impl Into<PathBuf>, metadata_file_name: &str) -> Self {
        let path = path.into();
        let metadata_path = path.join(metadata_file_name);
        Self { path, metadata_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Port for discovering jobs and reading their metadata.
pub trait JobCatalog {
    /// Job directories in processing order.
    fn job_dirs(&self) -> Result<Vec<JobDirectory>, AppError>;

    /// Read a job's metadata. `Ok(None)` when the directory has no metadata file.
    fn read_metadata(&self, job: &JobDirectory) -> Result<Option<JobMetadata>, AppError>;
}
