use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::domain::{AppError, JobMetadata, JobsConfig};
use crate::ports::{JobCatalog, JobDirectory};

/// Job catalog backed by the immediate subdirectories of a jobs root.
#[derive(Debug, Clone)]
pub struct FilesystemJobCatalog {
    root: PathBuf,
    metadata_file_name: String,
}

impl FilesystemJobCatalog {
    pub fn new(root: impl Into<PathBuf>, metadata_file_name: impl Into<String>) -> Self {
        Self { root: root.into(), metadata_file_name: metadata_file_name.into() }
    }

    pub fn from_config(config: &JobsConfig) -> Self {
        Self::new(&config.jobs_path, &config.metadata_file_name)
    }
}

impl JobCatalog for FilesystemJobCatalog {
    fn job_dirs(&self) -> Result<Vec<JobDirectory>, AppError> {
        let unreadable =
            |source: io::Error| AppError::JobsRootUnreadable { path: self.root.clone(), source };

        let mut dirs = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;
            let name = entry.file_name();
            if name.to_string_lossy().starts_with('.') {
                continue;
            }
            // Follows symlinks, so a linked job directory counts.
            let is_dir = fs::metadata(entry.path()).map(|m| m.is_dir()).unwrap_or(false);
            if is_dir {
                dirs.push((name, entry.path()));
            }
        }

        dirs.sort_by(|a, b| a.0.cmp(&b.0));
        debug!(root = %self.root.display(), count = dirs.len(), "discovered job directories");

        Ok(dirs
            .into_iter()
            .map(|(_, path)| JobDirectory::new(path, &self.metadata_file_name))
            .collect())
    }

    fn read_metadata(&self, job: &JobDirectory) -> Result<Option<JobMetadata>, AppError> {
        let content = match fs::read_to_string(&job.metadata_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AppError::Io(e)),
        };

        JobMetadata::parse(&job.metadata_path, &content).map(Some)
    }
}
