//! CLI Adapter.
//!
//! Every option is a flag and an environment variable, so CI pipelines can
//! configure the binaries purely through their environment.

pub mod notify;
pub mod publish;

use std::path::PathBuf;

use clap::Args;
use tracing_subscriber::EnvFilter;

use crate::domain::JobsConfig;
use crate::domain::configuration::{
    DEFAULT_CONTAINER_REGISTRY, DEFAULT_METADATA_FILE_NAME, DEFAULT_TEAM_NAME,
};

/// Options shared by both binaries.
#[derive(Args, Debug, Clone)]
pub struct JobsArgs {
    /// Directory whose immediate subdirectories are jobs
    #[arg(long, env = "PROCTOR_JOBS_PATH")]
    pub jobs_path: PathBuf,
    /// Team prefix for image names
    #[arg(long, env = "PROCTOR_JOB_TEAM_NAME", default_value = DEFAULT_TEAM_NAME)]
    pub team_name: String,
    /// Registry host and path prefix
    #[arg(long, env = "PROCTOR_CONTAINER_REGISTRY", default_value = DEFAULT_CONTAINER_REGISTRY)]
    pub container_registry: String,
    /// Metadata file name inside each job directory
    #[arg(long, env = "PROCTOR_METADATA_FILE_NAME", default_value = DEFAULT_METADATA_FILE_NAME)]
    pub metadata_file_name: String,
}

impl From<JobsArgs> for JobsConfig {
    fn from(args: JobsArgs) -> Self {
        JobsConfig {
            jobs_path: args.jobs_path,
            team_name: args.team_name,
            container_registry: args.container_registry,
            metadata_file_name: args.metadata_file_name,
        }
    }
}

/// Install the stderr diagnostics subscriber. `RUST_LOG` overrides the `warn` default.
pub(crate) fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
