//! `proctor-notify`: report job metadata to proctord.

use std::time::Duration;

use clap::Parser;
use url::Url;

use super::{JobsArgs, init_tracing};
use crate::app::api;
use crate::domain::configuration::{DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_SETTLE_DELAY_SECS};
use crate::domain::{AppError, CoordinatorConfig, NotifyConfig};

#[derive(Parser, Debug)]
#[command(name = "proctor-notify")]
#[command(version)]
#[command(about = "Send every proctor job's metadata and image name to proctord", long_about = None)]
pub struct NotifyCli {
    #[command(flatten)]
    pub jobs: JobsArgs,
    /// Coordinator endpoint receiving the job metadata
    #[arg(long, env = "PROCTOR_URI")]
    pub uri: Url,
    /// Seconds to wait before scanning the jobs directory
    #[arg(long, env = "PROCTOR_SETTLE_DELAY_SECS", default_value_t = DEFAULT_SETTLE_DELAY_SECS)]
    pub settle_delay_secs: u64,
    /// HTTP request timeout in seconds
    #[arg(long, env = "PROCTOR_HTTP_TIMEOUT_SECS", default_value_t = DEFAULT_HTTP_TIMEOUT_SECS)]
    pub http_timeout_secs: u64,
}

impl NotifyCli {
    pub fn into_config(self) -> NotifyConfig {
        NotifyConfig {
            jobs: self.jobs.into(),
            coordinator: CoordinatorConfig { uri: self.uri, timeout_secs: self.http_timeout_secs },
            settle_delay: Duration::from_secs(self.settle_delay_secs),
        }
    }
}

/// Entry point for `proctor-notify`.
pub fn run() {
    let cli = NotifyCli::parse();
    init_tracing();

    match api::notify(&cli.into_config()) {
        Ok(_) => println!("Updated proctor metadata"),
        Err(AppError::CoordinatorRejected { status, body }) => {
            println!("Something went wrong while updating proctor metadata! Response from proctor:");
            println!("{} {}", status, body);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
