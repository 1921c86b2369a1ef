//! `proctor-publish`: build and push job images.

use clap::Parser;

use super::{JobsArgs, init_tracing};
use crate::app::api;
use crate::domain::configuration::DEFAULT_CONTAINER_ENGINE;
use crate::domain::{PublishConfig, RegistryCredentials};

#[derive(Parser, Debug)]
#[command(name = "proctor-publish")]
#[command(version)]
#[command(about = "Build and push a container image for every proctor job", long_about = None)]
pub struct PublishCli {
    #[command(flatten)]
    pub jobs: JobsArgs,
    /// Registry username
    #[arg(long, env = "DOCKERHUB_USERNAME")]
    pub username: String,
    /// Registry password (passed to the engine on stdin)
    #[arg(long, env = "DOCKERHUB_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Container engine executable
    #[arg(long, env = "PROCTOR_CONTAINER_ENGINE", default_value = DEFAULT_CONTAINER_ENGINE)]
    pub container_engine: String,
}

impl PublishCli {
    pub fn into_config(self) -> PublishConfig {
        PublishConfig {
            jobs: self.jobs.into(),
            credentials: RegistryCredentials { username: self.username, password: self.password },
            container_engine: self.container_engine,
        }
    }
}

/// Entry point for `proctor-publish`.
pub fn run() {
    let cli = PublishCli::parse();
    init_tracing();

    match api::publish(&cli.into_config()) {
        Ok(outcome) => {
            println!("✅ Published {} image(s)", outcome.published.len());
            for image in &outcome.published {
                println!("  {}", image);
            }
            if !outcome.skipped.is_empty() {
                println!("ℹ️ Skipped {} directory(ies) without metadata", outcome.skipped.len());
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
