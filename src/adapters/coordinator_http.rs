//! Coordinator client implementation using reqwest.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use tracing::{debug, info};
use url::Url;

use crate::domain::{AppError, CoordinatorConfig, JobMetadata};
use crate::ports::Coordinator;

/// HTTP client for the proctord job metadata endpoint.
#[derive(Debug, Clone)]
pub struct HttpCoordinatorClient {
    uri: Url,
    client: Client,
}

impl HttpCoordinatorClient {
    /// Create a client for the configured endpoint and timeout.
    pub fn new(config: &CoordinatorConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .redirect(Policy::none())
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { uri: config.uri.clone(), client })
    }
}

impl Coordinator for HttpCoordinatorClient {
    fn submit_jobs(&self, jobs: &[JobMetadata]) -> Result<(), AppError> {
        let body = serde_json::to_string(jobs)?;

        println!("making req with body {}", body);
        debug!(uri = %self.uri, jobs = jobs.len(), "posting job metadata");

        let response = self
            .client
            .post(self.uri.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|e| AppError::Http(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::CREATED {
            info!(uri = %self.uri, jobs = jobs.len(), "coordinator accepted job metadata");
            return Ok(());
        }

        let body = response.text().unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(AppError::CoordinatorRejected { status: status.as_u16(), body })
    }
}
