use std::sync::Mutex;

use serde_json::Value;

use crate::domain::{AppError, JobMetadata};
use crate::ports::Coordinator;

/// Coordinator that keeps every submitted batch and answers with a fixed status.
pub struct FakeCoordinator {
    pub submissions: Mutex<Vec<Vec<Value>>>,
    status: u16,
}

impl Default for FakeCoordinator {
    fn default() -> Self {
        Self::responding(201)
    }
}

impl FakeCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn responding(status: u16) -> Self {
        Self { submissions: Mutex::new(Vec::new()), status }
    }

    pub fn submissions(&self) -> Vec<Vec<Value>> {
        self.submissions.lock().unwrap().clone()
    }
}

impl Coordinator for FakeCoordinator {
    fn submit_jobs(&self, jobs: &[JobMetadata]) -> Result<(), AppError> {
        let batch = jobs.iter().cloned().map(JobMetadata::into_value).collect();
        self.submissions.lock().unwrap().push(batch);
        if self.status == 201 {
            Ok(())
        } else {
            Err(AppError::CoordinatorRejected { status: self.status, body: String::new() })
        }
    }
}
