use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, ImageReference, RegistryCredentials};
use crate::ports::ContainerEngine;

/// One recorded engine invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Login { username: String },
    Build { image: String, context: PathBuf },
    Push { image: String },
}

/// Container engine that records calls and can fail a chosen operation.
#[derive(Default)]
pub struct FakeContainerEngine {
    pub calls: Mutex<Vec<EngineCall>>,
    fail_build_of: Mutex<Option<String>>,
    fail_login: Mutex<bool>,
}

impl FakeContainerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `build` fail for the given image reference.
    pub fn fail_build_of(&self, image: &str) {
        *self.fail_build_of.lock().unwrap() = Some(image.to_string());
    }

    pub fn fail_login(&self) {
        *self.fail_login.lock().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ContainerEngine for FakeContainerEngine {
    fn login(&self, credentials: &RegistryCredentials) -> Result<(), AppError> {
        self.calls
            .lock()
            .unwrap()
            .push(EngineCall::Login { username: credentials.username.clone() });
        if *self.fail_login.lock().unwrap() {
            return Err(AppError::ContainerEngine {
                command: format!("docker login -u {} --password-stdin", credentials.username),
                details: "exit status: 1".into(),
            });
        }
        Ok(())
    }

    fn build(&self, image: &ImageReference, context_dir: &Path) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(EngineCall::Build {
            image: image.to_string(),
            context: context_dir.to_path_buf(),
        });
        if self.fail_build_of.lock().unwrap().as_deref() == Some(image.as_str()) {
            return Err(AppError::ContainerEngine {
                command: format!("docker build -t {} .", image),
                details: "exit status: 1".into(),
            });
        }
        Ok(())
    }

    fn push(&self, image: &ImageReference) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(EngineCall::Push { image: image.to_string() });
        Ok(())
    }
}
