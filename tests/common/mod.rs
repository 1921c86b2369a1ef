//! Shared testing utilities for the proctor-jobs CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PROCTOR_ENV: &[&str] = &[
    "DOCKERHUB_USERNAME",
    "DOCKERHUB_PASSWORD",
    "PROCTOR_URI",
    "PROCTOR_JOBS_PATH",
    "PROCTOR_JOB_TEAM_NAME",
    "PROCTOR_CONTAINER_REGISTRY",
    "PROCTOR_METADATA_FILE_NAME",
    "PROCTOR_CONTAINER_ENGINE",
    "PROCTOR_SETTLE_DELAY_SECS",
    "PROCTOR_HTTP_TIMEOUT_SECS",
];

/// Testing harness providing an isolated jobs root for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    jobs_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty jobs root.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let jobs_dir = root.path().join("jobs");
        fs::create_dir_all(&jobs_dir).expect("Failed to create jobs directory");
        Self { root, jobs_dir }
    }

    /// Path to the jobs root passed as `PROCTOR_JOBS_PATH`.
    pub fn jobs_dir(&self) -> &Path {
        &self.jobs_dir
    }

    /// Create a job directory, optionally with a `metadata.json`.
    pub fn write_job(&self, dir: &str, metadata: Option<&str>) -> PathBuf {
        let job_dir = self.jobs_dir.join(dir);
        fs::create_dir_all(&job_dir).expect("Failed to create job directory");
        fs::write(job_dir.join("Dockerfile"), "FROM alpine\n").expect("Failed to write Dockerfile");
        if let Some(content) = metadata {
            fs::write(job_dir.join("metadata.json"), content).expect("Failed to write metadata");
        }
        job_dir
    }

    /// Path of the log written by the fake container engine.
    pub fn engine_log_path(&self) -> PathBuf {
        self.root.path().join("engine.log")
    }

    /// Lines recorded by the fake container engine, one per invocation.
    pub fn engine_log(&self) -> Vec<String> {
        fs::read_to_string(self.engine_log_path())
            .map(|content| content.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Install a fake container engine script that records its arguments.
    ///
    /// The script fails with exit code 1 when its first argument equals `fail_on`.
    #[cfg(unix)]
    pub fn install_fake_engine(&self, fail_on: Option<&str>) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = self.root.path().join("fake-engine");
        let body = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = login ]; then cat > /dev/null; fi\n\
             echo \"$*\" >> '{log}'\n\
             if [ \"$1\" = '{fail_on}' ]; then exit 1; fi\n\
             exit 0\n",
            log = self.engine_log_path().display(),
            fail_on = fail_on.unwrap_or("never"),
        );
        fs::write(&script, body).expect("Failed to write fake engine");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake engine executable");
        script
    }

    /// Build a command for `proctor-publish` with a clean proctor environment.
    pub fn publish_cli(&self, engine: &Path) -> Command {
        let mut cmd = self.cli("proctor-publish");
        cmd.env("DOCKERHUB_USERNAME", "ci-bot")
            .env("DOCKERHUB_PASSWORD", "hunter2")
            .env("PROCTOR_CONTAINER_ENGINE", engine);
        cmd
    }

    /// Build a command for `proctor-notify` posting to `uri` without a settle delay.
    pub fn notify_cli(&self, uri: &str) -> Command {
        let mut cmd = self.cli("proctor-notify");
        cmd.env("PROCTOR_URI", uri)
            .env("PROCTOR_SETTLE_DELAY_SECS", "0")
            .env("PROCTOR_HTTP_TIMEOUT_SECS", "5");
        cmd
    }

    fn cli(&self, bin: &str) -> Command {
        let mut cmd = Command::cargo_bin(bin).expect("Failed to locate binary");
        for key in PROCTOR_ENV {
            cmd.env_remove(key);
        }
        cmd.current_dir(self.root.path()).env("PROCTOR_JOBS_PATH", &self.jobs_dir);
        cmd
    }
}
