use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::domain::{AppError, ImageReference, RegistryCredentials};
use crate::ports::ContainerEngine;

/// Build context passed to `build`; the command runs inside the job directory.
const BUILD_CONTEXT: &str = ".";

/// Container engine driven through its CLI (`docker`, `podman`, ...).
///
/// Each command is echoed to stdout before it runs, and its own output is
/// inherited so engine logs land in the CI log.
#[derive(Debug, Clone)]
pub struct ContainerEngineCommand {
    program: String,
}

impl ContainerEngineCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    fn command_line(&self, args: &[&str]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }

    fn run(&self, args: &[&str], cwd: Option<&Path>, stdin: Option<&str>) -> Result<(), AppError> {
        let command_line = self.command_line(args);
        println!("{}", command_line);

        let mut command = Command::new(&self.program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }
        debug!(command = %command_line, cwd = ?cwd, "spawning container engine");

        let status = match stdin {
            Some(input) => spawn_with_stdin(&mut command, input),
            None => command.status(),
        }
        .map_err(|e| AppError::ContainerEngine {
            command: command_line.clone(),
            details: e.to_string(),
        })?;

        if !status.success() {
            return Err(AppError::ContainerEngine {
                command: command_line,
                details: status.to_string(),
            });
        }

        debug!(command = %command_line, "container engine command succeeded");
        Ok(())
    }
}

fn spawn_with_stdin(command: &mut Command, input: &str) -> io::Result<ExitStatus> {
    let mut child = command.stdin(Stdio::piped()).spawn()?;
    if let Some(mut pipe) = child.stdin.take() {
        // The engine may exit before reading; its exit status decides the outcome.
        match pipe.write_all(input.as_bytes()) {
            Err(e) if e.kind() != io::ErrorKind::BrokenPipe => {
                let _ = child.kill();
                return Err(e);
            }
            _ => {}
        }
    }
    child.wait()
}

impl ContainerEngine for ContainerEngineCommand {
    fn login(&self, credentials: &RegistryCredentials) -> Result<(), AppError> {
        self.run(
            &["login", "-u", &credentials.username, "--password-stdin"],
            None,
            Some(&credentials.password),
        )
    }

    fn build(&self, image: &ImageReference, context_dir: &Path) -> Result<(), AppError> {
        self.run(&["build", "-t", image.as_str(), BUILD_CONTEXT], Some(context_dir), None)
    }

    fn push(&self, image: &ImageReference) -> Result<(), AppError> {
        self.run(&["push", image.as_str()], None, None)
    }
}
