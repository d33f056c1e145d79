//! Docker Compose status provider
//!
//! Asks `docker compose ps` which services are running. The compose project
//! directory is configurable; by default the current directory is used, so
//! the provider behaves like running compose by hand.

use std::path::PathBuf;
use std::process::Command;

use crate::domain::ports::{ExternalStatus, StatusProvider};
use crate::error::SifctlResult;

pub struct DockerComposeStatus {
    compose_dir: Option<PathBuf>,
}

impl DockerComposeStatus {
    pub fn new(compose_dir: Option<PathBuf>) -> Self {
        Self { compose_dir }
    }
}

impl StatusProvider for DockerComposeStatus {
    fn name(&self) -> &str {
        "docker"
    }

    fn check(&self) -> SifctlResult<ExternalStatus> {
        let mut cmd = Command::new("docker");
        cmd.args(["compose", "ps", "--services", "--status=running"]);
        if let Some(dir) = &self.compose_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let first_line = stderr.lines().next().unwrap_or("compose ps failed");
            return Ok(ExternalStatus::down(first_line.to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let running = stdout.lines().filter(|l| !l.trim().is_empty()).count();
        if running == 0 {
            Ok(ExternalStatus::down("no services running"))
        } else {
            Ok(ExternalStatus::up(format!("{running} services running")))
        }
    }
}
