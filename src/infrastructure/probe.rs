//! Command-based execution probe
//!
//! Runs the configured smoke command against an artifact and waits for it
//! with a bounded timeout. The command is a template: every `{artifact}`
//! placeholder is replaced with the artifact path, and the path is appended
//! when no placeholder appears. The default template runs
//! `apptainer exec <artifact> true`.

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::domain::ports::{ExecutionProbe, ProbeOutcome};

const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Probe that shells out to a configured command
#[derive(Debug, Clone)]
pub struct CommandProbe {
    command: Vec<String>,
    timeout: Duration,
}

pub const ARTIFACT_PLACEHOLDER: &str = "{artifact}";

impl CommandProbe {
    pub fn new(command: Vec<String>, timeout: Duration) -> Self {
        Self { command, timeout }
    }

    fn build_argv(&self, artifact: &Path) -> Vec<String> {
        let artifact = artifact.display().to_string();
        let mut argv: Vec<String> = Vec::with_capacity(self.command.len() + 1);
        let mut substituted = false;
        for part in &self.command {
            if part.contains(ARTIFACT_PLACEHOLDER) {
                argv.push(part.replace(ARTIFACT_PLACEHOLDER, &artifact));
                substituted = true;
            } else {
                argv.push(part.clone());
            }
        }
        if !substituted {
            argv.push(artifact);
        }
        argv
    }
}

impl ExecutionProbe for CommandProbe {
    fn probe(&self, artifact: &Path) -> ProbeOutcome {
        let argv = self.build_argv(artifact);
        let (program, args) = match argv.split_first() {
            Some(parts) if !self.command.is_empty() => parts,
            _ => return ProbeOutcome::failed("empty probe command"),
        };

        let mut child = match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => return ProbeOutcome::failed(format!("could not spawn '{program}': {e}")),
        };

        let deadline = Instant::now() + self.timeout;
        loop {
            match child.try_wait() {
                Ok(Some(status)) if status.success() => return ProbeOutcome::Passed,
                Ok(Some(status)) => {
                    return ProbeOutcome::failed(format!("exited with {status}"));
                }
                Ok(None) => {
                    if Instant::now() >= deadline {
                        let _ = child.kill();
                        let _ = child.wait();
                        return ProbeOutcome::failed(format!(
                            "timed out after {}s",
                            self.timeout.as_secs_f32()
                        ));
                    }
                    std::thread::sleep(WAIT_POLL_INTERVAL);
                }
                Err(e) => return ProbeOutcome::failed(format!("wait failed: {e}")),
            }
        }
    }
}
