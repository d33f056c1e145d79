//! Test environment builder for isolated sifctl testing.

use std::path::PathBuf;
use std::process::{Command, Output};

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

/// Result of running a sifctl CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temp containers directory.
pub struct TestEnv {
    /// Temporary containers directory (catalog, artifacts, lock files)
    pub containers: TempDir,
    /// Temporary HOME so nothing leaks into the real one
    pub home: TempDir,
}

impl TestEnv {
    /// Environment whose smoke probe always passes
    pub fn new() -> Self {
        Self::with_probe(&["true"])
    }

    /// Environment with a custom probe command
    pub fn with_probe(probe_command: &[&str]) -> Self {
        let containers = TempDir::new().expect("Failed to create containers temp dir");
        let home = TempDir::new().expect("Failed to create home temp dir");

        let command = probe_command
            .iter()
            .map(|part| format!("\"{part}\""))
            .collect::<Vec<_>>()
            .join(", ");
        std::fs::write(
            containers.path().join("sifctl.toml"),
            format!("[probe]\ncommand = [{command}]\ntimeout_secs = 10\n"),
        )
        .expect("Failed to write sifctl.toml");

        Self { containers, home }
    }

    /// Path relative to the containers directory
    pub fn containers_path(&self, relative: &str) -> PathBuf {
        self.containers.path().join(relative)
    }

    /// Write a file under the containers directory
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.containers_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Create artifact/def/lock fixtures for a version id.
    ///
    /// The def and lock files are shared across versions, matching the
    /// on-disk layout the tool manages (one definition, lock files beside
    /// the artifacts).
    pub fn make_version_files(&self, id: &str) -> PathBuf {
        let artifact = self.write_file(&format!("scitex-v{id}.sif"), &format!("sif bytes {id}"));
        if !self.containers_path("scitex.def").exists() {
            self.write_file("scitex.def", "Bootstrap: docker\nFrom: ubuntu:24.04\n");
        }
        if !self.containers_path("requirements-lock.txt").exists() {
            self.write_file("requirements-lock.txt", "numpy==2.1.0\nscipy==1.14.1\n");
        }
        artifact
    }

    /// Record a version through the CLI with a controlled build time
    pub fn record(&self, id: &str, built_secs: i64) -> TestResult {
        let artifact = self.make_version_files(id);
        let created_at = Utc.timestamp_opt(built_secs, 0).unwrap().to_rfc3339();
        self.run(&[
            "record",
            "--id",
            id,
            "--artifact",
            artifact.to_str().unwrap(),
            "--def",
            self.containers_path("scitex.def").to_str().unwrap(),
            "--lock",
            self.containers_path("requirements-lock.txt").to_str().unwrap(),
            "--created-at",
            &created_at,
        ])
    }

    /// Record a version and make it active
    pub fn record_and_switch(&self, id: &str, built_secs: i64) {
        let result = self.record(id, built_secs);
        assert!(result.success, "record failed: {}", result.combined_output());
        let result = self.run(&["switch", id]);
        assert!(result.success, "switch failed: {}", result.combined_output());
    }

    /// Run sifctl in this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_sifctl"))
            .args(args)
            .env("SIFCTL_CONTAINERS_DIR", self.containers.path())
            .env("SIFCTL_NO_COLOR", "1")
            .env("HOME", self.home.path())
            .output()
            .expect("Failed to execute sifctl");

        self.output_to_result(output)
    }

    fn output_to_result(&self, output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Raw catalog file content ("" when absent)
    pub fn read_catalog(&self) -> String {
        std::fs::read_to_string(self.containers_path("catalog.toml")).unwrap_or_default()
    }

    /// Parsed `list --json` output
    pub fn list_json(&self) -> serde_json::Value {
        let result = self.run(&["list", "--json"]);
        assert!(result.success, "list failed: {}", result.combined_output());
        serde_json::from_str(&result.stdout).expect("list --json produced invalid JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
