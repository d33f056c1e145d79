//! Configuration
//!
//! Settings live in an optional `sifctl.toml` next to the catalog; a missing
//! file means defaults. The containers directory itself resolves CLI flag →
//! `SIFCTL_CONTAINERS_DIR` → `~/.sifctl/containers`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{SifctlError, SifctlResult};

/// Environment variable overriding the containers directory
pub const CONTAINERS_DIR_ENV: &str = "SIFCTL_CONTAINERS_DIR";

/// Config file name inside the containers directory
pub const CONFIG_FILE: &str = "sifctl.toml";

/// Smoke probe settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProbeConfig {
    /// Command template; `{artifact}` is replaced with the artifact path,
    /// which is appended when no placeholder appears
    pub command: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            command: vec![
                "apptainer".to_string(),
                "exec".to_string(),
                "{artifact}".to_string(),
                "true".to_string(),
            ],
            timeout_secs: 30,
        }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Tool settings read from `sifctl.toml`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Name of the runtime slot link inside the containers directory
    pub slot_name: String,
    /// Default retention count for cleanup
    pub retain_default: usize,
    /// Bounded wait for the catalog lock
    pub lock_wait_ms: u64,
    pub probe: ProbeConfig,
    /// Directory holding the docker-compose project, if any
    pub compose_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slot_name: "current.sif".to_string(),
            retain_default: 3,
            lock_wait_ms: 5000,
            probe: ProbeConfig::default(),
            compose_dir: None,
        }
    }
}

impl Config {
    /// Load from `<containers_dir>/sifctl.toml`; a missing file is defaults
    pub fn load(containers_dir: &Path) -> SifctlResult<Self> {
        let path = containers_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| SifctlError::InvalidConfig {
            path,
            message: e.to_string(),
        })
    }

    pub fn lock_wait(&self) -> Duration {
        Duration::from_millis(self.lock_wait_ms)
    }

    pub fn slot_path(&self, containers_dir: &Path) -> PathBuf {
        containers_dir.join(&self.slot_name)
    }
}

/// Resolve the containers directory: flag → environment → home default
pub fn resolve_containers_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Ok(dir) = std::env::var(CONTAINERS_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|h| h.join(".sifctl/containers"))
        .unwrap_or_else(|| PathBuf::from(".sifctl/containers"))
}
