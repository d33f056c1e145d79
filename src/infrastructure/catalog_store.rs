//! TOML catalog store
//!
//! Persists the catalog as `catalog.toml` under the containers directory.
//! The format is operator-editable in emergencies: a `schema` field, the two
//! pointers, and one `[[versions]]` table per version. Unknown fields are
//! ignored on read.
//!
//! Writers coordinate through an advisory lock file next to the catalog,
//! acquired with a bounded wait.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Catalog, Version};
use crate::domain::ports::CatalogStore;
use crate::error::{SifctlError, SifctlResult};
use crate::infrastructure::fs::atomic_write;

/// TOML representation of the catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlCatalog {
    schema: u32,
    #[serde(default)]
    active: Option<String>,
    #[serde(default)]
    previous: Option<String>,
    #[serde(default)]
    versions: Vec<Version>,
}

/// Holds the advisory lock until dropped
#[derive(Debug)]
pub struct CatalogLockGuard {
    file: std::fs::File,
}

impl Drop for CatalogLockGuard {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

/// File-backed catalog store
pub struct TomlCatalogStore {
    catalog_path: PathBuf,
    lock_path: PathBuf,
    lock_wait: Duration,
}

const LOCK_POLL_INTERVAL: Duration = Duration::from_millis(25);

impl TomlCatalogStore {
    pub const CATALOG_FILE: &'static str = "catalog.toml";
    pub const LOCK_FILE: &'static str = ".catalog.lock";
    pub const SCHEMA: u32 = 1;

    pub fn new(containers_dir: &Path) -> Self {
        Self {
            catalog_path: containers_dir.join(Self::CATALOG_FILE),
            lock_path: containers_dir.join(Self::LOCK_FILE),
            lock_wait: Duration::from_secs(5),
        }
    }

    /// Override the bounded lock wait
    pub fn with_lock_wait(mut self, lock_wait: Duration) -> Self {
        self.lock_wait = lock_wait;
        self
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    fn corrupt(&self, message: impl Into<String>) -> SifctlError {
        SifctlError::CorruptCatalog {
            path: self.catalog_path.clone(),
            message: message.into(),
        }
    }
}

impl CatalogStore for TomlCatalogStore {
    type Guard = CatalogLockGuard;

    fn lock_exclusive(&self) -> SifctlResult<CatalogLockGuard> {
        if let Some(parent) = self.lock_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .open(&self.lock_path)?;

        let started = Instant::now();
        loop {
            match file.try_lock_exclusive() {
                Ok(()) => return Ok(CatalogLockGuard { file }),
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    if started.elapsed() >= self.lock_wait {
                        return Err(SifctlError::ConcurrentOperation {
                            waited_ms: self.lock_wait.as_millis() as u64,
                        });
                    }
                    std::thread::sleep(LOCK_POLL_INTERVAL);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn load(&self) -> SifctlResult<Catalog> {
        if !self.catalog_path.exists() {
            return Ok(Catalog::new());
        }

        let content = std::fs::read_to_string(&self.catalog_path)?;
        let raw: TomlCatalog =
            toml::from_str(&content).map_err(|e| self.corrupt(e.to_string()))?;

        if raw.schema != Self::SCHEMA {
            return Err(SifctlError::SchemaMismatch {
                path: self.catalog_path.clone(),
                found: raw.schema,
                supported: Self::SCHEMA,
            });
        }

        let mut catalog = Catalog::new();
        for version in raw.versions {
            catalog
                .insert(version)
                .map_err(|e| self.corrupt(e.to_string()))?;
        }
        catalog
            .set_pointers(raw.active, raw.previous)
            .map_err(|e| self.corrupt(format!("dangling pointer: {e}")))?;

        Ok(catalog)
    }

    fn save(&self, catalog: &Catalog) -> SifctlResult<()> {
        let raw = TomlCatalog {
            schema: Self::SCHEMA,
            active: catalog.active().map(String::from),
            previous: catalog.previous().map(String::from),
            versions: catalog.versions().cloned().collect(),
        };

        let content = toml::to_string_pretty(&raw)
            .map_err(|e| self.corrupt(format!("serialization failed: {e}")))?;
        atomic_write(&self.catalog_path, content.as_bytes())
    }
}
