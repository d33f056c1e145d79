//! Version manager use case
//!
//! The state machine governing which container version is active. All
//! mutating operations hold the store's exclusive lock for the whole
//! load-mutate-persist sequence; read-only operations re-read the catalog
//! fresh on every call.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::application::cleanup::{CleanupOptions, CleanupReport, RemovalOutcome};
use crate::domain::entities::Version;
use crate::domain::ports::{CatalogStore, ExecutionProbe, IntegrityVerifier, ProbeOutcome};
use crate::domain::services::retention;
use crate::domain::value_objects::VerificationResult;
use crate::error::{SifctlError, SifctlResult};

/// One row of the version listing
#[derive(Debug, Clone, Serialize)]
pub struct VersionSummary {
    pub id: String,
    pub artifact_path: PathBuf,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub artifact_size: Option<u64>,
    pub def_origin_hash: crate::domain::value_objects::ContentHash,
    pub lock_count: usize,
    pub active: bool,
    pub previous: bool,
}

/// Read-only snapshot of the catalog, newest version first
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub versions: Vec<VersionSummary>,
    pub active: Option<String>,
    pub previous: Option<String>,
}

/// Result of a switch
#[derive(Debug, Clone, Serialize)]
pub struct SwitchOutcome {
    pub active: String,
    pub previous: Option<String>,
    pub artifact_path: PathBuf,
    /// False when the requested version was already active
    pub changed: bool,
}

/// Result of a rollback
#[derive(Debug, Clone, Serialize)]
pub struct RollbackOutcome {
    pub active: String,
    pub previous: String,
}

/// Result of a deploy (switch plus slot update)
#[derive(Debug, Clone, Serialize)]
pub struct DeployOutcome {
    #[serde(flatten)]
    pub switch: SwitchOutcome,
    pub slot: PathBuf,
}

/// Orchestrates switch/rollback/deploy/cleanup/verify/record over the
/// catalog store, the execution probe, and the integrity verifier.
pub struct VersionManager<S, P, V>
where
    S: CatalogStore,
    P: ExecutionProbe,
    V: IntegrityVerifier,
{
    store: S,
    probe: P,
    verifier: V,
    slot_path: PathBuf,
}

impl<S, P, V> VersionManager<S, P, V>
where
    S: CatalogStore,
    P: ExecutionProbe,
    V: IntegrityVerifier,
{
    pub fn new(store: S, probe: P, verifier: V, slot_path: PathBuf) -> Self {
        Self {
            store,
            probe,
            verifier,
            slot_path,
        }
    }

    /// All versions, most recently built first
    pub fn list(&self) -> SifctlResult<CatalogView> {
        let catalog = self.store.load()?;
        let versions = catalog
            .by_created_desc()
            .into_iter()
            .map(|v| VersionSummary {
                id: v.id.clone(),
                artifact_path: v.artifact_path.clone(),
                created_at: v.created_at,
                artifact_size: std::fs::metadata(&v.artifact_path).ok().map(|m| m.len()),
                def_origin_hash: v.def_origin_hash.clone(),
                lock_count: v.dependency_lock_hashes.len(),
                active: catalog.active() == Some(v.id.as_str()),
                previous: catalog.previous() == Some(v.id.as_str()),
            })
            .collect();
        Ok(CatalogView {
            versions,
            active: catalog.active().map(String::from),
            previous: catalog.previous().map(String::from),
        })
    }

    /// Make `id` the active version, verifying before commit
    pub fn switch(&self, id: &str) -> SifctlResult<SwitchOutcome> {
        let _guard = self.store.lock_exclusive()?;
        self.switch_locked(id)
    }

    /// Switch plus repointing the runtime slot reference
    ///
    /// The slot is only touched after the catalog transition commits; a
    /// rejected switch leaves it alone.
    pub fn deploy(&self, id: &str) -> SifctlResult<DeployOutcome> {
        let _guard = self.store.lock_exclusive()?;
        let switch = self.switch_locked(id)?;
        self.point_slot(&switch.artifact_path)?;
        Ok(DeployOutcome {
            switch,
            slot: self.slot_path.clone(),
        })
    }

    /// Swap active and previous (single-step undo)
    pub fn rollback(&self) -> SifctlResult<RollbackOutcome> {
        let _guard = self.store.lock_exclusive()?;
        let mut catalog = self.store.load()?;
        let (active, previous) = catalog.rollback()?;
        self.store.save(&catalog)?;
        Ok(RollbackOutcome { active, previous })
    }

    /// Remove versions beyond the retention window, best-effort
    pub fn cleanup(&self, options: &CleanupOptions) -> SifctlResult<CleanupReport> {
        let _guard = self.store.lock_exclusive()?;
        let mut catalog = self.store.load()?;

        let doomed = retention::plan_removals(&catalog, options.retain, options.keep_active);
        let mut report = CleanupReport::new(options.dry_run);
        let mut any_removed = false;

        for id in doomed {
            let artifact = match catalog.get(&id) {
                Some(v) => v.artifact_path.clone(),
                None => continue,
            };

            if options.dry_run {
                report.push(id, artifact, RemovalOutcome::WouldRemove);
                continue;
            }

            // artifact first; a version whose artifact we could not delete
            // keeps its catalog entry so nothing is silently lost
            if let Err(e) = std::fs::remove_file(&artifact) {
                report.push(id, artifact, RemovalOutcome::Failed(e.to_string()));
                continue;
            }

            match catalog.remove(&id) {
                Ok(_) => {
                    any_removed = true;
                    report.push(id, artifact, RemovalOutcome::Removed);
                }
                Err(e) => report.push(id, artifact, RemovalOutcome::Failed(e.to_string())),
            }
        }

        if any_removed {
            self.store.save(&catalog)?;
        }
        Ok(report)
    }

    /// Verify a recorded version against the current on-disk state
    pub fn verify(&self, id: &str) -> SifctlResult<VerificationResult> {
        let catalog = self.store.load()?;
        let version = catalog
            .get(id)
            .ok_or_else(|| SifctlError::UnknownVersion { id: id.to_string() })?;
        Ok(self.verifier.verify(version))
    }

    /// Record a freshly built version (the build pipeline's entry point)
    pub fn record(&self, version: Version) -> SifctlResult<()> {
        let _guard = self.store.lock_exclusive()?;
        self.store.register(version)
    }

    fn switch_locked(&self, id: &str) -> SifctlResult<SwitchOutcome> {
        let mut catalog = self.store.load()?;
        let artifact_path = catalog
            .get(id)
            .map(|v| v.artifact_path.clone())
            .ok_or_else(|| SifctlError::UnknownVersion { id: id.to_string() })?;

        if catalog.active() == Some(id) {
            return Ok(SwitchOutcome {
                active: id.to_string(),
                previous: catalog.previous().map(String::from),
                artifact_path,
                changed: false,
            });
        }

        if let ProbeOutcome::Failed { reason } = self.probe.probe(&artifact_path) {
            return Err(SifctlError::SwitchVerification {
                id: id.to_string(),
                reason,
            });
        }

        catalog.activate(id)?;
        self.store.save(&catalog)?;

        Ok(SwitchOutcome {
            active: id.to_string(),
            previous: catalog.previous().map(String::from),
            artifact_path,
            changed: true,
        })
    }

    /// Repoint the runtime slot reference with a temp name then an atomic
    /// rename, so consumers never observe a half-written link.
    fn point_slot(&self, artifact: &Path) -> SifctlResult<()> {
        if let Some(parent) = self.slot_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.slot_path.with_extension("tmp");
        if tmp.symlink_metadata().is_ok() {
            std::fs::remove_file(&tmp)?;
        }
        #[cfg(unix)]
        std::os::unix::fs::symlink(artifact, &tmp)?;
        #[cfg(not(unix))]
        std::fs::write(&tmp, artifact.display().to_string())?;
        std::fs::rename(&tmp, &self.slot_path)?;
        Ok(())
    }
}
