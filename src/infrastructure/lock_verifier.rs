//! Lock verifier
//!
//! Recomputes integrity fingerprints for a recorded version and compares
//! them against the values captured at build time: the artifact itself, the
//! definition file that produced it, and every dependency lock file.
//!
//! Verification never aborts partway. A path that no longer exists is a
//! failed check for that field, and the result is always fully structured.

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::entities::Version;
use crate::domain::ports::IntegrityVerifier;
use crate::domain::value_objects::{ArtifactCheck, Check, ContentHash, VerificationResult};
use crate::error::SifctlResult;
use crate::infrastructure::fs::hash_file;

/// Fingerprint computation and comparison
#[derive(Debug, Clone, Copy, Default)]
pub struct LockVerifier;

impl LockVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Content hash of a definition or lock file
    pub fn fingerprint(&self, path: &Path) -> SifctlResult<ContentHash> {
        hash_file(path)
    }

    fn check_artifact(&self, version: &Version) -> ArtifactCheck {
        let path = version.artifact_path.clone();
        if !path.exists() {
            return ArtifactCheck {
                path,
                exists: false,
                sha256: None,
            };
        }
        let sha256 = hash_file(&path).ok();
        ArtifactCheck {
            path,
            exists: true,
            sha256,
        }
    }

    fn check_def_origin(&self, version: &Version) -> Check {
        if !version.def_path.exists() {
            return Check::fail(format!(
                "definition file not found: {}",
                version.def_path.display()
            ));
        }
        match self.fingerprint(&version.def_path) {
            Ok(current) if current.matches(&version.def_origin_hash) => {
                Check::pass(format!("def hash matches: {}...", current.short()))
            }
            Ok(current) => Check::fail(format!(
                "def hash mismatch: current={}... recorded={}...",
                current.short(),
                version.def_origin_hash.short()
            )),
            Err(e) => Check::fail(format!("definition file unreadable: {e}")),
        }
    }

    fn check_lock(&self, version: &Version, name: &str, recorded: &ContentHash) -> Check {
        let path = version.lock_path(name);
        if !path.exists() {
            return Check::fail(format!("lock file not found: {}", path.display()));
        }
        match self.fingerprint(&path) {
            Ok(current) if current.matches(recorded) => Check::pass("hash matches"),
            Ok(current) => Check::fail(format!(
                "hash mismatch: current={}... recorded={}...",
                current.short(),
                recorded.short()
            )),
            Err(e) => Check::fail(format!("lock file unreadable: {e}")),
        }
    }
}

impl IntegrityVerifier for LockVerifier {
    fn verify(&self, version: &Version) -> VerificationResult {
        let artifact = self.check_artifact(version);
        let def_origin = self.check_def_origin(version);

        let mut dependency_locks = BTreeMap::new();
        for (name, recorded) in &version.dependency_lock_hashes {
            dependency_locks.insert(name.clone(), self.check_lock(version, name, recorded));
        }

        VerificationResult::finalize(artifact, def_origin, dependency_locks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::path::PathBuf;
    use tempfile::tempdir;

    use crate::domain::value_objects::CheckStatus;

    /// Build a version whose artifact, def, and lock files exist on disk
    /// with hashes recorded from the actual content.
    fn recorded_version(dir: &Path) -> Version {
        let artifact_path = dir.join("scitex-v1.0.0.sif");
        let def_path = dir.join("scitex.def");
        let lock_path = dir.join("requirements-lock.txt");
        std::fs::write(&artifact_path, b"sif bytes").unwrap();
        std::fs::write(&def_path, b"Bootstrap: docker\n").unwrap();
        std::fs::write(&lock_path, b"numpy==2.1.0\n").unwrap();

        Version {
            id: "1.0.0".to_string(),
            artifact_path,
            created_at: Utc::now(),
            def_path,
            def_origin_hash: ContentHash::from_bytes(b"Bootstrap: docker\n"),
            dependency_lock_hashes: BTreeMap::from([(
                "requirements-lock.txt".to_string(),
                ContentHash::from_bytes(b"numpy==2.1.0\n"),
            )]),
        }
    }

    #[test]
    fn intact_version_passes_overall() {
        let dir = tempdir().unwrap();
        let version = recorded_version(dir.path());

        let result = LockVerifier::new().verify(&version);
        assert!(result.overall);
        assert!(result.artifact.exists);
        assert!(result.artifact.sha256.is_some());
        assert_eq!(result.def_origin.status, CheckStatus::Pass);
    }

    #[test]
    fn missing_artifact_fails_only_that_field() {
        let dir = tempdir().unwrap();
        let version = recorded_version(dir.path());
        std::fs::remove_file(&version.artifact_path).unwrap();

        let result = LockVerifier::new().verify(&version);
        assert!(!result.overall);
        assert!(!result.artifact.exists);
        assert_eq!(result.def_origin.status, CheckStatus::Pass);
    }

    #[test]
    fn deleted_lock_file_fails_that_field_without_error() {
        let dir = tempdir().unwrap();
        let version = recorded_version(dir.path());
        std::fs::remove_file(dir.path().join("requirements-lock.txt")).unwrap();

        let result = LockVerifier::new().verify(&version);
        assert!(!result.overall);
        let check = &result.dependency_locks["requirements-lock.txt"];
        assert_eq!(check.status, CheckStatus::Fail);
        assert!(check.detail.contains("not found"));
        // the other checks still ran
        assert!(result.artifact.exists);
        assert_eq!(result.def_origin.status, CheckStatus::Pass);
    }

    #[test]
    fn drifted_lock_file_reports_mismatch() {
        let dir = tempdir().unwrap();
        let version = recorded_version(dir.path());
        std::fs::write(dir.path().join("requirements-lock.txt"), b"numpy==2.2.0\n").unwrap();

        let result = LockVerifier::new().verify(&version);
        assert!(!result.overall);
        let check = &result.dependency_locks["requirements-lock.txt"];
        assert!(check.detail.contains("mismatch"));
    }

    #[test]
    fn edited_definition_fails_def_origin() {
        let dir = tempdir().unwrap();
        let version = recorded_version(dir.path());
        std::fs::write(&version.def_path, b"Bootstrap: localimage\n").unwrap();

        let result = LockVerifier::new().verify(&version);
        assert!(!result.overall);
        assert_eq!(result.def_origin.status, CheckStatus::Fail);
        assert!(result.def_origin.detail.contains("mismatch"));
    }

    #[test]
    fn no_recorded_locks_is_vacuously_passing() {
        let dir = tempdir().unwrap();
        let mut version = recorded_version(dir.path());
        version.dependency_lock_hashes.clear();

        let result = LockVerifier::new().verify(&version);
        assert!(result.overall);
        assert!(result.dependency_locks.is_empty());
    }

    #[test]
    fn everything_missing_still_produces_structured_result() {
        let version = Version {
            id: "9.9.9".to_string(),
            artifact_path: PathBuf::from("/nonexistent/a.sif"),
            created_at: Utc::now(),
            def_path: PathBuf::from("/nonexistent/a.def"),
            def_origin_hash: ContentHash::from_bytes(b"x"),
            dependency_lock_hashes: BTreeMap::from([(
                "requirements-lock.txt".to_string(),
                ContentHash::from_bytes(b"y"),
            )]),
        };

        let result = LockVerifier::new().verify(&version);
        assert!(!result.overall);
        assert!(!result.artifact.exists);
        assert_eq!(result.def_origin.status, CheckStatus::Fail);
        assert_eq!(result.dependency_locks.len(), 1);
    }
}
