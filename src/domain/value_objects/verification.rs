//! Verification result types
//!
//! The outcome of checking a recorded version against what is actually on
//! disk. Computed on demand, never persisted. Verification always produces a
//! structured result: a missing file is a failed check, not an error.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use super::hash::ContentHash;

/// Outcome of a single integrity check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    /// Nothing recorded to check against (vacuously passing)
    Skip,
}

/// A single named check with a human-readable detail line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    pub status: CheckStatus,
    pub detail: String,
}

impl Check {
    pub fn pass(detail: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Pass,
            detail: detail.into(),
        }
    }

    pub fn fail(detail: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Fail,
            detail: detail.into(),
        }
    }

    pub fn skip(detail: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Skip,
            detail: detail.into(),
        }
    }

    /// A check only drags `overall` down when it actually failed
    pub fn is_ok(&self) -> bool {
        self.status != CheckStatus::Fail
    }
}

/// Existence and checksum of the artifact itself
///
/// The checksum is computed and reported whenever the artifact exists;
/// pass/fail is gated on existence alone since no artifact hash is recorded
/// at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactCheck {
    pub path: PathBuf,
    pub exists: bool,
    pub sha256: Option<ContentHash>,
}

impl ArtifactCheck {
    pub fn is_ok(&self) -> bool {
        self.exists
    }
}

/// Full verification report for one version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationResult {
    pub artifact: ArtifactCheck,
    pub def_origin: Check,
    pub dependency_locks: BTreeMap<String, Check>,
    pub overall: bool,
}

impl VerificationResult {
    /// Compute `overall` as the AND of every individual check
    pub fn finalize(
        artifact: ArtifactCheck,
        def_origin: Check,
        dependency_locks: BTreeMap<String, Check>,
    ) -> Self {
        let overall = artifact.is_ok()
            && def_origin.is_ok()
            && dependency_locks.values().all(Check::is_ok);
        Self {
            artifact,
            def_origin,
            dependency_locks,
            overall,
        }
    }
}
