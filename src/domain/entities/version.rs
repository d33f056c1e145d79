//! Version entity - one buildable/runnable container artifact
//!
//! Created by the build pipeline when an image finishes, immutable once
//! recorded, removed only by cleanup.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ContentHash;

/// One recorded container version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// Semantic version string, unique within a catalog
    pub id: String,
    /// Location of the built image (SIF path, or Compose service tag)
    pub artifact_path: PathBuf,
    /// Build completion time
    pub created_at: DateTime<Utc>,
    /// Where the definition file lived when the artifact was built
    pub def_path: PathBuf,
    /// Fingerprint of the definition file at build time
    pub def_origin_hash: ContentHash,
    /// Lock-file name → content hash, captured at build time.
    /// Lock files live next to the artifact.
    #[serde(default)]
    pub dependency_lock_hashes: BTreeMap<String, ContentHash>,
}

impl Version {
    /// Directory the artifact (and its lock files) live in
    pub fn artifact_dir(&self) -> &Path {
        self.artifact_path.parent().unwrap_or(Path::new("."))
    }

    /// Resolve a recorded lock-file name to its expected on-disk location
    pub fn lock_path(&self, lock_name: &str) -> PathBuf {
        self.artifact_dir().join(lock_name)
    }
}
