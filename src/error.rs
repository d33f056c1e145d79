//! Error types for sifctl
//!
//! One crate-level taxonomy using `thiserror`. Every failure carries the
//! offending version id or path so the CLI can surface it verbatim.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sifctl operations
pub type SifctlResult<T> = Result<T, SifctlError>;

/// Main error type for sifctl operations
#[derive(Error, Debug)]
pub enum SifctlError {
    /// Version id not present in the catalog
    #[error("unknown version '{id}' - run 'sifctl list' to see the catalog")]
    UnknownVersion { id: String },

    /// Version id already registered
    #[error("version '{id}' is already registered")]
    DuplicateVersion { id: String },

    /// Attempt to remove the active version from the catalog
    #[error("refusing to remove active version '{id}'")]
    ActiveVersionRemoval { id: String },

    /// Rollback requested but no previous version is recorded
    #[error("no previous version recorded - nothing to roll back to")]
    NoPreviousVersion,

    /// Smoke probe rejected the artifact before commit
    #[error("smoke probe failed for version '{id}': {reason}")]
    SwitchVerification { id: String, reason: String },

    /// Catalog lock held by another invocation past the bounded wait
    #[error("catalog is locked by another sifctl operation (gave up after {waited_ms} ms)")]
    ConcurrentOperation { waited_ms: u64 },

    /// Catalog file exists but cannot be understood
    #[error(
        "catalog file corrupted: {path}\n  → Fix: restore from backup or re-record versions\n  → Details: {message}"
    )]
    CorruptCatalog { path: PathBuf, message: String },

    /// Catalog was written by an incompatible sifctl
    #[error("unsupported catalog schema {found} in {path} (this sifctl supports schema {supported})")]
    SchemaMismatch {
        path: PathBuf,
        found: u32,
        supported: u32,
    },

    /// Config file exists but cannot be parsed
    #[error("invalid config file: {path}\n  → Details: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
