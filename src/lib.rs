//! sifctl - container version lifecycle manager
//!
//! sifctl tracks which container image version is active in a reproducible
//! research environment, switches between versions atomically (verify before
//! commit), rolls back one step, enforces retention policy during cleanup,
//! and verifies artifacts against the lock state recorded at build time.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    CatalogView, CleanupOptions, CleanupReport, StatusAggregator, StatusReport, VersionManager,
};
pub use config::Config;
pub use domain::entities::{Catalog, Version};
pub use domain::ports::{CatalogStore, ExecutionProbe, IntegrityVerifier, StatusProvider};
pub use domain::value_objects::{ContentHash, VerificationResult};
pub use error::{SifctlError, SifctlResult};
pub use infrastructure::{CommandProbe, LockVerifier, TomlCatalogStore};
