//! CatalogStore port
//!
//! Durable persistence of the catalog. The store is the only writer of the
//! on-disk catalog file; callers that compose read-modify-write sequences
//! hold the exclusive lock for the whole sequence, so `register`/`remove`
//! do not take it themselves.

use crate::domain::entities::{Catalog, Version};
use crate::error::SifctlResult;

pub trait CatalogStore {
    /// RAII lock guard; the lock is released when the guard drops
    type Guard;

    /// Acquire the exclusive advisory lock with a bounded wait
    ///
    /// Fails with `ConcurrentOperationError` instead of blocking
    /// indefinitely when another invocation holds the lock.
    fn lock_exclusive(&self) -> SifctlResult<Self::Guard>;

    /// Read the catalog; an absent file is an empty catalog, not an error
    fn load(&self) -> SifctlResult<Catalog>;

    /// Persist the catalog atomically (temp file + rename)
    fn save(&self, catalog: &Catalog) -> SifctlResult<()>;

    /// Add a newly built version and persist
    fn register(&self, version: Version) -> SifctlResult<()> {
        let mut catalog = self.load()?;
        catalog.insert(version)?;
        self.save(&catalog)
    }

    /// Delete a version entry and persist
    ///
    /// Fails with `UnknownVersionError` for absent ids and
    /// `ActiveVersionRemovalError` when the id is the active version.
    fn remove(&self, id: &str) -> SifctlResult<()> {
        let mut catalog = self.load()?;
        catalog.remove(id)?;
        self.save(&catalog)
    }
}
