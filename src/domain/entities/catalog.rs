//! Catalog entity - the full set of known versions plus the live pointers
//!
//! The catalog is the single source of truth for what is live. It is a pure
//! data structure; persistence belongs to the catalog store. Invariant: the
//! `active` and `previous` pointers, when set, always reference ids present
//! in the version map.

use std::collections::BTreeMap;

use crate::domain::entities::Version;
use crate::error::{SifctlError, SifctlResult};

/// The catalog of known container versions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    versions: BTreeMap<String, Version>,
    active: Option<String>,
    previous: Option<String>,
}

impl Catalog {
    /// Create a new empty catalog (the valid first-run state)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.versions.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Version> {
        self.versions.get(id)
    }

    /// Iterate versions in id order
    pub fn versions(&self) -> impl Iterator<Item = &Version> {
        self.versions.values()
    }

    /// Versions sorted by build completion time, most recent first
    pub fn by_created_desc(&self) -> Vec<&Version> {
        let mut all: Vec<&Version> = self.versions.values().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        all
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    pub fn active_version(&self) -> Option<&Version> {
        self.active.as_deref().and_then(|id| self.versions.get(id))
    }

    /// Add a newly built version
    pub fn insert(&mut self, version: Version) -> SifctlResult<()> {
        if self.versions.contains_key(&version.id) {
            return Err(SifctlError::DuplicateVersion { id: version.id });
        }
        self.versions.insert(version.id.clone(), version);
        Ok(())
    }

    /// Remove a version entry
    ///
    /// Removing the active version is rejected so cleanup can never orphan
    /// the pointer. Removing the previous version clears the pointer, which
    /// keeps the reference invariant without inventing a second guard.
    pub fn remove(&mut self, id: &str) -> SifctlResult<Version> {
        if self.active.as_deref() == Some(id) {
            return Err(SifctlError::ActiveVersionRemoval { id: id.to_string() });
        }
        match self.versions.remove(id) {
            Some(version) => {
                if self.previous.as_deref() == Some(id) {
                    self.previous = None;
                }
                Ok(version)
            }
            None => Err(SifctlError::UnknownVersion { id: id.to_string() }),
        }
    }

    /// Record a switch: `previous` takes the old active, `active` takes `id`
    pub fn activate(&mut self, id: &str) -> SifctlResult<()> {
        if !self.versions.contains_key(id) {
            return Err(SifctlError::UnknownVersion { id: id.to_string() });
        }
        self.previous = self.active.take();
        self.active = Some(id.to_string());
        Ok(())
    }

    /// Record a rollback: swap `active` and `previous`
    ///
    /// Returns the new (active, previous) pair. Single-step undo: the
    /// version just rolled back from becomes the new previous.
    pub fn rollback(&mut self) -> SifctlResult<(String, String)> {
        match (self.active.take(), self.previous.take()) {
            (Some(active), Some(previous)) => {
                self.active = Some(previous.clone());
                self.previous = Some(active.clone());
                Ok((previous, active))
            }
            (active, previous) => {
                self.active = active;
                self.previous = previous;
                Err(SifctlError::NoPreviousVersion)
            }
        }
    }

    /// Restore pointers read from disk, validating the reference invariant
    pub fn set_pointers(
        &mut self,
        active: Option<String>,
        previous: Option<String>,
    ) -> SifctlResult<()> {
        for id in [active.as_deref(), previous.as_deref()].into_iter().flatten() {
            if !self.versions.contains_key(id) {
                return Err(SifctlError::UnknownVersion { id: id.to_string() });
            }
        }
        self.active = active;
        self.previous = previous;
        Ok(())
    }

    /// Check the pointer invariant (used by property tests)
    pub fn pointers_valid(&self) -> bool {
        [self.active.as_deref(), self.previous.as_deref()]
            .into_iter()
            .flatten()
            .all(|id| self.versions.contains_key(id))
    }
}
