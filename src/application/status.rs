//! Status aggregator use case
//!
//! Composes the locally available catalog state with the health of external
//! collaborators into one read-only dashboard snapshot. An unreachable
//! collaborator is reported as `unknown`; it never hides the version
//! information, which is always available locally.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::ports::{CatalogStore, ExternalStatus, StatusProvider};
use crate::error::SifctlResult;

/// One dashboard snapshot
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub active: Option<String>,
    pub previous: Option<String>,
    pub version_count: usize,
    pub externals: BTreeMap<String, ExternalStatus>,
}

/// Read-only composition of catalog state and collaborator health
pub struct StatusAggregator<S: CatalogStore> {
    store: S,
    providers: Vec<Box<dyn StatusProvider>>,
}

impl<S: CatalogStore> StatusAggregator<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            providers: Vec::new(),
        }
    }

    pub fn with_provider(mut self, provider: Box<dyn StatusProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Never mutates state; reads the catalog fresh on every call
    pub fn status(&self) -> SifctlResult<StatusReport> {
        let catalog = self.store.load()?;

        let mut externals = BTreeMap::new();
        for provider in &self.providers {
            let status = provider
                .check()
                .unwrap_or_else(|e| ExternalStatus::unknown(e.to_string()));
            externals.insert(provider.name().to_string(), status);
        }

        Ok(StatusReport {
            active: catalog.active().map(String::from),
            previous: catalog.previous().map(String::from),
            version_count: catalog.len(),
            externals,
        })
    }
}
