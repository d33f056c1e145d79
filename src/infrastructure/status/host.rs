//! Host package status provider
//!
//! Checks that the host tool groups the research environment relies on are
//! present on `PATH`. One provider instance per group so the dashboard can
//! report each group independently.

use std::path::PathBuf;

use crate::domain::ports::{ExternalStatus, StatusProvider};
use crate::error::SifctlResult;

/// Presence check for one named group of host binaries
pub struct HostPackages {
    name: String,
    binaries: Vec<&'static str>,
}

impl HostPackages {
    pub fn new(name: impl Into<String>, binaries: Vec<&'static str>) -> Self {
        Self {
            name: name.into(),
            binaries,
        }
    }

    pub fn apptainer() -> Self {
        Self::new("host/apptainer", vec!["apptainer"])
    }

    pub fn texlive() -> Self {
        Self::new(
            "host/texlive",
            vec!["pdflatex", "bibtex", "latexmk", "kpsewhich"],
        )
    }

    pub fn imagemagick() -> Self {
        Self::new("host/imagemagick", vec!["convert", "identify", "mogrify"])
    }

    pub fn node() -> Self {
        Self::new("host/node", vec!["node", "npm"])
    }
}

impl StatusProvider for HostPackages {
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self) -> SifctlResult<ExternalStatus> {
        let missing: Vec<&str> = self
            .binaries
            .iter()
            .copied()
            .filter(|b| which(b).is_none())
            .collect();

        if missing.is_empty() {
            Ok(ExternalStatus::up(format!(
                "{} binaries on PATH",
                self.binaries.len()
            )))
        } else {
            Ok(ExternalStatus::down(format!(
                "missing: {}",
                missing.join(", ")
            )))
        }
    }
}

/// Locate a binary on PATH
fn which(binary: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(binary))
        .find(|candidate| candidate.is_file())
}
