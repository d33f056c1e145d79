//! ExecutionProbe port
//!
//! A minimal smoke run confirming an artifact can actually execute before it
//! is committed as active ("verify before commit"). A probe timeout is a
//! failure, never a hang.

use std::path::Path;

/// Result of a smoke probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Passed,
    Failed { reason: String },
}

impl ProbeOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }
}

pub trait ExecutionProbe {
    /// Run the smoke check against an artifact, synchronously, bounded
    fn probe(&self, artifact: &Path) -> ProbeOutcome;
}
