//! StatusProvider port
//!
//! External collaborators polled by the status dashboard: Docker service
//! health, host package presence. A provider error never hides the local
//! catalog state - the aggregator maps it to `unknown`.

use serde::Serialize;

use crate::error::SifctlResult;

/// Health of one external collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExternalState {
    Up,
    Down,
    Unknown,
}

/// State plus a one-line detail for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalStatus {
    pub state: ExternalState,
    pub detail: String,
}

impl ExternalStatus {
    pub fn up(detail: impl Into<String>) -> Self {
        Self {
            state: ExternalState::Up,
            detail: detail.into(),
        }
    }

    pub fn down(detail: impl Into<String>) -> Self {
        Self {
            state: ExternalState::Down,
            detail: detail.into(),
        }
    }

    pub fn unknown(detail: impl Into<String>) -> Self {
        Self {
            state: ExternalState::Unknown,
            detail: detail.into(),
        }
    }
}

pub trait StatusProvider {
    /// Stable name used as the key in the status report
    fn name(&self) -> &str;

    /// Poll the collaborator once
    fn check(&self) -> SifctlResult<ExternalStatus>;
}
