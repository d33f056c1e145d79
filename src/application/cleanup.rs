//! Cleanup options and result types
//!
//! Cleanup is best-effort: it reports one outcome per doomed version instead
//! of a single pass/fail, so a permission problem on one artifact never
//! blocks space reclamation on the rest.

use std::path::PathBuf;

use serde::Serialize;

/// Options for the cleanup operation
#[derive(Debug, Clone, Serialize)]
pub struct CleanupOptions {
    /// Number of most-recently-built versions to retain
    pub retain: usize,
    /// Whether the active version is exempt from the retention count
    /// (it is never removable regardless)
    pub keep_active: bool,
    /// Plan only, delete nothing
    pub dry_run: bool,
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            retain: 3,
            keep_active: true,
            dry_run: false,
        }
    }
}

impl CleanupOptions {
    pub fn new(retain: usize) -> Self {
        Self {
            retain,
            ..Self::default()
        }
    }

    pub fn with_keep_active(mut self, keep_active: bool) -> Self {
        self.keep_active = keep_active;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// What happened to one version during cleanup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "reason", rename_all = "snake_case")]
pub enum RemovalOutcome {
    /// Artifact deleted and catalog entry removed
    Removed,
    /// Dry run: would have been removed
    WouldRemove,
    /// Artifact deletion failed; catalog entry retained
    Failed(String),
}

/// Per-version cleanup record
#[derive(Debug, Clone, Serialize)]
pub struct VersionOutcome {
    pub id: String,
    pub artifact_path: PathBuf,
    pub outcome: RemovalOutcome,
}

/// Result of one cleanup run
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanupReport {
    pub dry_run: bool,
    pub outcomes: Vec<VersionOutcome>,
}

impl CleanupReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, id: String, artifact_path: PathBuf, outcome: RemovalOutcome) {
        self.outcomes.push(VersionOutcome {
            id,
            artifact_path,
            outcome,
        });
    }

    /// Ids actually removed (or plannable removals in a dry run)
    pub fn removed_ids(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| {
                matches!(
                    o.outcome,
                    RemovalOutcome::Removed | RemovalOutcome::WouldRemove
                )
            })
            .map(|o| o.id.as_str())
            .collect()
    }

    pub fn failures(&self) -> Vec<&VersionOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.outcome, RemovalOutcome::Failed(_)))
            .collect()
    }

    pub fn is_fully_clean(&self) -> bool {
        self.failures().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_retains_three_and_keeps_active() {
        let options = CleanupOptions::default();
        assert_eq!(options.retain, 3);
        assert!(options.keep_active);
        assert!(!options.dry_run);
    }

    #[test]
    fn report_partitions_outcomes() {
        let mut report = CleanupReport::new(false);
        report.push("v1".into(), PathBuf::from("/c/v1.sif"), RemovalOutcome::Removed);
        report.push(
            "v2".into(),
            PathBuf::from("/c/v2.sif"),
            RemovalOutcome::Failed("permission denied".into()),
        );

        assert_eq!(report.removed_ids(), vec!["v1"]);
        assert_eq!(report.failures().len(), 1);
        assert!(!report.is_fully_clean());
    }

    #[test]
    fn dry_run_outcomes_count_as_removals() {
        let mut report = CleanupReport::new(true);
        report.push(
            "v1".into(),
            PathBuf::from("/c/v1.sif"),
            RemovalOutcome::WouldRemove,
        );
        assert_eq!(report.removed_ids(), vec!["v1"]);
        assert!(report.is_fully_clean());
    }
}
