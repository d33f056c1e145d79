//! Text views for command results
//!
//! Each function renders one command's outcome to a plain string; callers
//! print it. JSON output bypasses these entirely.

use sifctl::application::{
    CatalogView, CleanupReport, DeployOutcome, RemovalOutcome, RollbackOutcome, StatusReport,
    SwitchOutcome,
};
use sifctl::domain::ports::ExternalState;
use sifctl::domain::value_objects::{CheckStatus, VerificationResult};

use crate::ui::output::{bad, dim, human_size, ok, warn};

pub fn render_list(view: &CatalogView, verbose: bool, color: bool) -> String {
    if view.versions.is_empty() {
        return "No versions recorded. Build an image and run 'sifctl record' to start.\n"
            .to_string();
    }

    let mut out = String::new();
    for version in &view.versions {
        let marker = if version.active {
            ok("(active)", color)
        } else if version.previous {
            warn("(previous)", color)
        } else {
            String::new()
        };
        let size = version
            .artifact_size
            .map(human_size)
            .unwrap_or_else(|| "missing".to_string());
        out.push_str(&format!(
            "  {:<12} {:<17} {:>9}   {} {}\n",
            version.id,
            version.created_at.format("%Y-%m-%d %H:%M"),
            size,
            version.artifact_path.display(),
            marker,
        ));
        if verbose {
            out.push_str(&dim(
                &format!(
                    "               def {}...  locks: {}\n",
                    version.def_origin_hash.short(),
                    version.lock_count
                ),
                color,
            ));
        }
    }
    out
}

pub fn render_switch(outcome: &SwitchOutcome, color: bool) -> String {
    if !outcome.changed {
        return format!(
            "{} is already active - nothing to do\n",
            warn(&outcome.active, color)
        );
    }
    match &outcome.previous {
        Some(previous) => format!(
            "Switched to {} (previous: {previous})\n",
            ok(&outcome.active, color)
        ),
        None => format!("Switched to {}\n", ok(&outcome.active, color)),
    }
}

pub fn render_rollback(outcome: &RollbackOutcome, color: bool) -> String {
    format!(
        "Rolled back to {} (previous: {})\n",
        ok(&outcome.active, color),
        outcome.previous
    )
}

pub fn render_deploy(outcome: &DeployOutcome, color: bool) -> String {
    let mut out = render_switch(&outcome.switch, color);
    out.push_str(&format!(
        "Slot {} -> {}\n",
        outcome.slot.display(),
        outcome.switch.artifact_path.display()
    ));
    out
}

pub fn render_cleanup(report: &CleanupReport, color: bool) -> String {
    if report.outcomes.is_empty() {
        return "Nothing to clean - every version is inside the retention window.\n".to_string();
    }

    let mut out = String::new();
    for entry in &report.outcomes {
        let line = match &entry.outcome {
            RemovalOutcome::Removed => format!("  - {} {}\n", entry.id, ok("removed", color)),
            RemovalOutcome::WouldRemove => {
                format!("  - {} {}\n", entry.id, warn("would remove", color))
            }
            RemovalOutcome::Failed(reason) => format!(
                "  - {} {}: {reason}\n",
                entry.id,
                bad("failed", color)
            ),
        };
        out.push_str(&line);
    }

    let removed = report.removed_ids().len();
    let failed = report.failures().len();
    if report.dry_run {
        out.push_str(&format!("{removed} versions would be removed\n"));
    } else {
        out.push_str(&format!("{removed} removed, {failed} failed\n"));
    }
    out
}

pub fn render_verify(id: &str, result: &VerificationResult, color: bool) -> String {
    let mut out = format!("Verification of {id}\n");

    let artifact_state = if result.artifact.exists {
        ok("ok", color)
    } else {
        bad("FAIL", color)
    };
    let checksum = result
        .artifact
        .sha256
        .as_ref()
        .map(|h| format!(" ({}...)", h.short()))
        .unwrap_or_default();
    out.push_str(&format!(
        "  artifact: {artifact_state}  {}{checksum}\n",
        result.artifact.path.display()
    ));

    out.push_str(&format!(
        "  def origin: {}  {}\n",
        render_check_status(result.def_origin.status, color),
        result.def_origin.detail
    ));

    for (name, check) in &result.dependency_locks {
        out.push_str(&format!(
            "  lock {name}: {}  {}\n",
            render_check_status(check.status, color),
            check.detail
        ));
    }

    if result.overall {
        out.push_str(&format!("Overall: {}\n", ok("PASS", color)));
    } else {
        out.push_str(&format!("Overall: {}\n", bad("FAIL", color)));
    }
    out
}

fn render_check_status(status: CheckStatus, color: bool) -> String {
    match status {
        CheckStatus::Pass => ok("ok", color),
        CheckStatus::Fail => bad("FAIL", color),
        CheckStatus::Skip => dim("skip", color),
    }
}

pub fn render_status(report: &StatusReport, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Active version:   {}\n",
        report.active.as_deref().unwrap_or("(none)")
    ));
    out.push_str(&format!(
        "Previous version: {}\n",
        report.previous.as_deref().unwrap_or("(none)")
    ));
    out.push_str(&format!("Versions:         {}\n", report.version_count));

    if !report.externals.is_empty() {
        out.push_str("\nExternal status:\n");
        for (name, status) in &report.externals {
            let state = match status.state {
                ExternalState::Up => ok("up", color),
                ExternalState::Down => bad("down", color),
                ExternalState::Unknown => warn("unknown", color),
            };
            out.push_str(&format!("  {name}: {state} ({})\n", status.detail));
        }
    }
    out
}
