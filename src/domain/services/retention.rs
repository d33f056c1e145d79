//! Retention policy planner
//!
//! Pure policy: given a catalog and a retention count, decide which versions
//! cleanup may remove. The active and previous versions are never eligible,
//! whatever the count. `keep_active` only controls whether the active version
//! consumes one of the retention slots.

use crate::domain::entities::Catalog;

/// Ids of versions beyond the retention window, oldest last in build order
pub fn plan_removals(catalog: &Catalog, retain: usize, keep_active: bool) -> Vec<String> {
    let mut kept = 0;
    let mut doomed = Vec::new();

    for version in catalog.by_created_desc() {
        let is_active = catalog.active() == Some(version.id.as_str());
        let is_previous = catalog.previous() == Some(version.id.as_str());

        if is_active && keep_active {
            // exempt from the count, never removable either way
            continue;
        }
        if kept < retain {
            kept += 1;
            continue;
        }
        if is_active || is_previous {
            continue;
        }
        doomed.push(version.id.clone());
    }

    doomed
}
