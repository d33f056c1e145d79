//! Retention properties: cleanup planning never selects the active or
//! previous version, for any catalog, count, or flag combination.

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use sifctl::domain::entities::{Catalog, Version};
use sifctl::domain::services::retention::plan_removals;
use sifctl::domain::value_objects::ContentHash;

fn make_version(id: &str, index: usize) -> Version {
    Version {
        id: id.to_string(),
        artifact_path: format!("/containers/scitex-v{id}.sif").into(),
        created_at: Utc.timestamp_opt(1_000 + index as i64 * 60, 0).unwrap(),
        def_path: "/containers/scitex.def".into(),
        def_origin_hash: ContentHash::from_bytes(id.as_bytes()),
        dependency_lock_hashes: BTreeMap::new(),
    }
}

proptest! {
    #[test]
    fn plan_never_dooms_active_or_previous(
        ids in prop::collection::btree_set("[0-9]\\.[0-9]{1,2}\\.[0-9]{1,2}", 1..10),
        switches in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
        retain in 0usize..6,
        keep_active in any::<bool>(),
    ) {
        let ids: Vec<String> = ids.into_iter().collect();
        let mut catalog = Catalog::new();
        for (index, id) in ids.iter().enumerate() {
            catalog.insert(make_version(id, index)).unwrap();
        }
        for switch in &switches {
            let id = ids[switch.index(ids.len())].clone();
            if catalog.active() != Some(id.as_str()) {
                catalog.activate(&id).unwrap();
            }
        }

        let doomed = plan_removals(&catalog, retain, keep_active);

        for id in &doomed {
            prop_assert_ne!(Some(id.as_str()), catalog.active());
            prop_assert_ne!(Some(id.as_str()), catalog.previous());
            prop_assert!(catalog.contains(id));
        }

        // applying the plan keeps the pointer invariant
        for id in &doomed {
            catalog.remove(id).unwrap();
        }
        prop_assert!(catalog.pointers_valid());
    }

    #[test]
    fn plan_respects_the_retention_count(
        ids in prop::collection::btree_set("[0-9]\\.[0-9]{1,2}\\.[0-9]{1,2}", 1..10),
        retain in 0usize..6,
    ) {
        let ids: Vec<String> = ids.into_iter().collect();
        let mut catalog = Catalog::new();
        for (index, id) in ids.iter().enumerate() {
            catalog.insert(make_version(id, index)).unwrap();
        }

        // no pointers set: exactly the versions beyond the window go
        let doomed = plan_removals(&catalog, retain, true);
        prop_assert_eq!(doomed.len(), ids.len().saturating_sub(retain));
    }
}
