//! Round-trip property: save followed by load returns the same catalog,
//! field for field, for every valid catalog.

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use sifctl::domain::entities::{Catalog, Version};
use sifctl::domain::ports::CatalogStore;
use sifctl::domain::value_objects::ContentHash;
use sifctl::infrastructure::TomlCatalogStore;

fn make_version(id: &str, index: usize) -> Version {
    Version {
        id: id.to_string(),
        artifact_path: format!("/containers/scitex-v{id}.sif").into(),
        created_at: Utc.timestamp_opt(1_000 + index as i64 * 60, 0).unwrap(),
        def_path: "/containers/scitex.def".into(),
        def_origin_hash: ContentHash::from_bytes(id.as_bytes()),
        dependency_lock_hashes: BTreeMap::from([
            (
                "requirements-lock.txt".to_string(),
                ContentHash::from_bytes(b"pip pins"),
            ),
            (
                "dpkg-lock.txt".to_string(),
                ContentHash::from_bytes(id.as_bytes()),
            ),
        ]),
    }
}

/// Build a catalog from generated ids and a generated switch history.
fn build_catalog(ids: &[String], switches: &[prop::sample::Index]) -> Catalog {
    let mut catalog = Catalog::new();
    for (index, id) in ids.iter().enumerate() {
        catalog.insert(make_version(id, index)).unwrap();
    }
    if !ids.is_empty() {
        for switch in switches {
            let id = &ids[switch.index(ids.len())];
            if catalog.active() != Some(id.as_str()) {
                catalog.activate(id).unwrap();
            }
        }
    }
    catalog
}

proptest! {
    #[test]
    fn save_load_roundtrip(
        ids in prop::collection::btree_set("[0-9]\\.[0-9]{1,2}\\.[0-9]{1,2}", 0..8),
        switches in prop::collection::vec(any::<prop::sample::Index>(), 0..5),
    ) {
        let ids: Vec<String> = ids.into_iter().collect();
        let catalog = build_catalog(&ids, &switches);

        let dir = tempfile::tempdir().unwrap();
        let store = TomlCatalogStore::new(dir.path());
        store.save(&catalog).unwrap();
        let loaded = store.load().unwrap();

        prop_assert_eq!(loaded, catalog);
    }

    #[test]
    fn pointers_stay_valid_through_any_switch_history(
        ids in prop::collection::btree_set("[0-9]\\.[0-9]{1,2}\\.[0-9]{1,2}", 1..8),
        switches in prop::collection::vec(any::<prop::sample::Index>(), 1..6),
    ) {
        let ids: Vec<String> = ids.into_iter().collect();
        let mut catalog = build_catalog(&ids, &switches);
        prop_assert!(catalog.pointers_valid());

        // a rollback, when possible, preserves the invariant too
        if catalog.previous().is_some() {
            catalog.rollback().unwrap();
            prop_assert!(catalog.pointers_valid());
        }
    }
}
