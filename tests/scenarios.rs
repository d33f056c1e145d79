//! End-to-end lifecycle scenarios.

mod common;

use common::TestEnv;

/// Catalog {1.0, 1.1} with active 1.0: switch(1.1) then switch(1.0) then
/// rollback() walks the pointer pair exactly as documented.
#[test]
fn switch_switch_rollback_walks_the_pointer_pair() {
    let env = TestEnv::new();
    env.record_and_switch("1.0", 100);
    env.record("1.1", 200);

    let result = env.run(&["switch", "1.1"]);
    assert!(result.success, "{}", result.combined_output());
    let json = env.list_json();
    assert_eq!(json["active"], "1.1");
    assert_eq!(json["previous"], "1.0");

    let result = env.run(&["switch", "1.0"]);
    assert!(result.success);
    let json = env.list_json();
    assert_eq!(json["active"], "1.0");
    assert_eq!(json["previous"], "1.1");

    let result = env.run(&["rollback"]);
    assert!(result.success);
    let json = env.list_json();
    assert_eq!(json["active"], "1.1");
    assert_eq!(json["previous"], "1.0");
}

/// cleanup(retain_count=1) on {v1, v2, v3} with active=v3, previous=v2 and
/// build order v1 < v2 < v3 removes exactly v1.
#[test]
fn cleanup_retention_scenario() {
    let env = TestEnv::new();
    env.record("v1", 100);
    env.record("v2", 200);
    env.record("v3", 300);
    env.run(&["switch", "v2"]);
    env.run(&["switch", "v3"]);

    let result = env.run(&["cleanup", "--keep", "1", "--json"]);
    assert!(result.success, "{}", result.combined_output());

    let json: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    let outcomes = json["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0]["id"], "v1");
    assert_eq!(outcomes[0]["outcome"]["result"], "removed");
}

/// A full operator session: record, deploy, drift, verify, recover.
#[test]
fn record_deploy_verify_rollback_session() {
    let env = TestEnv::new();

    env.record("2.0.0", 100);
    env.record("2.1.0", 200);

    assert!(env.run(&["deploy", "2.0.0"]).success);
    assert!(env.run(&["deploy", "2.1.0"]).success);

    // pins drifted on disk: verification catches it
    env.write_file("requirements-lock.txt", "numpy==9.9.9\n");
    let verify = env.run(&["verify"]);
    assert!(!verify.success);
    assert!(verify.stdout.contains("Overall: FAIL"));

    // roll back to the previous deploy
    let rollback = env.run(&["rollback"]);
    assert!(rollback.success);
    let json = env.list_json();
    assert_eq!(json["active"], "2.0.0");
    assert_eq!(json["previous"], "2.1.0");
}
