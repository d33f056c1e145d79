use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};

use sifctl::domain::entities::Version;
use sifctl::infrastructure::LockVerifier;

use super::CommandContext;

pub fn run(
    ctx: &CommandContext,
    id: String,
    artifact: PathBuf,
    def_path: PathBuf,
    locks: Vec<PathBuf>,
    created_at: Option<String>,
) -> Result<()> {
    anyhow::ensure!(
        artifact.exists(),
        "artifact not found: {}",
        artifact.display()
    );

    let verifier = LockVerifier::new();
    let def_origin_hash = verifier
        .fingerprint(&def_path)
        .with_context(|| format!("hashing definition file {}", def_path.display()))?;

    let mut dependency_lock_hashes = BTreeMap::new();
    for lock in &locks {
        let name = lock
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| anyhow!("lock path has no file name: {}", lock.display()))?;
        let hash = verifier
            .fingerprint(lock)
            .with_context(|| format!("hashing lock file {}", lock.display()))?;
        dependency_lock_hashes.insert(name, hash);
    }

    let created_at = match created_at {
        Some(raw) => DateTime::parse_from_rfc3339(&raw)
            .with_context(|| format!("invalid --created-at '{raw}' (expected RFC 3339)"))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let version = Version {
        id: id.clone(),
        artifact_path: artifact,
        created_at,
        def_path,
        def_origin_hash,
        dependency_lock_hashes,
    };

    ctx.manager().record(version)?;

    if ctx.out.json {
        println!("{}", serde_json::json!({ "recorded": id }));
    } else {
        println!("Recorded {id}");
    }
    Ok(())
}
