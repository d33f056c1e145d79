//! File system helpers
//!
//! Atomic writes (temp file + rename in the target directory) and chunked
//! file hashing. A crash mid-write must never corrupt the file the next
//! read sees.

use std::io::Write;
use std::path::Path;

use crate::domain::value_objects::ContentHash;
use crate::error::SifctlResult;

/// Write content to a file atomically
///
/// The temp file is created in the destination directory so the final rename
/// stays on one filesystem.
pub fn atomic_write(path: &Path, content: &[u8]) -> SifctlResult<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Compute the SHA-256 content hash of a file, streaming in chunks
pub fn hash_file(path: &Path) -> SifctlResult<ContentHash> {
    let mut file = std::fs::File::open(path)?;
    Ok(ContentHash::from_reader(&mut file)?)
}
