use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// sifctl - container version lifecycle manager
#[derive(Parser, Debug)]
#[command(name = "sifctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Containers directory (default: $SIFCTL_CONTAINERS_DIR or ~/.sifctl/containers)
    #[arg(long, global = true)]
    pub containers_dir: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recorded versions, newest first
    List,

    /// Make a version active (smoke-probes the artifact before committing)
    Switch {
        /// Version id to activate
        id: String,
    },

    /// Swap back to the previous version
    Rollback,

    /// Switch and repoint the runtime slot link
    Deploy {
        /// Version id to deploy
        id: String,
    },

    /// Remove versions beyond the retention window
    Cleanup {
        /// Number of most-recent versions to retain
        #[arg(long)]
        keep: Option<usize>,

        /// Count the active version against the retention window
        #[arg(long)]
        count_active: bool,

        /// Show what would be removed without deleting anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Check a version against its recorded fingerprints (exits non-zero on failure)
    Verify {
        /// Version id (defaults to the active version)
        id: Option<String>,
    },

    /// Show catalog state and external collaborator health
    Status,

    /// Record a freshly built version in the catalog
    Record {
        /// Semantic version id
        #[arg(long)]
        id: String,

        /// Path to the built artifact (SIF image)
        #[arg(long)]
        artifact: PathBuf,

        /// Definition file the artifact was built from
        #[arg(long = "def")]
        def_path: PathBuf,

        /// Dependency lock file captured at build time (repeatable)
        #[arg(long = "lock")]
        locks: Vec<PathBuf>,

        /// Build completion time, RFC 3339 (defaults to now)
        #[arg(long)]
        created_at: Option<String>,
    },
}
