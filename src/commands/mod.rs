//! CLI command handlers
//!
//! Thin glue: each handler wires the infrastructure into the manager API,
//! runs one operation, and renders the structured result as text or JSON.

pub mod cleanup;
pub mod deploy;
pub mod list;
pub mod record;
pub mod rollback;
pub mod status;
pub mod switch;
pub mod verify;

use std::path::PathBuf;

use anyhow::Result;

use sifctl::application::VersionManager;
use sifctl::config::Config;
use sifctl::infrastructure::{CommandProbe, LockVerifier, TomlCatalogStore};

use crate::ui::OutputCtx;

/// Concrete manager wiring used by every command
pub type Manager = VersionManager<TomlCatalogStore, CommandProbe, LockVerifier>;

/// Shared command environment
pub struct CommandContext {
    pub containers_dir: PathBuf,
    pub config: Config,
    pub out: OutputCtx,
}

impl CommandContext {
    pub fn new(containers_dir: PathBuf, json: bool) -> Result<Self> {
        let config = Config::load(&containers_dir)?;
        Ok(Self {
            containers_dir,
            config,
            out: OutputCtx::detect(json),
        })
    }

    pub fn store(&self) -> TomlCatalogStore {
        TomlCatalogStore::new(&self.containers_dir).with_lock_wait(self.config.lock_wait())
    }

    pub fn manager(&self) -> Manager {
        VersionManager::new(
            self.store(),
            CommandProbe::new(
                self.config.probe.command.clone(),
                self.config.probe.timeout(),
            ),
            LockVerifier::new(),
            self.config.slot_path(&self.containers_dir),
        )
    }
}
