//! sifctl CLI - container version lifecycle manager
//!
//! Usage: sifctl <COMMAND>
//!
//! Commands:
//!   list      List recorded versions
//!   switch    Make a version active
//!   rollback  Swap back to the previous version
//!   deploy    Switch and repoint the runtime slot link
//!   cleanup   Remove versions beyond the retention window
//!   verify    Check a version against its recorded fingerprints
//!   status    Show catalog state and collaborator health
//!   record    Record a freshly built version

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::CommandContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let containers_dir = sifctl::config::resolve_containers_dir(cli.containers_dir.clone());
    let ctx = CommandContext::new(containers_dir, cli.json)?;

    match cli.command {
        Commands::List => commands::list::run(&ctx, cli.verbose),
        Commands::Switch { id } => commands::switch::run(&ctx, &id),
        Commands::Rollback => commands::rollback::run(&ctx),
        Commands::Deploy { id } => commands::deploy::run(&ctx, &id),
        Commands::Cleanup {
            keep,
            count_active,
            dry_run,
        } => commands::cleanup::run(&ctx, keep, count_active, dry_run),
        Commands::Verify { id } => commands::verify::run(&ctx, id),
        Commands::Status => commands::status::run(&ctx),
        Commands::Record {
            id,
            artifact,
            def_path,
            locks,
            created_at,
        } => commands::record::run(&ctx, id, artifact, def_path, locks, created_at),
    }
}
