use anyhow::Result;

use sifctl::application::CleanupOptions;

use super::CommandContext;
use crate::ui::views;

pub fn run(
    ctx: &CommandContext,
    keep: Option<usize>,
    count_active: bool,
    dry_run: bool,
) -> Result<()> {
    let options = CleanupOptions::new(keep.unwrap_or(ctx.config.retain_default))
        .with_keep_active(!count_active)
        .with_dry_run(dry_run);

    let report = ctx.manager().cleanup(&options)?;
    if ctx.out.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", views::render_cleanup(&report, ctx.out.color));
    }
    Ok(())
}
