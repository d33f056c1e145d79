use anyhow::Result;

use super::CommandContext;
use crate::ui::views;

pub fn run(ctx: &CommandContext) -> Result<()> {
    let outcome = ctx.manager().rollback()?;
    if ctx.out.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", views::render_rollback(&outcome, ctx.out.color));
    }
    Ok(())
}
