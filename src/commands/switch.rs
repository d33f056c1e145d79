use anyhow::Result;

use super::CommandContext;
use crate::ui::views;

pub fn run(ctx: &CommandContext, id: &str) -> Result<()> {
    let outcome = ctx.manager().switch(id)?;
    if ctx.out.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", views::render_switch(&outcome, ctx.out.color));
    }
    Ok(())
}
