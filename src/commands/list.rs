use anyhow::Result;

use super::CommandContext;
use crate::ui::views;

pub fn run(ctx: &CommandContext, verbose: u8) -> Result<()> {
    let view = ctx.manager().list()?;
    if ctx.out.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", views::render_list(&view, verbose > 0, ctx.out.color));
    }
    Ok(())
}
