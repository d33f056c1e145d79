use anyhow::{Context, Result};

use super::CommandContext;
use crate::ui::views;

pub fn run(ctx: &CommandContext, id: Option<String>) -> Result<()> {
    let manager = ctx.manager();

    let id = match id {
        Some(id) => id,
        None => manager
            .list()?
            .active
            .context("no active version to verify - pass a version id")?,
    };

    let result = manager.verify(&id)?;
    if ctx.out.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", views::render_verify(&id, &result, ctx.out.color));
    }

    if !result.overall {
        std::process::exit(1);
    }
    Ok(())
}
