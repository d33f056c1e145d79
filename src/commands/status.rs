use anyhow::Result;

use sifctl::application::StatusAggregator;
use sifctl::infrastructure::status::{DockerComposeStatus, HostPackages};

use super::CommandContext;
use crate::ui::views;

pub fn run(ctx: &CommandContext) -> Result<()> {
    let aggregator = StatusAggregator::new(ctx.store())
        .with_provider(Box::new(DockerComposeStatus::new(
            ctx.config.compose_dir.clone(),
        )))
        .with_provider(Box::new(HostPackages::apptainer()))
        .with_provider(Box::new(HostPackages::texlive()))
        .with_provider(Box::new(HostPackages::imagemagick()))
        .with_provider(Box::new(HostPackages::node()));

    let report = aggregator.status()?;
    if ctx.out.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", views::render_status(&report, ctx.out.color));
    }
    Ok(())
}
