use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_check(ctx: &CommandContext) -> Result<()> {
    ctx.load()?;
    println!(
        "{} {}: {} recipe(s)",
        "OK".green(),
        ctx.repo.path().display(),
        ctx.repo.len()
    );
    Ok(())
}
