use anyhow::Result;

use super::CommandContext;

pub fn handle_list(ctx: &CommandContext, json: bool) -> Result<()> {
    ctx.load()?;
    let recipes = ctx.repo.get_all();

    if json {
        println!("{}", serde_json::to_string_pretty(&recipes)?);
    } else {
        print!("{}", ctx.view.render_list(&recipes));
    }
    Ok(())
}
