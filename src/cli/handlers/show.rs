use anyhow::{Context, Result};

use super::CommandContext;
use super::utils::number_to_index;

pub fn handle_show(ctx: &CommandContext, number: usize, json: bool) -> Result<()> {
    ctx.load()?;
    let recipe = ctx
        .repo
        .get_at(number_to_index(number)?)
        .with_context(|| format!("No recipe number {}", number))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recipe)?);
    } else {
        print!("{}", ctx.view.render_recipe(&recipe));
    }
    Ok(())
}

pub fn handle_show_all(ctx: &CommandContext, json: bool) -> Result<()> {
    ctx.load()?;
    let recipes = ctx.repo.get_all();

    if json {
        println!("{}", serde_json::to_string_pretty(&recipes)?);
        return Ok(());
    }

    if recipes.is_empty() {
        print!("{}", ctx.view.render_list(&recipes));
        return Ok(());
    }

    for (i, recipe) in recipes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", ctx.view.render_recipe(recipe));
    }
    Ok(())
}
