use anyhow::{Context, Result};
use colored::Colorize;
use std::cell::Cell;
use std::rc::Rc;

use super::CommandContext;
use super::utils::{confirm, number_to_index};

pub fn handle_delete(ctx: &CommandContext, number: usize, force: bool) -> Result<()> {
    ctx.load()?;
    let index = number_to_index(number)?;
    let recipe = ctx
        .repo
        .get_at(index)
        .with_context(|| format!("No recipe number {}", number))?;

    if !force && !confirm(&format!("Delete {} permanently?", recipe.name().cyan()))? {
        println!("Cancelled.");
        return Ok(());
    }

    let remaining = Rc::new(Cell::new(None));
    let sink = Rc::clone(&remaining);
    let subscription = ctx.repo.subscribe(move |event| sink.set(Some(event.count)));

    ctx.repo.delete(&recipe)?;
    ctx.repo.unsubscribe(subscription);

    ctx.repo
        .save()
        .with_context(|| format!("Failed to save recipes to {}", ctx.repo.path().display()))?;

    match remaining.get() {
        Some(count) => println!(
            "{} {} ({} recipe(s) left)",
            "Deleted".red(),
            recipe.name().cyan(),
            count
        ),
        None => println!("{} {}", "Deleted".red(), recipe.name().cyan()),
    }
    Ok(())
}
