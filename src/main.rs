use anyhow::Result;
use clap::Parser;

use filed_recipes::cli::handlers::{
    CommandContext, handle_check, handle_delete, handle_init, handle_list, handle_show,
    handle_show_all,
};
use filed_recipes::cli::{Cli, Commands};
use filed_recipes::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone())?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    let context = || -> Result<CommandContext> {
        let mut ctx = CommandContext::discover(cli.file.as_deref())?;
        if cli.no_color {
            ctx.disable_color();
        }
        tracing::debug!(
            root = %ctx.root.display(),
            file = %ctx.repo.path().display(),
            "Resolved recipes file"
        );
        Ok(ctx)
    };

    match cli.command {
        Commands::Init { recipes_file } => handle_init(recipes_file),
        Commands::List { json } => handle_list(&context()?, json),
        Commands::Show { number, json } => handle_show(&context()?, number, json),
        Commands::ShowAll { json } => handle_show_all(&context()?, json),
        Commands::Delete { number, force } => handle_delete(&context()?, number, force),
        Commands::Check => handle_check(&context()?),
    }
}
