use crate::config::RecipesSettings;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipes")]
#[command(
    author,
    version,
    about = "A flat-file recipe box: list, show and delete recipes stored in a plain-text file"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Recipes file to use (overrides .recipes.toml)
    #[arg(short, long, global = true, env = "RECIPES_FILE")]
    pub file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a recipes project in the current directory
    Init {
        /// Name of the recipes file to create
        #[arg(long, default_value_t = RecipesSettings::default().file)]
        recipes_file: String,
    },

    /// List all recipes by number
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one recipe
    Show {
        /// Recipe number as printed by `list`
        number: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every recipe
    ShowAll {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a recipe and save the file
    #[command(visible_alias = "rm")]
    Delete {
        /// Recipe number as printed by `list`
        number: usize,

        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },

    /// Check that the recipes file can be loaded
    Check,
}
