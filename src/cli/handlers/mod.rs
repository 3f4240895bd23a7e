mod check;
mod delete;
mod init;
mod list;
mod show;
mod utils;

pub use check::handle_check;
pub use delete::handle_delete;
pub use init::handle_init;
pub use list::handle_list;
pub use show::{handle_show, handle_show_all};

use crate::config::RecipesConfig;
use crate::error::RecipeError;
use crate::storage::RecipeRepository;
use crate::view::RecipeView;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub root: PathBuf,
    pub repo: RecipeRepository,
    pub view: RecipeView,
}

impl CommandContext {
    pub fn new(config: RecipesConfig, root: PathBuf, file_override: Option<&Path>) -> Result<Self> {
        let repo = match file_override {
            Some(file) => RecipeRepository::new(file)?,
            None => RecipeRepository::from_config(&config, &root)?,
        };
        let mut ctx = Self {
            root,
            repo,
            view: RecipeView::new(true),
        };
        if !config.view.color {
            ctx.disable_color();
        }
        Ok(ctx)
    }

    /// Turn off colors for the view and for every other handler output.
    pub fn disable_color(&mut self) {
        self.view = RecipeView::new(false);
        colored::control::set_override(false);
    }

    /// Build the context from the nearest `.recipes.toml`.
    ///
    /// An explicit file works without a config file; defaults fill in the rest.
    pub fn discover(file_override: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let (config, root) = match RecipesConfig::load(&cwd) {
            Ok(found) => found,
            Err(RecipeError::NotInitialized) if file_override.is_some() => {
                (RecipesConfig::default(), cwd)
            }
            Err(e) => return Err(e).context("Failed to load config"),
        };
        Self::new(config, root, file_override)
    }

    /// Load the recipes file, naming it in the error.
    pub fn load(&self) -> Result<()> {
        self.repo
            .load()
            .with_context(|| format!("Failed to load recipes from {}", self.repo.path().display()))
    }
}
