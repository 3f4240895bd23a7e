use crate::config::{CONFIG_FILE_NAME, RecipesConfig, RecipesSettings};
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(recipes_file: String) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        anyhow::bail!("Project already initialized at {}", config_path.display());
    }

    let config = RecipesConfig {
        recipes: RecipesSettings { file: recipes_file },
        view: Default::default(),
    };

    // Keep an existing recipes file, only create an empty one
    let recipes_path = config.recipes_path(&cwd);
    if !recipes_path.exists() {
        if let Some(parent) = recipes_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&recipes_path, "")?;
    }

    config.save(&config_path)?;

    println!(
        "{} recipes project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config:  {}", config_path.display());
    println!("  Recipes: {}", recipes_path.display());

    Ok(())
}
