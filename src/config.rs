use crate::error::{RecipeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".recipes.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipesConfig {
    #[serde(default)]
    pub recipes: RecipesSettings,

    #[serde(default)]
    pub view: ViewSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipesSettings {
    /// Recipes file, relative to the directory holding the config file.
    #[serde(default = "default_file")]
    pub file: String,
}

fn default_file() -> String {
    "recipes.txt".to_string()
}

impl Default for RecipesSettings {
    fn default() -> Self {
        Self {
            file: default_file(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl RecipesConfig {
    /// Find and parse the nearest config file, returning it with the project root.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        let content = std::fs::read_to_string(&config_path)?;
        let config: RecipesConfig = toml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| RecipeError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(RecipeError::NotInitialized);
            }
        }
    }

    pub fn recipes_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.recipes.file)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
