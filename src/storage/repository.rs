use super::codec::{check_encodable, decode, encode};
use super::notify::{ChangeKind, ChangeNotifier, RecipesChanged, SubscriptionId};
use crate::{
    config::RecipesConfig,
    error::{RecipeError, Result},
    model::Recipe,
};
use std::cell::{Cell, RefCell};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Clears the dispatch flag on every exit path, unwinding included.
struct DispatchGuard<'a>(&'a Cell<bool>);

impl<'a> DispatchGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// In-memory recipe collection backed by a single recipes file.
///
/// Read accessors hand out clones, so callers can never reach the stored
/// values. The store is single-threaded; `load`, `delete` and `delete_at`
/// refuse to run from inside one of its own change subscribers.
pub struct RecipeRepository {
    path: PathBuf,
    recipes: RefCell<Vec<Recipe>>,
    modified: Cell<bool>,
    dispatching: Cell<bool>,
    notifier: ChangeNotifier,
}

impl RecipeRepository {
    /// Create an empty store for `path`, resolved to an absolute path.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = std::path::absolute(path.as_ref())?;
        Ok(Self {
            path,
            recipes: RefCell::new(Vec::new()),
            modified: Cell::new(false),
            dispatching: Cell::new(false),
            notifier: ChangeNotifier::new(),
        })
    }

    pub fn from_config(config: &RecipesConfig, project_root: &Path) -> Result<Self> {
        Self::new(config.recipes_path(project_root))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the collection changed since the last successful load or save.
    pub fn is_modified(&self) -> bool {
        self.modified.get()
    }

    pub fn len(&self) -> usize {
        self.recipes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the collection with the contents of the backing file.
    ///
    /// On any error the previous collection and modified flag are kept.
    pub fn load(&self) -> Result<()> {
        self.ensure_not_dispatching()?;
        tracing::info!(path = %self.path.display(), "Loading recipes");

        let text = self.read_file()?;
        let recipes = decode(&text)?;

        tracing::debug!(count = recipes.len(), "Decoded recipes");
        *self.recipes.borrow_mut() = recipes;
        self.modified.set(false);
        self.raise(ChangeKind::Loaded);

        Ok(())
    }

    /// Rewrite the backing file with the current collection.
    ///
    /// Refuses with a format error, leaving the file untouched, when a value
    /// would not read back the same.
    pub fn save(&self) -> Result<()> {
        let content = {
            let recipes = self.recipes.borrow();
            check_encodable(&recipes)?;
            encode(&recipes)
        };
        tracing::info!(path = %self.path.display(), count = self.len(), "Saving recipes");

        self.atomic_write(&self.path, &content)?;
        self.modified.set(false);

        Ok(())
    }

    pub fn get_all(&self) -> Vec<Recipe> {
        self.recipes.borrow().clone()
    }

    pub fn get_at(&self, index: usize) -> Result<Recipe> {
        let recipes = self.recipes.borrow();
        recipes
            .get(index)
            .cloned()
            .ok_or(RecipeError::IndexOutOfRange {
                index,
                len: recipes.len(),
            })
    }

    /// Remove the first stored recipe equal to `recipe`.
    ///
    /// When nothing matches the collection is left alone, but the store is
    /// still marked modified and subscribers are still notified.
    pub fn delete(&self, recipe: &Recipe) -> Result<()> {
        self.ensure_not_dispatching()?;

        let position = {
            let mut recipes = self.recipes.borrow_mut();
            let position = recipes.iter().position(|r| r == recipe);
            if let Some(index) = position {
                recipes.remove(index);
            }
            position
        };

        match position {
            Some(index) => tracing::info!(name = %recipe.name(), index, "Deleted recipe"),
            None => tracing::debug!(name = %recipe.name(), "No stored recipe matched delete"),
        }

        self.modified.set(true);
        self.raise(ChangeKind::Deleted);
        Ok(())
    }

    pub fn delete_at(&self, index: usize) -> Result<()> {
        self.ensure_not_dispatching()?;

        let removed = {
            let mut recipes = self.recipes.borrow_mut();
            if index >= recipes.len() {
                return Err(RecipeError::IndexOutOfRange {
                    index,
                    len: recipes.len(),
                });
            }
            recipes.remove(index)
        };
        tracing::info!(name = %removed.name(), index, "Deleted recipe");

        self.modified.set(true);
        self.raise(ChangeKind::Deleted);
        Ok(())
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&RecipesChanged) + 'static,
    {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// A handle to the subscriber list, e.g. for a subscriber that removes itself.
    pub fn notifier(&self) -> ChangeNotifier {
        self.notifier.clone()
    }

    fn ensure_not_dispatching(&self) -> Result<()> {
        if self.dispatching.get() {
            return Err(RecipeError::Reentrant);
        }
        Ok(())
    }

    fn raise(&self, kind: ChangeKind) {
        let event = RecipesChanged {
            kind,
            count: self.len(),
        };
        let _guard = DispatchGuard::enter(&self.dispatching);
        self.notifier.notify(&event);
    }

    fn read_file(&self) -> Result<String> {
        let mut file = File::open(&self.path)?;
        let mut text = String::new();
        file.read_to_string(&mut text)?;
        Ok(text)
    }

    /// Atomically write content to a file using temp file + rename
    fn atomic_write(&self, target_path: &Path, content: &str) -> Result<()> {
        // Same directory as the target, required for an atomic rename
        let target_dir = target_path.parent().ok_or_else(|| {
            RecipeError::Storage("Target path has no parent directory".to_string())
        })?;

        let mut temp_file = NamedTempFile::new_in(target_dir)?;

        use std::io::Write;
        temp_file.write_all(content.as_bytes())?;
        temp_file.as_file().sync_all()?;

        temp_file
            .persist(target_path)
            .map_err(|e| RecipeError::Storage(format!("Failed to persist temp file: {}", e)))?;

        Ok(())
    }
}

impl std::fmt::Debug for RecipeRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeRepository")
            .field("path", &self.path)
            .field("recipes", &self.len())
            .field("modified", &self.modified.get())
            .field("notifier", &self.notifier)
            .finish()
    }
}
