//! Console rendering of recipes.

use crate::model::Recipe;
use colored::Colorize;

const INGREDIENTS_HEADING: &str = "Ingredienser";
const INSTRUCTIONS_HEADING: &str = "Gör så här";

#[derive(Debug, Clone, Copy)]
pub struct RecipeView {
    color: bool,
}

impl RecipeView {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render_recipe(&self, recipe: &Recipe) -> String {
        let mut out = String::new();

        let rule = "=".repeat(recipe.name().chars().count() + 4);
        out.push_str(&self.dim(&rule));
        out.push('\n');
        out.push_str(&format!("  {}\n", self.title(recipe.name())));
        out.push_str(&self.dim(&rule));
        out.push('\n');

        out.push('\n');
        out.push_str(&self.heading(INGREDIENTS_HEADING));
        for ingredient in recipe.ingredients() {
            out.push_str(&format!("{}\n", ingredient));
        }

        out.push('\n');
        out.push_str(&self.heading(INSTRUCTIONS_HEADING));
        for (i, instruction) in recipe.instructions().iter().enumerate() {
            let number = format!("{}.", i + 1);
            out.push_str(&format!("{} {}\n", self.number(&number), instruction));
        }

        out
    }

    /// Numbered (1-based) list of recipe names.
    pub fn render_list(&self, recipes: &[Recipe]) -> String {
        if recipes.is_empty() {
            return "No recipes.\n".to_string();
        }

        let width = recipes.len().to_string().len();
        recipes
            .iter()
            .enumerate()
            .map(|(i, recipe)| {
                let number = format!("{:>width$}.", i + 1, width = width);
                format!("{} {}\n", self.number(&number), recipe.name())
            })
            .collect()
    }

    fn heading(&self, text: &str) -> String {
        let underline = "=".repeat(text.chars().count());
        if self.color {
            format!("{}\n{}\n", text.bold(), underline.dimmed())
        } else {
            format!("{}\n{}\n", text, underline)
        }
    }

    fn title(&self, text: &str) -> String {
        if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn number(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}
