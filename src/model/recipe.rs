use super::ingredient::Ingredient;
use serde::{Deserialize, Serialize};

/// A named dish with ordered ingredients and ordered instruction steps.
///
/// Equality is structural; `clone()` yields a fully independent copy, which
/// is what the store hands out from its read accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recipe {
    name: String,

    #[serde(default)]
    ingredients: Vec<Ingredient>,

    #[serde(default)]
    instructions: Vec<String>,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
        }
    }

    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.add_ingredient(ingredient);
        self
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.add_instruction(instruction);
        self
    }

    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    pub fn add_instruction(&mut self, instruction: impl Into<String>) {
        self.instructions.push(instruction.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }
}
