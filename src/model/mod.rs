//! Data models for recipes.
//!
//! - [`Recipe`]: a named dish with ordered ingredients and instructions
//! - [`Ingredient`]: an amount/measure/name triple

mod ingredient;
mod recipe;

pub use ingredient::{FIELD_SEPARATOR, Ingredient};
pub use recipe::Recipe;
