//! File-based storage layer for recipes.
//!
//! All recipes live in one plain-text file made of marker-delimited sections.
//!
//! ## File Format
//!
//! ```text
//! [Recept]
//! Tomatsoppa
//! [Ingredienser]
//! 2;dl;Tomat
//! 1;st;Lök
//! [Instruktioner]
//! Hacka löken
//! Koka soppan
//! ```
//!
//! ## Components
//!
//! - [`decode`]: Parse the recipes file into recipes sorted by name
//! - [`encode`]: Render recipes back into the file format
//! - [`check_encodable`]: Reject values `encode` cannot represent
//! - [`RecipeRepository`]: In-memory store with load, save, read and delete
//! - [`ChangeNotifier`]: Subscriber list the repository notifies on changes

mod codec;
mod notify;
mod repository;

pub use codec::{
    ReadStatus, SECTION_INGREDIENTS, SECTION_INSTRUCTIONS, SECTION_RECIPE, check_encodable, decode,
    encode,
};
pub use notify::{ChangeKind, ChangeNotifier, RecipesChanged, SubscriptionId};
pub use repository::RecipeRepository;
