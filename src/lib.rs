//! Suggest recipes from the ingredients you already have.
//!
//! Recipes from a catalog are filtered by cook time and ingredient count,
//! then ranked by how many of their ingredients the user holds.
//!
//! ```
//! use what_can_i_cook::RecipeSearch;
//!
//! let results = RecipeSearch::builder()
//!     .ingredients(["Egg", "Rice"])
//!     .build()
//!     .unwrap();
//! for result in results.top_matches() {
//!     println!("{} ({})", result.recipe.name, result.score_label());
//! }
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod featured;
pub mod matcher;
pub mod model;
pub mod query;
pub mod suggest;
pub mod uniffi_bindings;

pub use builder::{RecipeSearch, RecipeSearchBuilder, SearchResults};
pub use catalog::{group_by_category, BundledCatalog, CatalogProvider, JsonCatalog, StaticCatalog};
pub use config::{AppConfig, SearchConfig};
pub use error::MatcherError;
pub use featured::{featured_recipe, parse_date};
pub use matcher::{filter_and_rank, ingredient_matches, match_score, missing_ingredients};
pub use model::{Category, MatchResult, RawRecipe, Recipe};
pub use query::{HeldIngredients, UserQuery};
pub use suggest::{suggest_ingredients, PANTRY_INGREDIENTS};
