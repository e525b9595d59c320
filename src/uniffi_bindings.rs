//! UniFFI bindings for what-can-i-cook
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! Every function searches the bundled catalog.

use std::fmt;

use crate::catalog::{BundledCatalog, CatalogProvider};
use crate::{HeldIngredients, MatchResult, MatcherError, Recipe};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible recipe structure
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub id: u32,
    pub name: String,
    /// Category slug, e.g. "stir-fries"
    pub category: String,
    pub description: String,
    pub cook_time: u32,
    pub difficulty: u8,
    pub image: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Empty string if none
    pub tips: String,
    pub alternatives: Vec<FfiAlternative>,
}

/// Ingredient substitute (since maps aren't directly supported in UniFFI)
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiAlternative {
    pub ingredient: String,
    pub substitute: String,
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            id: recipe.id,
            name: recipe.name,
            category: recipe.category.slug().to_string(),
            description: recipe.description,
            cook_time: recipe.cook_time,
            difficulty: recipe.difficulty,
            image: recipe.image,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            tips: recipe.tips.unwrap_or_default(),
            alternatives: recipe
                .alternatives
                .into_iter()
                .map(|(ingredient, substitute)| FfiAlternative {
                    ingredient,
                    substitute,
                })
                .collect(),
        }
    }
}

/// FFI-compatible ranked recipe
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiMatchResult {
    pub recipe: FfiRecipe,
    pub match_score: u32,
    pub missing_ingredients: Vec<String>,
}

/// FFI-compatible search query; `None` limits use the defaults
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiQuery {
    pub ingredients: Vec<String>,
    pub max_cook_time: Option<u32>,
    pub max_ingredient_count: Option<u32>,
}

/// Results split into the two rows of the results page
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiSearchResults {
    pub top_matches: Vec<FfiMatchResult>,
    pub more_recipes: Vec<FfiMatchResult>,
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiMatcherError {
    /// Catalog could not be read or parsed
    CatalogError { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Invalid input provided
    InvalidInput { message: String },
}

impl fmt::Display for FfiMatcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiMatcherError::CatalogError { message } => write!(f, "Catalog error: {}", message),
            FfiMatcherError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiMatcherError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
        }
    }
}

impl std::error::Error for FfiMatcherError {}

impl From<MatcherError> for FfiMatcherError {
    fn from(err: MatcherError) -> Self {
        match err {
            MatcherError::CatalogParse(e) => FfiMatcherError::CatalogError {
                message: e.to_string(),
            },
            MatcherError::CatalogIo(e) => FfiMatcherError::CatalogError {
                message: e.to_string(),
            },
            MatcherError::ConfigError(e) => FfiMatcherError::ConfigError {
                message: e.to_string(),
            },
            MatcherError::InvalidDate(msg) => FfiMatcherError::InvalidInput { message: msg },
        }
    }
}

fn to_ffi_result(result: &MatchResult, held: &[String]) -> FfiMatchResult {
    FfiMatchResult {
        missing_ingredients: crate::missing_ingredients(&result.recipe, held),
        match_score: result.match_score as u32,
        recipe: result.recipe.clone().into(),
    }
}

/// Rank the bundled catalog against the held ingredients
///
/// # Arguments
/// * `query` - Held ingredients and optional limits
///
/// # Returns
/// Top matches and more recipes, each with the ingredients still missing
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn search_recipes(query: FfiQuery) -> Result<FfiSearchResults, FfiMatcherError> {
    let mut builder = crate::RecipeSearch::builder().ingredients(&query.ingredients);

    if let Some(minutes) = query.max_cook_time {
        builder = builder.max_cook_time(minutes);
    }

    if let Some(count) = query.max_ingredient_count {
        builder = builder.max_ingredient_count(count as usize);
    }

    let results = builder.build()?;
    let held = results.query().have_ingredients.as_slice();
    let partition = results.partition();

    Ok(FfiSearchResults {
        top_matches: partition
            .top_matches
            .iter()
            .map(|result| to_ffi_result(result, held))
            .collect(),
        more_recipes: partition
            .more_recipes
            .iter()
            .map(|result| to_ffi_result(result, held))
            .collect(),
    })
}

/// Ingredients of a recipe not covered by the held ingredients
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn missing_ingredients(recipe: FfiRecipe, held: Vec<String>) -> Vec<String> {
    let held: HeldIngredients = held.into_iter().collect();
    crate::matcher::unmatched_ingredients(&recipe.ingredients, held.iter())
}

/// Today's featured recipe, given as `YYYY-MM-DD`
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn featured_recipe(date: String) -> Result<Option<FfiRecipe>, FfiMatcherError> {
    let date = crate::parse_date(&date)?;
    let recipes = BundledCatalog.recipes()?;
    Ok(crate::featured_recipe(&recipes, date)
        .cloned()
        .map(FfiRecipe::from))
}

/// Autocomplete entries for the search box
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn suggest_ingredients(input: String, selected: Vec<String>) -> Vec<String> {
    let selected: HeldIngredients = selected.into_iter().collect();
    crate::suggest_ingredients(
        &crate::PANTRY_INGREDIENTS,
        &input,
        &selected,
        crate::suggest::DEFAULT_SUGGESTION_LIMIT,
    )
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffi_recipe_conversion() {
        let recipe = BundledCatalog.recipes().unwrap().remove(0);
        let ffi: FfiRecipe = recipe.clone().into();

        assert_eq!(ffi.id, recipe.id);
        assert_eq!(ffi.category, recipe.category.slug());
        assert_eq!(ffi.ingredients, recipe.ingredients);
        assert_eq!(ffi.alternatives.len(), recipe.alternatives.len());
    }

    #[test]
    fn test_search_recipes_partition() {
        let results = search_recipes(FfiQuery {
            ingredients: vec!["Egg".to_string()],
            ..Default::default()
        })
        .unwrap();

        assert_eq!(results.top_matches.len(), 4);
        assert!(results.more_recipes.len() <= 7);
        let top = &results.top_matches[0];
        assert!(top.match_score >= 1);
        assert_eq!(
            top.match_score as usize + top.missing_ingredients.len(),
            top.recipe.ingredients.len()
        );
    }

    #[test]
    fn test_missing_ingredients_ffi() {
        let recipe = BundledCatalog.recipes().unwrap().remove(0);
        let missing = missing_ingredients(recipe.into(), vec!["Chicken".to_string()]);
        assert!(!missing.iter().any(|i| i == "chicken"));
    }

    #[test]
    fn test_missing_ingredients_agrees_with_search() {
        for held in [vec![" ".to_string()], vec!["Chicken".to_string(), "".to_string()]] {
            let results = search_recipes(FfiQuery {
                ingredients: held.clone(),
                ..Default::default()
            })
            .unwrap();
            let stir_fry = results
                .top_matches
                .iter()
                .chain(results.more_recipes.iter())
                .find(|result| result.recipe.id == 1)
                .unwrap();

            let missing = missing_ingredients(stir_fry.recipe.clone(), held);
            assert_eq!(missing, stir_fry.missing_ingredients);
            assert_eq!(
                stir_fry.match_score as usize + missing.len(),
                stir_fry.recipe.ingredients.len()
            );
        }
    }

    #[test]
    fn test_featured_recipe_invalid_date() {
        assert!(matches!(
            featured_recipe("yesterday".to_string()),
            Err(FfiMatcherError::InvalidInput { .. })
        ));
        assert!(featured_recipe("2025-03-14".to_string()).unwrap().is_some());
    }

    #[test]
    fn test_suggest_ingredients_ffi() {
        let suggestions = suggest_ingredients("ch".to_string(), vec!["Chicken".to_string()]);
        assert_eq!(suggestions, vec!["Cheese".to_string(), "Spinach".to_string()]);
    }

    #[test]
    fn test_get_version() {
        assert!(!get_version().is_empty());
    }
}
