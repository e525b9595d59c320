use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::MatcherError;
use crate::model::{Category, RawRecipe, Recipe};

const BUNDLED_RECIPES: &str = include_str!("../data/recipes.json");

/// Read-only source of recipe records
pub trait CatalogProvider: Send + Sync {
    /// Name used in log output
    fn source_name(&self) -> &str;

    /// Records as authored, possibly with empty ingredients or missing substitutes
    fn raw_recipes(&self) -> Result<Vec<RawRecipe>, MatcherError>;

    /// Cleaned records, in catalog order
    fn recipes(&self) -> Result<Vec<Recipe>, MatcherError> {
        let raw = self.raw_recipes()?;
        let blemishes: usize = raw.iter().map(RawRecipe::blemish_count).sum();
        if blemishes > 0 {
            debug!(
                "Cleaning dropped {} blank entries from catalog '{}'",
                blemishes,
                self.source_name()
            );
        }
        Ok(raw.iter().map(RawRecipe::clean).collect())
    }
}

/// The catalog shipped with the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalog;

impl CatalogProvider for BundledCatalog {
    fn source_name(&self) -> &str {
        "bundled"
    }

    fn raw_recipes(&self) -> Result<Vec<RawRecipe>, MatcherError> {
        Ok(serde_json::from_str(BUNDLED_RECIPES)?)
    }
}

/// A catalog read from a JSON array of recipe records
#[derive(Debug, Clone)]
pub enum JsonCatalog {
    Inline(String),
    File(PathBuf),
}

impl JsonCatalog {
    pub fn from_json(json: impl Into<String>) -> Self {
        JsonCatalog::Inline(json.into())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        JsonCatalog::File(path.as_ref().to_path_buf())
    }
}

impl CatalogProvider for JsonCatalog {
    fn source_name(&self) -> &str {
        match self {
            JsonCatalog::Inline(_) => "inline",
            JsonCatalog::File(path) => path.to_str().unwrap_or("file"),
        }
    }

    fn raw_recipes(&self) -> Result<Vec<RawRecipe>, MatcherError> {
        match self {
            JsonCatalog::Inline(json) => Ok(serde_json::from_str(json)?),
            JsonCatalog::File(path) => {
                let json = std::fs::read_to_string(path)?;
                let recipes: Vec<RawRecipe> = serde_json::from_str(&json)?;
                info!("Loaded {} recipes from {}", recipes.len(), path.display());
                Ok(recipes)
            }
        }
    }
}

/// In-memory records, mainly for fixtures
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    recipes: Vec<RawRecipe>,
}

impl StaticCatalog {
    pub fn new(recipes: Vec<RawRecipe>) -> Self {
        Self { recipes }
    }
}

impl From<Vec<Recipe>> for StaticCatalog {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self::new(recipes.into_iter().map(RawRecipe::from).collect())
    }
}

impl CatalogProvider for StaticCatalog {
    fn source_name(&self) -> &str {
        "static"
    }

    fn raw_recipes(&self) -> Result<Vec<RawRecipe>, MatcherError> {
        Ok(self.recipes.clone())
    }
}

/// Group recipes by category for the listing page.
///
/// Categories appear in order of their first recipe; recipes keep catalog
/// order within a group.
pub fn group_by_category(recipes: &[Recipe]) -> Vec<(Category, Vec<&Recipe>)> {
    let mut groups: Vec<(Category, Vec<&Recipe>)> = Vec::new();
    for recipe in recipes {
        match groups.iter_mut().find(|(category, _)| *category == recipe.category) {
            Some((_, group)) => group.push(recipe),
            None => groups.push((recipe.category, vec![recipe])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_loads() {
        let recipes = BundledCatalog.recipes().unwrap();
        assert!(!recipes.is_empty());
        assert!(recipes
            .iter()
            .all(|recipe| recipe.ingredients.iter().all(|i| !i.is_empty())));
        assert!((1..=5).contains(&recipes[0].difficulty));
    }

    #[test]
    fn test_bundled_ids_are_unique() {
        let recipes = BundledCatalog.recipes().unwrap();
        let mut ids: Vec<u32> = recipes.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), recipes.len());
    }

    #[test]
    fn test_inline_catalog_parse_error() {
        let result = JsonCatalog::from_json("{ not json").recipes();
        assert!(matches!(result, Err(MatcherError::CatalogParse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = JsonCatalog::from_path("/definitely/not/here.json").recipes();
        assert!(matches!(result, Err(MatcherError::CatalogIo(_))));
    }

    #[test]
    fn test_group_by_category_keeps_first_appearance_order() {
        let json = r#"[
            {"id": 1, "name": "A", "category": "soups", "cookTime": 10, "difficulty": 1},
            {"id": 2, "name": "B", "category": "salads", "cookTime": 10, "difficulty": 1},
            {"id": 3, "name": "C", "category": "soups", "cookTime": 10, "difficulty": 1}
        ]"#;
        let recipes = JsonCatalog::from_json(json).recipes().unwrap();
        let groups = group_by_category(&recipes);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, Category::Soups);
        assert_eq!(
            groups[0].1.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(groups[1].0, Category::Salads);
    }
}
