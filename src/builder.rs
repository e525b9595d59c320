use log::debug;

use crate::catalog::{BundledCatalog, CatalogProvider};
use crate::config::SearchConfig;
use crate::matcher::{self, Partition};
use crate::model::{MatchResult, Recipe};
use crate::query::{HeldIngredients, UserQuery};
use crate::MatcherError;

/// Builder for configuring and running a recipe search
pub struct RecipeSearchBuilder {
    catalog: Box<dyn CatalogProvider>,
    config: SearchConfig,
    ingredients: HeldIngredients,
    max_cook_time: Option<u32>,
    max_ingredient_count: Option<usize>,
}

impl Default for RecipeSearchBuilder {
    fn default() -> Self {
        Self {
            catalog: Box::new(BundledCatalog),
            config: SearchConfig::default(),
            ingredients: HeldIngredients::default(),
            max_cook_time: None,
            max_ingredient_count: None,
        }
    }
}

impl RecipeSearchBuilder {
    /// Search a different catalog than the bundled one
    ///
    /// # Example
    /// ```
    /// use what_can_i_cook::{JsonCatalog, RecipeSearch};
    ///
    /// let builder = RecipeSearch::builder()
    ///     .catalog(JsonCatalog::from_path("my-recipes.json"));
    /// ```
    pub fn catalog(mut self, catalog: impl CatalogProvider + 'static) -> Self {
        self.catalog = Box::new(catalog);
        self
    }

    /// Use search defaults and layout from configuration
    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Add one held ingredient
    ///
    /// # Example
    /// ```
    /// use what_can_i_cook::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .ingredient("Egg")
    ///     .ingredient("Rice");
    /// ```
    pub fn ingredient(mut self, ingredient: impl AsRef<str>) -> Self {
        self.ingredients.add(ingredient);
        self
    }

    /// Add several held ingredients
    pub fn ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for ingredient in ingredients {
            self.ingredients.add(ingredient);
        }
        self
    }

    pub fn max_cook_time(mut self, minutes: u32) -> Self {
        self.max_cook_time = Some(minutes);
        self
    }

    pub fn max_ingredient_count(mut self, count: usize) -> Self {
        self.max_ingredient_count = Some(count);
        self
    }

    /// Take ingredients and both limits from an existing query
    pub fn query(mut self, query: UserQuery) -> Self {
        self.ingredients = query.have_ingredients;
        self.max_cook_time = Some(query.max_cook_time);
        self.max_ingredient_count = Some(query.max_ingredient_count);
        self
    }

    /// Load the catalog and rank it
    ///
    /// # Errors
    /// Returns `MatcherError` if the catalog cannot be read or parsed.
    ///
    /// # Example
    /// ```
    /// use what_can_i_cook::RecipeSearch;
    ///
    /// let results = RecipeSearch::builder()
    ///     .ingredients(["Chicken", "Garlic"])
    ///     .max_cook_time(60)
    ///     .build()
    ///     .unwrap();
    /// assert!(!results.top_matches().is_empty());
    /// ```
    pub fn build(self) -> Result<SearchResults, MatcherError> {
        let query = UserQuery {
            have_ingredients: self.ingredients,
            max_cook_time: self.max_cook_time.unwrap_or(self.config.max_cook_time),
            max_ingredient_count: self
                .max_ingredient_count
                .unwrap_or(self.config.max_ingredient_count),
        };

        let recipes = self.catalog.recipes()?;
        debug!(
            "Searching {} recipes from '{}' with {:?}",
            recipes.len(),
            self.catalog.source_name(),
            query
        );
        let ranked = matcher::filter_and_rank(&recipes, &query);

        Ok(SearchResults {
            query,
            ranked,
            top: self.config.top_matches,
            more: self.config.more_recipes,
        })
    }
}

/// Main entry point for the builder API
pub struct RecipeSearch;

impl RecipeSearch {
    /// Creates a new builder searching the bundled catalog
    pub fn builder() -> RecipeSearchBuilder {
        RecipeSearchBuilder::default()
    }
}

/// Ranked results of one search
#[derive(Debug, Clone)]
pub struct SearchResults {
    query: UserQuery,
    ranked: Vec<MatchResult>,
    top: usize,
    more: usize,
}

impl SearchResults {
    pub fn query(&self) -> &UserQuery {
        &self.query
    }

    /// Every recipe that passed the filters, best match first
    pub fn ranked(&self) -> &[MatchResult] {
        &self.ranked
    }

    pub fn into_ranked(self) -> Vec<MatchResult> {
        self.ranked
    }

    pub fn partition(&self) -> Partition<'_> {
        matcher::partition(&self.ranked, self.top, self.more)
    }

    pub fn top_matches(&self) -> &[MatchResult] {
        self.partition().top_matches
    }

    pub fn more_recipes(&self) -> &[MatchResult] {
        self.partition().more_recipes
    }

    /// No recipe passed the filters
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Ingredients of `recipe` the searcher does not have
    pub fn missing_ingredients(&self, recipe: &Recipe) -> Vec<String> {
        matcher::missing_ingredients(recipe, self.query.have_ingredients.iter())
    }
}
