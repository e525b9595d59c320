use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::matcher::{DEFAULT_MORE_RECIPES, DEFAULT_TOP_MATCHES};
use crate::query::{DEFAULT_MAX_COOK_TIME, DEFAULT_MAX_INGREDIENT_COUNT};
use crate::suggest::DEFAULT_SUGGESTION_LIMIT;

/// Top-level application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Search defaults and result layout
    #[serde(default)]
    pub search: SearchConfig,
    /// JSON catalog to use instead of the bundled one
    #[serde(default)]
    pub catalog_path: Option<String>,
}

/// Filter defaults and how ranked results are split for display
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Cook time limit used when a query does not set one
    #[serde(default = "default_max_cook_time")]
    pub max_cook_time: u32,
    /// Ingredient count limit used when a query does not set one
    #[serde(default = "default_max_ingredient_count")]
    pub max_ingredient_count: usize,
    /// Size of the "top matches" row
    #[serde(default = "default_top_matches")]
    pub top_matches: usize,
    /// Maximum size of the "more recipes" row
    #[serde(default = "default_more_recipes")]
    pub more_recipes: usize,
    /// Autocomplete entries shown under the search box
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_cook_time: default_max_cook_time(),
            max_ingredient_count: default_max_ingredient_count(),
            top_matches: default_top_matches(),
            more_recipes: default_more_recipes(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

// Default value functions
fn default_max_cook_time() -> u32 {
    DEFAULT_MAX_COOK_TIME
}

fn default_max_ingredient_count() -> usize {
    DEFAULT_MAX_INGREDIENT_COUNT
}

fn default_top_matches() -> usize {
    DEFAULT_TOP_MATCHES
}

fn default_more_recipes() -> usize {
    DEFAULT_MORE_RECIPES
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with WHATCOOK__ prefix
    /// 2. whatcook.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: WHATCOOK__SEARCH__MAX_COOK_TIME
    pub fn load() -> Result<Self, ConfigError> {
        load_config("whatcook")
    }
}

/// Load configuration from the named TOML file (extension optional, file may
/// be missing) overlaid with `WHATCOOK__` environment variables
pub fn load_config(file_name: &str) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name(file_name).required(false))
        // Use double underscore for nested: WHATCOOK__SEARCH__TOP_MATCHES
        .add_source(
            Environment::with_prefix("WHATCOOK")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
