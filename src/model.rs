use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Recipe grouping used by the listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    StirFries,
    NoodleDishes,
    Soups,
    Breakfast,
    RiceDishes,
    Sandwiches,
    Salads,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::StirFries,
        Category::NoodleDishes,
        Category::Soups,
        Category::Breakfast,
        Category::RiceDishes,
        Category::Sandwiches,
        Category::Salads,
    ];

    /// Identifier used in catalog data
    pub fn slug(&self) -> &'static str {
        match self {
            Category::StirFries => "stir-fries",
            Category::NoodleDishes => "noodle-dishes",
            Category::Soups => "soups",
            Category::Breakfast => "breakfast",
            Category::RiceDishes => "rice-dishes",
            Category::Sandwiches => "sandwiches",
            Category::Salads => "salads",
        }
    }

    /// Heading shown above the category's row of cards
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::StirFries => "STIR FRIES",
            Category::NoodleDishes => "NOODLE DISHES",
            Category::Soups => "SOUPS",
            Category::Breakfast => "BREAKFAST",
            Category::RiceDishes => "RICE DISHES",
            Category::Sandwiches => "SANDWICHES",
            Category::Salads => "SALADS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A catalog record exactly as authored.
///
/// Ingredient entries may be `null` or empty and alternative values may be
/// `null`; call [`RawRecipe::clean`] before matching against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecipe {
    pub id: u32,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    pub cook_time: u32,
    pub difficulty: u8,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ingredients: Vec<Option<String>>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
    #[serde(default)]
    pub alternatives: BTreeMap<String, Option<String>>,
}

impl RawRecipe {
    /// Drop empty or missing ingredient entries and alternatives without a
    /// substitute. Never touches `self`.
    pub fn clean(&self) -> Recipe {
        Recipe {
            id: self.id,
            name: self.name.clone(),
            category: self.category,
            description: self.description.clone(),
            cook_time: self.cook_time,
            difficulty: self.difficulty,
            image: self.image.clone(),
            ingredients: self
                .ingredients
                .iter()
                .filter_map(|ingredient| ingredient.as_deref())
                .filter(|ingredient| !ingredient.is_empty())
                .map(str::to_string)
                .collect(),
            instructions: self.instructions.clone(),
            tips: self.tips.clone(),
            alternatives: self
                .alternatives
                .iter()
                .filter_map(|(ingredient, substitute)| {
                    substitute
                        .as_ref()
                        .map(|substitute| (ingredient.clone(), substitute.clone()))
                })
                .collect(),
        }
    }

    /// Number of entries `clean` would remove
    pub fn blemish_count(&self) -> usize {
        let ingredients = self
            .ingredients
            .iter()
            .filter(|ingredient| ingredient.as_deref().map_or(true, str::is_empty))
            .count();
        let alternatives = self.alternatives.values().filter(|v| v.is_none()).count();
        ingredients + alternatives
    }
}

/// A cleaned recipe, safe to match against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub cook_time: u32,
    /// 1 (easy) to 5 (hard)
    pub difficulty: u8,
    pub image: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
    pub alternatives: BTreeMap<String, String>,
}

impl From<Recipe> for RawRecipe {
    fn from(recipe: Recipe) -> Self {
        RawRecipe {
            id: recipe.id,
            name: recipe.name,
            category: recipe.category,
            description: recipe.description,
            cook_time: recipe.cook_time,
            difficulty: recipe.difficulty,
            image: recipe.image,
            ingredients: recipe.ingredients.into_iter().map(Some).collect(),
            instructions: recipe.instructions,
            tips: recipe.tips,
            alternatives: recipe
                .alternatives
                .into_iter()
                .map(|(ingredient, substitute)| (ingredient, Some(substitute)))
                .collect(),
        }
    }
}

/// A recipe that survived filtering, with its score against the held ingredients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub match_score: usize,
}

impl MatchResult {
    /// Badge text such as `2/7`
    pub fn score_label(&self) -> String {
        format!("{}/{}", self.match_score, self.recipe.ingredients.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blemished() -> RawRecipe {
        RawRecipe {
            id: 4,
            name: "Beef Chow Mein".to_string(),
            category: Category::NoodleDishes,
            description: String::new(),
            cook_time: 30,
            difficulty: 3,
            image: "🥡".to_string(),
            ingredients: vec![
                Some("noodles".to_string()),
                None,
                Some("beef".to_string()),
                Some(String::new()),
                Some("onion".to_string()),
            ],
            instructions: vec!["Fry everything.".to_string()],
            tips: None,
            alternatives: [
                ("beef".to_string(), Some("pork".to_string())),
                ("oyster sauce".to_string(), None),
            ]
            .into_iter()
            .collect(),
        }
    }

    #[test]
    fn test_clean_drops_blemishes() {
        let raw = blemished();
        let recipe = raw.clean();

        assert_eq!(recipe.ingredients, vec!["noodles", "beef", "onion"]);
        assert_eq!(recipe.alternatives.len(), 1);
        assert_eq!(recipe.alternatives.get("beef").map(String::as_str), Some("pork"));
        assert_eq!(raw.blemish_count(), 3);
        // source left untouched
        assert_eq!(raw.ingredients.len(), 5);
    }

    #[test]
    fn test_clean_is_idempotent() {
        let once = blemished().clean();
        let twice = RawRecipe::from(once.clone()).clean();
        assert_eq!(once, twice);
        assert_eq!(RawRecipe::from(once).blemish_count(), 0);
    }

    #[test]
    fn test_category_serde_names() {
        let category: Category = serde_json::from_str("\"rice-dishes\"").unwrap();
        assert_eq!(category, Category::RiceDishes);
        assert_eq!(category.slug(), "rice-dishes");
        assert_eq!(category.to_string(), "RICE DISHES");
    }

    #[test]
    fn test_deserialize_raw_recipe_with_nulls() {
        let json = r#"{
            "id": 2,
            "name": "Garlic Eggplant",
            "category": "stir-fries",
            "description": "Sticky",
            "cookTime": 25,
            "difficulty": 2,
            "image": "🍆",
            "ingredients": ["eggplant", null, ""],
            "instructions": [],
            "alternatives": { "green onion": null }
        }"#;
        let raw: RawRecipe = serde_json::from_str(json).unwrap();
        assert_eq!(raw.cook_time, 25);
        assert!(raw.tips.is_none());
        assert_eq!(raw.clean().ingredients, vec!["eggplant"]);
        assert!(raw.clean().alternatives.is_empty());
    }

    #[test]
    fn test_score_label() {
        let result = MatchResult {
            recipe: blemished().clean(),
            match_score: 2,
        };
        assert_eq!(result.score_label(), "2/3");
    }
}
