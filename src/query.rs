use std::borrow::Cow;

use log::warn;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_COOK_TIME: u32 = 300;
pub const DEFAULT_MAX_INGREDIENT_COUNT: usize = 20;

const INGREDIENTS_KEY: &str = "ingredients";
const MAX_COOK_TIME_KEY: &str = "maxCookTime";
const MAX_INGREDIENTS_KEY: &str = "maxIngredients";

/// Ingredients the user has on hand.
///
/// Keeps insertion order for display; a name that differs from an existing
/// one only by case is treated as a duplicate. Names are stored as given,
/// surrounding whitespace included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct HeldIngredients(Vec<String>);

impl HeldIngredients {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient. Returns false for empty or all-whitespace input
    /// and for a duplicate.
    pub fn add(&mut self, ingredient: impl AsRef<str>) -> bool {
        let ingredient = ingredient.as_ref();
        if ingredient.trim().is_empty() || self.contains(ingredient) {
            return false;
        }
        self.0.push(ingredient.to_string());
        true
    }

    /// Remove an ingredient by its exact name. Returns whether it was present.
    pub fn remove(&mut self, ingredient: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|held| held != ingredient);
        self.0.len() != before
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        let ingredient = ingredient.to_lowercase();
        self.0.iter().any(|held| held.to_lowercase() == ingredient)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + Clone {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for HeldIngredients {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut held = HeldIngredients::new();
        for ingredient in iter {
            held.add(ingredient);
        }
        held
    }
}

impl From<Vec<String>> for HeldIngredients {
    fn from(ingredients: Vec<String>) -> Self {
        ingredients.into_iter().collect()
    }
}

impl From<HeldIngredients> for Vec<String> {
    fn from(held: HeldIngredients) -> Self {
        held.0
    }
}

/// What the user is looking for: held ingredients plus the two filter limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub have_ingredients: HeldIngredients,
    pub max_cook_time: u32,
    pub max_ingredient_count: usize,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            have_ingredients: HeldIngredients::default(),
            max_cook_time: DEFAULT_MAX_COOK_TIME,
            max_ingredient_count: DEFAULT_MAX_INGREDIENT_COUNT,
        }
    }
}

impl UserQuery {
    /// Parse the results page query string, e.g.
    /// `ingredients=Egg,Rice&maxCookTime=60&maxIngredients=10`.
    ///
    /// A leading `?` is accepted. Missing or unparseable values fall back to
    /// the defaults; unknown keys are ignored.
    pub fn from_query_string(query: &str) -> Self {
        let mut parsed = UserQuery::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));

            match key {
                INGREDIENTS_KEY => {
                    parsed.have_ingredients = value
                        .split(',')
                        .map(decode_component)
                        .filter(|ingredient| !ingredient.is_empty())
                        .collect();
                }
                MAX_COOK_TIME_KEY => {
                    parsed.max_cook_time = parse_or_default(
                        key,
                        &decode_component(value),
                        DEFAULT_MAX_COOK_TIME,
                    );
                }
                MAX_INGREDIENTS_KEY => {
                    parsed.max_ingredient_count = parse_or_default(
                        key,
                        &decode_component(value),
                        DEFAULT_MAX_INGREDIENT_COUNT,
                    );
                }
                _ => {}
            }
        }

        parsed
    }

    /// Render the query in the form [`UserQuery::from_query_string`] reads
    pub fn to_query_string(&self) -> String {
        let ingredients = self
            .have_ingredients
            .iter()
            .map(|ingredient| urlencoding::encode(ingredient).into_owned())
            .collect::<Vec<_>>()
            .join(",");

        format!(
            "{}={}&{}={}&{}={}",
            INGREDIENTS_KEY,
            ingredients,
            MAX_COOK_TIME_KEY,
            self.max_cook_time,
            MAX_INGREDIENTS_KEY,
            self.max_ingredient_count
        )
    }
}

fn decode_component(value: &str) -> Cow<'_, str> {
    let value = if value.contains('+') {
        Cow::Owned(value.replace('+', " "))
    } else {
        Cow::Borrowed(value)
    };
    let decoded = urlencoding::decode(&value).map(Cow::into_owned);
    match decoded {
        Ok(decoded) => Cow::Owned(decoded),
        Err(_) => value,
    }
}

fn parse_or_default<T: std::str::FromStr>(key: &str, value: &str, default: T) -> T {
    match value.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!("Ignoring unparseable {} value {:?}", key, value);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_ingredients_dedupe_case_insensitive() {
        let mut held = HeldIngredients::new();
        assert!(held.add("Egg"));
        assert!(!held.add("egg"));
        assert!(!held.add("   "));
        assert!(held.add("Rice"));
        assert_eq!(held.as_slice(), ["Egg", "Rice"]);
    }

    #[test]
    fn test_held_ingredients_keep_surrounding_whitespace() {
        let query = UserQuery::from_query_string("ingredients=%20rice");
        assert_eq!(query.have_ingredients.as_slice(), [" rice"]);

        let noodles = ["rice noodles".to_string()];
        assert!(!crate::ingredient_matches("rice noodles", " rice"));
        assert_eq!(
            crate::matcher::unmatched_ingredients(&noodles, query.have_ingredients.iter()),
            noodles
        );
    }

    #[test]
    fn test_deserialize_held_ingredients_goes_through_add() {
        let held: HeldIngredients =
            serde_json::from_str(r#"["Egg", "egg", "", "  ", "Rice"]"#).unwrap();
        assert_eq!(held.as_slice(), ["Egg", "Rice"]);

        let query: UserQuery = serde_json::from_str(
            r#"{"haveIngredients": ["", "Salt"], "maxCookTime": 30, "maxIngredientCount": 5}"#,
        )
        .unwrap();
        assert_eq!(query.have_ingredients.as_slice(), ["Salt"]);
        assert_eq!(
            serde_json::to_string(&query.have_ingredients).unwrap(),
            r#"["Salt"]"#
        );
    }

    #[test]
    fn test_fractional_and_overflowing_limits_fall_back() {
        let query = UserQuery::from_query_string("maxCookTime=30.5&maxIngredients=1e3");
        assert_eq!(query.max_cook_time, DEFAULT_MAX_COOK_TIME);
        assert_eq!(query.max_ingredient_count, DEFAULT_MAX_INGREDIENT_COUNT);

        let query = UserQuery::from_query_string("maxCookTime=4294967296");
        assert_eq!(query.max_cook_time, DEFAULT_MAX_COOK_TIME);
    }

    #[test]
    fn test_held_ingredients_remove() {
        let mut held: HeldIngredients = ["Egg", "Rice", "Garlic"].into_iter().collect();
        assert!(held.remove("Rice"));
        assert!(!held.remove("Rice"));
        assert_eq!(held.iter().collect::<Vec<_>>(), vec!["Egg", "Garlic"]);
    }

    #[test]
    fn test_defaults() {
        let query = UserQuery::default();
        assert!(query.have_ingredients.is_empty());
        assert_eq!(query.max_cook_time, 300);
        assert_eq!(query.max_ingredient_count, 20);
    }

    #[test]
    fn test_parse_full_query() {
        let query = UserQuery::from_query_string(
            "?ingredients=Egg,Rice,,Soy%20Sauce&maxCookTime=60&maxIngredients=10",
        );
        assert_eq!(
            query.have_ingredients.as_slice(),
            ["Egg", "Rice", "Soy Sauce"]
        );
        assert_eq!(query.max_cook_time, 60);
        assert_eq!(query.max_ingredient_count, 10);
    }

    #[test]
    fn test_parse_falls_back_to_defaults() {
        let query = UserQuery::from_query_string("maxCookTime=soon&maxIngredients=-3&color=blue");
        assert_eq!(query, UserQuery::default());

        assert_eq!(UserQuery::from_query_string(""), UserQuery::default());
        assert_eq!(UserQuery::from_query_string("ingredients="), UserQuery::default());
    }

    #[test]
    fn test_plus_decodes_to_space() {
        let query = UserQuery::from_query_string("ingredients=green+onion");
        assert_eq!(query.have_ingredients.as_slice(), ["green onion"]);
    }

    #[test]
    fn test_query_string_round_trip() {
        let mut query = UserQuery::default();
        query.have_ingredients.add("Egg");
        query.have_ingredients.add("soy sauce");
        query.have_ingredients.add("salt, pepper");
        query.max_cook_time = 45;

        let rendered = query.to_query_string();
        assert_eq!(
            rendered,
            "ingredients=Egg,soy%20sauce,salt%2C%20pepper&maxCookTime=45&maxIngredients=20"
        );
        assert_eq!(UserQuery::from_query_string(&rendered), query);
    }
}
