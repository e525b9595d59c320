//! Ingredient matching, scoring and ranking.
//!
//! Matching is a loose, case-insensitive substring test in both directions:
//! "Egg" satisfies "Eggplant" and "chicken breast" satisfies "chicken".
//! Over-matching is accepted behavior.

use log::debug;

use crate::model::{MatchResult, Recipe};
use crate::query::UserQuery;

/// Whether the held ingredient `held` satisfies the required ingredient `required`
pub fn ingredient_matches(required: &str, held: &str) -> bool {
    let required = required.to_lowercase();
    let held = held.to_lowercase();
    required.contains(&held) || held.contains(&required)
}

fn is_satisfied<I, S>(required: &str, held: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    held.into_iter()
        .any(|held| ingredient_matches(required, held.as_ref()))
}

/// Number of the recipe's ingredients satisfied by at least one held ingredient
pub fn match_score<I, S>(recipe: &Recipe, held: I) -> usize
where
    I: IntoIterator<Item = S> + Clone,
    S: AsRef<str>,
{
    recipe
        .ingredients
        .iter()
        .filter(|required| is_satisfied(required, held.clone()))
        .count()
}

/// The recipe's ingredients no held ingredient satisfies, in recipe order
pub fn missing_ingredients<I, S>(recipe: &Recipe, held: I) -> Vec<String>
where
    I: IntoIterator<Item = S> + Clone,
    S: AsRef<str>,
{
    unmatched_ingredients(&recipe.ingredients, held)
}

/// Entries of `required` no held ingredient satisfies, in the given order
pub fn unmatched_ingredients<I, S>(required: &[String], held: I) -> Vec<String>
where
    I: IntoIterator<Item = S> + Clone,
    S: AsRef<str>,
{
    required
        .iter()
        .filter(|ingredient| !is_satisfied(ingredient, held.clone()))
        .cloned()
        .collect()
}

/// Whether the recipe passes the cook-time and ingredient-count filters (both inclusive)
pub fn passes_filters(recipe: &Recipe, query: &UserQuery) -> bool {
    recipe.cook_time <= query.max_cook_time
        && recipe.ingredients.len() <= query.max_ingredient_count
}

/// Filter the catalog by the query's limits, score every survivor and sort by
/// score, highest first. Equal scores keep catalog order.
pub fn filter_and_rank(catalog: &[Recipe], query: &UserQuery) -> Vec<MatchResult> {
    let held = &query.have_ingredients;

    let mut ranked: Vec<MatchResult> = catalog
        .iter()
        .filter(|recipe| passes_filters(recipe, query))
        .map(|recipe| MatchResult {
            match_score: match_score(recipe, held.iter()),
            recipe: recipe.clone(),
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    debug!(
        "Ranked {} of {} recipes for {} held ingredients",
        ranked.len(),
        catalog.len(),
        held.len()
    );
    ranked
}

/// Ranked results split into the two rows shown on the results page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition<'a> {
    pub top_matches: &'a [MatchResult],
    pub more_recipes: &'a [MatchResult],
}

pub const DEFAULT_TOP_MATCHES: usize = 4;
pub const DEFAULT_MORE_RECIPES: usize = 7;

/// First `top` results, then up to `more` after them; the rest is not shown
pub fn partition(ranked: &[MatchResult], top: usize, more: usize) -> Partition<'_> {
    let top_end = top.min(ranked.len());
    let more_end = top_end.saturating_add(more).min(ranked.len());
    Partition {
        top_matches: &ranked[..top_end],
        more_recipes: &ranked[top_end..more_end],
    }
}
