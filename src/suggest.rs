use crate::query::HeldIngredients;

/// Ingredient names offered by the search box autocomplete
pub const PANTRY_INGREDIENTS: [&str; 20] = [
    "Egg", "Chicken", "Rice", "Garlic", "Onion", "Pepper", "Salt", "Tomato", "Cheese", "Carrot",
    "Broccoli", "Pasta", "Mushroom", "Spinach", "Potato", "Beef", "Pork", "Fish", "Milk", "Butter",
];

pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Candidates containing `input` (case-insensitive) that are not already
/// selected, in candidate order, at most `limit` of them.
///
/// Blank input yields nothing.
pub fn suggest_ingredients<'a>(
    candidates: &[&'a str],
    input: &str,
    selected: &HeldIngredients,
    limit: usize,
) -> Vec<&'a str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return Vec::new();
    }

    candidates
        .iter()
        .copied()
        .filter(|candidate| candidate.to_lowercase().contains(&input))
        .filter(|candidate| !selected.contains(candidate))
        .take(limit)
        .collect()
}
