//! Basic search against the bundled catalog
//!
//! This example shows how to rank recipes for a handful of ingredients
//! and print the two result rows the way the results page shows them.

use what_can_i_cook::{RecipeSearch, UserQuery};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Builder: ingredients plus an optional cook time limit
    println!("=== Builder ===");
    let results = RecipeSearch::builder()
        .ingredients(["Egg", "Rice", "Garlic"])
        .max_cook_time(30)
        .build()?;

    println!("Top matches:");
    for result in results.top_matches() {
        println!("  {} {}", result.recipe.name, result.score_label());
        println!(
            "    missing: {}",
            results.missing_ingredients(&result.recipe).join(", ")
        );
    }

    println!("More recipes:");
    for result in results.more_recipes() {
        println!("  {} {}", result.recipe.name, result.score_label());
    }

    // Query string: what the landing page links to
    println!("\n=== Query string ===");
    let query = UserQuery::from_query_string("ingredients=Chicken,Tomato&maxIngredients=8");
    println!("Link: /results?{}", query.to_query_string());
    let results = RecipeSearch::builder().query(query).build()?;
    for result in results.ranked() {
        println!("  {} {}", result.recipe.name, result.score_label());
    }

    Ok(())
}
