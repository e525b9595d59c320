use clap::{Args, Parser, Subcommand};
use log::{debug, info};

use what_can_i_cook::featured::{self, today};
use what_can_i_cook::{
    group_by_category, parse_date, suggest_ingredients, AppConfig, BundledCatalog,
    CatalogProvider, HeldIngredients, JsonCatalog, MatchResult, Recipe, RecipeSearch,
    UserQuery, PANTRY_INGREDIENTS,
};

#[derive(Parser)]
#[command(name = "what-can-i-cook")]
#[command(about = "Find recipes you can cook with what you have", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON catalog to use instead of the bundled recipes
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank recipes by how many of their ingredients you have
    Search(SearchArgs),
    /// Show the featured recipe for a day
    Featured {
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List every recipe grouped by category
    Categories,
    /// Suggest pantry ingredients matching the typed text
    Suggest {
        input: String,
        /// Ingredients already selected
        #[arg(long, value_delimiter = ',')]
        selected: Vec<String>,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Ingredients you have, comma separated
    #[arg(short, long, value_delimiter = ',')]
    ingredients: Vec<String>,

    /// Results page query string, e.g. "ingredients=Egg,Rice&maxCookTime=30"
    #[arg(long, conflicts_with = "ingredients")]
    query: Option<String>,

    /// Maximum cook time in minutes
    #[arg(long)]
    max_cook_time: Option<u32>,

    /// Maximum number of ingredients
    #[arg(long)]
    max_ingredients: Option<usize>,

    /// Print every ranked recipe as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    debug!("Loaded configuration: {:?}", config);

    let catalog_path = cli.catalog.or(config.catalog_path);

    match cli.command {
        Commands::Search(args) => {
            let mut builder = RecipeSearch::builder().config(config.search);
            if let Some(path) = catalog_path {
                builder = builder.catalog(JsonCatalog::from_path(path));
            }
            if let Some(query) = &args.query {
                builder = builder.query(UserQuery::from_query_string(query));
            } else {
                builder = builder.ingredients(&args.ingredients);
            }
            if let Some(minutes) = args.max_cook_time {
                builder = builder.max_cook_time(minutes);
            }
            if let Some(count) = args.max_ingredients {
                builder = builder.max_ingredient_count(count);
            }

            let results = builder.build()?;
            info!("{} recipes passed the filters", results.ranked().len());

            if args.json {
                println!("{}", serde_json::to_string_pretty(results.ranked())?);
                return Ok(());
            }

            if results.is_empty() {
                println!("No recipes found matching your criteria.");
                println!("Try adjusting your filters or adding more ingredients.");
                return Ok(());
            }

            println!("TOP MATCHES");
            for result in results.top_matches() {
                print_match(result, &results.missing_ingredients(&result.recipe));
            }
            if !results.more_recipes().is_empty() {
                println!("\nMORE RECIPES");
                for result in results.more_recipes() {
                    print_match(result, &results.missing_ingredients(&result.recipe));
                }
            }
        }
        Commands::Featured { date } => {
            let date = match date {
                Some(date) => parse_date(&date)?,
                None => today(),
            };
            let recipes = load_recipes(catalog_path)?;
            match featured::featured_recipe(&recipes, date) {
                Some(recipe) => {
                    println!("Featured on {}:", date);
                    print_recipe(recipe);
                }
                None => println!("The catalog is empty."),
            }
        }
        Commands::Categories => {
            let recipes = load_recipes(catalog_path)?;
            for (category, recipes) in group_by_category(&recipes) {
                println!("{} ({} recipes)", category.display_name(), recipes.len());
                for recipe in recipes {
                    println!(
                        "  {} {} - {} min, difficulty {}/5",
                        recipe.image, recipe.name, recipe.cook_time, recipe.difficulty
                    );
                }
            }
        }
        Commands::Suggest { input, selected } => {
            let selected: HeldIngredients = selected.into_iter().collect();
            for suggestion in suggest_ingredients(
                &PANTRY_INGREDIENTS,
                &input,
                &selected,
                config.search.suggestion_limit,
            ) {
                println!("{}", suggestion);
            }
        }
    }

    Ok(())
}

fn load_recipes(
    catalog_path: Option<String>,
) -> Result<Vec<Recipe>, what_can_i_cook::MatcherError> {
    match catalog_path {
        Some(path) => JsonCatalog::from_path(path).recipes(),
        None => BundledCatalog.recipes(),
    }
}

fn print_match(result: &MatchResult, missing: &[String]) {
    println!(
        "  {} {} [{}] {} min",
        result.recipe.image,
        result.recipe.name,
        result.score_label(),
        result.recipe.cook_time
    );
    if !missing.is_empty() {
        println!("      missing: {}", missing.join(", "));
    }
}

fn print_recipe(recipe: &Recipe) {
    println!("{} {}", recipe.image, recipe.name);
    println!("{}", recipe.description);
    println!(
        "{} min, difficulty {}/5",
        recipe.cook_time, recipe.difficulty
    );
    println!("\nIngredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }
    println!("\nInstructions:");
    for (index, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }
    if let Some(tips) = &recipe.tips {
        println!("\nTips: {}", tips);
    }
    if !recipe.alternatives.is_empty() {
        println!("\nAlternatives:");
        for (ingredient, substitute) in &recipe.alternatives {
            println!("  {} -> {}", ingredient, substitute);
        }
    }
}
