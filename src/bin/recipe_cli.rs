use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use recipe_generator::form::{HttpRecipeApi, RecipeForm};
use recipe_generator::models::generation::{Cuisine, Equipment, TimeBudget};
use recipe_generator::models::recipe::Recipe;

/// Generate a recipe from the ingredients and equipment you have on hand.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Base URL of a running recipe-generator server
    #[arg(long, default_value = "http://localhost:3000")]
    server: String,

    /// Available ingredient (repeatable)
    #[arg(short, long = "ingredient")]
    ingredients: Vec<String>,

    /// Available equipment, e.g. "Air Fryer" (repeatable)
    #[arg(short, long = "equipment")]
    equipment: Vec<Equipment>,

    /// Cuisine tag, e.g. italian or comfort-food
    #[arg(short, long)]
    cuisine: Option<Cuisine>,

    /// Time available in minutes: 15, 30, 45, 60, 90 or 120
    #[arg(short, long, value_parser = parse_time_budget)]
    time: Option<TimeBudget>,

    /// Dietary restrictions, e.g. "vegetarian, gluten-free"
    #[arg(short, long, default_value = "")]
    dietary: String,

    /// Print the raw JSON recipe instead of formatted text
    #[arg(long)]
    json: bool,
}

fn parse_time_budget(value: &str) -> Result<TimeBudget, String> {
    let minutes: u32 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number of minutes"))?;
    TimeBudget::try_from(minutes).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut form = RecipeForm::new();
    for ingredient in &args.ingredients {
        form.set_ingredient_input(ingredient.as_str());
        if !form.add_ingredient() {
            tracing::debug!(ingredient = %ingredient, "Skipping blank or duplicate ingredient");
        }
    }
    for item in args.equipment {
        if !form.equipment().contains(&item) {
            form.toggle_equipment(item);
        }
    }
    if let Some(cuisine) = args.cuisine {
        form.set_cuisine(cuisine);
    }
    if let Some(budget) = args.time {
        form.set_time_available(budget);
    }
    form.set_dietary_restrictions(args.dietary);

    let api = HttpRecipeApi::new(args.server);
    eprintln!("Creating your perfect recipe...");

    let outcome = form.generate(&api).await.map(|_| ());
    if let Err(e) = outcome {
        tracing::debug!(error = %e, "Generation did not complete");
        if let Some(notice) = form.notice() {
            eprintln!("{}", notice.message());
        }
        return ExitCode::FAILURE;
    }

    let Some(recipe) = form.recipe() else {
        return ExitCode::FAILURE;
    };

    if args.json {
        match serde_json::to_string_pretty(recipe) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize recipe: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", render_recipe(recipe));
        if let Some(source) = form.source() {
            eprintln!("(generated by {source})");
        }
    }

    ExitCode::SUCCESS
}

/// Plain-text rendering of a recipe, in the same order as the page UI.
fn render_recipe(recipe: &Recipe) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n{}\n\n", recipe.name, recipe.description));
    out.push_str(&format!(
        "{} min total | {} | {} servings\n",
        recipe.total_time, recipe.difficulty, recipe.servings
    ));

    out.push_str("\nIngredients\n");
    for ingredient in &recipe.ingredients {
        match &ingredient.notes {
            Some(notes) => out.push_str(&format!(
                "  - {}: {} ({})\n",
                ingredient.name, ingredient.amount, notes
            )),
            None => out.push_str(&format!("  - {}: {}\n", ingredient.name, ingredient.amount)),
        }
    }

    if !recipe.equipment.is_empty() {
        out.push_str(&format!("\nEquipment Needed\n  {}\n", recipe.equipment.join(", ")));
    }

    out.push_str("\nInstructions\n");
    for step in &recipe.instructions {
        out.push_str(&format!("  {}. {}\n", step.step, step.instruction));
        if let Some(minutes) = step.time.filter(|m| *m > 0) {
            out.push_str(&format!("     ({minutes} minutes)\n"));
        }
    }

    if !recipe.tips.is_empty() {
        out.push_str("\nChef's Tips\n");
        for tip in &recipe.tips {
            out.push_str(&format!("  * {tip}\n"));
        }
    }

    if !recipe.nutrition_highlights.is_empty() {
        out.push_str(&format!(
            "\nNutrition Highlights\n  {}\n",
            recipe.nutrition_highlights.join(", ")
        ));
    }

    out
}
