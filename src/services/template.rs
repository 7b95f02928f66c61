use crate::models::generation::{Cuisine, GenerationRequest};
use crate::models::recipe::{Difficulty, InstructionStep, Recipe, RecipeIngredient};

/// Maximum number of user ingredients carried into a templated recipe.
const MAX_INGREDIENTS: usize = 8;

/// Ingredient count below which pantry staples are appended.
const STAPLE_THRESHOLD: usize = 4;

/// Maximum number of user-selected equipment items listed.
const MAX_EQUIPMENT: usize = 3;

const MAX_PREP_MINUTES: u32 = 15;
const SERVINGS: u32 = 4;

const DEFAULT_EQUIPMENT: [&str; 3] = ["Stovetop", "Pan", "Knife"];

const PANTRY_STAPLES: [(&str, &str); 3] = [
    ("olive oil", "2 tbsp"),
    ("salt", "to taste"),
    ("black pepper", "to taste"),
];

const NUTRITION_HIGHLIGHTS: [&str; 4] = [
    "Rich in vitamins and minerals",
    "Good source of protein",
    "Contains healthy fats",
    "Balanced macronutrients",
];

/// Name and description used for a cuisine's templated recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuisineTemplate {
    pub name: &'static str,
    pub description: &'static str,
}

/// Template for a cuisine tag. Unrecognized tags use the American template.
pub fn template_for(cuisine_tag: &str) -> CuisineTemplate {
    match Cuisine::from_tag(cuisine_tag).unwrap_or(Cuisine::American) {
        Cuisine::Italian => CuisineTemplate {
            name: "Rustic Italian Pasta",
            description: "A hearty pasta dish with fresh ingredients and authentic Italian flavors",
        },
        Cuisine::Mexican => CuisineTemplate {
            name: "Zesty Mexican Bowl",
            description: "A vibrant and flavorful Mexican-inspired dish with fresh ingredients",
        },
        Cuisine::Asian => CuisineTemplate {
            name: "Asian Fusion Stir-Fry",
            description: "A quick and delicious stir-fry with Asian-inspired flavors",
        },
        Cuisine::American => CuisineTemplate {
            name: "Classic American Comfort Food",
            description: "A satisfying American-style dish perfect for any occasion",
        },
        Cuisine::Mediterranean => CuisineTemplate {
            name: "Mediterranean Delight",
            description: "A healthy and flavorful Mediterranean dish with fresh ingredients",
        },
        Cuisine::Indian => CuisineTemplate {
            name: "Aromatic Indian Curry",
            description: "A fragrant and spicy Indian dish with warming spices",
        },
        Cuisine::French => CuisineTemplate {
            name: "French Bistro Classic",
            description: "An elegant French dish with sophisticated flavors",
        },
        Cuisine::Thai => CuisineTemplate {
            name: "Thai Street Food Special",
            description: "A bold and flavorful Thai dish with authentic ingredients",
        },
        Cuisine::Japanese => CuisineTemplate {
            name: "Japanese Home Cooking",
            description: "A simple yet refined Japanese dish with clean flavors",
        },
        Cuisine::ComfortFood => CuisineTemplate {
            name: "Ultimate Comfort Food",
            description: "A warming and satisfying comfort food dish",
        },
    }
}

/// Prep time for a budget: 30% of it, floored, capped at 15 minutes.
pub fn prep_minutes(time_budget: u32) -> u32 {
    MAX_PREP_MINUTES.min(floor_fraction(time_budget, 3, 10))
}

/// `floor(value * numerator / denominator)` without overflowing `u32`.
///
/// Requires `numerator < denominator`.
fn floor_fraction(value: u32, numerator: u32, denominator: u32) -> u32 {
    value / denominator * numerator + value % denominator * numerator / denominator
}

fn amount_for_position(index: usize) -> &'static str {
    match index {
        0 => "1 lb",
        1 => "2 cups",
        2 => "3 cloves",
        3 => "1 cup",
        _ => "1/2 cup",
    }
}

fn build_ingredients(ingredients: &[String]) -> Vec<RecipeIngredient> {
    let mut entries: Vec<RecipeIngredient> = ingredients
        .iter()
        .take(MAX_INGREDIENTS)
        .enumerate()
        .map(|(index, name)| RecipeIngredient {
            name: name.clone(),
            amount: amount_for_position(index).to_string(),
            notes: (index == 0).then(|| "main ingredient".to_string()),
        })
        .collect();

    if entries.len() < STAPLE_THRESHOLD {
        entries.extend(PANTRY_STAPLES.iter().map(|(name, amount)| RecipeIngredient {
            name: name.to_string(),
            amount: amount.to_string(),
            notes: None,
        }));
    }

    entries
}

fn build_equipment(selected: &[String]) -> Vec<String> {
    if selected.is_empty() {
        DEFAULT_EQUIPMENT.iter().map(|item| item.to_string()).collect()
    } else {
        selected.iter().take(MAX_EQUIPMENT).cloned().collect()
    }
}

fn build_instructions(
    first_ingredient: &str,
    cuisine_tag: &str,
    prep_time: u32,
    cook_time: u32,
) -> Vec<InstructionStep> {
    let steps = [
        (
            format!(
                "Prepare all ingredients by washing and chopping {first_ingredient}. \
                 Gather your equipment and organize your workspace."
            ),
            prep_time,
        ),
        (
            "Heat olive oil in your cooking vessel and add aromatics like garlic, onions, \
             or ginger to build the flavor base."
                .to_string(),
            3,
        ),
        (
            format!(
                "Add your main ingredients and cook according to the {cuisine_tag} style, \
                 stirring occasionally to prevent sticking."
            ),
            floor_fraction(cook_time, 3, 5),
        ),
        (
            "Season with salt, pepper, and cuisine-specific spices. \
             Taste and adjust flavors as needed."
                .to_string(),
            2,
        ),
        (
            "Finish cooking and let rest briefly. Garnish appropriately and serve hot."
                .to_string(),
            cook_time / 5,
        ),
    ];

    steps
        .into_iter()
        .zip(1..)
        .map(|((instruction, time), step)| InstructionStep {
            step,
            instruction,
            time: Some(time),
        })
        .collect()
}

fn build_tips(cuisine_tag: &str) -> Vec<String> {
    vec![
        "Taste and adjust seasoning throughout the cooking process".to_string(),
        "Don't overcrowd the pan - cook in batches if necessary".to_string(),
        "Fresh ingredients make a significant difference in flavor".to_string(),
        format!("This {cuisine_tag} dish pairs well with rice, bread, or a simple salad"),
    ]
}

/// Build a recipe deterministically from the request.
///
/// The result depends only on the request: the cuisine picks the name and
/// description, the time budget drives difficulty and every duration, and the
/// user's ingredients and equipment are carried over in order.
pub fn generate_templated_recipe(request: &GenerationRequest) -> Recipe {
    let template = template_for(&request.cuisine);
    let time_budget = request.time_available;
    let prep_time = prep_minutes(time_budget);
    let cook_time = time_budget - prep_time;

    let first_ingredient = request
        .ingredients
        .first()
        .map(String::as_str)
        .unwrap_or("main ingredient");

    Recipe {
        name: template.name.to_string(),
        description: template.description.to_string(),
        prep_time,
        cook_time,
        total_time: time_budget,
        servings: SERVINGS,
        difficulty: Difficulty::for_time_budget(time_budget),
        ingredients: build_ingredients(&request.ingredients),
        equipment: build_equipment(&request.equipment),
        instructions: build_instructions(first_ingredient, &request.cuisine, prep_time, cook_time),
        tips: build_tips(&request.cuisine),
        nutrition_highlights: NUTRITION_HIGHLIGHTS.iter().map(|s| s.to_string()).collect(),
    }
}
