//! Request and provider payloads shared by the API tests

use serde_json::{json, Value};

/// The example order from the product brief: three ingredients, no equipment.
pub fn chicken_rice_garlic() -> Value {
    json!({
        "ingredients": ["chicken", "rice", "garlic"],
        "equipment": [],
        "cuisine": "asian",
        "timeAvailable": 30,
        "dietaryRestrictions": ""
    })
}

pub fn long_ingredient_list() -> Value {
    json!({
        "ingredients": [
            "salmon", "lemon", "dill", "capers", "potatoes",
            "butter", "shallots", "cream", "parsley", "chives"
        ],
        "equipment": ["Oven", "Stovetop", "Blender", "Grill"],
        "cuisine": "french",
        "timeAvailable": 90,
        "dietaryRestrictions": "no nuts"
    })
}

/// A chat completion whose message content is a valid recipe envelope.
pub fn provider_completion() -> String {
    let recipe = json!({
        "recipe": {
            "name": "Garlic Chicken Fried Rice",
            "description": "Crispy rice tossed with garlicky chicken",
            "prepTime": 10,
            "cookTime": 18,
            "totalTime": 28,
            "servings": 2,
            "difficulty": "Easy",
            "ingredients": [
                {"name": "chicken", "amount": "300 g", "notes": "thinly sliced"},
                {"name": "rice", "amount": "2 cups"},
                {"name": "garlic", "amount": "4 cloves"}
            ],
            "equipment": ["Stovetop"],
            "instructions": [
                {"step": 1, "instruction": "Slice the chicken", "time": 5},
                {"step": 2, "instruction": "Fry garlic and chicken", "time": 10},
                {"step": 3, "instruction": "Add rice and toss"}
            ],
            "tips": ["Day-old rice fries best"],
            "nutritionHighlights": ["High in protein"]
        }
    });

    json!({"choices": [{"message": {"content": recipe.to_string()}}]}).to_string()
}
