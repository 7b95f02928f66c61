use crate::models::generation::GenerationRequest;

/// Equipment phrase used when the user selected nothing.
const NO_EQUIPMENT_PHRASE: &str = "basic kitchen tools";

/// Build the instruction sent to the provider for a generation request.
pub fn build_recipe_prompt(request: &GenerationRequest) -> String {
    let cuisine = &request.cuisine;
    let minutes = request.time_available;

    let equipment = if request.equipment.is_empty() {
        NO_EQUIPMENT_PHRASE.to_string()
    } else {
        request.equipment.join(", ")
    };

    let dietary = request
        .dietary_notes()
        .map(|notes| {
            format!("The recipe should accommodate these dietary restrictions: {notes}.\n")
        })
        .unwrap_or_default();

    format!(
        "Create a delicious {cuisine} recipe using these available ingredients: {ingredients}.\n\
         \n\
         Available equipment: {equipment}\n\
         Maximum total cooking time: {minutes} minutes\n\
         {dietary}\
         \n\
         Requirements:\n\
         - Use as many of the provided ingredients as possible\n\
         - Stay within the time limit of {minutes} minutes\n\
         - Only use equipment from the available list\n\
         - Make the recipe practical and delicious\n\
         - Include helpful tips and cooking techniques\n\
         - Ensure the recipe fits the {cuisine} cuisine style\n\
         - Provide realistic cooking times for each step\n\
         - Include nutritional highlights of the dish\n\
         \n\
         If some ingredients don't work well together or with the cuisine type, prioritize \
         the most important ones and suggest the best combination. Be creative but practical.",
        ingredients = request.ingredients.join(", "),
    )
}
