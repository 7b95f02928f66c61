use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Difficulty tag attached to every generated recipe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, Display, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Difficulty implied by a time budget in minutes.
    pub fn for_time_budget(minutes: u32) -> Self {
        match minutes {
            0..=30 => Difficulty::Easy,
            31..=60 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }
}

/// A structured recipe, produced either by the provider or by the template generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub description: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub total_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub ingredients: Vec<RecipeIngredient>,
    pub equipment: Vec<String>,
    pub instructions: Vec<InstructionStep>,
    pub tips: Vec<String>,
    pub nutrition_highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeIngredient {
    pub name: String,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstructionStep {
    pub step: u32,
    pub instruction: String,
    /// Minutes for this step, when the step has a meaningful duration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<u32>,
}

/// Which path produced a recipe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GenerationSource {
    Provider,
    Template,
}

/// Body returned by `POST /api/generate-recipe`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub recipe: Recipe,
    pub source: GenerationSource,
}

/// Body returned when generation fails outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
