//! Form state for collecting generation inputs and holding the latest recipe.
//!
//! `RecipeForm` mirrors what the page UI keeps in memory: the pending
//! ingredient text, the chosen ingredients, equipment, cuisine, time budget
//! and dietary notes, plus the last recipe received and a busy flag while a
//! request is in flight.

pub mod client;

use garde::Validate;
use tracing::warn;

use crate::models::generation::{Cuisine, Equipment, GenerationRequest, TimeBudget};
use crate::models::recipe::{GenerationSource, Recipe, RecipeResponse};
pub use client::{HttpRecipeApi, RecipeApi, RecipeApiError};

/// Blocking message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormNotice {
    MissingRequiredFields,
    GenerationFailed,
}

impl FormNotice {
    pub fn message(&self) -> &'static str {
        match self {
            FormNotice::MissingRequiredFields => "Please fill in all required fields",
            FormNotice::GenerationFailed => "Failed to generate recipe. Please try again.",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Missing required fields: {0}")]
    Validation(garde::Report),

    #[error("A recipe is already being generated")]
    Busy,

    #[error("Recipe request failed: {0}")]
    Request(#[from] RecipeApiError),
}

/// What the result panel should show.
#[derive(Debug, PartialEq)]
pub enum FormView<'a> {
    Loading,
    Recipe(&'a Recipe),
    Empty,
}

#[derive(Debug, Default)]
pub struct RecipeForm {
    ingredient_input: String,
    ingredients: Vec<String>,
    equipment: Vec<Equipment>,
    cuisine: Option<Cuisine>,
    time_available: Option<TimeBudget>,
    dietary_restrictions: String,
    recipe: Option<Recipe>,
    source: Option<GenerationSource>,
    is_generating: bool,
    notice: Option<FormNotice>,
}

impl RecipeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_ingredient_input(&mut self, text: impl Into<String>) {
        self.ingredient_input = text.into();
    }

    pub fn ingredient_input(&self) -> &str {
        &self.ingredient_input
    }

    /// Add the pending ingredient text. Returns whether anything was added.
    ///
    /// Blank or duplicate entries are ignored and leave the pending text as is.
    pub fn add_ingredient(&mut self) -> bool {
        let ingredient = self.ingredient_input.trim();
        if ingredient.is_empty() || self.ingredients.iter().any(|i| i == ingredient) {
            return false;
        }

        self.ingredients.push(ingredient.to_string());
        self.ingredient_input.clear();
        true
    }

    pub fn remove_ingredient(&mut self, ingredient: &str) {
        self.ingredients.retain(|i| i != ingredient);
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Select the equipment if unselected, otherwise deselect it.
    pub fn toggle_equipment(&mut self, item: Equipment) {
        if let Some(pos) = self.equipment.iter().position(|e| *e == item) {
            self.equipment.remove(pos);
        } else {
            self.equipment.push(item);
        }
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn set_cuisine(&mut self, cuisine: Cuisine) {
        self.cuisine = Some(cuisine);
    }

    pub fn cuisine(&self) -> Option<Cuisine> {
        self.cuisine
    }

    pub fn set_time_available(&mut self, budget: TimeBudget) {
        self.time_available = Some(budget);
    }

    pub fn time_available(&self) -> Option<TimeBudget> {
        self.time_available
    }

    pub fn set_dietary_restrictions(&mut self, text: impl Into<String>) {
        self.dietary_restrictions = text.into();
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    /// Which path produced the displayed recipe.
    pub fn source(&self) -> Option<GenerationSource> {
        self.source
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    pub fn notice(&self) -> Option<FormNotice> {
        self.notice
    }

    /// Whether the generate action is currently enabled.
    pub fn can_generate(&self) -> bool {
        !self.is_generating
            && !self.ingredients.is_empty()
            && self.cuisine.is_some()
            && self.time_available.is_some()
    }

    pub fn view(&self) -> FormView<'_> {
        if self.is_generating {
            FormView::Loading
        } else if let Some(recipe) = &self.recipe {
            FormView::Recipe(recipe)
        } else {
            FormView::Empty
        }
    }

    /// Snapshot the current selections as a request body.
    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest {
            ingredients: self.ingredients.clone(),
            equipment: self.equipment.iter().map(|e| e.to_string()).collect(),
            cuisine: self.cuisine.map(|c| c.tag().to_string()).unwrap_or_default(),
            time_available: self.time_available.map(TimeBudget::minutes).unwrap_or(0),
            dietary_restrictions: Some(self.dietary_restrictions.clone()),
        }
    }

    /// Validate the form and mark it busy, returning the request to send.
    ///
    /// Fails without side effects while another request is outstanding. A
    /// validation failure sets the blocking notice and leaves the form idle.
    pub fn begin_generation(&mut self) -> Result<GenerationRequest, FormError> {
        if self.is_generating {
            return Err(FormError::Busy);
        }

        let request = self.to_request();
        if let Err(report) = request.validate() {
            self.notice = Some(FormNotice::MissingRequiredFields);
            return Err(FormError::Validation(report));
        }

        self.notice = None;
        self.is_generating = true;
        Ok(request)
    }

    /// Record the outcome of a request started with `begin_generation`.
    ///
    /// On failure the previously displayed recipe, if any, is kept.
    pub fn finish_generation(
        &mut self,
        result: Result<RecipeResponse, RecipeApiError>,
    ) -> Result<&Recipe, FormError> {
        self.is_generating = false;

        match result {
            Ok(response) => {
                self.source = Some(response.source);
                Ok(self.recipe.insert(response.recipe))
            }
            Err(e) => {
                warn!(error = %e, "Error generating recipe");
                self.notice = Some(FormNotice::GenerationFailed);
                Err(FormError::Request(e))
            }
        }
    }

    /// Validate, send one request and store the result. Never retries.
    pub async fn generate(&mut self, api: &dyn RecipeApi) -> Result<&Recipe, FormError> {
        let request = self.begin_generation()?;
        let result = api.generate_recipe(&request).await;
        self.finish_generation(result)
    }
}
