use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::app_state::AppState;
use crate::models::generation::GenerationRequest;
use crate::models::recipe::{ErrorResponse, RecipeResponse};

/// Message returned for every unrecoverable generation failure.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate recipe. Please try again.";

/// POST /api/generate-recipe: generate a recipe from the form's selections.
///
/// Provider failures never surface here; they are downgraded to the templated
/// recipe inside the generator. Only a body that cannot be read as a
/// `GenerationRequest` produces an error response. The body is parsed as JSON
/// whatever its `Content-Type`.
pub async fn generate_recipe(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let request: GenerationRequest = serde_json::from_slice(&body?)?;

    tracing::info!(
        cuisine = %request.cuisine,
        time_available = request.time_available,
        ingredients = request.ingredients.len(),
        equipment = request.equipment.len(),
        "Generating recipe"
    );

    let generated = state.generator.generate(&request).await;

    tracing::info!(
        source = %generated.source,
        recipe = %generated.recipe.name,
        "Recipe generated"
    );

    Ok(Json(RecipeResponse {
        recipe: generated.recipe,
        source: generated.source,
    }))
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unreadable request body: {0}")]
    UnreadableBody(#[from] BytesRejection),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Handler panicked")]
    Panicked,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Error in recipe generation");

        let body = ErrorResponse {
            error: GENERATION_FAILED_MESSAGE.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
