use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::models::recipe::Recipe;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

const SYSTEM_PROMPT: &str = "You are a creative chef. Respond only with a recipe matching the provided JSON schema.";

/// A completion service that turns a prompt into a schema-constrained recipe.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Provider name (e.g. "openai").
    fn provider_name(&self) -> &str;

    fn model_name(&self) -> &str;

    /// Generate a recipe for the prompt. Any failure is reported as an error.
    async fn generate(&self, prompt: &str) -> Result<Recipe, ProviderError>;
}

/// Client for an OpenAI-compatible chat completions endpoint using structured outputs.
pub struct OpenAiClient {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// The schema wraps the recipe in a single `recipe` field.
#[derive(Deserialize)]
struct RecipeEnvelope {
    recipe: Recipe,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_OPENAI_BASE_URL, model)
    }

    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl RecipeProvider for OpenAiClient {
    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<Recipe, ProviderError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let request_body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt}
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "recipe",
                    "schema": recipe_schema()
                }
            }
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ProviderError::MissingContent)?;

        tracing::debug!(model = %self.model, bytes = content.len(), "Received provider completion");

        let envelope: RecipeEnvelope = serde_json::from_str(&content)?;
        Ok(envelope.recipe)
    }
}

/// JSON schema describing the `{ "recipe": ... }` object the provider must return.
pub fn recipe_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "recipe": {
                "type": "object",
                "properties": {
                    "name": {"type": "string", "description": "Creative and appetizing recipe name"},
                    "description": {"type": "string", "description": "Brief, enticing description of the dish"},
                    "prepTime": {"type": "integer", "description": "Preparation time in minutes"},
                    "cookTime": {"type": "integer", "description": "Cooking time in minutes"},
                    "totalTime": {"type": "integer", "description": "Total time in minutes"},
                    "servings": {"type": "integer", "description": "Number of servings"},
                    "difficulty": {
                        "type": "string",
                        "enum": ["Easy", "Medium", "Hard"],
                        "description": "Difficulty level"
                    },
                    "ingredients": {
                        "type": "array",
                        "description": "List of ingredients with amounts",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": {"type": "string", "description": "Ingredient name"},
                                "amount": {"type": "string", "description": "Amount needed (e.g., 2 cups, 1 lb)"},
                                "notes": {"type": "string", "description": "Optional preparation notes"}
                            },
                            "required": ["name", "amount"]
                        }
                    },
                    "equipment": {
                        "type": "array",
                        "description": "Kitchen equipment needed from the available list",
                        "items": {"type": "string"}
                    },
                    "instructions": {
                        "type": "array",
                        "description": "Step-by-step cooking instructions",
                        "items": {
                            "type": "object",
                            "properties": {
                                "step": {"type": "integer", "description": "Step number"},
                                "instruction": {"type": "string", "description": "Detailed instruction for this step"},
                                "time": {"type": "integer", "description": "Time for this step in minutes if applicable"}
                            },
                            "required": ["step", "instruction"]
                        }
                    },
                    "tips": {
                        "type": "array",
                        "description": "Helpful cooking tips and variations",
                        "items": {"type": "string"}
                    },
                    "nutritionHighlights": {
                        "type": "array",
                        "description": "Key nutritional benefits or highlights",
                        "items": {"type": "string"}
                    }
                },
                "required": [
                    "name", "description", "prepTime", "cookTime", "totalTime", "servings",
                    "difficulty", "ingredients", "equipment", "instructions", "tips",
                    "nutritionHighlights"
                ]
            }
        },
        "required": ["recipe"]
    })
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Provider response contained no message content")]
    MissingContent,

    #[error("Failed to parse provider output as a recipe: {0}")]
    Parse(#[from] serde_json::Error),
}
