use async_trait::async_trait;
use reqwest::Client;

use crate::models::generation::GenerationRequest;
use crate::models::recipe::{ErrorResponse, RecipeResponse};

/// The single outbound call the form makes.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    async fn generate_recipe(
        &self,
        request: &GenerationRequest,
    ) -> Result<RecipeResponse, RecipeApiError>;
}

/// Calls `POST {base_url}/api/generate-recipe` on a running server.
pub struct HttpRecipeApi {
    http: Client,
    base_url: String,
}

impl HttpRecipeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn generate_recipe(
        &self,
        request: &GenerationRequest,
    ) -> Result<RecipeResponse, RecipeApiError> {
        let response = self
            .http
            .post(format!("{}/api/generate-recipe", self.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| status.to_string());
            return Err(RecipeApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RecipeApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned status {status}: {message}")]
    Status { status: u16, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::recipe::GenerationSource;
    use crate::services::template::generate_templated_recipe;
    use mockito::{Matcher, Server};

    fn sample_request() -> GenerationRequest {
        GenerationRequest {
            ingredients: vec!["beef".to_string()],
            equipment: vec!["Grill".to_string()],
            cuisine: "american".to_string(),
            time_available: 60,
            dietary_restrictions: Some(String::new()),
        }
    }

    #[tokio::test]
    async fn test_posts_request_and_parses_recipe() {
        let request = sample_request();
        let body = serde_json::to_string(&RecipeResponse {
            recipe: generate_templated_recipe(&request),
            source: GenerationSource::Template,
        })
        .unwrap();

        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/generate-recipe")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "ingredients": ["beef"],
                "cuisine": "american",
                "timeAvailable": 60
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let api = HttpRecipeApi::new(format!("{}/", server.url()));
        let response = api.generate_recipe(&request).await.unwrap();

        assert_eq!(response.recipe.name, "Classic American Comfort Food");
        assert_eq!(response.source, GenerationSource::Template);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_carries_server_message() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/generate-recipe")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "Failed to generate recipe. Please try again."}"#)
            .create_async()
            .await;

        let api = HttpRecipeApi::new(server.url());
        let result = api.generate_recipe(&sample_request()).await;

        match result {
            Err(RecipeApiError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Failed to generate recipe. Please try again.");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }
}
