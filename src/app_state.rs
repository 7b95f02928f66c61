use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::generation::RecipeGenerator;
use crate::services::provider::{OpenAiClient, RecipeProvider};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<RecipeGenerator>,
}

impl AppState {
    pub fn new(generator: RecipeGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }

    /// Build the state from configuration. The provider is only wired in when a
    /// credential is present.
    pub fn from_config(config: &AppConfig) -> Self {
        let provider = config.provider_credential().map(|api_key| {
            Arc::new(OpenAiClient::with_base_url(
                api_key,
                config.openai_base_url.as_str(),
                config.openai_model.as_str(),
            )) as Arc<dyn RecipeProvider>
        });

        Self::new(RecipeGenerator::new(provider, config.fallback_delay()))
    }
}
