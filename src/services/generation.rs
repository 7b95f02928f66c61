use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::time::sleep;
use tracing::{info, warn};

use crate::models::generation::GenerationRequest;
use crate::models::recipe::{GenerationSource, Recipe};
use crate::services::prompt::build_recipe_prompt;
use crate::services::provider::RecipeProvider;
use crate::services::template::generate_templated_recipe;

/// A recipe together with the path that produced it.
#[derive(Debug, Clone)]
pub struct GeneratedRecipe {
    pub recipe: Recipe,
    pub source: GenerationSource,
}

/// Chooses between the provider and the templated fallback for each request.
///
/// The provider is only present when a credential was configured. The
/// template path always succeeds, so `generate` never fails.
pub struct RecipeGenerator {
    provider: Option<Arc<dyn RecipeProvider>>,
    fallback_delay: Duration,
}

impl RecipeGenerator {
    pub fn new(provider: Option<Arc<dyn RecipeProvider>>, fallback_delay: Duration) -> Self {
        Self {
            provider,
            fallback_delay,
        }
    }

    pub fn provider(&self) -> Option<&dyn RecipeProvider> {
        self.provider.as_deref()
    }

    pub async fn generate(&self, request: &GenerationRequest) -> GeneratedRecipe {
        let start = Instant::now();

        let generated = match &self.provider {
            Some(provider) => match self.try_provider(provider.as_ref(), request).await {
                Some(recipe) => GeneratedRecipe {
                    recipe,
                    source: GenerationSource::Provider,
                },
                None => self.templated(request).await,
            },
            None => {
                info!("No provider credential configured, using templated recipe");
                self.templated(request).await
            }
        };

        metrics::counter!(
            "recipe_generations_total",
            "source" => generated.source.to_string()
        )
        .increment(1);
        metrics::histogram!("recipe_generation_seconds").record(start.elapsed().as_secs_f64());

        generated
    }

    async fn try_provider(
        &self,
        provider: &dyn RecipeProvider,
        request: &GenerationRequest,
    ) -> Option<Recipe> {
        let prompt = build_recipe_prompt(request);

        match provider.generate(&prompt).await {
            Ok(recipe) => {
                info!(
                    provider = provider.provider_name(),
                    model = provider.model_name(),
                    recipe = %recipe.name,
                    "Generated recipe with provider"
                );
                Some(recipe)
            }
            Err(e) => {
                metrics::counter!("recipe_provider_failures_total").increment(1);
                warn!(
                    provider = provider.provider_name(),
                    error = %e,
                    "Provider generation failed, falling back to templated recipe"
                );
                None
            }
        }
    }

    async fn templated(&self, request: &GenerationRequest) -> GeneratedRecipe {
        let recipe = generate_templated_recipe(request);
        if !self.fallback_delay.is_zero() {
            sleep(self.fallback_delay).await;
        }
        GeneratedRecipe {
            recipe,
            source: GenerationSource::Template,
        }
    }
}
