use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub provider: ProviderHealth,
}

#[derive(Serialize)]
pub struct ProviderHealth {
    pub configured: bool,
    pub name: Option<String>,
    pub model: Option<String>,
}

/// GET /health: liveness plus which generation path is active.
///
/// The provider is not called; a configured provider may still fail at
/// request time, in which case recipes come from the template.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider = match state.generator.provider() {
        Some(provider) => ProviderHealth {
            configured: true,
            name: Some(provider.provider_name().to_string()),
            model: Some(provider.model_name().to_string()),
        },
        None => ProviderHealth {
            configured: false,
            name: None,
            model: None,
        },
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider,
    })
}
