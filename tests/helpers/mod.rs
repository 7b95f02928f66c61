//! Test helper utilities for driving the HTTP API

#![allow(dead_code)]

use std::time::Duration;

use recipe_generator::app_state::AppState;
use recipe_generator::config::AppConfig;
use recipe_generator::routes;
use recipe_generator::services::generation::RecipeGenerator;
use serde_json::Value;

/// Serve the router on an ephemeral local port and return its base URL.
pub async fn spawn_app(state: AppState) -> String {
    let app = routes::with_middleware(routes::api_routes(state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server error");
    });

    format!("http://{}", addr)
}

/// State with no provider and no simulated delay.
pub fn template_only_state() -> AppState {
    AppState::new(RecipeGenerator::new(None, Duration::ZERO))
}

/// Build configuration the way the server does, from environment-style pairs.
pub fn config_from(vars: &[(&str, &str)]) -> AppConfig {
    envy::from_iter(vars.iter().map(|(k, v)| (k.to_string(), v.to_string())))
        .expect("Failed to build test config")
}

/// POST a JSON body to the generation endpoint.
pub async fn post_generate(base_url: &str, body: &Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/api/generate-recipe", base_url))
        .json(body)
        .send()
        .await
        .expect("Request to generation endpoint failed")
}
