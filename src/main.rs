use axum::routing::get;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use recipe_generator::app_state::AppState;
use recipe_generator::config::AppConfig;
use recipe_generator::routes;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing recipe-generator server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);
    routes::metrics::describe_metrics();

    match config.provider_credential() {
        Some(_) => tracing::info!(
            model = %config.openai_model,
            base_url = %config.openai_base_url,
            "Provider credential found, recipes will be generated by the provider"
        ),
        None => tracing::info!("No provider credential, recipes will use the template generator"),
    }

    let state = AppState::from_config(&config);

    let app = routes::with_middleware(
        routes::api_routes(state)
            // Prometheus metrics endpoint (separate state)
            .route(
                "/metrics",
                get(routes::metrics::prometheus_metrics).with_state(prometheus_handle),
            ),
    );

    tracing::info!("Starting recipe-generator on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
