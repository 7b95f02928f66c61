use axum::extract::State;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// GET /metrics: generation counters and latency in Prometheus text format.
pub async fn prometheus_metrics(State(handle): State<Arc<PrometheusHandle>>) -> impl IntoResponse {
    handle.render()
}

/// Register descriptions for the metrics recorded by the generator.
pub fn describe_metrics() {
    metrics::describe_counter!(
        "recipe_generations_total",
        "Recipes generated, labelled by source (provider or template)"
    );
    metrics::describe_counter!(
        "recipe_provider_failures_total",
        "Provider calls that failed and fell back to the template"
    );
    metrics::describe_histogram!(
        "recipe_generation_seconds",
        "Time to produce a recipe, including any simulated delay"
    );
}
