use super::ApiState;
use axum::extract::State;
use axum::http::header;
use axum::{Json, response::IntoResponse};
use corbas_derive::{api_handler, api_model};
use corbas_domain::components::PipelineComponents;
use corbas_domain::constants::SYSTEM_TAG;
use std::sync::LazyLock;
use std::time::Instant;

#[api_model(rename_all = "snake_case")]
/// Service health and loaded pipeline components.
pub(super) struct HealthResponse {
    /// Always `ok` while the process serves requests
    status: String,
    message: String,
    version: String,
    /// Seconds since the first health probe
    uptime: u64,
    /// Whether the lexicon-driven semantic tagger is active
    primary_tagger: bool,
    /// Loaded pipeline components in pipeline order
    pipes: Vec<String>,
}

const RUNNING: &str = "CorBas backend is running";

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

#[api_handler(
    get,
    path = "/health",
    responses((status = OK, description = "Health check", body = HealthResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler(State(state): State<ApiState>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "ok".to_owned(),
        message: RUNNING.to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        uptime: START_TIME.elapsed().as_secs(),
        primary_tagger: state.components.contains(PipelineComponents::SEMANTIC),
        pipes: state.components.names().map(str::to_owned).collect(),
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
