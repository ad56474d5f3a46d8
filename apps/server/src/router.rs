use axum::Router;
use corbas::kernel::prelude::ApiState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(title = "CorBas", description = "Text analysis with semantic tagging"))]
struct ApiDoc;

pub(crate) fn init(state: ApiState) -> Router {
    let cors = state.config.server.cors;

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(corbas::server::router::system_router())
        .merge(corbas::server::router::analysis_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let router = Router::new().merge(openapi_routes).merge(Scalar::with_url("/api", api_doc));

    if cors { router.layer(CorsLayer::permissive()) } else { router }
}
