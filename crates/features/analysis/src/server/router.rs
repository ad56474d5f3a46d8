use super::handler;
use corbas_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub fn analysis_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(handler::analyze_handler))
}
