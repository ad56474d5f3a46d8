use crate::Analysis;
use crate::error::AnalysisError;
use crate::model::{AnalyzeRequest, AnalyzeResponse, ErrorResponse};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use corbas_derive::api_handler;
use corbas_domain::constants::ANALYSIS_TAG;
use corbas_kernel::server::ApiState;
use tracing::debug;

#[api_handler(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = OK, description = "Annotated tokens", body = AnalyzeResponse),
        (status = BAD_REQUEST, description = "No text provided", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Pipeline failure", body = ErrorResponse),
    ),
    tag = ANALYSIS_TAG,
)]
pub(super) async fn analyze_handler(
    State(state): State<ApiState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AnalysisError> {
    let analysis =
        state.try_get_slice::<Analysis>().map_err(|e| AnalysisError::from(e.to_string()))?;

    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected analyze body: {rejection}");
        AnalysisError::no_text()
    })?;

    analysis.analyze(request).await.map(Json)
}
