use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::domain::{ScholarshipId, StudentProfile};
use super::error::PipelineError;
use super::orchestrator::ScholarshipPipeline;

pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Body accepted by the report endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub query: String,
    pub profile: StudentProfile,
    #[serde(default)]
    pub limit: Option<usize>,
    /// Evaluation date override; the pipeline's own date is used when absent.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Router builder exposing the catalog and the report pipeline over HTTP.
pub fn scholarship_router(pipeline: Arc<ScholarshipPipeline>) -> Router {
    Router::new()
        .route("/api/v1/scholarships", get(catalog_handler))
        .route("/api/v1/scholarships/report", post(report_handler))
        .route("/api/v1/scholarships/:scholarship_id", get(opportunity_handler))
        .with_state(pipeline)
}

pub(crate) async fn catalog_handler(State(pipeline): State<Arc<ScholarshipPipeline>>) -> Response {
    let payload = json!({ "scholarships": pipeline.catalog().opportunities() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn opportunity_handler(
    State(pipeline): State<Arc<ScholarshipPipeline>>,
    Path(scholarship_id): Path<String>,
) -> Response {
    let id = ScholarshipId(scholarship_id);
    match pipeline.catalog().get(&id) {
        Some(opportunity) => (StatusCode::OK, axum::Json(opportunity)).into_response(),
        None => error_response(PipelineError::NotFound {
            resource: format!("scholarship {id}"),
        }),
    }
}

pub(crate) async fn report_handler(
    State(pipeline): State<Arc<ScholarshipPipeline>>,
    axum::Json(request): axum::Json<ReportRequest>,
) -> Response {
    let limit = request.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let today = request.today.unwrap_or_else(|| pipeline.today());

    match pipeline.run_as_of(&request.query, &request.profile, limit, today) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: PipelineError) -> Response {
    let status = match &error {
        PipelineError::InputValidation { .. } | PipelineError::ContractViolation { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        PipelineError::NotFound { .. } => StatusCode::NOT_FOUND,
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
