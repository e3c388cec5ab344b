use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ResponseSet, Section};
use super::scoring::ScoringError;
use super::service::{AssessmentService, ServiceError};

/// Request body carrying the selected option index per question id.
#[derive(Debug, Deserialize)]
pub struct ResponsesPayload {
    pub responses: ResponseSet,
}

/// Router builder exposing the catalog, section scoring, and the final report.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route(
            "/api/v1/assessment/sections/:section/questions",
            get(questions_handler),
        )
        .route(
            "/api/v1/assessment/sections/:section/score",
            post(score_handler),
        )
        .route("/api/v1/assessment/report", post(report_handler))
        .with_state(service)
}

pub(crate) async fn questions_handler(
    State(service): State<Arc<AssessmentService>>,
    Path(section): Path<Section>,
) -> Response {
    let questions = service.questions(section);
    (StatusCode::OK, axum::Json(questions)).into_response()
}

pub(crate) async fn score_handler(
    State(service): State<Arc<AssessmentService>>,
    Path(section): Path<Section>,
    axum::Json(payload): axum::Json<ResponsesPayload>,
) -> Response {
    match service.score_section(section, &payload.responses) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(payload): axum::Json<ResponsesPayload>,
) -> Response {
    match service.assess(&payload.responses) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ServiceError) -> Response {
    let payload = match &error {
        ServiceError::Scoring(ScoringError::IncompleteResponses { missing, .. }) => json!({
            "error": error.to_string(),
            "missing": missing,
        }),
        ServiceError::Scoring(ScoringError::InvalidOptionIndex { .. }) => json!({
            "error": error.to_string(),
        }),
    };
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
