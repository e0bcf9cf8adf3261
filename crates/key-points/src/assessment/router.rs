use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use super::points::{PointError, PointNumber};
use super::record::AssessmentRecord;
use super::service::AssessmentService;
use super::store::AssessmentStore;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the 10 Key Points Assessment API. Go to /docs for details.";

#[derive(Debug, Serialize)]
pub struct SentenceResponse {
    pub assessment_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub message: String,
}

/// Router builder exposing per-point generation, preview, and submission endpoints.
pub fn assessment_router<S>(service: Arc<AssessmentService<S>>) -> Router
where
    S: AssessmentStore + 'static,
{
    Router::new()
        .route("/", get(root_handler))
        .route("/generate/:point", post(generate_handler::<S>))
        .route("/preview", post(preview_handler::<S>))
        .route("/submit_assessment", post(submit_handler::<S>))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(service)
}

pub(crate) async fn root_handler() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

pub(crate) async fn generate_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(point): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response
where
    S: AssessmentStore + 'static,
{
    let point = match point.parse::<PointNumber>() {
        Ok(point) => point,
        Err(error) => return error_response(StatusCode::NOT_FOUND, error.to_string()),
    };
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
        }
    };

    match service.generate(point, payload) {
        Ok(assessment_text) => {
            (StatusCode::OK, Json(SentenceResponse { assessment_text })).into_response()
        }
        Err(error @ PointError::InvalidPayload { .. }) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
        }
        Err(error @ PointError::UnknownPoint(_)) => {
            error_response(StatusCode::NOT_FOUND, error.to_string())
        }
    }
}

pub(crate) async fn preview_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    payload: Result<Json<AssessmentRecord>, JsonRejection>,
) -> Response
where
    S: AssessmentStore + 'static,
{
    match payload {
        Ok(Json(record)) => (StatusCode::OK, Json(service.preview(&record))).into_response(),
        Err(rejection) => error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()),
    }
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    payload: Result<Json<AssessmentRecord>, JsonRejection>,
) -> Response
where
    S: AssessmentStore + 'static,
{
    let Json(record) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
        }
    };

    let outcome = service.submit(record).await;
    let status = if outcome.is_stored() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    let message = outcome.message();
    (status, Json(SubmissionResponse { message })).into_response()
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
