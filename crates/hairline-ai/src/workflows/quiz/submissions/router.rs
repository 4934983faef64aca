use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CreateSubmissionRequest, SubmissionId, SubmissionView};
use super::export::export_submissions_csv;
use super::repository::{RepositoryError, SubmissionRepository};
use super::service::{QuizSubmissionService, SubmissionOutcome, SubmissionServiceError};

const FALLBACK_NOTE: &str = "Accepted without persistence (DB unavailable)";

#[derive(Debug, Deserialize)]
pub(crate) struct ListParams {
    #[serde(default)]
    limit: Option<usize>,
    #[serde(default)]
    offset: Option<usize>,
}

/// Router builder exposing the quiz-results contract.
pub fn submission_router<R>(service: Arc<QuizSubmissionService<R>>) -> Router
where
    R: SubmissionRepository + 'static,
{
    Router::new()
        .route(
            "/quiz-results",
            post(submit_handler::<R>).get(list_handler::<R>),
        )
        .route("/quiz-results/export.csv", get(export_handler::<R>))
        .route("/quiz-results/:id", get(get_handler::<R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<QuizSubmissionService<R>>>,
    axum::Json(request): axum::Json<CreateSubmissionRequest>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.submit(request) {
        SubmissionOutcome::Persisted(record) => {
            (StatusCode::CREATED, axum::Json(record)).into_response()
        }
        SubmissionOutcome::AcceptedWithoutPersistence { recommendation } => {
            let payload = json!({
                "id": serde_json::Value::Null,
                "answers": serde_json::Value::Null,
                "recommendation": recommendation,
                "note": FALLBACK_NOTE,
                "_isAcceptedFallback": true,
            });
            (StatusCode::ACCEPTED, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<QuizSubmissionService<R>>>,
    Query(params): Query<ListParams>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.list(params.limit, params.offset) {
        Ok((items, limit, offset)) => (
            StatusCode::OK,
            axum::Json(SubmissionView {
                items,
                limit,
                offset,
            }),
        )
            .into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<QuizSubmissionService<R>>>,
    Path(id): Path<u64>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.get(SubmissionId(id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(SubmissionServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "quiz result not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn export_handler<R>(
    State(service): State<Arc<QuizSubmissionService<R>>>,
    Query(params): Query<ListParams>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let page = match service.list(params.limit, params.offset) {
        Ok((items, _, _)) => items,
        Err(error) => return service_error_response(error),
    };

    match export_submissions_csv(&page) {
        Ok(csv) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            csv,
        )
            .into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn service_error_response(error: SubmissionServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
