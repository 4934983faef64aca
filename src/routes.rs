use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use hairline_ai::workflows::quiz::answers::{AnswerSheet, QuestionnaireAnswer};
use hairline_ai::workflows::quiz::strategy::{classify_with, ClassifierOutput, ClassifierStrategy};
use hairline_ai::workflows::quiz::submissions::{
    submission_router, QuizSubmissionService, SubmissionRepository,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    pub(crate) answers: Vec<QuestionnaireAnswer>,
    #[serde(default)]
    pub(crate) strategy: ClassifierStrategy,
}

pub(crate) fn with_funnel_routes<R>(service: Arc<QuizSubmissionService<R>>) -> axum::Router
where
    R: SubmissionRepository + 'static,
{
    submission_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/quiz/assessment",
            axum::routing::post(assessment_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "service": "hairline-ai" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn assessment_endpoint(
    Json(payload): Json<AssessmentRequest>,
) -> Json<ClassifierOutput> {
    let AssessmentRequest { answers, strategy } = payload;
    let sheet = AnswerSheet::from_responses(&answers);
    Json(classify_with(strategy, &sheet))
}
