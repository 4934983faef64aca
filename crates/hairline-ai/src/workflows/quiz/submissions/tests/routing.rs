use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::Value;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::quiz::submissions::router;
use crate::workflows::quiz::submissions::service::{PageSettings, QuizSubmissionService};

#[tokio::test]
async fn submit_route_persists_payloads() {
    let (service, _) = build_service();
    let app = router_with_service(service);

    let body = serde_json::json!({
        "answers": [
            { "questionId": "affected-areas", "answer": ["Edges (front hairline)"] },
            { "questionId": "protective-styles-often", "answer": ["Box braids (individual plaits)"] }
        ],
        "name": "Ada O.",
        "email": "ada@example.com"
    });

    let response = app
        .oneshot(
            axum::http::Request::post("/quiz-results")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert!(payload["id"].as_u64().is_some());
    assert_eq!(payload["name"], "Ada O.");
    assert_eq!(
        payload["recommendation"]["diagnosis"]["primary"],
        "Traction Alopecia"
    );
    assert!(payload["createdAt"].is_string());
}

#[tokio::test]
async fn submit_handler_degrades_to_accepted_fallback() {
    let service = Arc::new(QuizSubmissionService::new(
        Arc::new(UnavailableRepository),
        PageSettings::default(),
    ));

    let response = router::submit_handler::<UnavailableRepository>(
        State(service),
        axum::Json(submission_request()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["id"], Value::Null);
    assert_eq!(
        payload["note"],
        "Accepted without persistence (DB unavailable)"
    );
    assert_eq!(payload["_isAcceptedFallback"], true);
    assert!(payload["recommendation"]["text"].is_string());
}

#[tokio::test]
async fn list_route_pages_results() {
    let (service, _) = build_service();
    for _ in 0..3 {
        service.submit(submission_request());
    }
    let app = router_with_service(service);

    let response = app
        .oneshot(
            axum::http::Request::get("/quiz-results?limit=2&offset=0")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["limit"], 2);
    assert_eq!(payload["offset"], 0);
    assert_eq!(payload["items"].as_array().expect("items array").len(), 2);
}

#[tokio::test]
async fn get_route_returns_stored_record_or_404() {
    let (service, _) = build_service();
    let stored = match service.submit(submission_request()) {
        crate::workflows::quiz::submissions::SubmissionOutcome::Persisted(record) => record,
        other => panic!("expected persisted outcome, got {other:?}"),
    };
    let app = router_with_service(service);

    let response = app
        .clone()
        .oneshot(
            axum::http::Request::get(format!("/quiz-results/{}", stored.id.0))
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["id"], stored.id.0);

    let response = app
        .oneshot(
            axum::http::Request::get("/quiz-results/999999999")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("not found"));
}

#[tokio::test]
async fn export_route_produces_csv() {
    let (service, _) = build_service();
    service.submit(submission_request());
    let app = router_with_service(service);

    let response = app
        .oneshot(
            axum::http::Request::get("/quiz-results/export.csv")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/csv")));
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    let csv = String::from_utf8(body.to_vec()).expect("utf8 csv");
    assert!(csv.starts_with("id,createdAt"));
    assert!(csv.contains("Regrow my edges and hairline"));
}
