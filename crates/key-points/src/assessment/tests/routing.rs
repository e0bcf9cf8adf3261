use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::assessment::record::AssessmentRecord;
use crate::assessment::router::{generate_handler, submit_handler, WELCOME_MESSAGE};
use crate::assessment::service::AssessmentService;

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
        .expect("request builds")
}

#[tokio::test]
async fn root_returns_welcome_message() {
    let (service, _) = build_service();
    let response = router_with_service(service)
        .oneshot(Request::get("/").body(Body::empty()).expect("request builds"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload, json!({ "message": WELCOME_MESSAGE }));
}

#[tokio::test]
async fn generate_route_returns_sentence() {
    let (service, _) = build_service();
    let response = router_with_service(service)
        .oneshot(post_json(
            "/generate/7",
            json!({
                "compliance_officer": "Mr. Smith",
                "mlro": "Mr. Smith",
                "screening_tools": "WorldCheck"
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["assessment_text"],
        json!("The firm has appointed **Mr. Smith** as the combined Compliance Officer and MLRO, and will use **WorldCheck** for screening purposes.")
    );
}

#[tokio::test]
async fn generate_route_returns_null_when_required_field_missing() {
    let (service, _) = build_service();
    let response = router_with_service(service)
        .oneshot(post_json("/generate/10", json!({ "conditions": "an IT audit" })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload, json!({ "assessment_text": null }));
}

#[tokio::test]
async fn generate_route_rejects_unknown_points() {
    let (service, _) = build_service();
    let response = router_with_service(service)
        .oneshot(post_json("/generate/11", json!({})))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("'11'"));
}

#[tokio::test]
async fn generate_handler_rejects_mistyped_fields() {
    let (service, _) = build_service();
    let response = generate_handler::<MemoryStore>(
        State(Arc::new(service)),
        Path("9".to_string()),
        Ok(axum::Json(json!({ "disclosures": ["not", "text"] }))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn preview_route_renders_prompts() {
    let (service, store) = build_service();
    let response = router_with_service(service)
        .oneshot(post_json("/preview", json!({ "applicant_name": "Acme" })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["points"].as_array().map(Vec::len), Some(10));
    assert_eq!(
        payload["points"][0]["text"],
        json!("_Please provide input for at least one field._")
    );
    assert_eq!(payload["points"][0]["point"], json!(1));
    assert!(payload["markdown"]
        .as_str()
        .expect("markdown")
        .starts_with("# 10 Key Points Assessment: Acme"));
    assert!(store.rows().is_empty());
}

#[tokio::test]
async fn submit_route_persists_assessment() {
    let (service, store) = build_service();
    let body = serde_json::to_value(sample_record()).expect("record serializes");
    let response = router_with_service(service)
        .oneshot(post_json("/submit_assessment", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload, json!({ "message": "Assessment submitted successfully!" }));

    let rows = store.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].p9_output.as_deref(),
        Some("The firm disclosed the following: **Ongoing civil litigation involving a minority shareholder.**.")
    );
}

#[tokio::test]
async fn submit_route_rejects_malformed_json() {
    let (service, store) = build_service();
    let request = Request::post("/submit_assessment")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"p1_clients\": "))
        .expect("request builds");

    let response = router_with_service(service)
        .oneshot(request)
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(store.rows().is_empty());
}

#[tokio::test]
async fn submit_handler_surfaces_storage_failure() {
    let store = Arc::new(UnavailableStore::default());
    let service = Arc::new(AssessmentService::new(store.clone()));

    let response = submit_handler::<UnavailableStore>(
        State(service),
        Ok(axum::Json(AssessmentRecord::default())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["message"],
        json!("Error saving to database: store unavailable: database offline")
    );
    assert_eq!(store.attempts(), 1);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let (service, _) = build_service();
    let request = Request::get("/")
        .header(header::ORIGIN, "https://forms.example.com")
        .body(Body::empty())
        .expect("request builds");

    let response = router_with_service(service)
        .oneshot(request)
        .await
        .expect("route executes");

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}
