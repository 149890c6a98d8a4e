// ABOUTME: HTTP integration tests for the RogerBox API routes
// ABOUTME: Drives the full router with middleware through tower oneshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! HTTP integration tests for every route group
//!
//! Requests go through `routes::router`, so CORS, tracing, timeout and
//! body-limit layers are exercised too.

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::mock_gateway::MockGateway;
use rogerbox::models::PurchaseStatus;
use rogerbox::routes;
use rogerbox::routes::goals::SuggestGoalResponse;
use serde_json::{json, Value};
use std::sync::Arc;

fn app() -> axum::Router {
    routes::router(common::test_resources())
}

fn app_with_gateway(gateway: Arc<MockGateway>) -> axum::Router {
    routes::router(common::test_resources_with_gateway(gateway))
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let response = AxumTestRequest::get("/health").send(app()).await;
    assert_eq!(response.status(), 200);
    assert!(response.header("x-request-id").is_some());

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let response = AxumTestRequest::get("/health")
        .header("x-request-id", "req-test-7")
        .send(app())
        .await;
    assert_eq!(response.header("x-request-id"), Some("req-test-7"));
}

#[tokio::test]
async fn test_ready_reports_payments_state() {
    let body: Value = AxumTestRequest::get("/ready").send(app()).await.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["courses"], 8);
    assert_eq!(body["payments"], false);
}

// ============================================================================
// Goals
// ============================================================================

#[tokio::test]
async fn test_suggest_goal() {
    let response = AxumTestRequest::post("/api/goals/suggest")
        .json(&json!({
            "name": "Ana",
            "height": 170,
            "weight": 90,
            "gender": "female",
            "goals": ["tone"],
            "today": "2025-06-01"
        }))
        .send(app())
        .await;
    assert_eq!(response.status(), 200);

    let body: SuggestGoalResponse = response.json();
    assert!((body.bmi - 31.1).abs() < 1e-9);
    assert_eq!(body.bmi_category.to_string(), "obesity");
    assert!((body.suggestion.target_weight - 83.0).abs() < f64::EPSILON);
    assert_eq!(body.suggestion.recommended_course.slug(), "quema-grasa-total");
    assert_eq!(body.suggestion.deadline.to_string(), "2025-09-01");
}

#[tokio::test]
async fn test_suggest_goal_wire_names() {
    let body: Value = AxumTestRequest::post("/api/goals/suggest")
        .json(&json!({"name": "Leo", "height": 160, "weight": 50}))
        .send(app())
        .await
        .json();

    assert_eq!(body["recommendedCourse"], "bienestar-integral");
    assert_eq!(body["estimatedDuration"], "8 semanas");
    assert_eq!(body["difficulty"], "easy");
    assert_eq!(body["bmiCategory"], "normal");
    assert!(body["keyPoints"].is_array());
}

#[tokio::test]
async fn test_suggest_goal_rejects_invalid_profile() {
    let response = AxumTestRequest::post("/api/goals/suggest")
        .json(&json!({"name": "Ana", "height": 0, "weight": 70}))
        .send(app())
        .await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
}

// ============================================================================
// Courses
// ============================================================================

#[tokio::test]
async fn test_list_courses() {
    let body: Value = AxumTestRequest::get("/api/courses").send(app()).await.json();
    assert_eq!(body["total"], 8);
    assert_eq!(body["courses"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_get_course_by_slug() {
    let response = AxumTestRequest::get("/api/courses/fuerza-base")
        .send(app())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["id"], "fuerza-base");
    assert_eq!(body["priceCop"], 119_900);
}

#[tokio::test]
async fn test_unknown_course_is_404() {
    let response = AxumTestRequest::get("/api/courses/yoga-avanzado")
        .send(app())
        .await;
    assert_eq!(response.status(), 404);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_preview_locks_after_countdown() {
    let body: Value = AxumTestRequest::get("/api/courses/fuerza-base/preview?elapsed=30")
        .send(app())
        .await
        .json();
    assert_eq!(body["remainingSeconds"], 90);
    assert_eq!(body["locked"], false);

    let body: Value = AxumTestRequest::get("/api/courses/fuerza-base/preview?elapsed=500")
        .send(app())
        .await
        .json();
    assert_eq!(body["locked"], true);

    let body: Value =
        AxumTestRequest::get("/api/courses/fuerza-base/preview?elapsed=500&purchased=true")
            .send(app())
            .await
            .json();
    assert_eq!(body["locked"], false);
}

// ============================================================================
// Progress
// ============================================================================

#[tokio::test]
async fn test_progress_summary() {
    let response = AxumTestRequest::post("/api/progress")
        .json(&json!({
            "purchasedOn": "2025-06-01",
            "lessonCount": 10,
            "completedLessons": 3,
            "today": "2025-06-05"
        }))
        .send(app())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["currentLesson"], 5);
    assert_eq!(body["percentage"], 30);
    assert_eq!(body["daysSincePurchase"], 4);
    assert_eq!(body["isComplete"], false);
}

#[tokio::test]
async fn test_progress_uses_catalog_lesson_count() {
    let body: Value = AxumTestRequest::post("/api/progress")
        .json(&json!({
            "purchasedOn": "2025-06-01",
            "courseId": "tonificacion-express",
            "completedLessons": 24,
            "today": "2025-07-01"
        }))
        .send(app())
        .await
        .json();
    assert_eq!(body["lessonCount"], 24);
    assert_eq!(body["isComplete"], true);
}

#[tokio::test]
async fn test_progress_requires_lesson_count_or_course() {
    let response = AxumTestRequest::post("/api/progress")
        .json(&json!({"purchasedOn": "2025-06-01"}))
        .send(app())
        .await;
    assert_eq!(response.status(), 400);
}

// ============================================================================
// Payments
// ============================================================================

#[tokio::test]
async fn test_payments_unavailable_without_gateway() {
    let response = AxumTestRequest::get("/api/payments/acceptance-token")
        .send(app())
        .await;
    assert_eq!(response.status(), 503);
}

#[tokio::test]
async fn test_acceptance_token() {
    let body: Value = AxumTestRequest::get("/api/payments/acceptance-token")
        .send(app_with_gateway(Arc::new(MockGateway::new())))
        .await
        .json();
    assert_eq!(body["acceptance_token"], "acceptance-test-token");
}

#[tokio::test]
async fn test_checkout_then_webhook_unlocks_course() {
    let gateway = Arc::new(MockGateway::new());
    let app = app_with_gateway(Arc::clone(&gateway));

    let response = AxumTestRequest::post("/api/payments/checkout")
        .json(&json!({
            "customerEmail": "ana@rogerbox.co",
            "courseId": "cardio-hiit-pro",
            "paymentMethod": {"type": "NEQUI", "phone_number": "3107654321"}
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    let receipt: Value = response.json();
    let tx_id = receipt["transactionId"].as_str().unwrap().to_owned();
    assert_eq!(receipt["purchase"]["status"], "PENDING");

    let mut tx = gateway.transaction(&tx_id);
    tx.status = PurchaseStatus::Approved;
    let event = MockGateway::signed_event(&tx);

    let response = AxumTestRequest::post("/api/payments/webhook")
        .json(&event)
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "applied");
    assert_eq!(body["purchaseStatus"], "APPROVED");

    let body: Value = AxumTestRequest::get("/api/payments/purchases?email=ana@rogerbox.co")
        .send(app)
        .await
        .json();
    assert_eq!(body["accessibleCourses"], json!(["cardio-hiit-pro"]));
}

#[tokio::test]
async fn test_transaction_refresh_route() {
    let gateway = Arc::new(MockGateway::new());
    let app = app_with_gateway(Arc::clone(&gateway));

    let receipt: Value = AxumTestRequest::post("/api/payments/checkout")
        .json(&json!({
            "customerEmail": "leo@rogerbox.co",
            "courseId": "fuerza-base",
            "paymentMethod": {"type": "CARD", "token": "tok_test_1", "installments": 1}
        }))
        .send(app.clone())
        .await
        .json();
    let tx_id = receipt["transactionId"].as_str().unwrap();
    gateway.set_status(tx_id, PurchaseStatus::Declined);

    let body: Value = AxumTestRequest::get(&format!("/api/payments/transactions/{tx_id}"))
        .send(app)
        .await
        .json();
    assert_eq!(body["status"], "DECLINED");
}

#[tokio::test]
async fn test_webhook_with_bad_checksum_is_401() {
    let gateway = Arc::new(MockGateway::new());
    let app = app_with_gateway(Arc::clone(&gateway));

    let mut event = MockGateway::signed_event(&rogerbox_payments::Transaction {
        id: "tx-x".to_owned(),
        reference: "RBX-x".to_owned(),
        amount_in_cents: 1,
        currency: "COP".to_owned(),
        status: PurchaseStatus::Approved,
        status_message: None,
        payment_method_type: None,
        payment_method: None,
        created_at: None,
    });
    event.signature.checksum = "0".repeat(64);

    let response = AxumTestRequest::post("/api/payments/webhook")
        .json(&event)
        .send(app)
        .await;
    assert_eq!(response.status(), 401);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "AUTH_INVALID");
}

#[tokio::test]
async fn test_malformed_webhook_is_400() {
    let response = AxumTestRequest::post("/api/payments/webhook")
        .raw_body("{\"event\": 42}")
        .send(app_with_gateway(Arc::new(MockGateway::new())))
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_FORMAT");
}
