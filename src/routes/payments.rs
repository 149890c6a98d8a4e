// ABOUTME: Payment routes for course checkout through the configured gateway
// ABOUTME: Acceptance token, checkout, transaction refresh, purchase listing and the signed webhook
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

//! Payment routes
//!
//! Every handler goes through [`ServerResources::checkout`], so the whole
//! group answers 503 when no gateway keys are configured. The webhook reads
//! the raw body itself so malformed events get the same JSON error shape as
//! every other failure.

use crate::errors::{AppError, ErrorCode};
use crate::resources::ServerResources;
use crate::services::CheckoutRequest;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use rogerbox_core::models::{CourseId, Purchase};
use rogerbox_payments::PaymentEvent;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Query of the purchases endpoint
#[derive(Debug, Deserialize)]
pub struct PurchasesQuery {
    /// Buyer email
    pub email: String,
}

/// Purchases of one buyer
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasesResponse {
    /// Purchases, oldest first
    pub purchases: Vec<Purchase>,
    /// Courses the buyer can watch in full
    pub accessible_courses: Vec<CourseId>,
}

/// Payment routes
pub struct PaymentRoutes;

impl PaymentRoutes {
    /// Create all payment routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/payments/acceptance-token",
                get(Self::handle_acceptance_token),
            )
            .route("/api/payments/checkout", post(Self::handle_checkout))
            .route(
                "/api/payments/transactions/:id",
                get(Self::handle_get_transaction),
            )
            .route("/api/payments/purchases", get(Self::handle_purchases))
            .route("/api/payments/webhook", post(Self::handle_webhook))
            .with_state(resources)
    }

    /// Handle GET /api/payments/acceptance-token
    async fn handle_acceptance_token(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let token = resources.checkout()?.gateway().acceptance_token().await?;
        Ok((StatusCode::OK, Json(token)).into_response())
    }

    /// Handle POST /api/payments/checkout
    async fn handle_checkout(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CheckoutRequest>,
    ) -> Result<Response, AppError> {
        let receipt = resources
            .checkout()?
            .start_checkout(&body.customer_email, body.course_id, body.payment_method)
            .await?;
        Ok((StatusCode::CREATED, Json(receipt)).into_response())
    }

    /// Handle GET /api/payments/transactions/:id
    async fn handle_get_transaction(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let purchase = resources.checkout()?.refresh(&id).await?;
        Ok((StatusCode::OK, Json(purchase)).into_response())
    }

    /// Handle GET /api/payments/purchases
    async fn handle_purchases(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<PurchasesQuery>,
    ) -> Result<Response, AppError> {
        let checkout = resources.checkout()?;
        let purchases = checkout.purchases_for(&query.email);
        let accessible_courses = CourseId::ALL
            .into_iter()
            .filter(|course| checkout.has_access(&query.email, *course))
            .collect();

        Ok((
            StatusCode::OK,
            Json(PurchasesResponse {
                purchases,
                accessible_courses,
            }),
        )
            .into_response())
    }

    /// Handle POST /api/payments/webhook
    async fn handle_webhook(
        State(resources): State<Arc<ServerResources>>,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let checkout = resources.checkout()?;
        let event: PaymentEvent = serde_json::from_slice(&body).map_err(|e| {
            AppError::new(ErrorCode::InvalidFormat, "Malformed webhook event").with_source(e)
        })?;

        let outcome = match checkout.apply_event(&event)? {
            Some(purchase) => json!({
                "status": "applied",
                "reference": purchase.reference,
                "purchaseStatus": purchase.status,
            }),
            None => json!({ "status": "ignored", "event": event.event }),
        };
        Ok((StatusCode::OK, Json(outcome)).into_response())
    }
}
