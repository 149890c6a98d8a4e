// ABOUTME: Route module organization for the RogerBox HTTP API
// ABOUTME: Assembles domain routers and wraps them in tracing, CORS, timeout and body-limit layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

//! Route module for the RogerBox server
//!
//! Each domain module holds route definitions and thin handlers that
//! delegate to the engine, the catalog or the checkout service.

/// Course catalog routes
pub mod courses;
/// Goal suggestion routes
pub mod goals;
/// Health check and readiness routes
pub mod health;
/// Checkout and webhook routes
pub mod payments;
/// Course progress routes
pub mod progress;

pub use courses::CourseRoutes;
pub use goals::GoalRoutes;
pub use health::HealthRoutes;
pub use payments::PaymentRoutes;
pub use progress::ProgressRoutes;

use crate::middleware::{request_tracing, setup_cors};
use crate::resources::ServerResources;
use axum::{middleware, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Largest accepted request body
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Per-request processing deadline
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the full application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(GoalRoutes::routes(Arc::clone(&resources)))
        .merge(CourseRoutes::routes(Arc::clone(&resources)))
        .merge(ProgressRoutes::routes(Arc::clone(&resources)))
        .merge(PaymentRoutes::routes(resources))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(cors)
        .layer(middleware::from_fn(request_tracing))
        .layer(TraceLayer::new_for_http())
}
