// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Test logging, fixed dates, profiles and server resources wired to the mock gateway
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `rogerbox`

use chrono::NaiveDate;
use rogerbox::catalog::CourseCatalog;
use rogerbox::config::ServerConfig;
use rogerbox::models::{Gender, GoalTag, UserProfile};
use rogerbox::resources::ServerResources;
use rogerbox::services::CheckoutService;
use rogerbox_payments::PaymentGateway;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet test logging once per test binary
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed reference date used across tests
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

/// Profile with the given measurements and goals
pub fn profile(height_cm: f64, weight_kg: f64, goals: &[GoalTag]) -> UserProfile {
    UserProfile::new("Ana", height_cm, weight_kg, Gender::Female).with_goals(goals.iter().copied())
}

/// Server resources without a payment gateway
pub fn test_resources() -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(
        ServerConfig::default(),
        Arc::new(CourseCatalog::standard()),
    ))
}

/// Server resources whose checkout talks to `gateway`
pub fn test_resources_with_gateway(gateway: Arc<dyn PaymentGateway>) -> Arc<ServerResources> {
    init_test_logging();
    let catalog = Arc::new(CourseCatalog::standard());
    let checkout = CheckoutService::new(gateway, Arc::clone(&catalog));
    Arc::new(
        ServerResources::new(ServerConfig::default(), catalog).with_checkout(Arc::new(checkout)),
    )
}
