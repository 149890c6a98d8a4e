// ABOUTME: Shared resource container handed to every route as axum state
// ABOUTME: Holds the catalog, the suggestion engine, the checkout service and the loaded configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

//! # Server Resources
//!
//! Built once at startup and shared through `Arc<ServerResources>`. The
//! checkout service is optional: without Wompi keys the server still serves
//! suggestions, courses and progress, and payment routes answer 503.

use crate::catalog::CourseCatalog;
use crate::config::ServerConfig;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::services::CheckoutService;
use rogerbox_intelligence::GoalSuggestionEngine;
use std::sync::Arc;

/// Shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Courses on sale
    pub catalog: Arc<CourseCatalog>,
    /// Goal suggestion engine tuned from configuration
    pub engine: Arc<GoalSuggestionEngine>,
    /// Checkout, absent when no payment gateway is configured
    pub checkout: Option<Arc<CheckoutService>>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Resources without a payment gateway
    #[must_use]
    pub fn new(config: ServerConfig, catalog: Arc<CourseCatalog>) -> Self {
        let engine = GoalSuggestionEngine::with_config(config.suggestion_config());
        Self {
            catalog,
            engine: Arc::new(engine),
            checkout: None,
            config: Arc::new(config),
        }
    }

    /// Attach a checkout service
    #[must_use]
    pub fn with_checkout(mut self, checkout: Arc<CheckoutService>) -> Self {
        self.checkout = Some(checkout);
        self
    }

    /// Checkout service, or 503 when payments are not configured
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceUnavailable` when no gateway was configured.
    pub fn checkout(&self) -> AppResult<&CheckoutService> {
        self.checkout.as_deref().ok_or_else(|| {
            AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                "Payment gateway is not configured",
            )
        })
    }
}
