// ABOUTME: Payment gateway abstraction and Wompi REST client for course checkout
// ABOUTME: Acceptance tokens, transactions, integrity signatures and webhook checksum validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

#![deny(unsafe_code)]

//! # RogerBox Payments
//!
//! Checkout talks to the gateway through the [`PaymentGateway`] trait so the
//! server and tests can swap the real Wompi client for an in-process fake.
//! All calls go over plain HTTPS with `reqwest`; there is no retry policy and
//! the merchant reference is the only idempotency key.

/// Gateway trait implemented by every payment backend
pub mod gateway;
/// Shared HTTP client for gateway API calls
pub mod http_client;
/// Gateway-neutral request, transaction and event types
pub mod models;
/// Wompi (Bancolombia) gateway implementation
pub mod wompi;

pub use gateway::{PaymentGateway, SignatureValidation};
pub use http_client::{initialize_shared_client, shared_client};
pub use models::{
    AcceptanceToken, EventSignature, NewTransaction, PaymentEvent, PaymentMethod, Transaction,
};
pub use rogerbox_core::errors::payment::PaymentError;
pub use wompi::{WompiClient, WompiConfig, WompiEnvironment};

/// Result alias for gateway operations
pub type PaymentResult<T> = Result<T, PaymentError>;
