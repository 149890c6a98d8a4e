// ABOUTME: Payment gateway trait shared by the Wompi client and test doubles
// ABOUTME: Covers terms acceptance, transaction creation and lookup, signing and event checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use crate::models::{AcceptanceToken, NewTransaction, PaymentEvent, Transaction};
use crate::PaymentResult;
use async_trait::async_trait;

/// Outcome of checking a webhook event checksum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureValidation {
    /// Checksum matches
    Valid,
    /// Checksum does not match or a listed property is absent
    Invalid,
    /// The event carries no checksum
    Missing,
    /// No events secret configured, so nothing can be checked
    NotConfigured,
}

/// Payment backend used by checkout
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Short gateway name for logs
    fn name(&self) -> &'static str;

    /// Fetch the merchant's current terms acceptance token
    async fn acceptance_token(&self) -> PaymentResult<AcceptanceToken>;

    /// Create a transaction
    async fn create_transaction(&self, request: &NewTransaction) -> PaymentResult<Transaction>;

    /// Fetch a transaction by gateway id
    async fn get_transaction(&self, transaction_id: &str) -> PaymentResult<Transaction>;

    /// Integrity signature binding reference, amount and currency
    fn integrity_signature(&self, reference: &str, amount_in_cents: u64, currency: &str) -> String;

    /// Check a webhook event's checksum
    fn verify_event(&self, event: &PaymentEvent) -> SignatureValidation;
}
