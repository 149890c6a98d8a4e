// ABOUTME: Wompi integrity signatures and webhook event checksum validation
// ABOUTME: SHA-256 over concatenated fields with constant-time comparison of event checksums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

//! ## Integrity signature
//!
//! Every transaction carries `hex(sha256(reference + amount_in_cents + currency + integrity_secret))`
//! so the gateway can reject a tampered amount.
//!
//! ## Event checksum
//!
//! Webhook events list the payload paths to hash in `signature.properties`.
//! The checksum is `hex(sha256(values... + timestamp + events_secret))`.

use crate::gateway::SignatureValidation;
use crate::models::PaymentEvent;
use ring::digest;
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

fn sha256_hex(payload: &str) -> String {
    hex::encode(digest::digest(&digest::SHA256, payload.as_bytes()))
}

/// Integrity signature for a transaction
#[must_use]
pub fn integrity_signature(
    reference: &str,
    amount_in_cents: u64,
    currency: &str,
    integrity_secret: &str,
) -> String {
    sha256_hex(&format!(
        "{reference}{amount_in_cents}{currency}{integrity_secret}"
    ))
}

/// Validates webhook event checksums
pub struct EventChecksumValidator {
    events_secret: String,
}

impl EventChecksumValidator {
    /// Validator for the given events secret
    #[must_use]
    pub const fn new(events_secret: String) -> Self {
        Self { events_secret }
    }

    /// Expected checksum, or `None` when a listed property is absent
    #[must_use]
    pub fn expected_checksum(&self, event: &PaymentEvent) -> Option<String> {
        let mut payload = String::new();
        for path in &event.signature.properties {
            let Some(value) = event.property(path) else {
                warn!(property = %path, "Webhook event is missing a signed property");
                return None;
            };
            payload.push_str(&value);
        }
        payload.push_str(&event.timestamp.to_string());
        payload.push_str(&self.events_secret);
        Some(sha256_hex(&payload))
    }

    /// Check an event
    #[must_use]
    pub fn validate(&self, event: &PaymentEvent) -> SignatureValidation {
        if self.events_secret.is_empty() {
            return SignatureValidation::NotConfigured;
        }
        let received = event.signature.checksum.trim();
        if received.is_empty() {
            return SignatureValidation::Missing;
        }
        let Some(expected) = self.expected_checksum(event) else {
            return SignatureValidation::Invalid;
        };

        let received = received.to_ascii_lowercase();
        if received.as_bytes().ct_eq(expected.as_bytes()).into() {
            SignatureValidation::Valid
        } else {
            debug!(event = %event.event, "Webhook checksum mismatch");
            SignatureValidation::Invalid
        }
    }
}
