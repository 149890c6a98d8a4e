// ABOUTME: Course checkout service creating signed gateway transactions and tracking purchases
// ABOUTME: Purchases are keyed by merchant reference and updated from lookups or verified webhooks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use crate::catalog::CourseCatalog;
use crate::constants::payments::{CURRENCY_COP, REFERENCE_PREFIX};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::logging::AppLogger;
use chrono::Utc;
use dashmap::DashMap;
use rogerbox_core::models::{CourseId, Purchase, PurchaseStatus};
use rogerbox_payments::models::mint_reference;
use rogerbox_payments::{
    NewTransaction, PaymentEvent, PaymentGateway, PaymentMethod, SignatureValidation, Transaction,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

/// Checkout request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Buyer email
    pub customer_email: String,
    /// Course to buy
    pub course_id: CourseId,
    /// Payment rail and its data
    pub payment_method: PaymentMethod,
}

/// Result of starting a checkout
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    /// Recorded purchase
    pub purchase: Purchase,
    /// Gateway transaction id
    pub transaction_id: String,
    /// Bank page to finish async rails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub async_payment_url: Option<String>,
    /// Terms the buyer accepted
    pub terms_permalink: String,
}

/// Checkout orchestration
pub struct CheckoutService {
    gateway: Arc<dyn PaymentGateway>,
    catalog: Arc<CourseCatalog>,
    purchases: DashMap<String, Purchase>,
    redirect_url: Option<String>,
}

impl CheckoutService {
    /// Service over a gateway and catalog
    #[must_use]
    pub fn new(gateway: Arc<dyn PaymentGateway>, catalog: Arc<CourseCatalog>) -> Self {
        Self {
            gateway,
            catalog,
            purchases: DashMap::new(),
            redirect_url: None,
        }
    }

    /// Where async rails send the buyer when they finish
    #[must_use]
    pub fn with_redirect_url(mut self, redirect_url: impl Into<String>) -> Self {
        self.redirect_url = Some(redirect_url.into());
        self
    }

    /// Gateway in use
    #[must_use]
    pub fn gateway(&self) -> &dyn PaymentGateway {
        self.gateway.as_ref()
    }

    /// Start a checkout
    ///
    /// Prices the course from the catalog, mints a fresh reference, signs it,
    /// creates the gateway transaction and records the purchase with the
    /// status the gateway reported.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a malformed email, `ResourceNotFound` for a
    /// course missing from the catalog, or the gateway error mapped to `AppError`.
    pub async fn start_checkout(
        &self,
        user_email: &str,
        course_id: CourseId,
        payment_method: PaymentMethod,
    ) -> AppResult<CheckoutReceipt> {
        let user_email = user_email.trim();
        if !is_plausible_email(user_email) {
            return Err(AppError::invalid_input(format!(
                "Invalid customer email '{user_email}'"
            )));
        }

        let course = self.catalog.get(course_id)?;
        let amount_in_cents = course.price_in_cents();

        let acceptance = self.gateway.acceptance_token().await?;
        let reference = mint_reference(REFERENCE_PREFIX, course_id.slug());
        let signature = self
            .gateway
            .integrity_signature(&reference, amount_in_cents, CURRENCY_COP);

        let request = NewTransaction {
            acceptance_token: acceptance.acceptance_token,
            amount_in_cents,
            currency: CURRENCY_COP.to_owned(),
            signature,
            customer_email: user_email.to_owned(),
            reference: reference.clone(),
            payment_method,
            redirect_url: self.redirect_url.clone(),
        };
        let transaction = self.gateway.create_transaction(&request).await?;

        let purchase = Purchase {
            id: Uuid::new_v4(),
            course_id,
            user_email: user_email.to_owned(),
            reference: reference.clone(),
            transaction_id: Some(transaction.id.clone()),
            amount_in_cents,
            status: transaction.status,
            purchased_at: Utc::now(),
        };
        self.purchases.insert(reference.clone(), purchase.clone());

        AppLogger::log_checkout_event(
            &reference,
            course_id.slug(),
            "created",
            &format!("{:?}", transaction.status),
        );

        Ok(CheckoutReceipt {
            purchase,
            async_payment_url: transaction.async_payment_url().map(str::to_owned),
            transaction_id: transaction.id,
            terms_permalink: acceptance.permalink,
        })
    }

    /// Re-read a transaction from the gateway and update its purchase
    ///
    /// # Errors
    ///
    /// Returns the gateway error, `ResourceNotFound` when no purchase carries
    /// the transaction's reference, or `InvalidInput` on an amount mismatch.
    pub async fn refresh(&self, transaction_id: &str) -> AppResult<Purchase> {
        let transaction = self.gateway.get_transaction(transaction_id).await?;
        self.apply_transaction(&transaction, "refreshed")
    }

    /// Apply a webhook event after checking its checksum
    ///
    /// Returns `Ok(None)` for verified events that are not transaction updates.
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` for a bad or missing checksum, `ConfigMissing`
    /// when no events secret is configured, `InvalidInput` for a malformed
    /// transaction payload, and the errors of applying the transaction.
    pub fn apply_event(&self, event: &PaymentEvent) -> AppResult<Option<Purchase>> {
        match self.gateway.verify_event(event) {
            SignatureValidation::Valid => {}
            SignatureValidation::NotConfigured => {
                return Err(AppError::new(
                    ErrorCode::ConfigMissing,
                    "Webhook events secret is not configured",
                ));
            }
            SignatureValidation::Invalid | SignatureValidation::Missing => {
                AppLogger::log_security_event("webhook_checksum_rejected", &event.event);
                return Err(AppError::auth_invalid("Webhook checksum mismatch"));
            }
        }

        if event.event != PaymentEvent::TRANSACTION_UPDATED {
            return Ok(None);
        }

        let transaction = event.transaction().map_err(|e| {
            AppError::invalid_input("Webhook event carries no valid transaction").with_source(e)
        })?;
        self.apply_transaction(&transaction, "webhook").map(Some)
    }

    fn apply_transaction(&self, transaction: &Transaction, source: &str) -> AppResult<Purchase> {
        let mut purchase = self
            .purchases
            .get_mut(&transaction.reference)
            .ok_or_else(|| {
                AppError::not_found(format!("Purchase '{}'", transaction.reference))
            })?;

        if transaction.amount_in_cents != purchase.amount_in_cents
            || transaction.currency != CURRENCY_COP
        {
            warn!(
                reference = %transaction.reference,
                expected = purchase.amount_in_cents,
                received = transaction.amount_in_cents,
                currency = %transaction.currency,
                "Transaction amount does not match purchase"
            );
            return Err(AppError::invalid_input(
                "Transaction amount does not match the purchase",
            ));
        }

        // a settled purchase never goes back to pending
        if !(purchase.status.is_final() && transaction.status == PurchaseStatus::Pending) {
            purchase.status = transaction.status;
        }
        purchase.transaction_id = Some(transaction.id.clone());

        AppLogger::log_checkout_event(
            &transaction.reference,
            purchase.course_id.slug(),
            source,
            &format!("{:?}", purchase.status),
        );
        Ok(purchase.clone())
    }

    /// Purchase by merchant reference
    #[must_use]
    pub fn purchase(&self, reference: &str) -> Option<Purchase> {
        self.purchases.get(reference).map(|entry| entry.clone())
    }

    /// All purchases of one buyer, oldest first
    #[must_use]
    pub fn purchases_for(&self, user_email: &str) -> Vec<Purchase> {
        let mut purchases: Vec<Purchase> = self
            .purchases
            .iter()
            .filter(|entry| entry.user_email.eq_ignore_ascii_case(user_email))
            .map(|entry| entry.value().clone())
            .collect();
        purchases.sort_by_key(|p| p.purchased_at);
        purchases
    }

    /// Whether a buyer has an approved purchase of a course
    #[must_use]
    pub fn has_access(&self, user_email: &str, course_id: CourseId) -> bool {
        self.purchases_for(user_email)
            .iter()
            .any(|p| p.course_id == course_id && p.status.grants_access())
    }
}

fn is_plausible_email(email: &str) -> bool {
    email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_check() {
        assert!(is_plausible_email("ana@rogerbox.co"));
        assert!(!is_plausible_email("ana"));
        assert!(!is_plausible_email("@rogerbox.co"));
        assert!(!is_plausible_email("ana@localhost"));
    }
}
