// ABOUTME: In-process payment gateway for checkout and route tests
// ABOUTME: Creates transactions in memory and signs events with a fixed test secret
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use async_trait::async_trait;
use dashmap::DashMap;
use rogerbox::models::PurchaseStatus;
use rogerbox_payments::models::EventSignature;
use rogerbox_payments::wompi::signature::{integrity_signature, EventChecksumValidator};
use rogerbox_payments::{
    AcceptanceToken, NewTransaction, PaymentEvent, PaymentError, PaymentGateway,
    SignatureValidation, Transaction,
};
use serde_json::json;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

pub const TEST_INTEGRITY_SECRET: &str = "test_integrity_secret";
pub const TEST_EVENTS_SECRET: &str = "test_events_secret";

/// Gateway double keeping transactions in memory
pub struct MockGateway {
    events_secret: String,
    initial_status: PurchaseStatus,
    async_url: Option<String>,
    counter: AtomicU32,
    transactions: DashMap<String, Transaction>,
    requests: Mutex<Vec<NewTransaction>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            events_secret: TEST_EVENTS_SECRET.to_owned(),
            initial_status: PurchaseStatus::Pending,
            async_url: None,
            counter: AtomicU32::new(0),
            transactions: DashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Gateway without an events secret
    pub fn without_events_secret() -> Self {
        Self {
            events_secret: String::new(),
            ..Self::new()
        }
    }

    /// Transactions are created with this status
    pub fn with_initial_status(mut self, status: PurchaseStatus) -> Self {
        self.initial_status = status;
        self
    }

    /// Transactions carry an async payment URL, as PSE does
    pub fn with_async_url(mut self, url: &str) -> Self {
        self.async_url = Some(url.to_owned());
        self
    }

    /// Change what the gateway reports for a transaction
    pub fn set_status(&self, id: &str, status: PurchaseStatus) {
        if let Some(mut tx) = self.transactions.get_mut(id) {
            tx.status = status;
        }
    }

    /// Every request sent to `create_transaction`
    pub fn requests(&self) -> Vec<NewTransaction> {
        self.requests.lock().unwrap().clone()
    }

    /// Stored transaction
    pub fn transaction(&self, id: &str) -> Transaction {
        self.transactions.get(id).unwrap().clone()
    }

    /// A `transaction.updated` event for `tx`, signed with the test secret
    pub fn signed_event(tx: &Transaction) -> PaymentEvent {
        let mut event = PaymentEvent {
            event: PaymentEvent::TRANSACTION_UPDATED.to_owned(),
            data: json!({ "transaction": tx }),
            environment: Some("test".to_owned()),
            signature: EventSignature {
                properties: vec![
                    "transaction.id".to_owned(),
                    "transaction.status".to_owned(),
                    "transaction.amount_in_cents".to_owned(),
                ],
                checksum: String::new(),
            },
            timestamp: 1_717_200_000,
            sent_at: None,
        };
        event.signature.checksum = EventChecksumValidator::new(TEST_EVENTS_SECRET.to_owned())
            .expected_checksum(&event)
            .unwrap();
        event
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn acceptance_token(&self) -> Result<AcceptanceToken, PaymentError> {
        Ok(AcceptanceToken {
            acceptance_token: "acceptance-test-token".to_owned(),
            permalink: "https://example.test/terminos.pdf".to_owned(),
        })
    }

    async fn create_transaction(
        &self,
        request: &NewTransaction,
    ) -> Result<Transaction, PaymentError> {
        self.requests.lock().unwrap().push(request.clone());
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let tx = Transaction {
            id: format!("tx-{n}"),
            reference: request.reference.clone(),
            amount_in_cents: request.amount_in_cents,
            currency: request.currency.clone(),
            status: self.initial_status,
            status_message: None,
            payment_method_type: Some(request.payment_method.rail().to_owned()),
            payment_method: self
                .async_url
                .as_ref()
                .map(|url| json!({ "extra": { "async_payment_url": url } })),
            created_at: None,
        };
        self.transactions.insert(tx.id.clone(), tx.clone());
        Ok(tx)
    }

    async fn get_transaction(&self, id: &str) -> Result<Transaction, PaymentError> {
        self.transactions
            .get(id)
            .map(|tx| tx.clone())
            .ok_or_else(|| PaymentError::ApiError {
                gateway: "mock".to_owned(),
                status_code: 404,
                message: format!("transaction {id} not found"),
                retryable: false,
            })
    }

    fn integrity_signature(&self, reference: &str, amount_in_cents: u64, currency: &str) -> String {
        integrity_signature(reference, amount_in_cents, currency, TEST_INTEGRITY_SECRET)
    }

    fn verify_event(&self, event: &PaymentEvent) -> SignatureValidation {
        EventChecksumValidator::new(self.events_secret.clone()).validate(event)
    }
}
