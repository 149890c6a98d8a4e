// ABOUTME: Wompi REST client for merchant acceptance tokens and transactions
// ABOUTME: Maps HTTP failures to PaymentError with retry hints; responses are unwrapped from `data`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use super::signature::{integrity_signature, EventChecksumValidator};
use super::WompiConfig;
use crate::gateway::{PaymentGateway, SignatureValidation};
use crate::http_client::shared_client;
use crate::models::{AcceptanceToken, NewTransaction, PaymentEvent, Transaction};
use crate::PaymentResult;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use rogerbox_core::constants::payments::GATEWAY_NAME;
use rogerbox_core::errors::payment::PaymentError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

/// Every Wompi response wraps its payload in `data`
#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct MerchantData {
    presigned_acceptance: AcceptanceToken,
}

/// Wompi API client
pub struct WompiClient {
    config: WompiConfig,
    client: Client,
    events: EventChecksumValidator,
}

impl WompiClient {
    /// Client on the shared connection pool
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::ConfigurationError` when the public key or base URL is empty.
    pub fn new(config: WompiConfig) -> PaymentResult<Self> {
        Self::with_client(config, shared_client().clone())
    }

    /// Client on a caller-provided `reqwest::Client`
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::ConfigurationError` when the public key or base URL is empty.
    pub fn with_client(config: WompiConfig, client: Client) -> PaymentResult<Self> {
        if config.public_key.is_empty() {
            return Err(PaymentError::ConfigurationError(
                "Wompi public key is not set".to_owned(),
            ));
        }
        if config.base_url.is_empty() {
            return Err(PaymentError::ConfigurationError(
                "Wompi base URL is not set".to_owned(),
            ));
        }
        let events = EventChecksumValidator::new(config.events_secret.clone());
        Ok(Self {
            config,
            client,
            events,
        })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &WompiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    async fn read_data<T: DeserializeOwned>(
        response: Response,
        field: &'static str,
    ) -> PaymentResult<T> {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            return Err(PaymentError::AuthenticationFailed {
                gateway: GATEWAY_NAME.to_owned(),
                message: text,
            });
        }
        if !status.is_success() {
            return Err(PaymentError::ApiError {
                gateway: GATEWAY_NAME.to_owned(),
                status_code: status.as_u16(),
                message: text,
                retryable: status.is_server_error(),
            });
        }

        serde_json::from_str::<DataEnvelope<T>>(&text)
            .map(|envelope| envelope.data)
            .map_err(|e| PaymentError::ParseError {
                gateway: GATEWAY_NAME.to_owned(),
                field,
                source: e,
            })
    }
}

#[async_trait]
impl PaymentGateway for WompiClient {
    fn name(&self) -> &'static str {
        GATEWAY_NAME
    }

    async fn acceptance_token(&self) -> PaymentResult<AcceptanceToken> {
        let url = self.url(&format!("merchants/{}", self.config.public_key));
        debug!(environment = %self.config.environment, "Fetching Wompi acceptance token");

        let response = self.client.get(&url).send().await?;
        let merchant: MerchantData = Self::read_data(response, "merchant").await?;
        Ok(merchant.presigned_acceptance)
    }

    async fn create_transaction(&self, request: &NewTransaction) -> PaymentResult<Transaction> {
        if self.config.private_key.is_empty() {
            return Err(PaymentError::ConfigurationError(
                "Wompi private key is not set".to_owned(),
            ));
        }

        let response = self
            .client
            .post(self.url("transactions"))
            .bearer_auth(&self.config.private_key)
            .json(request)
            .send()
            .await?;
        let transaction: Transaction = Self::read_data(response, "transaction").await?;

        info!(
            transaction_id = %transaction.id,
            reference = %transaction.reference,
            rail = request.payment_method.rail(),
            status = ?transaction.status,
            "Wompi transaction created"
        );
        Ok(transaction)
    }

    async fn get_transaction(&self, transaction_id: &str) -> PaymentResult<Transaction> {
        let response = self
            .client
            .get(self.url(&format!("transactions/{transaction_id}")))
            .send()
            .await?;
        Self::read_data(response, "transaction").await
    }

    fn integrity_signature(&self, reference: &str, amount_in_cents: u64, currency: &str) -> String {
        integrity_signature(
            reference,
            amount_in_cents,
            currency,
            &self.config.integrity_secret,
        )
    }

    fn verify_event(&self, event: &PaymentEvent) -> SignatureValidation {
        self.events.validate(event)
    }
}
