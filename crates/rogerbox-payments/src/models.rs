// ABOUTME: Gateway-neutral payment types: acceptance token, payment methods, transactions, events
// ABOUTME: Field names follow the gateway's snake_case REST vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use chrono::{DateTime, Utc};
use rogerbox_core::models::PurchaseStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pre-signed terms acceptance the buyer must accept before paying
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptanceToken {
    /// Token sent back with the transaction
    pub acceptance_token: String,
    /// Link to the terms document shown to the buyer
    pub permalink: String,
}

/// PSE buyer type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PseUserType {
    /// Natural person
    Person,
    /// Company
    Business,
}

impl From<PseUserType> for u8 {
    fn from(value: PseUserType) -> Self {
        match value {
            PseUserType::Person => 0,
            PseUserType::Business => 1,
        }
    }
}

impl TryFrom<u8> for PseUserType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Person),
            1 => Ok(Self::Business),
            other => Err(format!("unknown PSE user type {other}")),
        }
    }
}

/// How the buyer pays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Tokenized card
    Card {
        /// Card token produced by the gateway's tokenization endpoint
        token: String,
        /// Number of monthly installments
        installments: u8,
    },
    /// Nequi wallet push notification
    Nequi {
        /// Phone number linked to the wallet
        phone_number: String,
    },
    /// PSE bank transfer
    Pse {
        /// Person or company
        user_type: PseUserType,
        /// Document type, e.g. "CC" or "NIT"
        user_legal_id_type: String,
        /// Document number
        user_legal_id: String,
        /// Bank code from the gateway's institution list
        financial_institution_code: String,
        /// Text shown on the bank statement
        payment_description: String,
    },
    /// Bancolombia button transfer
    BancolombiaTransfer {
        /// Always "PERSON" for consumer checkouts
        user_type: String,
        /// Text shown on the bank statement
        payment_description: String,
    },
}

impl PaymentMethod {
    /// Rail name as the gateway spells it
    #[must_use]
    pub const fn rail(&self) -> &'static str {
        match self {
            Self::Card { .. } => "CARD",
            Self::Nequi { .. } => "NEQUI",
            Self::Pse { .. } => "PSE",
            Self::BancolombiaTransfer { .. } => "BANCOLOMBIA_TRANSFER",
        }
    }
}

/// Transaction creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Accepted terms token
    pub acceptance_token: String,
    /// Amount in cents of `currency`
    pub amount_in_cents: u64,
    /// ISO currency code
    pub currency: String,
    /// Integrity signature over reference, amount and currency
    pub signature: String,
    /// Buyer email
    pub customer_email: String,
    /// Merchant reference, unique per checkout
    pub reference: String,
    /// Payment rail and its data
    pub payment_method: PaymentMethod,
    /// Where the gateway sends the buyer after async rails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

/// Transaction as reported by the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Gateway transaction id
    pub id: String,
    /// Merchant reference
    pub reference: String,
    /// Amount in cents
    pub amount_in_cents: u64,
    /// ISO currency code
    pub currency: String,
    /// Current status
    pub status: PurchaseStatus,
    /// Gateway explanation for the status
    #[serde(default)]
    pub status_message: Option<String>,
    /// Rail used
    #[serde(default)]
    pub payment_method_type: Option<String>,
    /// Rail-specific data echoed back, including async redirect links
    #[serde(default)]
    pub payment_method: Option<serde_json::Value>,
    /// Creation time on the gateway
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Bank page the buyer must visit to finish an async rail (PSE, transfer)
    #[must_use]
    pub fn async_payment_url(&self) -> Option<&str> {
        self.payment_method
            .as_ref()?
            .get("extra")?
            .get("async_payment_url")?
            .as_str()
    }
}

/// Checksum block attached to webhook events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSignature {
    /// Dotted paths into `data` whose values are hashed, in order
    pub properties: Vec<String>,
    /// Hex SHA-256 checksum
    pub checksum: String,
}

/// Webhook event pushed by the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentEvent {
    /// Event name, e.g. "transaction.updated"
    pub event: String,
    /// Event payload; holds `transaction` for transaction events
    pub data: serde_json::Value,
    /// "test" or "prod"
    #[serde(default)]
    pub environment: Option<String>,
    /// Checksum over selected payload fields
    pub signature: EventSignature,
    /// Unix timestamp in seconds, part of the checksum input
    pub timestamp: i64,
    /// Delivery time
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
}

impl PaymentEvent {
    /// Event name for transaction status changes
    pub const TRANSACTION_UPDATED: &'static str = "transaction.updated";

    /// Value at a dotted path inside `data`, rendered the way the checksum expects
    #[must_use]
    pub fn property(&self, path: &str) -> Option<String> {
        let value = path
            .split('.')
            .try_fold(&self.data, |node, key| node.get(key))?;
        match value {
            serde_json::Value::String(text) => Some(text.clone()),
            serde_json::Value::Null => Some(String::new()),
            other => Some(other.to_string()),
        }
    }

    /// Transaction carried by a `transaction.updated` event
    ///
    /// # Errors
    ///
    /// Returns the serde error when `data.transaction` is missing or malformed.
    pub fn transaction(&self) -> Result<Transaction, serde_json::Error> {
        let raw = self
            .data
            .get("transaction")
            .cloned()
            .unwrap_or(serde_json::Value::Null);
        serde_json::from_value(raw)
    }
}

/// Mint a merchant reference such as `RBX-fuerza-base-1f0c...`
#[must_use]
pub fn mint_reference(prefix: &str, item: &str) -> String {
    format!("{prefix}-{item}-{}", Uuid::new_v4().simple())
}
