// ABOUTME: Course purchase record and payment status lifecycle
// ABOUTME: Status values mirror the payment gateway transaction states
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use super::CourseId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payment status of a purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseStatus {
    /// Waiting for the gateway to settle
    Pending,
    /// Paid; the course is unlocked
    Approved,
    /// Rejected by the bank or the gateway
    Declined,
    /// Cancelled after approval
    Voided,
    /// Gateway error
    Error,
}

impl PurchaseStatus {
    /// Whether no further status change is expected
    #[must_use]
    pub const fn is_final(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Whether the course should be unlocked
    #[must_use]
    pub const fn grants_access(self) -> bool {
        matches!(self, Self::Approved)
    }
}

/// A user's purchase of one course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    /// Local identifier
    pub id: Uuid,
    /// Purchased course
    pub course_id: CourseId,
    /// Buyer email
    pub user_email: String,
    /// Merchant reference sent to the gateway
    pub reference: String,
    /// Gateway transaction id, once known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Charged amount in cents
    pub amount_in_cents: u64,
    /// Current status
    pub status: PurchaseStatus,
    /// When checkout started
    pub purchased_at: DateTime<Utc>,
}
