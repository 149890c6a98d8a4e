// ABOUTME: Domain service layer for business logic kept out of route handlers
// ABOUTME: Checkout orchestration between the course catalog and the payment gateway
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

/// Course checkout: pricing, signing, transaction creation and status tracking
pub mod checkout;

pub use checkout::{CheckoutReceipt, CheckoutRequest, CheckoutService};
