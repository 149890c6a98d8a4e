// ABOUTME: Main library entry point for the RogerBox fitness course platform
// ABOUTME: HTTP API, course catalog, checkout service and persisted student state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

#![deny(unsafe_code)]

//! # RogerBox
//!
//! Backend for the RogerBox fitness course marketplace. Students complete an
//! onboarding profile, receive a goal suggestion pointing at one course, buy
//! courses through Wompi and unlock one lesson per day.
//!
//! ## Architecture
//!
//! - **rogerbox-core**: errors, constants and domain models
//! - **rogerbox-intelligence**: BMI, goal suggestion and progress derivations
//! - **rogerbox-payments**: `PaymentGateway` trait and the Wompi client
//! - this crate: catalog, checkout service, state store, HTTP routes and binaries
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use rogerbox::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("RogerBox configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Courses on sale and the recommendation coverage check
pub mod catalog;

/// Environment-driven server configuration
pub mod config;

/// Structured logging setup and domain log helpers
pub mod logging;

/// CORS and request tracing middleware
pub mod middleware;

/// Shared resources handed to route handlers
pub mod resources;

/// HTTP routes
pub mod routes;

/// Domain services
pub mod services;

/// Student state with reducer and persistence
pub mod store;

pub use rogerbox_core::{constants, errors, models};
pub use rogerbox_intelligence as intelligence;
pub use rogerbox_payments as payments;
