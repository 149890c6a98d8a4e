// ABOUTME: HTTP middleware for the RogerBox API
// ABOUTME: CORS policy from configuration and per-request tracing with request ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

/// CORS layer built from the configured origins
pub mod cors;
/// Request id propagation and request logging
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{request_tracing, REQUEST_ID_HEADER};
