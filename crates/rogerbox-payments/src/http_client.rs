// ABOUTME: Shared HTTP client with connection pooling for payment gateway calls
// ABOUTME: Timeouts are fixed once at server startup; later callers reuse the same pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use reqwest::{Client, ClientBuilder};
use rogerbox_core::constants::env_config::{
    DEFAULT_HTTP_CONNECT_TIMEOUT_SECS, DEFAULT_HTTP_TIMEOUT_SECS,
};
use std::sync::OnceLock;
use std::time::Duration;

static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Fix the request and connect timeouts of the shared client
///
/// Only the first call has an effect, and only if it happens before
/// [`shared_client`] is first used.
pub fn initialize_shared_client(timeout_secs: u64, connect_timeout_secs: u64) {
    let _ = CLIENT_TIMEOUTS.set((timeout_secs, connect_timeout_secs));
}

/// Shared client for gateway calls, built on first use
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS.get().copied().unwrap_or((
            DEFAULT_HTTP_TIMEOUT_SECS,
            DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
        ));

        ClientBuilder::new()
            .timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(connect_timeout))
            .user_agent(concat!("rogerbox/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
