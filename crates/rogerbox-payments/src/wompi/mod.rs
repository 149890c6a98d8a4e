// ABOUTME: Wompi payment gateway module: environment, credentials and REST client
// ABOUTME: Sandbox and production share one API shape and differ only by base URL and keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

/// REST client implementing `PaymentGateway`
pub mod client;
/// Integrity signatures and event checksums
pub mod signature;

pub use client::WompiClient;
pub use signature::{integrity_signature, EventChecksumValidator};

use rogerbox_core::constants::payments::{WOMPI_PRODUCTION_URL, WOMPI_SANDBOX_URL};
use rogerbox_core::errors::payment::PaymentError;
use std::fmt;
use std::str::FromStr;

/// Which Wompi deployment to talk to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WompiEnvironment {
    /// Test keys, no money moves
    #[default]
    Sandbox,
    /// Live keys
    Production,
}

impl WompiEnvironment {
    /// API base URL
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => WOMPI_SANDBOX_URL,
            Self::Production => WOMPI_PRODUCTION_URL,
        }
    }
}

impl FromStr for WompiEnvironment {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sandbox" | "test" => Ok(Self::Sandbox),
            "production" | "prod" => Ok(Self::Production),
            other => Err(PaymentError::ConfigurationError(format!(
                "unknown Wompi environment '{other}'"
            ))),
        }
    }
}

impl fmt::Display for WompiEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        })
    }
}

/// Merchant credentials and endpoint
#[derive(Clone, Default)]
pub struct WompiConfig {
    /// Deployment
    pub environment: WompiEnvironment,
    /// API base URL, normally `environment.base_url()`
    pub base_url: String,
    /// Public key (`pub_test_...` / `pub_prod_...`)
    pub public_key: String,
    /// Private key used as bearer token for transaction creation
    pub private_key: String,
    /// Secret for transaction integrity signatures
    pub integrity_secret: String,
    /// Secret for webhook event checksums
    pub events_secret: String,
}

impl WompiConfig {
    /// Credentials for an environment, using its default base URL
    #[must_use]
    pub fn new(
        environment: WompiEnvironment,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            environment,
            base_url: environment.base_url().to_owned(),
            public_key: public_key.into(),
            private_key: private_key.into(),
            ..Self::default()
        }
    }

    /// Set both signing secrets
    #[must_use]
    pub fn with_secrets(
        mut self,
        integrity_secret: impl Into<String>,
        events_secret: impl Into<String>,
    ) -> Self {
        self.integrity_secret = integrity_secret.into();
        self.events_secret = events_secret.into();
        self
    }

    /// Point the client at another host, e.g. a local stub
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether the keys needed for checkout are present
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.public_key.is_empty()
            && !self.private_key.is_empty()
            && !self.integrity_secret.is_empty()
    }
}

impl fmt::Debug for WompiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &str| if value.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("WompiConfig")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("public_key", &self.public_key)
            .field("private_key", &redact(&self.private_key))
            .field("integrity_secret", &redact(&self.integrity_secret))
            .field("events_secret", &redact(&self.events_secret))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            "PRODUCTION".parse::<WompiEnvironment>().unwrap(),
            WompiEnvironment::Production
        );
        assert_eq!(
            "test".parse::<WompiEnvironment>().unwrap().base_url(),
            "https://sandbox.wompi.co/v1"
        );
        assert!("staging".parse::<WompiEnvironment>().is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = WompiConfig::new(WompiEnvironment::Sandbox, "pub_test_x", "prv_test_secret")
            .with_secrets("test_integrity_secret", "");
        let rendered = format!("{config:?}");
        assert!(rendered.contains("pub_test_x"));
        assert!(!rendered.contains("prv_test_secret"));
        assert!(!rendered.contains("test_integrity_secret"));
        assert!(rendered.contains("<unset>"));
    }
}
