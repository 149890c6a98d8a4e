// ABOUTME: Environment configuration for the RogerBox server
// ABOUTME: Reads port, deployment mode, Wompi credentials, HTTP client timeouts and CORS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

//! Environment-based server configuration
//!
//! Only process environment variables are read. Loading a `.env` file is left
//! to the deployment.

use crate::constants::env_config::{
    DEFAULT_HTTP_CONNECT_TIMEOUT_SECS, DEFAULT_HTTP_PORT, DEFAULT_HTTP_TIMEOUT_SECS,
    STATE_DIR_NAME,
};
use anyhow::{Context, Result};
use rogerbox_intelligence::{DeadlinePolicy, GoalSuggestionConfig};
use rogerbox_payments::{WompiConfig, WompiEnvironment};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Live deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Outbound HTTP client timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Outbound HTTP client timeouts
    pub http_client: HttpClientConfig,
    /// Payment gateway credentials
    pub wompi: WompiConfig,
    /// Allowed CORS origins; `["*"]` allows any
    pub cors_origins: Vec<String>,
    /// How suggestion deadlines are derived
    pub deadline_policy: DeadlinePolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            http_client: HttpClientConfig::default(),
            wompi: WompiConfig::new(WompiEnvironment::Sandbox, "", ""),
            cors_origins: vec!["*".to_owned()],
            deadline_policy: DeadlinePolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or if
    /// `WOMPI_ENV` or `DEADLINE_POLICY` hold an unknown value.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let wompi_env: WompiEnvironment = env_var_or("WOMPI_ENV", "sandbox")
            .parse()
            .context("Invalid WOMPI_ENV")?;

        let wompi = WompiConfig::new(
            wompi_env,
            env_var_or("WOMPI_PUBLIC_KEY", ""),
            env_var_or("WOMPI_PRIVATE_KEY", ""),
        )
        .with_secrets(
            env_var_or("WOMPI_INTEGRITY_SECRET", ""),
            env_var_or("WOMPI_EVENTS_SECRET", ""),
        );

        Ok(Self {
            http_port: parse_env("HTTP_PORT", DEFAULT_HTTP_PORT)?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            http_client: HttpClientConfig {
                timeout_secs: parse_env("HTTP_CLIENT_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?,
                connect_timeout_secs: parse_env(
                    "HTTP_CLIENT_CONNECT_TIMEOUT_SECS",
                    DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
                )?,
            },
            wompi,
            cors_origins: parse_origins(&env_var_or("CORS_ALLOWED_ORIGINS", "*")),
            deadline_policy: env_var_or("DEADLINE_POLICY", "legacy_phrases")
                .parse()
                .context("Invalid DEADLINE_POLICY")?,
        })
    }

    /// Engine tuning derived from this configuration
    #[must_use]
    pub fn suggestion_config(&self) -> GoalSuggestionConfig {
        GoalSuggestionConfig::default().with_deadline_policy(self.deadline_policy)
    }

    /// Secret-free summary for startup logs
    #[must_use]
    pub fn summary(&self) -> serde_json::Value {
        json!({
            "http_port": self.http_port,
            "environment": self.environment.to_string(),
            "wompi": {
                "environment": self.wompi.environment.to_string(),
                "base_url": self.wompi.base_url,
                "configured": self.wompi.is_configured(),
                "webhook_checks": !self.wompi.events_secret.is_empty(),
            },
            "cors_origins": self.cors_origins,
            "deadline_policy": format!("{:?}", self.deadline_policy),
        })
    }
}

/// Local state directory: `ROGERBOX_STATE_DIR`, else the platform data dir
/// joined with the application name
///
/// Only the CLI persists state; the server keeps purchases in memory.
#[must_use]
pub fn state_dir_from_env() -> PathBuf {
    env::var_os("ROGERBOX_STATE_DIR").map_or_else(
        || {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(STATE_DIR_NAME)
        },
        PathBuf::from,
    )
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key}: '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Parse comma-separated CORS origins
fn parse_origins(origins: &str) -> Vec<String> {
    if origins.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
