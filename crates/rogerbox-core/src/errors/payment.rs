// ABOUTME: Structured error types for payment gateway operations
// ABOUTME: Carries HTTP status, retry hints and parse failures from the gateway client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors returned by payment gateway clients
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The request never reached the gateway or the connection dropped
    #[error("Network error talking to payment gateway: {0}")]
    NetworkError(String),

    /// The gateway answered with a non-success status
    #[error("{gateway} API error ({status_code}): {message}")]
    ApiError {
        /// Gateway name
        gateway: String,
        /// HTTP status code returned
        status_code: u16,
        /// Raw error body or message
        message: String,
        /// Whether the same request may succeed later
        retryable: bool,
    },

    /// The gateway rejected our keys
    #[error("{gateway} rejected credentials: {message}")]
    AuthenticationFailed {
        /// Gateway name
        gateway: String,
        /// Message returned by the gateway
        message: String,
    },

    /// A response body did not match the expected schema
    #[error("Failed to parse {gateway} response for {field}: {source}")]
    ParseError {
        /// Gateway name
        gateway: String,
        /// What was being parsed
        field: &'static str,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Keys or base URL are missing or malformed
    #[error("Payment gateway configuration error: {0}")]
    ConfigurationError(String),
}

impl PaymentError {
    /// Whether retrying the same request could succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::NetworkError(_) => true,
            Self::ApiError { retryable, .. } => *retryable,
            Self::AuthenticationFailed { .. }
            | Self::ParseError { .. }
            | Self::ConfigurationError(_) => false,
        }
    }
}

impl From<reqwest::Error> for PaymentError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError(error.to_string())
    }
}

impl From<PaymentError> for AppError {
    fn from(error: PaymentError) -> Self {
        let code = match &error {
            PaymentError::NetworkError(_) => ErrorCode::ExternalServiceUnavailable,
            PaymentError::ApiError { status_code, .. } if *status_code == 404 => {
                ErrorCode::ResourceNotFound
            }
            PaymentError::ApiError { status_code, .. } if (400..500).contains(status_code) => {
                ErrorCode::InvalidInput
            }
            PaymentError::ApiError { .. } | PaymentError::ParseError { .. } => {
                ErrorCode::ExternalServiceError
            }
            PaymentError::AuthenticationFailed { .. } => ErrorCode::ExternalAuthFailed,
            PaymentError::ConfigurationError(_) => ErrorCode::ConfigInvalid,
        };
        let retryable = error.is_retryable();
        Self::new(code, error.to_string())
            .with_details(serde_json::json!({ "retryable": retryable }))
            .with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_retryable() {
        let error = PaymentError::ApiError {
            gateway: "wompi".to_owned(),
            status_code: 503,
            message: "maintenance".to_owned(),
            retryable: true,
        };
        assert!(error.is_retryable());

        let app: AppError = error.into();
        assert_eq!(app.code, ErrorCode::ExternalServiceError);
        assert_eq!(app.details["retryable"], true);
    }

    #[test]
    fn test_gateway_not_found_maps_to_404() {
        let app: AppError = PaymentError::ApiError {
            gateway: "wompi".to_owned(),
            status_code: 404,
            message: "transaction not found".to_owned(),
            retryable: false,
        }
        .into();
        assert_eq!(app.http_status(), 404);
    }
}
