// ABOUTME: Application constants organized by domain
// ABOUTME: BMI thresholds, suggestion tuning, service names, env defaults and gateway endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

/// Body-mass-index band thresholds (WHO/OMS adult classification)
pub mod bmi {
    /// Lower bound of the normal band; below is underweight
    pub const NORMAL_MIN: f64 = 18.5;
    /// Lower bound of the overweight band; below is normal
    pub const OVERWEIGHT_MIN: f64 = 25.0;
    /// Lower bound of the obesity band
    pub const OBESITY_MIN: f64 = 30.0;
}

/// Default tuning for the goal-suggestion engine
pub mod suggestion {
    /// Fraction of body weight suggested as loss for the obesity band
    pub const OBESITY_LOSS_RATE: f64 = 0.08;
    /// Fraction of body weight suggested as loss for the overweight band
    pub const OVERWEIGHT_LOSS_RATE: f64 = 0.07;
    /// Upper bound on any suggested loss, as a fraction of current weight
    pub const MAX_LOSS_RATE: f64 = 0.08;

    /// Target BMI for muscle gain plans
    pub const GAIN_MUSCLE_TARGET_BMI: f64 = 24.0;
    /// Target BMI for toning plans
    pub const TONE_TARGET_BMI: f64 = 22.0;
    /// Target BMI for endurance plans
    pub const ENDURANCE_TARGET_BMI: f64 = 21.0;
    /// Target BMI for strength plans
    pub const STRENGTH_TARGET_BMI: f64 = 23.0;

    /// Months added to today when the duration phrase is not recognized
    pub const DEFAULT_DEADLINE_MONTHS: u32 = 3;
}

/// Accepted domain for profile measurements
pub mod profile_limits {
    /// Minimum accepted height in centimeters
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Maximum accepted height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Minimum accepted weight in kilograms
    pub const MIN_WEIGHT_KG: f64 = 25.0;
    /// Maximum accepted weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 350.0;
    /// Earliest accepted birth year
    pub const MIN_BIRTH_YEAR: i32 = 1900;
}

/// Service names for structured logging
pub mod service_names {
    /// HTTP API server
    pub const ROGERBOX_SERVER: &str = "rogerbox-server";
    /// Command-line tool
    pub const ROGERBOX_CLI: &str = "rogerbox-cli";
}

/// Environment-driven defaults
pub mod env_config {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
    /// Default outbound request timeout in seconds
    pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
    /// Default outbound connect timeout in seconds
    pub const DEFAULT_HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Application directory name under the platform data dir
    pub const STATE_DIR_NAME: &str = "rogerbox";
}

/// Payment gateway constants
pub mod payments {
    /// Gateway name used in logs and errors
    pub const GATEWAY_NAME: &str = "wompi";
    /// Sandbox API base URL
    pub const WOMPI_SANDBOX_URL: &str = "https://sandbox.wompi.co/v1";
    /// Production API base URL
    pub const WOMPI_PRODUCTION_URL: &str = "https://production.wompi.co/v1";
    /// The only currency the gateway settles for this merchant
    pub const CURRENCY_COP: &str = "COP";
    /// Prefix for merchant references minted at checkout
    pub const REFERENCE_PREFIX: &str = "RBX";
}
