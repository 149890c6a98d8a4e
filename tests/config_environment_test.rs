// ABOUTME: Tests for environment-driven server and logging configuration
// ABOUTME: Env-mutating tests run serially so they cannot see each other's variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use rogerbox::config::{state_dir_from_env, Environment, ServerConfig};
use rogerbox::intelligence::DeadlinePolicy;
use rogerbox::logging::{LogFormat, LoggingConfig};
use rogerbox::payments::WompiEnvironment;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const CONFIG_VARS: &[&str] = &[
    "HTTP_PORT",
    "ENVIRONMENT",
    "WOMPI_ENV",
    "WOMPI_PUBLIC_KEY",
    "WOMPI_PRIVATE_KEY",
    "WOMPI_INTEGRITY_SECRET",
    "WOMPI_EVENTS_SECRET",
    "HTTP_CLIENT_TIMEOUT_SECS",
    "HTTP_CLIENT_CONNECT_TIMEOUT_SECS",
    "ROGERBOX_STATE_DIR",
    "CORS_ALLOWED_ORIGINS",
    "DEADLINE_POLICY",
    "LOG_FORMAT",
    "SERVICE_NAME",
];

fn clear_env() {
    for key in CONFIG_VARS {
        env::remove_var(key);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
}

#[test]
#[serial]
fn test_defaults_without_env() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 8081);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.wompi.environment, WompiEnvironment::Sandbox);
    assert!(!config.wompi.is_configured());
    assert_eq!(config.cors_origins, vec!["*"]);
    assert_eq!(config.deadline_policy, DeadlinePolicy::LegacyPhrases);
}

#[test]
#[serial]
fn test_values_from_env() {
    clear_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("WOMPI_ENV", "prod");
    env::set_var("WOMPI_PUBLIC_KEY", "pub_prod_x");
    env::set_var("WOMPI_PRIVATE_KEY", "prv_prod_x");
    env::set_var("WOMPI_INTEGRITY_SECRET", "prod_integrity_x");
    env::set_var("CORS_ALLOWED_ORIGINS", "https://rogerbox.co, https://app.rogerbox.co");
    env::set_var("DEADLINE_POLICY", "week_count");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 9090);
    assert!(config.environment.is_production());
    assert_eq!(config.wompi.environment, WompiEnvironment::Production);
    assert!(config.wompi.is_configured());
    assert_eq!(
        config.cors_origins,
        vec!["https://rogerbox.co", "https://app.rogerbox.co"]
    );
    assert_eq!(config.deadline_policy, DeadlinePolicy::WeekCount);
    assert_eq!(
        config.suggestion_config().deadline_policy,
        DeadlinePolicy::WeekCount
    );
}

#[test]
#[serial]
fn test_invalid_values_are_errors() {
    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
    env::set_var("WOMPI_ENV", "staging");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
    env::set_var("DEADLINE_POLICY", "months");
    assert!(ServerConfig::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_state_dir_from_env() {
    clear_env();
    assert!(state_dir_from_env().ends_with("rogerbox"));

    env::set_var("ROGERBOX_STATE_DIR", "/var/lib/rogerbox");
    let dir = state_dir_from_env();
    clear_env();
    assert_eq!(dir, PathBuf::from("/var/lib/rogerbox"));
}

#[test]
#[serial]
fn test_summary_hides_secrets() {
    clear_env();
    env::set_var("WOMPI_PUBLIC_KEY", "pub_test_x");
    env::set_var("WOMPI_PRIVATE_KEY", "prv_test_super_secret");
    env::set_var("WOMPI_INTEGRITY_SECRET", "integrity_super_secret");
    env::set_var("WOMPI_EVENTS_SECRET", "events_super_secret");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    let summary = config.summary();
    let text = summary.to_string();
    assert!(!text.contains("super_secret"));
    assert_eq!(summary["wompi"]["configured"], true);
    assert_eq!(summary["wompi"]["webhook_checks"], true);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "rogerbox-test");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "rogerbox-test");
    assert!(!config.to_stderr);
}

#[test]
fn test_cli_logging_goes_to_stderr() {
    let quiet = LoggingConfig::for_cli(false);
    assert!(quiet.to_stderr);
    assert_eq!(quiet.level, "warn");
    assert_eq!(LoggingConfig::for_cli(true).level, "debug");
}
