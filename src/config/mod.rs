// ABOUTME: Configuration module for the RogerBox server
// ABOUTME: Environment-driven settings for HTTP, payments, persistence and the suggestion engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

/// Environment variable parsing and the server configuration struct
pub mod environment;

pub use environment::{state_dir_from_env, Environment, HttpClientConfig, ServerConfig};
