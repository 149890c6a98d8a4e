// ABOUTME: Configuration module for the rogerbox-intelligence crate
// ABOUTME: Re-exports suggestion engine configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

/// Configuration error types
pub mod error;

/// Goal suggestion engine configuration
pub mod suggestion;

pub use error::ConfigError;
pub use suggestion::{DeadlinePolicy, GoalSuggestionConfig, TargetBmiConfig};
