// ABOUTME: Core types and constants for the RogerBox fitness course platform
// ABOUTME: Foundation crate with error handling, domain models and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

#![deny(unsafe_code)]

//! # RogerBox Core
//!
//! Foundation crate providing shared types and constants for the RogerBox
//! fitness course platform. The goal-suggestion engine, the payment client and
//! the server all speak in terms of the types defined here.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and payment errors
//! - **constants**: Application-wide constants organized by domain
//! - **models**: User profile, goal tags, course identifiers, suggestions and purchases

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`UserProfile`, `GoalTag`, `CourseId`, `GoalSuggestion`, `Purchase`)
pub mod models;
