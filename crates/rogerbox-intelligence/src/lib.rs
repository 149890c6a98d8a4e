// ABOUTME: Goal suggestion engine, BMI classification and course progress derivations
// ABOUTME: Pure computations: no I/O, no global clock, no randomness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

#![deny(unsafe_code)]

//! # RogerBox Intelligence
//!
//! Everything in this crate is synchronous and side-effect free. The only
//! notion of time is the `today` date callers pass in, so identical inputs
//! always yield identical outputs.

/// Body-mass-index computation and OMS band classification
pub mod bmi;

/// Engine configuration and validation
pub mod config;

/// Deadline computation from duration phrases
pub mod deadline;

/// Goal suggestion engine
pub mod goal_suggestion;

/// Presentation text composed from computed plan numbers
pub mod narrative;

/// Course progress view-model derivations (current lesson, percentage, streaks, previews)
pub mod progress;

pub use bmi::{calculate_bmi, BmiAssessment, BmiCategory};
pub use config::{DeadlinePolicy, GoalSuggestionConfig};
pub use goal_suggestion::{recommendable_courses, suggest_goal, GoalSuggestionEngine, PlanKind};
