// ABOUTME: Domain models shared across the RogerBox crates
// ABOUTME: Re-exports profile, course, suggestion and purchase types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

/// Course identifiers and catalog entries
pub mod course;
/// User profile and goal tags
pub mod profile;
/// Purchases and payment status
pub mod purchase;
/// Goal suggestion output
pub mod suggestion;

pub use course::{Course, CourseId};
pub use profile::{DietaryHabit, Gender, GoalTag, UserProfile};
pub use purchase::{Purchase, PurchaseStatus};
pub use suggestion::{Difficulty, GoalSuggestion};
