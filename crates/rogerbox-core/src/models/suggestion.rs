// ABOUTME: Goal suggestion output model and difficulty tiers
// ABOUTME: Serialized with the camelCase field names the dashboard consumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use super::CourseId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier attached to a plan or a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Beginner friendly
    Easy,
    /// Some training experience expected
    Medium,
    /// Demanding
    Hard,
}

impl Difficulty {
    /// Spanish label used in presentation text
    #[must_use]
    pub const fn label_es(self) -> &'static str {
        match self {
            Self::Easy => "fácil",
            Self::Medium => "intermedia",
            Self::Hard => "exigente",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        })
    }
}

/// One suggested goal for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSuggestion {
    /// Headline
    pub title: String,
    /// Longer explanation including the computed numbers
    pub description: String,
    /// Target weight in kilograms
    pub target_weight: f64,
    /// Date by which the goal should be reached
    pub deadline: NaiveDate,
    /// Encouragement line
    pub motivation: String,
    /// Plan difficulty
    pub difficulty: Difficulty,
    /// Duration phrase, e.g. "16 semanas"
    pub estimated_duration: String,
    /// Course the user is pointed toward
    pub recommended_course: CourseId,
    /// Ordered tips
    pub key_points: Vec<String>,
}

impl GoalSuggestion {
    /// Signed weight change the plan asks for (negative means loss)
    #[must_use]
    pub fn weight_delta(&self, current_weight_kg: f64) -> f64 {
        self.target_weight - current_weight_kg
    }
}
