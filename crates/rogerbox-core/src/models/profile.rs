// ABOUTME: User profile model consumed by the goal-suggestion engine
// ABOUTME: Closed goal-tag vocabulary with an explicit priority order, gender and dietary habits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use crate::constants::profile_limits::{
    MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_BIRTH_YEAR, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender as declared during onboarding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or not disclosed
    #[default]
    Other,
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" | "masculino" => Ok(Self::Male),
            "female" | "f" | "femenino" => Ok(Self::Female),
            "other" | "otro" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!("unknown gender: {other}"))),
        }
    }
}

/// Fitness objective selected by the user
///
/// The vocabulary is closed. [`GoalTag::priority`] is an exhaustive match, so
/// adding a tag forces a decision about where it ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalTag {
    /// Lose body weight
    LoseWeight,
    /// Tone muscles without large weight changes
    Tone,
    /// Build muscle mass
    GainMuscle,
    /// Improve cardiovascular endurance
    Endurance,
    /// Improve mobility and flexibility
    Flexibility,
    /// Build strength
    Strength,
}

impl GoalTag {
    /// Every tag, in declaration order
    pub const ALL: [Self; 6] = [
        Self::LoseWeight,
        Self::Tone,
        Self::GainMuscle,
        Self::Endurance,
        Self::Flexibility,
        Self::Strength,
    ];

    /// Rank used when several goals are selected; lower wins
    ///
    /// `LoseWeight` has no rank: it is resolved by the BMI band before goal
    /// ranking happens.
    #[must_use]
    pub const fn priority(self) -> Option<u8> {
        match self {
            Self::GainMuscle => Some(0),
            Self::Tone => Some(1),
            Self::Endurance => Some(2),
            Self::Flexibility => Some(3),
            Self::Strength => Some(4),
            Self::LoseWeight => None,
        }
    }

    /// Wire name of the tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoseWeight => "lose_weight",
            Self::Tone => "tone",
            Self::GainMuscle => "gain_muscle",
            Self::Endurance => "endurance",
            Self::Flexibility => "flexibility",
            Self::Strength => "strength",
        }
    }
}

impl fmt::Display for GoalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalTag {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("unknown goal tag: {s}")))
    }
}

/// Dietary habit declared during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryHabit {
    /// No meat
    Vegetarian,
    /// No animal products
    Vegan,
    /// Ketogenic
    Keto,
    /// High protein intake
    HighProtein,
    /// Reduced carbohydrates
    LowCarb,
    /// Time-restricted eating
    IntermittentFasting,
    /// Balanced diet
    Balanced,
    /// Any tag outside the known vocabulary
    #[serde(other)]
    Other,
}

/// Profile data the goal-suggestion engine reads
///
/// Field names on the wire follow the onboarding form (`height`, `weight`,
/// `birthYear`, `dietaryHabits`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Height in centimeters
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Declared gender
    #[serde(default)]
    pub gender: Gender,
    /// Selected goals, in the order the user picked them
    #[serde(default)]
    pub goals: Vec<GoalTag>,
    /// Year of birth, if given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
    /// Dietary habits, if given
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dietary_habits: Vec<DietaryHabit>,
}

impl UserProfile {
    /// Create a profile with only the measurements the engine needs
    pub fn new(name: impl Into<String>, height_cm: f64, weight_kg: f64, gender: Gender) -> Self {
        Self {
            name: name.into(),
            height_cm,
            weight_kg,
            gender,
            goals: Vec::new(),
            birth_year: None,
            dietary_habits: Vec::new(),
        }
    }

    /// Builder-style goal list
    #[must_use]
    pub fn with_goals(mut self, goals: impl IntoIterator<Item = GoalTag>) -> Self {
        self.goals = goals.into_iter().collect();
        self
    }

    /// Height in meters
    #[must_use]
    pub fn height_m(&self) -> f64 {
        self.height_cm / 100.0
    }

    /// Whether the user selected the given goal
    #[must_use]
    pub fn has_goal(&self, goal: GoalTag) -> bool {
        self.goals.contains(&goal)
    }

    /// Age in whole years on `today`, if a birth year is known
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.birth_year
            .and_then(|year| u32::try_from(today.year() - year).ok())
    }

    /// Check the profile lies within the numeric domain accepted at the API boundary
    ///
    /// The engine itself accepts any input; callers validate before invoking it.
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` for non-finite or out-of-range measurements
    /// and `INVALID_INPUT` for an empty name.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_input("name must not be empty"));
        }
        if !self.height_cm.is_finite() || !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&self.height_cm)
        {
            return Err(AppError::out_of_range(format!(
                "height must be between {MIN_HEIGHT_CM} and {MAX_HEIGHT_CM} cm, got {}",
                self.height_cm
            )));
        }
        if !self.weight_kg.is_finite() || !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&self.weight_kg)
        {
            return Err(AppError::out_of_range(format!(
                "weight must be between {MIN_WEIGHT_KG} and {MAX_WEIGHT_KG} kg, got {}",
                self.weight_kg
            )));
        }
        if let Some(year) = self.birth_year {
            if year < MIN_BIRTH_YEAR {
                return Err(AppError::out_of_range(format!(
                    "birth year must be {MIN_BIRTH_YEAR} or later, got {year}"
                )));
            }
        }
        Ok(())
    }
}
