// ABOUTME: Goal suggestion engine configuration with validated defaults
// ABOUTME: Loss rates, per-goal target BMIs, healthy band bounds and deadline policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

//! Goal Suggestion Configuration
//!
//! Defaults reproduce the production tuning. Overrides are validated so that a
//! misconfigured deployment can never suggest losing more than the safety cap.

use super::error::ConfigError;
use rogerbox_core::constants::bmi::{NORMAL_MIN, OVERWEIGHT_MIN};
use rogerbox_core::constants::suggestion::{
    ENDURANCE_TARGET_BMI, GAIN_MUSCLE_TARGET_BMI, MAX_LOSS_RATE, OBESITY_LOSS_RATE,
    OVERWEIGHT_LOSS_RATE, STRENGTH_TARGET_BMI, TONE_TARGET_BMI,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the deadline is derived from the duration phrase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlinePolicy {
    /// Match the phrase against the month-range table; unknown phrases get 3 months
    ///
    /// The engine's own phrases ("24 semanas", ...) never match the table, so
    /// in practice every deadline is three months out.
    #[default]
    LegacyPhrases,
    /// Parse "<n> semanas" and add n weeks; unknown phrases get 3 months
    WeekCount,
}

impl FromStr for DeadlinePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" | "legacy_phrases" => Ok(Self::LegacyPhrases),
            "weeks" | "week_count" => Ok(Self::WeekCount),
            other => Err(ConfigError::Parse(format!(
                "unknown deadline policy '{other}' (expected legacy_phrases or week_count)"
            ))),
        }
    }
}

/// Target BMI used by each goal-driven plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetBmiConfig {
    /// Muscle gain plan
    pub gain_muscle: f64,
    /// Toning plan
    pub tone: f64,
    /// Endurance plan
    pub endurance: f64,
    /// Strength plan
    pub strength: f64,
}

impl Default for TargetBmiConfig {
    fn default() -> Self {
        Self {
            gain_muscle: GAIN_MUSCLE_TARGET_BMI,
            tone: TONE_TARGET_BMI,
            endurance: ENDURANCE_TARGET_BMI,
            strength: STRENGTH_TARGET_BMI,
        }
    }
}

/// Goal suggestion engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSuggestionConfig {
    /// Loss rate for the obesity band
    pub obesity_loss_rate: f64,
    /// Loss rate for the overweight band (also used by the generic moderate plan)
    pub overweight_loss_rate: f64,
    /// Hard cap on any suggested loss as a fraction of current weight
    pub max_loss_rate: f64,
    /// Target BMIs for goal-driven plans
    pub target_bmi: TargetBmiConfig,
    /// Lower bound of the healthy band
    pub healthy_bmi_min: f64,
    /// Exclusive upper bound of the healthy band
    pub healthy_bmi_max: f64,
    /// Deadline derivation
    pub deadline_policy: DeadlinePolicy,
}

impl Default for GoalSuggestionConfig {
    fn default() -> Self {
        Self {
            obesity_loss_rate: OBESITY_LOSS_RATE,
            overweight_loss_rate: OVERWEIGHT_LOSS_RATE,
            max_loss_rate: MAX_LOSS_RATE,
            target_bmi: TargetBmiConfig::default(),
            healthy_bmi_min: NORMAL_MIN,
            healthy_bmi_max: OVERWEIGHT_MIN,
            deadline_policy: DeadlinePolicy::default(),
        }
    }
}

impl GoalSuggestionConfig {
    /// Same tuning with a different deadline policy
    #[must_use]
    pub fn with_deadline_policy(mut self, policy: DeadlinePolicy) -> Self {
        self.deadline_policy = policy;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` when a loss rate is not in
    /// `(0, MAX_LOSS_RATE]`, exceeds `max_loss_rate`, or when the healthy band
    /// or a target BMI is out of order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rate_ok = |rate: f64| rate > 0.0 && rate <= MAX_LOSS_RATE;

        if !rate_ok(self.max_loss_rate) {
            return Err(ConfigError::InvalidRange(
                "max_loss_rate must be in (0, 0.08]",
            ));
        }
        if !rate_ok(self.obesity_loss_rate) || self.obesity_loss_rate > self.max_loss_rate {
            return Err(ConfigError::InvalidRange(
                "obesity_loss_rate must be positive and not exceed max_loss_rate",
            ));
        }
        if !rate_ok(self.overweight_loss_rate) || self.overweight_loss_rate > self.max_loss_rate {
            return Err(ConfigError::InvalidRange(
                "overweight_loss_rate must be positive and not exceed max_loss_rate",
            ));
        }
        if self.overweight_loss_rate > self.obesity_loss_rate {
            return Err(ConfigError::InvalidRange(
                "overweight_loss_rate must not exceed obesity_loss_rate",
            ));
        }
        if !(self.healthy_bmi_min > 0.0 && self.healthy_bmi_min < self.healthy_bmi_max) {
            return Err(ConfigError::InvalidRange(
                "healthy_bmi_min must be positive and below healthy_bmi_max",
            ));
        }

        let targets = self.target_bmi;
        let in_band = |bmi: f64| bmi >= self.healthy_bmi_min && bmi < self.healthy_bmi_max;
        if ![targets.gain_muscle, targets.tone, targets.endurance, targets.strength]
            .into_iter()
            .all(in_band)
        {
            return Err(ConfigError::InvalidRange(
                "every target BMI must lie inside the healthy band",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GoalSuggestionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_loss_rate_above_cap() {
        let config = GoalSuggestionConfig {
            obesity_loss_rate: 0.12,
            ..GoalSuggestionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_rejects_target_outside_healthy_band() {
        let config = GoalSuggestionConfig {
            target_bmi: TargetBmiConfig {
                gain_muscle: 27.0,
                ..TargetBmiConfig::default()
            },
            ..GoalSuggestionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deadline_policy_parsing() {
        assert_eq!(
            "week_count".parse::<DeadlinePolicy>().unwrap(),
            DeadlinePolicy::WeekCount
        );
        assert_eq!(
            "LEGACY".parse::<DeadlinePolicy>().unwrap(),
            DeadlinePolicy::LegacyPhrases
        );
        assert!("monthly".parse::<DeadlinePolicy>().is_err());
    }
}
