// ABOUTME: Deterministic goal suggestion engine mapping BMI bands and goal tags to one plan
// ABOUTME: Applies the no-further-loss override, goal priority order and the 8% safety clamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

//! Goal suggestion engine
//!
//! Decision order, first match wins:
//!
//! 1. Obesity and overweight bands get a weight-loss plan sized as a fixed
//!    fraction of current weight.
//! 2. A normal-band profile asking to lose weight is redirected to a toning
//!    plan that keeps the current weight.
//! 3. Otherwise the highest-priority goal picks the plan
//!    (`gain_muscle`, `tone`, `endurance`, `flexibility`, `strength`).
//! 4. With no ranked goal, a generic moderate or maintenance plan.
//!
//! Band plans lose `round(weight * rate)`. A band plan whose rounded loss is
//! zero falls back to generic maintenance, so a loss plan never asks for
//! nothing. Goal plans are clamped so that their loss never exceeds
//! `floor(weight * max_loss_rate)`.

use crate::bmi::{calculate_bmi, healthy_floor_kg, weight_for_bmi, BmiAssessment, BmiCategory};
use crate::config::GoalSuggestionConfig;
use crate::deadline::compute_deadline;
use crate::narrative::{self, PlanOutline};
use chrono::NaiveDate;
use rogerbox_core::models::{CourseId, Difficulty, GoalSuggestion, GoalTag, UserProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Plan selected for a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    /// Obesity band weight loss
    ObesityLoss,
    /// Overweight band weight loss
    OverweightLoss,
    /// Normal band user asked to lose weight; tone instead
    ToneOverride,
    /// Muscle gain goal
    GainMuscle,
    /// Toning goal
    Tone,
    /// Endurance goal
    Endurance,
    /// Flexibility goal
    Flexibility,
    /// Strength goal
    Strength,
    /// No ranked goal, BMI above the healthy band
    GenericModerate,
    /// No ranked goal, BMI inside or below the healthy band
    GenericMaintenance,
}

/// How a plan derives its target weight
#[derive(Debug, Clone, Copy, PartialEq)]
enum TargetRule {
    /// Lose `round(weight * rate)` kilograms
    LossRate(f64),
    /// Reach the weight that yields this BMI, rounded to whole kilograms
    TargetBmi(f64),
    /// Keep the current weight; an underweight BMI is raised into the healthy band
    Maintain,
}

impl PlanKind {
    /// Every plan the engine can select
    pub const ALL: [Self; 10] = [
        Self::ObesityLoss,
        Self::OverweightLoss,
        Self::ToneOverride,
        Self::GainMuscle,
        Self::Tone,
        Self::Endurance,
        Self::Flexibility,
        Self::Strength,
        Self::GenericModerate,
        Self::GenericMaintenance,
    ];

    /// Plan driven by a ranked goal
    #[must_use]
    pub const fn for_goal(goal: GoalTag) -> Option<Self> {
        match goal {
            GoalTag::GainMuscle => Some(Self::GainMuscle),
            GoalTag::Tone => Some(Self::Tone),
            GoalTag::Endurance => Some(Self::Endurance),
            GoalTag::Flexibility => Some(Self::Flexibility),
            GoalTag::Strength => Some(Self::Strength),
            GoalTag::LoseWeight => None,
        }
    }

    /// Difficulty tier
    #[must_use]
    pub const fn difficulty(self) -> Difficulty {
        match self {
            Self::ObesityLoss | Self::GainMuscle => Difficulty::Hard,
            Self::OverweightLoss
            | Self::Tone
            | Self::Endurance
            | Self::Strength
            | Self::GenericModerate => Difficulty::Medium,
            Self::ToneOverride | Self::Flexibility | Self::GenericMaintenance => Difficulty::Easy,
        }
    }

    /// Course the plan points to
    #[must_use]
    pub const fn course(self) -> CourseId {
        match self {
            Self::ObesityLoss => CourseId::QuemaGrasaTotal,
            Self::OverweightLoss | Self::GenericModerate => CourseId::CardioHiitPro,
            Self::ToneOverride | Self::Tone => CourseId::TonificacionExpress,
            Self::GainMuscle => CourseId::HipertrofiaFuncional,
            Self::Endurance => CourseId::ResistenciaExtrema,
            Self::Flexibility => CourseId::MovilidadYFlexibilidad,
            Self::Strength => CourseId::FuerzaBase,
            Self::GenericMaintenance => CourseId::BienestarIntegral,
        }
    }

    /// Program length in weeks
    #[must_use]
    pub const fn duration_weeks(self) -> u32 {
        match self {
            Self::ObesityLoss => 24,
            Self::OverweightLoss | Self::GainMuscle => 16,
            Self::Tone | Self::Endurance | Self::Strength | Self::GenericModerate => 12,
            Self::ToneOverride | Self::Flexibility | Self::GenericMaintenance => 8,
        }
    }

    /// Duration phrase shown to the user, e.g. "24 semanas"
    #[must_use]
    pub fn estimated_duration(self) -> String {
        format!("{} semanas", self.duration_weeks())
    }

    fn target_rule(self, config: &GoalSuggestionConfig) -> TargetRule {
        match self {
            Self::ObesityLoss => TargetRule::LossRate(config.obesity_loss_rate),
            Self::OverweightLoss | Self::GenericModerate => {
                TargetRule::LossRate(config.overweight_loss_rate)
            }
            Self::GainMuscle => TargetRule::TargetBmi(config.target_bmi.gain_muscle),
            Self::Tone => TargetRule::TargetBmi(config.target_bmi.tone),
            Self::Endurance => TargetRule::TargetBmi(config.target_bmi.endurance),
            Self::Strength => TargetRule::TargetBmi(config.target_bmi.strength),
            Self::ToneOverride | Self::Flexibility | Self::GenericMaintenance => {
                TargetRule::Maintain
            }
        }
    }
}

/// Every course the engine can recommend
///
/// The catalog checks this list at startup so that a renamed or removed
/// course cannot silently break the recommendation link.
#[must_use]
pub fn recommendable_courses() -> BTreeSet<CourseId> {
    PlanKind::ALL.into_iter().map(PlanKind::course).collect()
}

/// Goal suggestion engine with configurable tuning
#[derive(Debug, Clone, Default)]
pub struct GoalSuggestionEngine {
    config: GoalSuggestionConfig,
}

impl GoalSuggestionEngine {
    /// Engine with production defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom tuning
    ///
    /// The configuration is trusted; call [`GoalSuggestionConfig::validate`]
    /// when it comes from outside the process.
    #[must_use]
    pub const fn with_config(config: GoalSuggestionConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &GoalSuggestionConfig {
        &self.config
    }

    /// Pick the plan for a profile
    #[must_use]
    pub fn select_plan(&self, profile: &UserProfile, assessment: &BmiAssessment) -> PlanKind {
        match assessment.category {
            BmiCategory::Obesity
                if self.band_loss_kg(profile.weight_kg, self.config.obesity_loss_rate) > 0.0 =>
            {
                PlanKind::ObesityLoss
            }
            BmiCategory::Overweight
                if self.band_loss_kg(profile.weight_kg, self.config.overweight_loss_rate) > 0.0 =>
            {
                PlanKind::OverweightLoss
            }
            BmiCategory::Obesity | BmiCategory::Overweight => PlanKind::GenericMaintenance,
            BmiCategory::Normal if profile.has_goal(GoalTag::LoseWeight) => PlanKind::ToneOverride,
            BmiCategory::Normal | BmiCategory::Underweight => profile
                .goals
                .iter()
                .filter_map(|goal| goal.priority().map(|rank| (rank, *goal)))
                .min_by_key(|(rank, _)| *rank)
                .and_then(|(_, goal)| PlanKind::for_goal(goal))
                .unwrap_or(if assessment.bmi > self.config.healthy_bmi_max {
                    PlanKind::GenericModerate
                } else {
                    PlanKind::GenericMaintenance
                }),
        }
    }

    /// Whole kilograms a band plan asks to lose
    fn band_loss_kg(&self, weight_kg: f64, rate: f64) -> f64 {
        (weight_kg * rate.min(self.config.max_loss_rate)).round()
    }

    /// Largest loss a goal plan may suggest: whole kilograms within `max_loss_rate`
    ///
    /// Band plans are sized by `round(weight * rate)` instead and may exceed
    /// the exact percentage by less than half a kilogram.
    #[must_use]
    pub fn max_safe_loss(&self, weight_kg: f64) -> f64 {
        (weight_kg * self.config.max_loss_rate).floor().max(0.0)
    }

    /// Target weight for a plan, after the safety clamp
    #[must_use]
    pub fn target_weight(&self, profile: &UserProfile, kind: PlanKind) -> f64 {
        let weight = profile.weight_kg;
        let raw = match kind.target_rule(&self.config) {
            TargetRule::LossRate(rate) => return weight - self.band_loss_kg(weight, rate),
            TargetRule::TargetBmi(bmi) => weight_for_bmi(bmi, profile.height_cm).round(),
            TargetRule::Maintain => {
                let bmi = calculate_bmi(weight, profile.height_cm);
                let floor = healthy_floor_kg(self.config.healthy_bmi_min, profile.height_cm);
                if bmi < self.config.healthy_bmi_min && floor.is_finite() && weight < floor {
                    floor
                } else {
                    weight
                }
            }
        };

        let max_loss = self.max_safe_loss(weight);
        if weight - raw > max_loss {
            weight - max_loss
        } else {
            raw
        }
    }

    /// Produce the suggestion for a profile, with `today` as the plan start
    #[must_use]
    pub fn suggest(&self, profile: &UserProfile, today: NaiveDate) -> GoalSuggestion {
        let assessment = BmiAssessment::for_profile(profile);
        let kind = self.select_plan(profile, &assessment);
        let target_weight = self.target_weight(profile, kind);
        let estimated_duration = kind.estimated_duration();
        let deadline = compute_deadline(today, &estimated_duration, self.config.deadline_policy);

        debug!(
            bmi = assessment.bmi,
            category = %assessment.category,
            plan = ?kind,
            target_weight,
            "Goal suggestion computed"
        );

        let outline = PlanOutline {
            kind,
            assessment,
            current_weight_kg: profile.weight_kg,
            target_weight_kg: target_weight,
            estimated_duration: &estimated_duration,
        };

        GoalSuggestion {
            title: narrative::title(&outline),
            description: narrative::description(&outline),
            target_weight,
            deadline,
            motivation: narrative::motivation(&outline, &profile.name),
            difficulty: kind.difficulty(),
            recommended_course: kind.course(),
            key_points: narrative::key_points(&outline),
            estimated_duration,
        }
    }
}

/// Suggest a goal with the default engine
#[must_use]
pub fn suggest_goal(profile: &UserProfile, today: NaiveDate) -> GoalSuggestion {
    GoalSuggestionEngine::new().suggest(profile, today)
}
