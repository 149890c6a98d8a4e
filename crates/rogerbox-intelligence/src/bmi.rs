// ABOUTME: Body-mass-index computation and OMS-style band classification
// ABOUTME: Healthy weight range helpers used to keep maintenance targets inside the normal band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

//! BMI = weight(kg) / height(m)². The band is the sole driver of the
//! weight-category branch in the suggestion engine.
//!
//! Out-of-domain inputs are not rejected: a zero height yields an infinite
//! BMI (obesity band) and a NaN falls through every threshold to the
//! underweight band. Callers validate profiles before this point.

use rogerbox_core::constants::bmi::{NORMAL_MIN, OBESITY_MIN, OVERWEIGHT_MIN};
use rogerbox_core::models::UserProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compute BMI from weight in kilograms and height in centimeters
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// OMS adult BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// BMI of 30 or more
    Obesity,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi >= OBESITY_MIN {
            Self::Obesity
        } else if bmi >= OVERWEIGHT_MIN {
            Self::Overweight
        } else if bmi >= NORMAL_MIN {
            Self::Normal
        } else {
            Self::Underweight
        }
    }

    /// Severity rank: underweight 0 up to obesity 3
    #[must_use]
    pub const fn severity(self) -> u8 {
        match self {
            Self::Underweight => 0,
            Self::Normal => 1,
            Self::Overweight => 2,
            Self::Obesity => 3,
        }
    }

    /// Whether the band calls for a weight-loss plan
    #[must_use]
    pub const fn is_excess_weight(self) -> bool {
        matches!(self, Self::Overweight | Self::Obesity)
    }

    /// Spanish label used in presentation text
    #[must_use]
    pub const fn label_es(self) -> &'static str {
        match self {
            Self::Underweight => "bajo peso",
            Self::Normal => "peso saludable",
            Self::Overweight => "sobrepeso",
            Self::Obesity => "obesidad",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obesity => "obesity",
        })
    }
}

/// BMI and band for one profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiAssessment {
    /// Raw BMI value
    pub bmi: f64,
    /// Band the value falls in
    pub category: BmiCategory,
}

impl BmiAssessment {
    /// Assess a profile
    #[must_use]
    pub fn for_profile(profile: &UserProfile) -> Self {
        let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);
        Self {
            bmi,
            category: BmiCategory::from_bmi(bmi),
        }
    }

    /// BMI rounded to one decimal, for display
    #[must_use]
    pub fn rounded(&self) -> f64 {
        (self.bmi * 10.0).round() / 10.0
    }
}

/// Weight in kilograms that yields `bmi` at the given height
#[must_use]
pub fn weight_for_bmi(bmi: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    bmi * height_m * height_m
}

/// Smallest whole-kilogram weight whose BMI is at least `bmi_min`
#[must_use]
pub fn healthy_floor_kg(bmi_min: f64, height_cm: f64) -> f64 {
    weight_for_bmi(bmi_min, height_cm).ceil()
}
