// ABOUTME: Stable course identifiers shared by the suggestion engine and the catalog
// ABOUTME: Catalog entry shape with price, lesson count and free preview length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use super::Difficulty;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a course in the RogerBox catalog
///
/// Serialized as a kebab-case slug. Titles are marketing copy and may change;
/// the slug may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseId {
    /// High volume fat-loss program for the obesity band
    QuemaGrasaTotal,
    /// Interval cardio program for the overweight band
    CardioHiitPro,
    /// Short toning program
    TonificacionExpress,
    /// Hypertrophy program
    HipertrofiaFuncional,
    /// Endurance program
    ResistenciaExtrema,
    /// Mobility and stretching program
    MovilidadYFlexibilidad,
    /// Beginner strength program
    FuerzaBase,
    /// General wellbeing and maintenance program
    BienestarIntegral,
}

impl CourseId {
    /// Every course id, in catalog order
    pub const ALL: [Self; 8] = [
        Self::QuemaGrasaTotal,
        Self::CardioHiitPro,
        Self::TonificacionExpress,
        Self::HipertrofiaFuncional,
        Self::ResistenciaExtrema,
        Self::MovilidadYFlexibilidad,
        Self::FuerzaBase,
        Self::BienestarIntegral,
    ];

    /// URL slug
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::QuemaGrasaTotal => "quema-grasa-total",
            Self::CardioHiitPro => "cardio-hiit-pro",
            Self::TonificacionExpress => "tonificacion-express",
            Self::HipertrofiaFuncional => "hipertrofia-funcional",
            Self::ResistenciaExtrema => "resistencia-extrema",
            Self::MovilidadYFlexibilidad => "movilidad-y-flexibilidad",
            Self::FuerzaBase => "fuerza-base",
            Self::BienestarIntegral => "bienestar-integral",
        }
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CourseId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.slug() == s)
            .ok_or_else(|| AppError::not_found(format!("Course '{s}'")))
    }
}

/// A course as listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Stable identifier
    pub id: CourseId,
    /// Display title
    pub title: String,
    /// One-line pitch
    pub short_description: String,
    /// Intensity tier
    pub difficulty: Difficulty,
    /// Price in Colombian pesos
    pub price_cop: u64,
    /// Number of lessons; one unlocks per day after purchase
    pub lesson_count: u32,
    /// Nominal program length in days
    pub duration_days: u32,
    /// Length of the free video preview in seconds
    pub preview_seconds: u32,
}

impl Course {
    /// Price in cents, as the payment gateway expects it
    #[must_use]
    pub const fn price_in_cents(&self) -> u64 {
        self.price_cop * 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trips_through_serde_and_from_str() {
        for id in CourseId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.slug()));
            assert_eq!(id.slug().parse::<CourseId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_slug_is_not_found() {
        let error = "yoga-avanzado".parse::<CourseId>().unwrap_err();
        assert_eq!(error.http_status(), 404);
    }
}
