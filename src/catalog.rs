// ABOUTME: Course catalog holding the RogerBox courses keyed by CourseId
// ABOUTME: Startup check that every course the suggestion engine can recommend exists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use crate::errors::{AppError, AppResult, ErrorCode};
use rogerbox_core::models::{Course, CourseId, Difficulty};
use rogerbox_intelligence::recommendable_courses;
use serde_json::json;
use std::collections::BTreeMap;

/// Course catalog
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: BTreeMap<CourseId, Course>,
}

fn course(
    id: CourseId,
    title: &str,
    short_description: &str,
    difficulty: Difficulty,
    price_cop: u64,
    lesson_count: u32,
    duration_days: u32,
) -> Course {
    Course {
        id,
        title: title.to_owned(),
        short_description: short_description.to_owned(),
        difficulty,
        price_cop,
        lesson_count,
        duration_days,
        preview_seconds: 120,
    }
}

impl CourseCatalog {
    /// The production catalog
    #[must_use]
    pub fn standard() -> Self {
        Self::from_courses([
            course(
                CourseId::QuemaGrasaTotal,
                "Quema Grasa Total",
                "Cardio progresivo y fuerza para perder grasa de forma segura",
                Difficulty::Hard,
                149_900,
                48,
                168,
            ),
            course(
                CourseId::CardioHiitPro,
                "Cardio HIIT Pro",
                "Intervalos de alta intensidad para acelerar tu metabolismo",
                Difficulty::Medium,
                119_900,
                36,
                112,
            ),
            course(
                CourseId::TonificacionExpress,
                "Tonificación Express",
                "Sesiones cortas para definir y tonificar todo el cuerpo",
                Difficulty::Easy,
                89_900,
                24,
                56,
            ),
            course(
                CourseId::HipertrofiaFuncional,
                "Hipertrofia Funcional",
                "Ganancia muscular con sobrecarga progresiva",
                Difficulty::Hard,
                159_900,
                48,
                112,
            ),
            course(
                CourseId::ResistenciaExtrema,
                "Resistencia Extrema",
                "Capacidad aeróbica y resistencia muscular",
                Difficulty::Medium,
                109_900,
                36,
                84,
            ),
            course(
                CourseId::MovilidadYFlexibilidad,
                "Movilidad y Flexibilidad",
                "Rutinas diarias de movilidad articular y estiramiento",
                Difficulty::Easy,
                69_900,
                28,
                56,
            ),
            course(
                CourseId::FuerzaBase,
                "Fuerza Base",
                "Técnica y fuerza en los movimientos fundamentales",
                Difficulty::Medium,
                119_900,
                36,
                84,
            ),
            course(
                CourseId::BienestarIntegral,
                "Bienestar Integral",
                "Actividad física moderada para mantener un peso saludable",
                Difficulty::Easy,
                79_900,
                28,
                56,
            ),
        ])
    }

    /// Catalog from arbitrary courses; a later duplicate id replaces an earlier one
    #[must_use]
    pub fn from_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        Self {
            courses: courses.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    /// Look up a course
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the catalog has no such course.
    pub fn get(&self, id: CourseId) -> AppResult<&Course> {
        self.courses
            .get(&id)
            .ok_or_else(|| AppError::not_found(format!("Course '{id}'")))
    }

    /// All courses in catalog order
    #[must_use]
    pub fn list(&self) -> Vec<&Course> {
        self.courses.values().collect()
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Check that every course the engine can recommend is sold here
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` listing the missing course slugs.
    pub fn verify_recommendations(&self) -> AppResult<()> {
        let missing: Vec<&str> = recommendable_courses()
            .into_iter()
            .filter(|id| !self.courses.contains_key(id))
            .map(CourseId::slug)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!(
                    "Catalog is missing recommendable courses: {}",
                    missing.join(", ")
                ),
            )
            .with_details(json!({ "missing": missing })))
        }
    }
}
