// ABOUTME: Course progress route computing unlocked lesson, completion and days since purchase
// ABOUTME: Lesson count comes from the request or from the catalog entry of the given course
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use crate::errors::{AppError, ErrorCode};
use crate::resources::ServerResources;
use axum::{extract::State, routing::post, Json, Router};
use chrono::{NaiveDate, Utc};
use rogerbox_core::models::CourseId;
use rogerbox_intelligence::progress::CourseProgress;
use serde::Deserialize;
use std::sync::Arc;

/// Body of `POST /api/progress`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRequest {
    /// Purchase date
    pub purchased_on: NaiveDate,
    /// Course whose catalog lesson count applies when `lesson_count` is absent
    #[serde(default)]
    pub course_id: Option<CourseId>,
    /// Lessons in the course
    #[serde(default)]
    pub lesson_count: Option<u32>,
    /// Lessons marked as done
    #[serde(default)]
    pub completed_lessons: u32,
    /// Reference date; defaults to the server's current UTC date
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Progress routes
pub struct ProgressRoutes;

impl ProgressRoutes {
    /// Create all progress routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/progress", post(Self::handle_progress))
            .with_state(resources)
    }

    /// Handle POST /api/progress
    async fn handle_progress(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<ProgressRequest>,
    ) -> Result<Json<CourseProgress>, AppError> {
        let lesson_count = match (body.lesson_count, body.course_id) {
            (Some(count), _) => count,
            (None, Some(course)) => resources.catalog.get(course)?.lesson_count,
            (None, None) => {
                return Err(AppError::new(
                    ErrorCode::MissingRequiredField,
                    "Either lessonCount or courseId is required",
                ));
            }
        };
        let today = body.today.unwrap_or_else(|| Utc::now().date_naive());
        if today < body.purchased_on {
            return Err(AppError::invalid_input(
                "purchasedOn must not be after the reference date",
            ));
        }

        Ok(Json(CourseProgress::compute(
            body.purchased_on,
            today,
            lesson_count,
            body.completed_lessons,
        )))
    }
}
