// ABOUTME: Course catalog routes listing courses, fetching one by slug and gating previews
// ABOUTME: Unknown slugs answer 404 through the CourseId parser
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use rogerbox_core::models::{Course, CourseId};
use rogerbox_intelligence::progress::PreviewGate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Response for listing courses
#[derive(Debug, Serialize, Deserialize)]
pub struct ListCoursesResponse {
    /// Courses in catalog order
    pub courses: Vec<Course>,
    /// Number of courses
    pub total: usize,
}

/// Query of the preview endpoint
#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    /// Seconds already watched
    #[serde(default)]
    pub elapsed: u32,
    /// Whether the viewer owns the course
    #[serde(default)]
    pub purchased: bool,
}

/// Preview countdown state
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    /// Course
    pub course_id: CourseId,
    /// Seconds of preview left
    pub remaining_seconds: u32,
    /// Playback must stop
    pub locked: bool,
}

/// Course routes
pub struct CourseRoutes;

impl CourseRoutes {
    /// Create all course routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/courses", get(Self::handle_list))
            .route("/api/courses/:id", get(Self::handle_get))
            .route("/api/courses/:id/preview", get(Self::handle_preview))
            .with_state(resources)
    }

    /// Handle GET /api/courses
    async fn handle_list(State(resources): State<Arc<ServerResources>>) -> Json<ListCoursesResponse> {
        let courses: Vec<Course> = resources.catalog.list().into_iter().cloned().collect();
        Json(ListCoursesResponse {
            total: courses.len(),
            courses,
        })
    }

    /// Handle GET /api/courses/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Json<Course>, AppError> {
        let id: CourseId = id.parse()?;
        Ok(Json(resources.catalog.get(id)?.clone()))
    }

    /// Handle GET /api/courses/:id/preview
    async fn handle_preview(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        Query(query): Query<PreviewQuery>,
    ) -> Result<Json<PreviewResponse>, AppError> {
        let id: CourseId = id.parse()?;
        let gate = PreviewGate::new(resources.catalog.get(id)?.preview_seconds);
        Ok(Json(PreviewResponse {
            course_id: id,
            remaining_seconds: gate.remaining(query.elapsed),
            locked: gate.is_locked(query.elapsed, query.purchased),
        }))
    }
}
