// ABOUTME: Goal suggestion route turning an onboarding profile into a personalized plan
// ABOUTME: Validates the profile, runs the engine and adds the BMI figures the dashboard shows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use crate::errors::AppError;
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use rogerbox_core::models::{GoalSuggestion, UserProfile};
use rogerbox_intelligence::{BmiAssessment, BmiCategory};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of `POST /api/goals/suggest`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestGoalRequest {
    /// Onboarding profile
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Date the deadline counts from; defaults to the server's current UTC date
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Suggestion plus the BMI it was derived from
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestGoalResponse {
    /// The suggested plan
    #[serde(flatten)]
    pub suggestion: GoalSuggestion,
    /// BMI rounded to one decimal
    pub bmi: f64,
    /// BMI band
    pub bmi_category: BmiCategory,
}

/// Goal suggestion routes
pub struct GoalRoutes;

impl GoalRoutes {
    /// Create all goal routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/goals/suggest", post(Self::handle_suggest))
            .with_state(resources)
    }

    /// Handle POST /api/goals/suggest
    async fn handle_suggest(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<SuggestGoalRequest>,
    ) -> Result<Response, AppError> {
        body.profile.validate()?;

        let today = body.today.unwrap_or_else(|| Utc::now().date_naive());
        let assessment = BmiAssessment::for_profile(&body.profile);
        let suggestion = resources.engine.suggest(&body.profile, today);

        AppLogger::log_goal_suggestion(
            assessment.bmi,
            &assessment.category.to_string(),
            suggestion.recommended_course.slug(),
            &suggestion.difficulty.to_string(),
        );

        let response = SuggestGoalResponse {
            suggestion,
            bmi: assessment.rounded(),
            bmi_category: assessment.category,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
