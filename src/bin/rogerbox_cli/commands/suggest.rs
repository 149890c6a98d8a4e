// ABOUTME: Suggest command running the goal engine on a profile given as flags
// ABOUTME: Optionally records the result as a completed onboarding in the local store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use crate::helpers::display::display_suggestion;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rogerbox::models::{Gender, GoalTag, UserProfile};
use rogerbox::store::{AppAction, AppStore, FileKeyValueStore};
use rogerbox_intelligence::{
    BmiAssessment, DeadlinePolicy, GoalSuggestionConfig, GoalSuggestionEngine,
};
use serde_json::json;
use tracing::info;

/// Parsed `suggest` flags
pub struct SuggestArgs {
    pub name: String,
    pub height: f64,
    pub weight: f64,
    pub gender: Gender,
    pub goals: Vec<GoalTag>,
    pub today: NaiveDate,
    pub deadline_policy: DeadlinePolicy,
    pub json: bool,
}

/// Run the engine and print the suggestion
pub async fn run(args: SuggestArgs, storage: Option<FileKeyValueStore>) -> Result<()> {
    let profile =
        UserProfile::new(args.name, args.height, args.weight, args.gender).with_goals(args.goals);
    profile.validate().context("Invalid profile")?;

    let engine = GoalSuggestionEngine::with_config(
        GoalSuggestionConfig::default().with_deadline_policy(args.deadline_policy),
    );
    let assessment = BmiAssessment::for_profile(&profile);
    let suggestion = engine.suggest(&profile, args.today);

    if args.json {
        let output = json!({
            "bmi": assessment.rounded(),
            "bmiCategory": assessment.category,
            "suggestion": &suggestion,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        display_suggestion(&assessment, &suggestion);
    }

    if let Some(storage) = storage {
        let dir = storage.dir().display().to_string();
        let store = AppStore::load(storage).await?;
        store
            .dispatch(
                AppAction::CompleteOnboarding {
                    profile,
                    suggestion,
                },
                args.today,
            )
            .await?;
        info!(state_dir = %dir, "Onboarding saved");
        eprintln!("Onboarding saved to {dir}");
    }

    Ok(())
}
