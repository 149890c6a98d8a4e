// ABOUTME: Application state container with a pure reducer and pluggable key-value persistence
// ABOUTME: Dispatch reduces, persists JSON under one key and publishes snapshots on a watch channel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

//! # Application state
//!
//! [`AppState`] holds what a signed-in student sees: profile, onboarding flag,
//! current suggestion, purchased courses, completed lessons and streak.
//! [`AppState::reduce`] is the only way it changes and is pure; [`AppStore`]
//! wraps it with persistence and change notification.

/// File-backed key-value store
pub mod file;
/// In-memory key-value store
pub mod memory;

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;

use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use rogerbox_core::models::{CourseId, GoalSuggestion, UserProfile};
use rogerbox_intelligence::progress::{CourseProgress, StreakCounter};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::{watch, Mutex};
use tracing::{debug, warn};

/// Key the serialized state is stored under
pub const STATE_KEY: &str = "rogerbox-state";

/// String key-value persistence
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: String) -> AppResult<()>;

    /// Delete a value; deleting an absent key succeeds
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// Student-facing application state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    /// Profile entered during onboarding
    pub profile: Option<UserProfile>,
    /// Onboarding finished
    pub onboarding_complete: bool,
    /// Suggestion for the current profile
    pub suggestion: Option<GoalSuggestion>,
    /// Purchased courses with their purchase date
    pub purchased_courses: BTreeMap<CourseId, NaiveDate>,
    /// Completed lesson numbers per course
    pub completed_lessons: BTreeMap<CourseId, BTreeSet<u32>>,
    /// Daily training streak
    pub streak: StreakCounter,
    /// The dashboard motivation banner was closed
    pub motivation_dismissed: bool,
}

/// State transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum AppAction {
    /// Store the profile with the suggestion computed for it and mark onboarding done
    CompleteOnboarding {
        /// Onboarded profile
        profile: UserProfile,
        /// Suggestion for `profile`, computed with whatever tuning the caller uses
        suggestion: GoalSuggestion,
    },
    /// Replace the profile; the previous suggestion no longer applies
    UpdateProfile(UserProfile),
    /// Store a suggestion computed elsewhere, e.g. with custom tuning
    SetSuggestion(GoalSuggestion),
    /// Record a course purchase dated today; repeated purchases keep the first date
    PurchaseCourse(CourseId),
    /// Mark a lesson of a purchased course as done and count today toward the streak
    CompleteLesson {
        /// Course
        course: CourseId,
        /// 1-based lesson number
        lesson: u32,
    },
    /// Hide the motivation banner
    DismissMotivation,
    /// Forget everything
    Reset,
}

impl AppAction {
    /// Action name for logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CompleteOnboarding { .. } => "complete_onboarding",
            Self::UpdateProfile(_) => "update_profile",
            Self::SetSuggestion(_) => "set_suggestion",
            Self::PurchaseCourse(_) => "purchase_course",
            Self::CompleteLesson { .. } => "complete_lesson",
            Self::DismissMotivation => "dismiss_motivation",
            Self::Reset => "reset",
        }
    }
}

impl AppState {
    /// Apply an action, with `today` as the current date
    #[must_use]
    pub fn reduce(mut self, action: AppAction, today: NaiveDate) -> Self {
        match action {
            AppAction::CompleteOnboarding {
                profile,
                suggestion,
            } => {
                self.suggestion = Some(suggestion);
                self.profile = Some(profile);
                self.onboarding_complete = true;
                self.motivation_dismissed = false;
            }
            AppAction::UpdateProfile(profile) => {
                self.profile = Some(profile);
                self.suggestion = None;
            }
            AppAction::SetSuggestion(suggestion) => {
                self.suggestion = Some(suggestion);
            }
            AppAction::PurchaseCourse(course) => {
                self.purchased_courses.entry(course).or_insert(today);
            }
            AppAction::CompleteLesson { course, lesson } => {
                if lesson >= 1 && self.purchased_courses.contains_key(&course) {
                    self.completed_lessons
                        .entry(course)
                        .or_default()
                        .insert(lesson);
                    self.streak.record_activity(today);
                }
            }
            AppAction::DismissMotivation => self.motivation_dismissed = true,
            AppAction::Reset => return Self::default(),
        }
        self
    }

    /// Whether the student owns a course
    #[must_use]
    pub fn has_purchased(&self, course: CourseId) -> bool {
        self.purchased_courses.contains_key(&course)
    }

    /// Progress summary for a purchased course, `None` if not purchased
    #[must_use]
    pub fn progress_for(
        &self,
        course: CourseId,
        lesson_count: u32,
        today: NaiveDate,
    ) -> Option<CourseProgress> {
        let purchased_on = *self.purchased_courses.get(&course)?;
        let completed = self
            .completed_lessons
            .get(&course)
            .map_or(0, |lessons| {
                lessons.iter().filter(|n| **n <= lesson_count).count()
            });
        Some(CourseProgress::compute(
            purchased_on,
            today,
            lesson_count,
            u32::try_from(completed).unwrap_or(u32::MAX),
        ))
    }
}

/// State container with persistence and change notification
pub struct AppStore<K: KeyValueStore> {
    storage: K,
    state: Mutex<AppState>,
    sender: watch::Sender<AppState>,
}

impl<K: KeyValueStore> AppStore<K> {
    /// Restore state from `storage`
    ///
    /// An absent key starts from the default state. A value that no longer
    /// parses is logged and replaced by the default state on the next dispatch.
    ///
    /// # Errors
    ///
    /// Returns a storage error if reading the key fails.
    pub async fn load(storage: K) -> AppResult<Self> {
        let state = match storage.get(STATE_KEY).await? {
            None => AppState::default(),
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "Persisted state is corrupted, starting fresh");
                AppState::default()
            }),
        };
        let (sender, _) = watch::channel(state.clone());
        Ok(Self {
            storage,
            state: Mutex::new(state),
            sender,
        })
    }

    /// Receive every state published after a dispatch
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.sender.subscribe()
    }

    /// Current state
    pub async fn snapshot(&self) -> AppState {
        self.state.lock().await.clone()
    }

    /// Reduce an action, persist and publish the new state
    ///
    /// Dispatches are serialized. If persisting fails the in-memory state is
    /// left unchanged and nothing is published.
    ///
    /// # Errors
    ///
    /// Returns a serialization or storage error from persisting the state.
    pub async fn dispatch(&self, action: AppAction, today: NaiveDate) -> AppResult<AppState> {
        let mut guard = self.state.lock().await;
        debug!(action = action.name(), "Dispatching state action");

        let next = guard.clone().reduce(action, today);
        let raw = serde_json::to_string(&next)?;
        self.storage.set(STATE_KEY, raw).await?;

        guard.clone_from(&next);
        self.sender.send_replace(next.clone());
        Ok(next)
    }

    /// Delete persisted state and return to the default state
    ///
    /// # Errors
    ///
    /// Returns a storage error if the key cannot be removed.
    pub async fn clear(&self) -> AppResult<()> {
        let mut guard = self.state.lock().await;
        self.storage.remove(STATE_KEY).await?;
        *guard = AppState::default();
        self.sender.send_replace(AppState::default());
        Ok(())
    }
}
