// ABOUTME: Course progress derivations for the student dashboard
// ABOUTME: Current lesson unlocks, completion percentage, daily streaks and preview countdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lesson the student is on, 1-based
///
/// One lesson unlocks per day elapsed since purchase. Dates before the
/// purchase count as day zero. Returns `None` for a course with no lessons.
#[must_use]
pub fn current_lesson(purchased_on: NaiveDate, today: NaiveDate, lesson_count: u32) -> Option<u32> {
    if lesson_count == 0 {
        return None;
    }
    let elapsed = (today - purchased_on).num_days().max(0);
    let lesson = u32::try_from(elapsed.saturating_add(1)).unwrap_or(u32::MAX);
    Some(lesson.min(lesson_count))
}

/// Completed share of a course as a whole percentage
#[must_use]
pub fn progress_percentage(completed: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (f64::from(completed) / f64::from(total) * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

/// Consecutive-day activity streak
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakCounter {
    /// Length of the current streak in days
    pub days: u32,
    /// Last day activity was recorded
    pub last_active: Option<NaiveDate>,
}

impl StreakCounter {
    /// Record activity on `today`
    ///
    /// Same day leaves the streak unchanged, the next day extends it, any
    /// larger gap restarts it at one. Dates before `last_active` are ignored.
    pub fn record_activity(&mut self, today: NaiveDate) {
        match self.last_active {
            None => {
                self.days = 1;
                self.last_active = Some(today);
            }
            Some(last) => match (today - last).num_days() {
                gap if gap <= 0 => {}
                1 => {
                    self.days = self.days.saturating_add(1);
                    self.last_active = Some(today);
                }
                _ => {
                    self.days = 1;
                    self.last_active = Some(today);
                }
            },
        }
    }

    /// Streak length as seen on `today`: zero once a full day was missed
    #[must_use]
    pub fn current(&self, today: NaiveDate) -> u32 {
        match self.last_active {
            Some(last) if (today - last).num_days() <= 1 => self.days,
            _ => 0,
        }
    }
}

/// Free-preview countdown for courses the user has not bought
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewGate {
    /// Length of the free preview
    pub preview_seconds: u32,
}

impl PreviewGate {
    /// Gate for a preview of the given length
    #[must_use]
    pub const fn new(preview_seconds: u32) -> Self {
        Self { preview_seconds }
    }

    /// Seconds of preview left after `elapsed_seconds` of playback
    #[must_use]
    pub const fn remaining(&self, elapsed_seconds: u32) -> u32 {
        self.preview_seconds.saturating_sub(elapsed_seconds)
    }

    /// Whether playback must stop
    #[must_use]
    pub const fn is_locked(&self, elapsed_seconds: u32, purchased: bool) -> bool {
        !purchased && self.remaining(elapsed_seconds) == 0
    }
}

/// Progress summary for one purchased course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    /// Lessons in the course
    pub lesson_count: u32,
    /// Lessons marked as done
    pub completed_lessons: u32,
    /// Lesson unlocked for today, `None` for empty courses
    pub current_lesson: Option<u32>,
    /// Completion percentage
    pub percentage: u8,
    /// Days since purchase
    pub days_since_purchase: u32,
    /// Every lesson is done
    pub is_complete: bool,
}

impl CourseProgress {
    /// Summarize progress for a course bought on `purchased_on`
    #[must_use]
    pub fn compute(
        purchased_on: NaiveDate,
        today: NaiveDate,
        lesson_count: u32,
        completed_lessons: u32,
    ) -> Self {
        let completed_lessons = completed_lessons.min(lesson_count);
        let days = (today - purchased_on).num_days().max(0);
        Self {
            lesson_count,
            completed_lessons,
            current_lesson: current_lesson(purchased_on, today, lesson_count),
            percentage: progress_percentage(completed_lessons, lesson_count),
            days_since_purchase: u32::try_from(days).unwrap_or(u32::MAX),
            is_complete: lesson_count > 0 && completed_lessons == lesson_count,
        }
    }
}
