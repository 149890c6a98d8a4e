// ABOUTME: Progress command computing the unlocked lesson and completion of one course
// ABOUTME: Mirrors the POST /api/progress endpoint for offline use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use anyhow::{bail, Result};
use chrono::NaiveDate;
use rogerbox_intelligence::progress::CourseProgress;

/// Print a progress summary as JSON
pub fn run(purchased_on: NaiveDate, lessons: u32, completed: u32, today: NaiveDate) -> Result<()> {
    if today < purchased_on {
        bail!("--purchased-on {purchased_on} is after {today}");
    }
    let progress = CourseProgress::compute(purchased_on, today, lessons, completed);
    println!("{}", serde_json::to_string_pretty(&progress)?);
    Ok(())
}
