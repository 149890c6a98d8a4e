// ABOUTME: Shared helpers for rogerbox-cli
// ABOUTME: State directory resolution, the local date and output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

pub mod display;

use chrono::{Local, NaiveDate};
use rogerbox::config::state_dir_from_env;
use std::path::PathBuf;

/// Flag value, then `ROGERBOX_STATE_DIR`, then the platform data dir
pub fn resolve_state_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(state_dir_from_env)
}

/// Today in the user's local time zone
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
