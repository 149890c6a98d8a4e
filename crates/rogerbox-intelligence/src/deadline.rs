// ABOUTME: Deadline computation from estimated-duration phrases
// ABOUTME: Legacy month-range table (three-month fallback) and an opt-in week-count parser
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use crate::config::DeadlinePolicy;
use chrono::{Duration, Months, NaiveDate};
use rogerbox_core::constants::suggestion::DEFAULT_DEADLINE_MONTHS;

/// Month-range phrases recognized by the legacy policy, checked in order
///
/// None of the engine's own duration phrases contain these substrings.
const LEGACY_PHRASES: [(&str, u32); 4] = [("6-12", 12), ("3-6", 6), ("2-3", 3), ("1-2", 2)];

/// Months the legacy table assigns to a duration phrase
#[must_use]
pub fn legacy_months(duration: &str) -> u32 {
    LEGACY_PHRASES
        .iter()
        .find(|(phrase, _)| duration.contains(phrase))
        .map_or(DEFAULT_DEADLINE_MONTHS, |(_, months)| *months)
}

/// Week count in a phrase such as "16 semanas" or "1 semana"
#[must_use]
pub fn parse_weeks(duration: &str) -> Option<u32> {
    let mut words = duration.split_whitespace();
    let count = words.next()?.parse::<u32>().ok()?;
    let unit = words.next()?.to_lowercase();
    (unit.starts_with("semana") || unit.starts_with("week")).then_some(count)
}

/// Deadline for a plan starting `today`
#[must_use]
pub fn compute_deadline(today: NaiveDate, duration: &str, policy: DeadlinePolicy) -> NaiveDate {
    match policy {
        DeadlinePolicy::LegacyPhrases => add_months(today, legacy_months(duration)),
        DeadlinePolicy::WeekCount => parse_weeks(duration)
            .and_then(|weeks| today.checked_add_signed(Duration::weeks(i64::from(weeks))))
            .unwrap_or_else(|| add_months(today, DEFAULT_DEADLINE_MONTHS)),
    }
}

fn add_months(today: NaiveDate, months: u32) -> NaiveDate {
    today
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_engine_phrases_fall_back_to_three_months() {
        for phrase in ["24 semanas", "16 semanas", "12 semanas", "8 semanas"] {
            assert_eq!(legacy_months(phrase), 3, "{phrase}");
        }
    }

    #[test]
    fn test_legacy_table_matches_month_ranges() {
        assert_eq!(legacy_months("6-12 meses"), 12);
        assert_eq!(legacy_months("3-6 meses"), 6);
        assert_eq!(legacy_months("2-3 meses"), 3);
        assert_eq!(legacy_months("1-2 meses"), 2);
    }

    #[test]
    fn test_month_addition_clamps_to_month_end() {
        let deadline = compute_deadline(date(2025, 11, 30), "24 semanas", DeadlinePolicy::LegacyPhrases);
        assert_eq!(deadline, date(2026, 2, 28));
    }

    #[test]
    fn test_week_count_policy() {
        let deadline = compute_deadline(date(2025, 1, 1), "16 semanas", DeadlinePolicy::WeekCount);
        assert_eq!(deadline, date(2025, 4, 23));

        let fallback = compute_deadline(date(2025, 1, 1), "pronto", DeadlinePolicy::WeekCount);
        assert_eq!(fallback, date(2025, 4, 1));
    }

    #[test]
    fn test_parse_weeks() {
        assert_eq!(parse_weeks("8 semanas"), Some(8));
        assert_eq!(parse_weeks("1 semana"), Some(1));
        assert_eq!(parse_weeks("3-6 meses"), None);
    }
}
