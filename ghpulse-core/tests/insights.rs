//! Integration tests for contribution insights
//!
//! These tests use the fixture calendar in `tests/fixtures/calendar.json`,
//! shaped like the backend's contribution calendar response.

use chrono::NaiveDate;
use ghpulse_core::analytics::{
    compute_calendar_insights, compute_insights, InsightResult, YearMonth,
};
use ghpulse_core::{ContributionCalendar, RawContributionDay};
use std::path::PathBuf;

/// Get the path to a fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn load_calendar() -> ContributionCalendar {
    let content = std::fs::read_to_string(fixture_path("calendar.json")).unwrap();
    serde_json::from_str(&content).expect("fixture should parse")
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

// ============================================
// Calendar Fixture
// ============================================

#[test]
fn test_calendar_fixture_insights() {
    ghpulse_core::logging::init_test();
    let calendar = load_calendar();
    assert_eq!(calendar.weeks.len(), 4);
    assert_eq!(calendar.days().len(), 22);

    let insights = compute_calendar_insights(&calendar);

    assert_eq!(insights.total_days, 22);
    assert_eq!(insights.active_days, 13);
    assert_eq!(insights.total_contributions, 37);

    // Jan 8 - Jan 11
    assert_eq!(insights.longest_streak, 4);
    assert_eq!(insights.longest_streak_start, Some(date("2024-01-08")));
    assert_eq!(insights.longest_streak_end, Some(date("2024-01-11")));

    // Jan 20, then a gap, then Feb 4 and Feb 5: only present records count
    assert_eq!(insights.current_streak, 3);

    let busiest = insights.busiest_day.expect("busiest day");
    assert_eq!(busiest.date, date("2024-01-16"));
    assert_eq!(busiest.count, 6);

    let month = insights.busiest_month.expect("busiest month");
    assert_eq!(month.month, YearMonth { year: 2024, month: 1 });
    assert_eq!(month.count, 35);

    assert_eq!(insights.weekday_totals, [3, 5, 13, 9, 1, 2, 4]);
    assert_eq!(insights.busiest_weekday, Some(2));
    assert_eq!(insights.busiest_weekday_display(), "Tuesday");

    assert!((insights.consistency - 13.0 / 365.0 * 100.0).abs() < 1e-9);
    assert!((insights.avg_per_active_day - 37.0 / 13.0).abs() < 1e-9);
    assert_eq!(insights.skipped_records, 0);
}

#[test]
fn test_calendar_week_order_does_not_matter() {
    let mut calendar = load_calendar();
    let expected = compute_calendar_insights(&calendar);

    calendar.weeks.reverse();
    for week in &mut calendar.weeks {
        week.contribution_days.reverse();
    }
    assert_eq!(compute_calendar_insights(&calendar), expected);
}

#[test]
fn test_flat_series_matches_calendar() {
    let calendar = load_calendar();
    let from_calendar = compute_calendar_insights(&calendar);
    let from_series = compute_insights(&calendar.days());
    assert_eq!(from_calendar, from_series);
}

// ============================================
// Degraded Input
// ============================================

#[test]
fn test_bad_record_in_calendar_is_skipped() {
    let json = r#"{
        "totalContributions": 5,
        "weeks": [{"contributionDays": [
            {"date": "2024-03-03", "contributionCount": 2, "weekday": 0},
            {"date": "2024-03-04T00:00:00Z", "contributionCount": 1, "weekday": 1},
            {"date": "2024-03-05", "contributionCount": 3, "weekday": 2}
        ]}]
    }"#;
    let calendar: ContributionCalendar = serde_json::from_str(json).unwrap();
    let insights = compute_calendar_insights(&calendar);

    assert_eq!(insights.skipped_records, 1);
    assert_eq!(insights.total_days, 2);
    assert_eq!(insights.longest_streak, 2);
    assert_eq!(insights.total_contributions, 5);
}

#[test]
fn test_records_with_missing_fields_are_skipped() {
    let json = r#"{
        "weeks": [{"contributionDays": [
            {"date": "2024-01-01", "contributionCount": 3},
            {"date": "2024-01-02"},
            {"date": "2024-01-03", "contributionCount": 4},
            {"date": "2024-01-04", "contributionCount": null},
            {"contributionCount": 9},
            {"date": "2024-01-05", "contributionCount": "6"}
        ]}]
    }"#;
    let calendar: ContributionCalendar = serde_json::from_str(json).unwrap();
    let insights = compute_calendar_insights(&calendar);

    assert_eq!(insights.total_days, 2);
    assert_eq!(insights.skipped_records, 4);
    assert_eq!(insights.longest_streak, 2);
    assert_eq!(insights.total_contributions, 7);
    assert_eq!(insights.busiest_day.unwrap().count, 4);
}

#[test]
fn test_day_array_with_null_count_loads() {
    let json = r#"[
        {"date": "2024-01-01", "count": 3},
        {"date": "2024-01-02", "count": null},
        {"date": "2024-01-03", "count": 4}
    ]"#;
    let days: Vec<RawContributionDay> = serde_json::from_str(json).unwrap();
    let insights = compute_insights(&days);

    assert_eq!(insights.total_days, 2);
    assert_eq!(insights.skipped_records, 1);
    assert_eq!(insights.longest_streak, 2);
}

#[test]
fn test_empty_calendar_is_sentinel() {
    let insights = compute_calendar_insights(&ContributionCalendar::default());
    assert_eq!(insights, InsightResult::default());
    assert!(insights.is_insufficient());
}

#[test]
fn test_series_accepts_count_alias() {
    let series: Vec<RawContributionDay> =
        serde_json::from_str(r#"[{"date":"2024-06-15","count":7}]"#).unwrap();
    let insights = compute_insights(&series);
    assert_eq!(insights.longest_streak, 1);
    assert_eq!(insights.busiest_weekday_display(), "Saturday");
}
