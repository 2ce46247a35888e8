//! Contribution insights
//!
//! Derives streak, busiest-period and consistency statistics from a daily
//! contribution series. The computation is a pure function of its input:
//! records are validated, sorted by date, and scanned once.
//!
//! Only records that are present in the series are considered. A missing
//! calendar day between two active records does not break a streak, and
//! consistency always divides by 365 regardless of the window length.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::format::{format_date, NOT_AVAILABLE};
use crate::types::{ContributionCalendar, ContributionDay, RawContributionDay};

/// Fixed divisor for the consistency ratio.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// A calendar month, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Get display name (e.g., "March 2024").
    pub fn display_name(&self) -> String {
        let month_name = match self.month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Unknown",
        };
        format!("{} {}", month_name, self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Get weekday name from index (0=Sunday).
pub fn weekday_name(day: u8) -> &'static str {
    match day {
        0 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        _ => "Unknown",
    }
}

/// The single day with the most contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusiestDay {
    pub date: NaiveDate,
    pub count: u64,
    pub weekday: u8,
}

/// The calendar month with the most contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusiestMonth {
    pub month: YearMonth,
    pub count: u64,
}

/// Derived statistics for a contribution series.
///
/// The default value is the "insufficient data" sentinel: all zeros and no
/// busiest day, month or weekday.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct InsightResult {
    /// Longest run of consecutive records with a non-zero count
    pub longest_streak: usize,
    /// First and last date of the longest run
    pub longest_streak_start: Option<NaiveDate>,
    pub longest_streak_end: Option<NaiveDate>,
    /// Run still open at the end of the series
    pub current_streak: usize,
    pub busiest_day: Option<BusiestDay>,
    pub busiest_month: Option<BusiestMonth>,
    /// 0=Sunday .. 6=Saturday
    pub busiest_weekday: Option<u8>,
    /// Records with a non-zero count
    pub active_days: usize,
    /// Valid records considered
    pub total_days: usize,
    pub total_contributions: u64,
    /// `active_days / 365 * 100`, not clamped
    pub consistency: f64,
    /// `total_contributions / active_days`, or 0 with no active days
    pub avg_per_active_day: f64,
    /// Contribution totals by weekday (0=Sunday)
    pub weekday_totals: [u64; 7],
    /// Contribution totals by month, ascending
    pub monthly_totals: Vec<(YearMonth, u64)>,
    /// Records dropped for a malformed date, count or weekday
    pub skipped_records: usize,
}

impl InsightResult {
    /// True when no valid records were available.
    pub fn is_insufficient(&self) -> bool {
        self.total_days == 0
    }

    /// e.g. "Jan 3, 2024 (5 contributions)", or "N/A"
    pub fn busiest_day_display(&self) -> String {
        match &self.busiest_day {
            Some(day) => format!(
                "{} ({} contribution{})",
                format_date(day.date),
                day.count,
                if day.count == 1 { "" } else { "s" }
            ),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// e.g. "March 2024", or "N/A"
    pub fn busiest_month_display(&self) -> String {
        match &self.busiest_month {
            Some(m) => m.month.display_name(),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// e.g. "Saturday", or "N/A"
    pub fn busiest_weekday_display(&self) -> &'static str {
        match self.busiest_weekday {
            Some(day) => weekday_name(day),
            None => NOT_AVAILABLE,
        }
    }
}

/// Tracks consecutive active records.
#[derive(Debug, Default)]
struct StreakTracker {
    current: usize,
    current_start: Option<NaiveDate>,
    current_end: Option<NaiveDate>,
    longest: usize,
    longest_range: Option<(NaiveDate, NaiveDate)>,
}

impl StreakTracker {
    fn extend(&mut self, date: NaiveDate) {
        if self.current == 0 {
            self.current_start = Some(date);
        }
        self.current += 1;
        self.current_end = Some(date);
    }

    /// Fold the open run into the longest; strict `>` keeps the earliest run on ties.
    fn close(&mut self) {
        if self.current > self.longest {
            self.longest = self.current;
            self.longest_range = self.current_start.zip(self.current_end);
        }
    }

    fn reset(&mut self) {
        self.close();
        self.current = 0;
        self.current_start = None;
        self.current_end = None;
    }
}

/// Compute insights for a contribution series.
///
/// The series may be in any order. Malformed records are skipped.
pub fn compute_insights(series: &[RawContributionDay]) -> InsightResult {
    compute_insights_with_total(series, None)
}

/// Compute insights for a full contribution calendar, using its reported total.
pub fn compute_calendar_insights(calendar: &ContributionCalendar) -> InsightResult {
    compute_insights_with_total(&calendar.days(), calendar.total_contributions)
}

/// Compute insights, optionally overriding the summed total.
///
/// `reported_total` is used for `total_contributions` (and the per-active-day
/// average) when the series is known to be incomplete. It is ignored when
/// no valid records remain.
pub fn compute_insights_with_total(
    series: &[RawContributionDay],
    reported_total: Option<u64>,
) -> InsightResult {
    let mut days: Vec<ContributionDay> = Vec::with_capacity(series.len());
    let mut skipped_records = 0;

    for raw in series {
        match raw.validate() {
            Some(day) => days.push(day),
            None => {
                skipped_records += 1;
                tracing::debug!(
                    date = ?raw.date,
                    count = ?raw.contribution_count,
                    weekday = ?raw.weekday,
                    "Skipping malformed contribution record"
                );
            }
        }
    }

    if days.is_empty() {
        return InsightResult {
            skipped_records,
            ..Default::default()
        };
    }

    days.sort_by_key(|d| d.date);

    let mut streaks = StreakTracker::default();
    let mut busiest_day: Option<BusiestDay> = None;
    let mut monthly: BTreeMap<YearMonth, u64> = BTreeMap::new();
    let mut weekday_totals = [0u64; 7];
    let mut summed: u64 = 0;
    let mut active_days = 0;

    for day in &days {
        if busiest_day.map_or(true, |best| day.count > best.count) {
            busiest_day = Some(BusiestDay {
                date: day.date,
                count: day.count,
                weekday: day.weekday,
            });
        }

        if day.count > 0 {
            active_days += 1;
            streaks.extend(day.date);
        } else {
            streaks.reset();
        }

        let month_total = monthly.entry(YearMonth::of(day.date)).or_insert(0);
        *month_total = month_total.saturating_add(day.count);
        let weekday_total = &mut weekday_totals[day.weekday as usize];
        *weekday_total = weekday_total.saturating_add(day.count);
        summed = summed.saturating_add(day.count);
    }

    let current_streak = streaks.current;
    streaks.close();

    let mut busiest_month: Option<BusiestMonth> = None;
    for (&month, &count) in &monthly {
        if busiest_month.map_or(true, |best| count > best.count) {
            busiest_month = Some(BusiestMonth { month, count });
        }
    }

    let mut busiest_weekday = 0usize;
    for (day, &count) in weekday_totals.iter().enumerate() {
        if count > weekday_totals[busiest_weekday] {
            busiest_weekday = day;
        }
    }

    let total_contributions = reported_total.unwrap_or(summed);
    let avg_per_active_day = if active_days > 0 {
        total_contributions as f64 / active_days as f64
    } else {
        0.0
    };

    let result = InsightResult {
        longest_streak: streaks.longest,
        longest_streak_start: streaks.longest_range.map(|(start, _)| start),
        longest_streak_end: streaks.longest_range.map(|(_, end)| end),
        current_streak,
        busiest_day,
        busiest_month,
        busiest_weekday: Some(busiest_weekday as u8),
        active_days,
        total_days: days.len(),
        total_contributions,
        consistency: active_days as f64 / DAYS_PER_YEAR * 100.0,
        avg_per_active_day,
        weekday_totals,
        monthly_totals: monthly.into_iter().collect(),
        skipped_records,
    };

    tracing::debug!(
        total_days = result.total_days,
        active_days = result.active_days,
        longest_streak = result.longest_streak,
        skipped = result.skipped_records,
        "Computed contribution insights"
    );

    result
}
