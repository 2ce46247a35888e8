//! Core domain types for ghpulse
//!
//! These mirror the JSON shapes served by the backend API (camelCase fields).
//! Contribution records come in two forms: [`RawContributionDay`] as received,
//! and [`ContributionDay`] once the date and weekday have been validated.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Profile Types
// ============================================

/// A GitHub user profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GitHubUser {
    pub login: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// RFC 3339 timestamp of account creation
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

impl GitHubUser {
    /// Name if set, otherwise the login.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.login)
    }

    /// Bio or a placeholder.
    pub fn bio_display(&self) -> &str {
        self.bio
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .unwrap_or("No bio provided.")
    }

    /// Account creation date (e.g., "Jan 25, 2011"), or "Invalid Date".
    pub fn joined_display(&self) -> String {
        self.created_at
            .as_deref()
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
            .map(|ts| crate::format::format_date(ts.with_timezone(&Utc).date_naive()))
            .unwrap_or_else(|| "Invalid Date".to_string())
    }
}

/// A public repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
}

/// Language usage: language name to number of repositories using it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct LanguageStats(pub BTreeMap<String, u64>);

impl LanguageStats {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Languages sorted by repo count descending, then by name.
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> =
            self.0.iter().map(|(name, &count)| (name.as_str(), count)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// "1 repo" / "N repos"
    pub fn repo_label(count: u64) -> String {
        if count == 1 {
            "1 repo".to_string()
        } else {
            format!("{} repos", count)
        }
    }
}

// ============================================
// Contribution Types
// ============================================

/// One day of the contribution calendar as received from the backend.
///
/// Every field is optional so that a record with a missing, null or
/// mistyped value still deserializes. [`RawContributionDay::validate`] then
/// rejects it and the calculator skips it without dropping the calendar.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawContributionDay {
    /// ISO date (`YYYY-MM-DD`)
    pub date: Option<String>,
    pub contribution_count: Option<i64>,
    /// 0 = Sunday .. 6 = Saturday; derived from `date` when absent
    pub weekday: Option<i64>,
}

impl RawContributionDay {
    pub fn new(date: impl Into<String>, count: i64) -> Self {
        Self {
            date: Some(date.into()),
            contribution_count: Some(count),
            weekday: None,
        }
    }

    /// Read a record from arbitrary JSON.
    ///
    /// A non-string `date` or a non-integer `contributionCount` (alias
    /// `count`) is kept as `None`. A non-integer `weekday` counts as absent.
    pub fn from_json(value: &serde_json::Value) -> Self {
        let count = value
            .get("contributionCount")
            .or_else(|| value.get("count"));
        Self {
            date: value
                .get("date")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
            contribution_count: count.and_then(serde_json::Value::as_i64),
            weekday: value.get("weekday").and_then(serde_json::Value::as_i64),
        }
    }

    /// Validate into a [`ContributionDay`].
    ///
    /// Returns `None` for a missing or unparseable date, a missing or
    /// negative count, or a weekday outside 0-6.
    pub fn validate(&self) -> Option<ContributionDay> {
        let date = NaiveDate::parse_from_str(self.date.as_deref()?.trim(), "%Y-%m-%d").ok()?;
        let count = u64::try_from(self.contribution_count?).ok()?;
        let weekday = match self.weekday {
            Some(w) => u8::try_from(w).ok().filter(|w| *w <= 6)?,
            None => date.weekday().num_days_from_sunday() as u8,
        };
        Some(ContributionDay {
            date,
            count,
            weekday,
        })
    }
}

impl<'de> Deserialize<'de> for RawContributionDay {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}

/// A validated contribution record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u64,
    /// 0 = Sunday .. 6 = Saturday
    pub weekday: u8,
}

/// One calendar column (a week) of contribution days.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    #[serde(default)]
    pub contribution_days: Vec<RawContributionDay>,
}

/// The contribution calendar served by the backend (GitHub GraphQL shape).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    #[serde(default)]
    pub total_contributions: Option<u64>,
    #[serde(default)]
    pub weeks: Vec<ContributionWeek>,
}

impl ContributionCalendar {
    /// Flatten weeks into a single series, preserving calendar order.
    pub fn days(&self) -> Vec<RawContributionDay> {
        self.weeks
            .iter()
            .flat_map(|w| w.contribution_days.iter().cloned())
            .collect()
    }
}
