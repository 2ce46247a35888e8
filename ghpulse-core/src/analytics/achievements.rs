//! Achievements presentation model
//!
//! Achievement progress is scored by the backend; this module only types the
//! response and provides the filtering, ordering and summaries the dashboard
//! shows. Categories and rarities are closed sets: unknown tags fail
//! deserialization rather than rendering with missing metadata.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Achievement rarity, ordered from most common to rarest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rarity {
    Bronze,
    Silver,
    Gold,
    Diamond,
}

impl Rarity {
    /// Sort rank (1 = Bronze .. 4 = Diamond).
    pub fn rank(&self) -> u8 {
        match self {
            Rarity::Bronze => 1,
            Rarity::Silver => 2,
            Rarity::Gold => 3,
            Rarity::Diamond => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Bronze => "BRONZE",
            Rarity::Silver => "SILVER",
            Rarity::Gold => "GOLD",
            Rarity::Diamond => "DIAMOND",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Rarity::Bronze => "amber",
            Rarity::Silver => "gray",
            Rarity::Gold => "yellow",
            Rarity::Diamond => "blue",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Rarity::Bronze => "🥉",
            Rarity::Silver => "🥈",
            Rarity::Gold => "👑",
            Rarity::Diamond => "💎",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BRONZE" => Ok(Rarity::Bronze),
            "SILVER" => Ok(Rarity::Silver),
            "GOLD" => Ok(Rarity::Gold),
            "DIAMOND" => Ok(Rarity::Diamond),
            _ => Err(Error::UnknownTag {
                kind: "rarity",
                value: s.to_string(),
            }),
        }
    }
}

/// Achievement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AchievementCategory {
    RecentActivity,
    YearLong,
    Repository,
}

impl AchievementCategory {
    pub const ALL: [AchievementCategory; 3] = [
        AchievementCategory::RecentActivity,
        AchievementCategory::YearLong,
        AchievementCategory::Repository,
    ];

    /// Wire tag (e.g., "RECENT_ACTIVITY").
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementCategory::RecentActivity => "RECENT_ACTIVITY",
            AchievementCategory::YearLong => "YEAR_LONG",
            AchievementCategory::Repository => "REPOSITORY",
        }
    }

    /// Human label (e.g., "RECENT ACTIVITY").
    pub fn label(&self) -> &'static str {
        match self {
            AchievementCategory::RecentActivity => "RECENT ACTIVITY",
            AchievementCategory::YearLong => "YEAR LONG",
            AchievementCategory::Repository => "REPOSITORY",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            AchievementCategory::RecentActivity => "blue",
            AchievementCategory::YearLong => "purple",
            AchievementCategory::Repository => "green",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            AchievementCategory::RecentActivity => "⚡",
            AchievementCategory::YearLong => "📅",
            AchievementCategory::Repository => "🎯",
        }
    }
}

impl fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AchievementCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        AchievementCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| Error::UnknownTag {
                kind: "achievement category",
                value: s.to_string(),
            })
    }
}

/// How an achievement is scored (informational; scoring happens server-side).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AchievementCriteria {
    #[serde(rename = "type")]
    pub kind: String,
    pub data_source: String,
    pub target: f64,
    #[serde(default)]
    pub parameters: BTreeMap<String, serde_json::Value>,
}

impl AchievementCriteria {
    /// e.g. "COMMIT_COUNT" -> "commit count"
    pub fn kind_display(&self) -> String {
        self.kind.replace('_', " ").to_lowercase()
    }

    /// e.g. "CONTRIBUTION_CALENDAR" -> "CONTRIBUTION CALENDAR"
    pub fn data_source_display(&self) -> String {
        self.data_source.replace('_', " ")
    }
}

/// A single achievement with its current progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: AchievementCategory,
    pub icon: String,
    #[serde(default)]
    pub color: String,
    pub rarity: Rarity,
    pub criteria: AchievementCriteria,
    pub unlocked: bool,
    pub current_progress: f64,
    pub target_progress: f64,
    pub percentage: f64,
    #[serde(default)]
    pub unlocked_date: Option<String>,
    pub last_updated: String,
}

impl Achievement {
    pub fn tier(&self) -> ProgressTier {
        ProgressTier::from_percentage(self.percentage)
    }
}

/// Aggregate achievement counters reported by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AchievementStats {
    pub total_achievements: u32,
    pub unlocked_achievements: u32,
    pub locked_achievements: u32,
    pub overall_progress: f64,
    #[serde(default)]
    pub rarest_achievement: String,
    #[serde(default)]
    pub most_recent_achievement: String,
}

impl AchievementStats {
    /// Unlocked as a percentage of total (0 when there are none).
    pub fn completion_percent(&self) -> f64 {
        if self.total_achievements == 0 {
            0.0
        } else {
            self.unlocked_achievements as f64 / self.total_achievements as f64 * 100.0
        }
    }
}

/// Full achievements payload for one user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AchievementResponse {
    pub achievements: Vec<Achievement>,
    pub stats: AchievementStats,
    /// Number of achievements per category
    #[serde(default)]
    pub category_progress: BTreeMap<AchievementCategory, u32>,
}

/// Progress buckets used for coloring progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    Complete,
    High,
    Medium,
    Low,
    Minimal,
}

impl ProgressTier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            ProgressTier::Complete
        } else if percentage >= 75.0 {
            ProgressTier::High
        } else if percentage >= 50.0 {
            ProgressTier::Medium
        } else if percentage >= 25.0 {
            ProgressTier::Low
        } else {
            ProgressTier::Minimal
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ProgressTier::Complete => "green",
            ProgressTier::High => "blue",
            ProgressTier::Medium => "yellow",
            ProgressTier::Low => "orange",
            ProgressTier::Minimal => "red",
        }
    }
}

/// Category selection for the achievement grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(AchievementCategory),
}

impl CategoryFilter {
    pub fn matches(&self, achievement: &Achievement) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => achievement.category == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// Ordering for the achievement grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Percentage, highest first
    #[default]
    Progress,
    /// Rarity, rarest first
    Rarity,
    /// Name, alphabetical
    Name,
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "progress" => Ok(SortKey::Progress),
            "rarity" => Ok(SortKey::Rarity),
            "name" => Ok(SortKey::Name),
            _ => Err(Error::UnknownTag {
                kind: "sort key",
                value: s.to_string(),
            }),
        }
    }
}

/// Unlocked/total counts for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: AchievementCategory,
    pub unlocked: u32,
    pub total: u32,
    pub progress: f64,
}

impl AchievementResponse {
    /// Achievements matching `filter`, ordered by `sort`.
    ///
    /// The sort is stable, so equal keys keep the backend's order.
    pub fn select(&self, filter: CategoryFilter, sort: SortKey) -> Vec<&Achievement> {
        let mut selected: Vec<&Achievement> = self
            .achievements
            .iter()
            .filter(|a| filter.matches(a))
            .collect();

        match sort {
            SortKey::Progress => selected.sort_by(|a, b| b.percentage.total_cmp(&a.percentage)),
            SortKey::Rarity => selected.sort_by(|a, b| b.rarity.rank().cmp(&a.rarity.rank())),
            SortKey::Name => selected.sort_by(|a, b| a.name.cmp(&b.name)),
        }

        selected
    }

    pub fn unlocked(&self) -> Vec<&Achievement> {
        self.achievements.iter().filter(|a| a.unlocked).collect()
    }

    pub fn locked(&self) -> Vec<&Achievement> {
        self.achievements.iter().filter(|a| !a.unlocked).collect()
    }

    /// The `n` locked achievements closest to completion.
    pub fn next_goals(&self, n: usize) -> Vec<&Achievement> {
        let mut locked = self.locked();
        locked.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
        locked.truncate(n);
        locked
    }

    /// Per-category unlock progress, in category order.
    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        self.category_progress
            .iter()
            .map(|(&category, &total)| {
                let unlocked = self
                    .achievements
                    .iter()
                    .filter(|a| a.category == category && a.unlocked)
                    .count() as u32;
                let progress = if total == 0 {
                    0.0
                } else {
                    unlocked as f64 / total as f64 * 100.0
                };
                CategorySummary {
                    category,
                    unlocked,
                    total,
                    progress,
                }
            })
            .collect()
    }
}
