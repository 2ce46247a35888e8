//! Analytics module for ghpulse
//!
//! Client-side derived statistics and presentation models:
//! - Contribution insights (streaks, busiest periods, consistency)
//! - Achievements filtering, ordering and summaries
//! - Developer persona display metadata
//!
//! Everything here is pure: no I/O, no shared state.

pub mod achievements;
pub mod insights;
pub mod persona;

pub use achievements::{
    Achievement, AchievementCategory, AchievementCriteria, AchievementResponse, AchievementStats,
    CategoryFilter, CategorySummary, ProgressTier, Rarity, SortKey,
};
pub use insights::{
    compute_calendar_insights, compute_insights, compute_insights_with_total, weekday_name,
    BusiestDay, BusiestMonth, InsightResult, YearMonth,
};
pub use persona::{Persona, PersonaResponse, PersonaTrait};
