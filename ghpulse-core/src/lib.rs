//! # ghpulse-core
//!
//! Core library for ghpulse - a GitHub profile dashboard.
//!
//! This library provides:
//! - Domain types for profiles, repositories, languages and contribution calendars
//! - Contribution insights (streaks, busiest periods, consistency)
//! - Achievements and developer persona presentation models
//! - An HTTP client for the backend API
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Example
//!
//! ```rust
//! use ghpulse_core::analytics::compute_insights;
//! use ghpulse_core::RawContributionDay;
//!
//! let series = vec![
//!     RawContributionDay::new("2024-01-01", 0),
//!     RawContributionDay::new("2024-01-02", 3),
//!     RawContributionDay::new("2024-01-03", 5),
//! ];
//! let insights = compute_insights(&series);
//! assert_eq!(insights.longest_streak, 2);
//! assert_eq!(insights.active_days, 2);
//! ```

// Re-export commonly used items at the crate root
pub use api::ApiClient;
pub use config::Config;
pub use dashboard::{load_dashboard, Dashboard};
pub use error::{Error, Result};
pub use types::*;

// Public modules
pub mod analytics;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod logging;
pub mod types;
