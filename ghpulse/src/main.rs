//! ghpulse - GitHub profile dashboard CLI
//!
//! Shows a user's profile, repositories, language usage, contribution
//! insights, persona and achievements from the ghpulse backend.

mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ghpulse_core::analytics::{
    compute_calendar_insights, compute_insights, CategoryFilter, SortKey,
};
use ghpulse_core::{load_dashboard, ApiClient, Config, ContributionCalendar, RawContributionDay};

use render::Format;

#[derive(Parser, Debug)]
#[command(name = "ghpulse")]
#[command(about = "GitHub profile dashboard - contributions, persona and achievements")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Export format (md = markdown, json = JSON)
    #[arg(long, global = true)]
    export: Option<String>,

    /// Backend base URL (overrides api.base_url from the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute contribution insights from a local JSON file
    Insights {
        /// Contribution calendar object or flat array of days
        #[arg(long)]
        file: PathBuf,
    },

    /// Show the full dashboard for a user
    Profile {
        /// GitHub username
        username: String,
    },

    /// List a user's achievements
    Achievements {
        /// GitHub username
        username: String,

        /// Category to show (all, recent_activity, year_long, repository)
        #[arg(long, default_value = "all")]
        category: String,

        /// Sort order (progress, rarity, name)
        #[arg(long, default_value = "progress")]
        sort: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load().context("failed to load configuration")?;
    let _log_guard = ghpulse_core::logging::init(&config.logging).ok();

    let format = match args.export.as_deref() {
        None => Format::Terminal,
        Some("md") => Format::Markdown,
        Some("json") => Format::Json,
        Some(other) => anyhow::bail!("Unknown export format: {}. Use 'md' or 'json'", other),
    };

    if let Some(url) = args.api_url {
        config.api.base_url = url;
    }

    match args.command {
        Command::Insights { file } => {
            let insights = load_insights(&file)?;
            render::insights(&insights, format)?;
        }
        Command::Profile { username } => {
            let client = ApiClient::new(&config.api).context("invalid API configuration")?;
            let dashboard = load_dashboard(&client, &username)
                .await
                .with_context(|| format!("failed to load dashboard for {}", username))?;
            render::dashboard(&dashboard, &config.dashboard, format)?;
        }
        Command::Achievements {
            username,
            category,
            sort,
        } => {
            let filter: CategoryFilter = category.parse()?;
            let sort: SortKey = sort.parse()?;
            let client = ApiClient::new(&config.api).context("invalid API configuration")?;
            let achievements = client
                .get_achievements(username.trim())
                .await
                .with_context(|| format!("failed to fetch achievements for {}", username))?;
            render::achievements(
                &achievements,
                filter,
                sort,
                config.dashboard.next_goals,
                username.trim(),
                format,
            )?;
        }
    }

    Ok(())
}

/// Read a contribution file: either a calendar (`{"weeks": [...]}`) or an array of days.
fn load_insights(path: &Path) -> Result<ghpulse_core::analytics::InsightResult> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&content).context("contribution file is not valid JSON")?;

    let insights = if value.is_array() {
        let days: Vec<RawContributionDay> =
            serde_json::from_value(value).context("invalid contribution day array")?;
        compute_insights(&days)
    } else {
        let calendar: ContributionCalendar =
            serde_json::from_value(value).context("invalid contribution calendar")?;
        compute_calendar_insights(&calendar)
    };

    tracing::info!(
        path = %path.display(),
        total_days = insights.total_days,
        skipped = insights.skipped_records,
        "Loaded contribution file"
    );

    Ok(insights)
}
