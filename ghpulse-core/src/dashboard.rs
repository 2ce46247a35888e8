//! Dashboard loading
//!
//! Fetches every section of a user's dashboard and derives contribution
//! insights. Only the profile is required: a failure in any other section is
//! recorded as a warning and the section is left empty.

use serde::Serialize;

use crate::analytics::{
    compute_calendar_insights, AchievementResponse, InsightResult, PersonaResponse,
};
use crate::api::ApiClient;
use crate::error::{Error, Result};
use crate::types::{GitHubRepo, GitHubUser, LanguageStats};

/// Everything shown for one user.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub user: GitHubUser,
    pub repos: Vec<GitHubRepo>,
    pub languages: LanguageStats,
    /// `None` when the contribution calendar could not be fetched
    pub insights: Option<InsightResult>,
    pub achievements: Option<AchievementResponse>,
    pub persona: Option<PersonaResponse>,
    /// Non-fatal section failures, in load order
    pub warnings: Vec<String>,
}

/// Describe a section failure the way the dashboard reports it.
fn section_warning(section: &str, err: &Error) -> String {
    match err {
        Error::Api { status, .. } => {
            format!("Failed to fetch {} (Status: {})", section, status)
        }
        other => format!("Failed to fetch {}: {}", section, other),
    }
}

/// Load the dashboard for `username`.
///
/// Returns [`Error::MissingUsername`] for a blank username, or the profile
/// fetch error if the user itself cannot be loaded.
pub async fn load_dashboard(client: &ApiClient, username: &str) -> Result<Dashboard> {
    let username = username.trim();
    if username.is_empty() {
        return Err(Error::MissingUsername);
    }

    tracing::info!(username, "Loading dashboard");

    let user = client.get_user(username).await?;
    let mut warnings = Vec::new();

    let (repos, languages, calendar, achievements, persona) = tokio::join!(
        client.get_repos(username),
        client.get_languages(username),
        client.get_contributions(username),
        client.get_achievements(username),
        client.get_persona(username),
    );

    let repos = repos.unwrap_or_else(|e| {
        warnings.push(section_warning("repositories", &e));
        Vec::new()
    });

    let languages = languages.unwrap_or_else(|e| {
        warnings.push(section_warning("languages", &e));
        LanguageStats::default()
    });

    let insights = match calendar {
        Ok(calendar) => Some(compute_calendar_insights(&calendar)),
        Err(e) => {
            warnings.push(section_warning("contributions", &e));
            None
        }
    };

    let achievements = achievements
        .map_err(|e| warnings.push(section_warning("achievements", &e)))
        .ok();
    let persona = persona
        .map_err(|e| warnings.push(section_warning("persona", &e)))
        .ok();

    for warning in &warnings {
        tracing::warn!(username, "{}", warning);
    }

    Ok(Dashboard {
        user,
        repos,
        languages,
        insights,
        achievements,
        persona,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    #[test]
    fn test_section_warning_format() {
        let err = Error::Api {
            status: 503,
            body: "down".to_string(),
        };
        assert_eq!(
            section_warning("repositories", &err),
            "Failed to fetch repositories (Status: 503)"
        );
    }

    #[tokio::test]
    async fn test_blank_username_rejected() {
        let client = ApiClient::new(&ApiConfig::default()).unwrap();
        let err = load_dashboard(&client, "   ").await.unwrap_err();
        assert!(matches!(err, Error::MissingUsername));
        assert_eq!(err.to_string(), "Please enter a GitHub username.");
    }
}
