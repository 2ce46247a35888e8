//! HTTP client for the ghpulse backend API

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;

use crate::analytics::{AchievementResponse, PersonaResponse};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::types::{ContributionCalendar, GitHubRepo, GitHubUser, LanguageStats};

/// HTTP client for the backend's `/api/users/{username}` endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from configuration
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        config.validate()?;

        let base_url = config.base_url.trim().trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for a per-user resource; `resource` is empty for the profile itself.
    fn user_url(&self, username: &str, resource: &str) -> String {
        let mut url = format!(
            "{}/api/users/{}",
            self.base_url,
            urlencoding::encode(username.trim())
        );
        if !resource.is_empty() {
            url.push('/');
            url.push_str(resource);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url = %url, "GET");

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Backend returned error status");
            let body = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown").to_string()
            } else {
                body
            };
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Failed to decode backend response");
            Error::Json(e)
        })
    }

    /// `GET /api/users/{username}`
    pub async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        self.get_json(&self.user_url(username, "")).await
    }

    /// `GET /api/users/{username}/repos`
    pub async fn get_repos(&self, username: &str) -> Result<Vec<GitHubRepo>> {
        self.get_json(&self.user_url(username, "repos")).await
    }

    /// `GET /api/users/{username}/languages`
    pub async fn get_languages(&self, username: &str) -> Result<LanguageStats> {
        self.get_json(&self.user_url(username, "languages")).await
    }

    /// `GET /api/users/{username}/contributions`
    pub async fn get_contributions(&self, username: &str) -> Result<ContributionCalendar> {
        self.get_json(&self.user_url(username, "contributions")).await
    }

    /// `GET /api/users/{username}/achievements`
    pub async fn get_achievements(&self, username: &str) -> Result<AchievementResponse> {
        self.get_json(&self.user_url(username, "achievements")).await
    }

    /// `GET /api/users/{username}/persona`
    pub async fn get_persona(&self, username: &str) -> Result<PersonaResponse> {
        self.get_json(&self.user_url(username, "persona")).await
    }
}
