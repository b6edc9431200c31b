use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};

use crate::config::FetchConfig;

use super::error::FetchError;
use super::profile::Profile;

/// Sent on every request; the GitHub API rejects anonymous user agents.
pub const USER_AGENT: &str = concat!("profile-view/", env!("CARGO_PKG_VERSION"));

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Builds the HTTP client shared by the profile and avatar requests.
pub fn build_http_client(config: &FetchConfig) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .build()
}

/// Source of the one profile the view shows.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetches and decodes the profile. Called at most once per activation.
    async fn fetch(&self) -> Result<Profile, FetchError>;
}

/// Fetches a profile from a fixed endpoint.
pub struct ProfileClient {
    client: Client,
    endpoint: String,
}

impl ProfileClient {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = build_http_client(config).map_err(|source| FetchError::Transport {
            endpoint: config.endpoint.clone(),
            source,
        })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ProfileSource for ProfileClient {
    async fn fetch(&self) -> Result<Profile, FetchError> {
        // Parse before touching the network so a bad endpoint never sends.
        let url = Url::parse(&self.endpoint).map_err(|e| FetchError::InvalidUrl {
            endpoint: self.endpoint.clone(),
            reason: e.to_string(),
        })?;

        tracing::debug!(endpoint = %url, "Fetching profile");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::InvalidResponse {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let profile = Profile::from_json(&body)?;
        tracing::info!(login = %profile.login, "Profile fetched");
        Ok(profile)
    }
}
