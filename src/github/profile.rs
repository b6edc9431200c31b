use reqwest::Url;
use serde::Deserialize;

use super::error::FetchError;

/// Public user profile as returned by `GET /users/{name}`.
///
/// Only the fields the card shows are kept; the rest of the payload is
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub login: String,
    pub avatar_url: String,
    /// `null` and a missing field both decode to `None`.
    #[serde(default)]
    pub bio: Option<String>,
}

impl Profile {
    /// Decodes a response body.
    ///
    /// Shape mismatches and an empty `login` are both `InvalidData`.
    pub fn from_json(body: &[u8]) -> Result<Self, FetchError> {
        let profile: Profile =
            serde_json::from_slice(body).map_err(|e| FetchError::InvalidData {
                reason: e.to_string(),
            })?;

        if profile.login.is_empty() {
            return Err(FetchError::InvalidData {
                reason: "login is empty".to_string(),
            });
        }

        Ok(profile)
    }

    /// The avatar URL if it parses; `None` means "show the placeholder".
    pub fn parsed_avatar_url(&self) -> Option<Url> {
        Url::parse(&self.avatar_url).ok()
    }
}
