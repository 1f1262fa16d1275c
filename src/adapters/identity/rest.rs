//! REST identity provider adapter.
//!
//! Implements the `IdentityProvider` port against the managed identity
//! service's token and user endpoints. The service follows the common
//! OAuth-ish shape: refresh tokens are exchanged at `/token`, the profile
//! behind an access token lives at `/user`.
//!
//! The adapter caches the last established session in memory; the managed
//! service itself is the source of truth for token validity.

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::config::IdentityConfig;
use crate::domain::session::{Session, SessionTokens, UserProfile};
use crate::ports::{IdentityError, IdentityProvider};

/// REST implementation of the identity provider port.
pub struct RestIdentityProvider {
    config: IdentityConfig,
    http_client: reqwest::Client,
    session: RwLock<Option<Session>>,
}

impl RestIdentityProvider {
    /// Create a new identity adapter with the given configuration.
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
            session: RwLock::new(None),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

/// Token endpoint response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
}

/// User endpoint response.
#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: serde_json::Value,
}

impl UserResponse {
    fn display_name(&self) -> Option<String> {
        self.user_metadata
            .get("full_name")
            .or_else(|| self.user_metadata.get("name"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    async fn set_session(&self, tokens: &SessionTokens) -> Result<Session, IdentityError> {
        let url = self.endpoint("/token?grant_type=refresh_token");

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.config.api_key)
            .json(&serde_json::json!({ "refresh_token": tokens.refresh_token }))
            .send()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(status = %status, "Identity service rejected session tokens");
            return Err(IdentityError::TokensRejected(body));
        }

        let token_response: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| IdentityError::UnexpectedResponse(e.to_string()))?;

        let session = Session::new(token_response.access_token, token_response.refresh_token);
        *self.session.write().await = Some(session.clone());

        tracing::debug!("Session established with identity service");
        Ok(session)
    }

    async fn current_session(&self) -> Result<Option<Session>, IdentityError> {
        Ok(self.session.read().await.clone())
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile, IdentityError> {
        let url = self.endpoint("/user");

        let response = self
            .http_client
            .get(&url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(IdentityError::TokensRejected(body));
        }

        let user: UserResponse = serde_json::from_str(&body)
            .map_err(|e| IdentityError::UnexpectedResponse(e.to_string()))?;

        Ok(UserProfile {
            display_name: user.display_name(),
            id: user.id,
            email: user.email,
        })
    }
}
