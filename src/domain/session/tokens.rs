//! Session token value objects.

use serde::{Deserialize, Serialize};

/// Opaque token pair extracted from an OAuth redirect.
///
/// The tokens are never interpreted by this crate; they are forwarded to
/// the identity provider verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl SessionTokens {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// An established identity session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token presented on authenticated requests.
    pub access_token: String,

    /// Token used to mint a replacement session when the access token expires.
    pub refresh_token: String,
}

impl Session {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }

    /// The tokens this session was established from.
    pub fn tokens(&self) -> SessionTokens {
        SessionTokens::new(self.access_token.clone(), self.refresh_token.clone())
    }
}

/// Profile data fetched from the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Identity-provider user id.
    pub id: String,

    /// Email address, when the provider shares it.
    pub email: Option<String>,

    /// Display name, when the provider shares it.
    pub display_name: Option<String>,
}
