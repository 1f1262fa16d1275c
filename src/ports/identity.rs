//! Identity provider port for session establishment.
//!
//! The platform's identity service is a managed black box. This port
//! covers the three operations the session bootstrap needs: establish a
//! session from a redirect token pair, confirm the current session, and
//! fetch the profile bound to an access token.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::session::{Session, SessionTokens, UserProfile};

/// Port for the managed identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Establish a session from an extracted token pair.
    ///
    /// The provider validates the tokens and returns the session it
    /// considers current afterwards.
    async fn set_session(&self, tokens: &SessionTokens) -> Result<Session, IdentityError>;

    /// Return the currently established session, if any.
    async fn current_session(&self) -> Result<Option<Session>, IdentityError>;

    /// Fetch the profile bound to an access token.
    async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile, IdentityError>;
}

/// Errors from identity provider operations.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// The provider rejected the supplied tokens.
    #[error("Tokens rejected: {0}")]
    TokensRejected(String),

    /// Network-level failure reaching the provider.
    #[error("Identity service unreachable: {0}")]
    Network(String),

    /// The provider answered with an unexpected payload.
    #[error("Unexpected identity response: {0}")]
    UnexpectedResponse(String),
}
