//! Session bootstrap for OAuth redirect deep links.
//!
//! Completes the redirect flow: extract the token pair from the URL
//! fragment, establish a session from it, refresh the process-wide
//! identity state, and move the client onto the authenticated route.
//!
//! The bootstrap is deliberately infallible: a broken deep link must never
//! crash startup, so every step failure is caught, logged, and collapsed
//! into the returned outcome.

use std::sync::Arc;

use url::Url;

use crate::domain::session::{AuthState, Session, SessionTokens};
use crate::ports::{IdentityProvider, Navigator, Route};

/// Result of handling a redirect URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The URL carried no usable token pair; nothing was done.
    NoTokens,

    /// A session is established and the client was routed to the
    /// authenticated area.
    Authenticated,

    /// Establishment failed and no session exists; the client stays on
    /// the unauthenticated route.
    Unauthenticated,
}

/// Completes OAuth redirects and synchronizes in-app identity state.
pub struct SessionBootstrap {
    identity: Arc<dyn IdentityProvider>,
    auth_state: Arc<AuthState>,
    navigator: Arc<dyn Navigator>,
}

impl SessionBootstrap {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        auth_state: Arc<AuthState>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            identity,
            auth_state,
            navigator,
        }
    }

    /// Handle a redirect URL that may carry a fragment-encoded token pair.
    pub async fn handle_redirect(&self, redirect_url: &str) -> BootstrapOutcome {
        let tokens = match extract_tokens(redirect_url) {
            Some(tokens) => tokens,
            None => {
                // Plain navigation link; the common case
                tracing::debug!("Redirect carries no session tokens");
                return BootstrapOutcome::NoTokens;
            }
        };

        let session = match self.establish_session(&tokens).await {
            Some(session) => session,
            None => {
                tracing::warn!("No session after redirect; staying unauthenticated");
                return BootstrapOutcome::Unauthenticated;
            }
        };

        // Profile fetch is best-effort; a refresh without a profile still
        // bumps the version so dependent caches refetch later.
        let profile = match self.identity.fetch_profile(&session.access_token).await {
            Ok(profile) => Some(profile),
            Err(err) => {
                tracing::warn!(error = %err, "Profile fetch failed during bootstrap");
                None
            }
        };

        let version = self.auth_state.refresh(session, profile);
        tracing::info!(auth_version = version, "Identity refreshed from deep link");

        self.navigator.replace_route(Route::Authenticated);
        BootstrapOutcome::Authenticated
    }

    /// Actively establish a session from the extracted tokens, falling back
    /// to whatever session the provider already holds.
    async fn establish_session(&self, tokens: &SessionTokens) -> Option<Session> {
        match self.identity.set_session(tokens).await {
            Ok(session) => return Some(session),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to establish session from redirect tokens");
            }
        }

        match self.identity.current_session().await {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to confirm existing session");
                None
            }
        }
    }
}

/// Extracts the token pair from a fragment-encoded redirect URL.
///
/// Format: `<scheme>://...#access_token=...&refresh_token=...`. Returns
/// `None` unless both tokens are present and non-empty.
fn extract_tokens(redirect_url: &str) -> Option<SessionTokens> {
    let url = Url::parse(redirect_url).ok()?;
    let fragment = url.fragment()?;

    let mut access_token = None;
    let mut refresh_token = None;
    for (key, value) in url::form_urlencoded::parse(fragment.as_bytes()) {
        match key.as_ref() {
            "access_token" => access_token = Some(value.into_owned()),
            "refresh_token" => refresh_token = Some(value.into_owned()),
            _ => {}
        }
    }

    let access_token = access_token.filter(|t| !t.is_empty())?;
    let refresh_token = refresh_token.filter(|t| !t.is_empty())?;
    Some(SessionTokens::new(access_token, refresh_token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::UserProfile;
    use crate::ports::IdentityError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct MockIdentityProvider {
        set_session_calls: Mutex<Vec<SessionTokens>>,
        fail_set_session: bool,
        existing_session: Option<Session>,
        fail_fetch_profile: bool,
    }

    impl MockIdentityProvider {
        fn new() -> Self {
            Self {
                set_session_calls: Mutex::new(Vec::new()),
                fail_set_session: false,
                existing_session: None,
                fail_fetch_profile: false,
            }
        }

        fn failing_set_session() -> Self {
            Self {
                fail_set_session: true,
                ..Self::new()
            }
        }

        fn failing_set_session_with_existing(session: Session) -> Self {
            Self {
                fail_set_session: true,
                existing_session: Some(session),
                ..Self::new()
            }
        }

        fn failing_profile() -> Self {
            Self {
                fail_fetch_profile: true,
                ..Self::new()
            }
        }

        fn set_session_calls(&self) -> Vec<SessionTokens> {
            self.set_session_calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl IdentityProvider for MockIdentityProvider {
        async fn set_session(&self, tokens: &SessionTokens) -> Result<Session, IdentityError> {
            self.set_session_calls.lock().unwrap().push(tokens.clone());
            if self.fail_set_session {
                return Err(IdentityError::TokensRejected("expired".to_string()));
            }
            Ok(Session::new(
                tokens.access_token.clone(),
                tokens.refresh_token.clone(),
            ))
        }

        async fn current_session(&self) -> Result<Option<Session>, IdentityError> {
            Ok(self.existing_session.clone())
        }

        async fn fetch_profile(&self, _access_token: &str) -> Result<UserProfile, IdentityError> {
            if self.fail_fetch_profile {
                return Err(IdentityError::Network("timeout".to_string()));
            }
            Ok(UserProfile {
                id: "user-123".to_string(),
                email: Some("a@x.com".to_string()),
                display_name: Some("Asha".to_string()),
            })
        }
    }

    struct RecordingNavigator {
        routes: Mutex<Vec<Route>>,
    }

    impl RecordingNavigator {
        fn new() -> Self {
            Self {
                routes: Mutex::new(Vec::new()),
            }
        }

        fn routes(&self) -> Vec<Route> {
            self.routes.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn replace_route(&self, route: Route) {
            self.routes.lock().unwrap().push(route);
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    const DEEP_LINK: &str =
        "app://auth/callback#access_token=at-abc&refresh_token=rt-xyz&token_type=bearer";

    fn bootstrap(
        identity: Arc<MockIdentityProvider>,
        navigator: Arc<RecordingNavigator>,
    ) -> (SessionBootstrap, Arc<AuthState>) {
        let auth_state = Arc::new(AuthState::new());
        let bootstrap = SessionBootstrap::new(identity, auth_state.clone(), navigator);
        (bootstrap, auth_state)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Token Extraction Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn extracts_token_pair_from_fragment() {
        let tokens = extract_tokens(DEEP_LINK).unwrap();
        assert_eq!(tokens.access_token, "at-abc");
        assert_eq!(tokens.refresh_token, "rt-xyz");
    }

    #[test]
    fn decodes_percent_encoded_tokens() {
        let tokens =
            extract_tokens("app://cb#access_token=at%2Babc&refresh_token=rt-xyz").unwrap();
        assert_eq!(tokens.access_token, "at+abc");
    }

    #[test]
    fn no_fragment_yields_none() {
        assert!(extract_tokens("https://example.com/newsletters").is_none());
    }

    #[test]
    fn missing_refresh_token_yields_none() {
        assert!(extract_tokens("app://cb#access_token=at-abc").is_none());
    }

    #[test]
    fn empty_token_value_yields_none() {
        assert!(extract_tokens("app://cb#access_token=&refresh_token=rt").is_none());
    }

    #[test]
    fn unparseable_url_yields_none() {
        assert!(extract_tokens("not a url").is_none());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Bootstrap Flow Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn plain_link_is_a_noop() {
        let identity = Arc::new(MockIdentityProvider::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let (bootstrap, auth_state) = bootstrap(identity.clone(), navigator.clone());

        let outcome = bootstrap
            .handle_redirect("https://example.com/books")
            .await;

        assert_eq!(outcome, BootstrapOutcome::NoTokens);
        assert!(identity.set_session_calls().is_empty());
        assert!(navigator.routes().is_empty());
        assert_eq!(auth_state.version(), 0);
    }

    #[tokio::test]
    async fn tokens_establish_session_and_navigate() {
        let identity = Arc::new(MockIdentityProvider::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let (bootstrap, auth_state) = bootstrap(identity.clone(), navigator.clone());

        let outcome = bootstrap.handle_redirect(DEEP_LINK).await;

        assert_eq!(outcome, BootstrapOutcome::Authenticated);
        // The session is actively established from the extracted tokens
        let calls = identity.set_session_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].access_token, "at-abc");
        // Identity refreshed and version bumped
        assert_eq!(auth_state.version(), 1);
        assert_eq!(auth_state.profile().unwrap().id, "user-123");
        // Routed into the authenticated area
        assert_eq!(navigator.routes(), vec![Route::Authenticated]);
    }

    #[tokio::test]
    async fn falls_back_to_existing_session_when_establishment_fails() {
        let existing = Session::new("at-existing", "rt-existing");
        let identity = Arc::new(MockIdentityProvider::failing_set_session_with_existing(
            existing,
        ));
        let navigator = Arc::new(RecordingNavigator::new());
        let (bootstrap, auth_state) = bootstrap(identity, navigator.clone());

        let outcome = bootstrap.handle_redirect(DEEP_LINK).await;

        assert_eq!(outcome, BootstrapOutcome::Authenticated);
        assert_eq!(
            auth_state.session().unwrap().access_token,
            "at-existing"
        );
        assert_eq!(navigator.routes(), vec![Route::Authenticated]);
    }

    #[tokio::test]
    async fn stays_unauthenticated_when_no_session_can_be_established() {
        let identity = Arc::new(MockIdentityProvider::failing_set_session());
        let navigator = Arc::new(RecordingNavigator::new());
        let (bootstrap, auth_state) = bootstrap(identity, navigator.clone());

        let outcome = bootstrap.handle_redirect(DEEP_LINK).await;

        assert_eq!(outcome, BootstrapOutcome::Unauthenticated);
        assert!(navigator.routes().is_empty());
        assert_eq!(auth_state.version(), 0);
        assert!(!auth_state.is_authenticated());
    }

    #[tokio::test]
    async fn profile_fetch_failure_still_authenticates() {
        let identity = Arc::new(MockIdentityProvider::failing_profile());
        let navigator = Arc::new(RecordingNavigator::new());
        let (bootstrap, auth_state) = bootstrap(identity, navigator.clone());

        let outcome = bootstrap.handle_redirect(DEEP_LINK).await;

        assert_eq!(outcome, BootstrapOutcome::Authenticated);
        assert_eq!(auth_state.version(), 1);
        assert!(auth_state.profile().is_none());
        assert_eq!(navigator.routes(), vec![Route::Authenticated]);
    }

    #[tokio::test]
    async fn repeated_redirects_keep_bumping_the_version() {
        let identity = Arc::new(MockIdentityProvider::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let (bootstrap, auth_state) = bootstrap(identity, navigator);

        bootstrap.handle_redirect(DEEP_LINK).await;
        bootstrap.handle_redirect(DEEP_LINK).await;

        assert_eq!(auth_state.version(), 2);
    }
}
