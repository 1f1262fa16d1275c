//! Process-wide identity state.
//!
//! Holds the current session and profile behind a version counter. UI
//! layers that cache profile-bound data key their caches on the version,
//! so a refresh forces a refetch without any explicit invalidation wiring.
//!
//! Lifecycle: initialized empty at process start, mutated only through
//! [`AuthState::refresh`] (which bumps the version) and torn down with
//! [`AuthState::sign_out`]. Shared by `Arc`, never as a global singleton.

use std::sync::RwLock;

use super::{Session, UserProfile};

#[derive(Debug, Default)]
struct Inner {
    session: Option<Session>,
    profile: Option<UserProfile>,
    version: u64,
}

/// Versioned identity state shared across the process.
#[derive(Debug, Default)]
pub struct AuthState {
    inner: RwLock<Inner>,
}

impl AuthState {
    /// Creates empty, signed-out state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current auth version. Starts at 0 and bumps on every refresh.
    pub fn version(&self) -> u64 {
        self.inner.read().expect("auth state lock poisoned").version
    }

    /// Current session, if one is established.
    pub fn session(&self) -> Option<Session> {
        self.inner
            .read()
            .expect("auth state lock poisoned")
            .session
            .clone()
    }

    /// Current profile, if one has been fetched.
    pub fn profile(&self) -> Option<UserProfile> {
        self.inner
            .read()
            .expect("auth state lock poisoned")
            .profile
            .clone()
    }

    /// Returns true if a session is established.
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .expect("auth state lock poisoned")
            .session
            .is_some()
    }

    /// Replaces the session and profile, bumping the version counter.
    ///
    /// Returns the new version.
    pub fn refresh(&self, session: Session, profile: Option<UserProfile>) -> u64 {
        let mut inner = self.inner.write().expect("auth state lock poisoned");
        inner.session = Some(session);
        inner.profile = profile;
        inner.version += 1;
        inner.version
    }

    /// Clears the session and profile, bumping the version counter so
    /// dependent caches drop stale identity-bound data.
    pub fn sign_out(&self) -> u64 {
        let mut inner = self.inner.write().expect("auth state lock poisoned");
        inner.session = None;
        inner.profile = None;
        inner.version += 1;
        inner.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> Session {
        Session::new("access-abc", "refresh-xyz")
    }

    fn test_profile() -> UserProfile {
        UserProfile {
            id: "user-123".to_string(),
            email: Some("a@x.com".to_string()),
            display_name: Some("Asha".to_string()),
        }
    }

    #[test]
    fn starts_signed_out_at_version_zero() {
        let state = AuthState::new();
        assert_eq!(state.version(), 0);
        assert!(!state.is_authenticated());
        assert!(state.session().is_none());
        assert!(state.profile().is_none());
    }

    #[test]
    fn refresh_establishes_session_and_bumps_version() {
        let state = AuthState::new();

        let version = state.refresh(test_session(), Some(test_profile()));

        assert_eq!(version, 1);
        assert!(state.is_authenticated());
        assert_eq!(state.profile().unwrap().id, "user-123");
    }

    #[test]
    fn version_is_monotonic_across_refreshes() {
        let state = AuthState::new();
        let first = state.refresh(test_session(), None);
        let second = state.refresh(test_session(), Some(test_profile()));
        assert!(second > first);
    }

    #[test]
    fn sign_out_clears_state_and_bumps_version() {
        let state = AuthState::new();
        state.refresh(test_session(), Some(test_profile()));

        let version = state.sign_out();

        assert_eq!(version, 2);
        assert!(!state.is_authenticated());
        assert!(state.profile().is_none());
    }
}
