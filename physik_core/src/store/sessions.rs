//! # Login Sessions
//!
//! Bearer-token sessions with a fixed 24 hour lifetime. Expired sessions are
//! dropped lazily when the token is next presented.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Session lifetime from creation; there is no sliding renewal.
const SESSION_TTL_HOURS: i64 = 24;

// ============================================================================
// TYPES
// ============================================================================

/// An active login. The token doubles as the map key.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: Uuid,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

// ============================================================================
// OPERATIONS
// ============================================================================

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for a user and hand back its token.
    pub fn create(&self, user_id: Uuid, username: &str) -> Session {
        let session = Session {
            token: Uuid::new_v4().simple().to_string(),
            user_id,
            username: username.to_owned(),
            expires_at: Utc::now() + Duration::hours(SESSION_TTL_HOURS),
        };
        super::lock(&self.sessions).insert(session.token.clone(), session.clone());
        session
    }

    /// Look up a live session by token.
    ///
    /// A token whose session has expired is removed here; the caller sees
    /// the same `None` as for a token that never existed.
    pub fn resolve(&self, token: &str) -> Option<Session> {
        let mut sessions = super::lock(&self.sessions);
        match sessions.get(token) {
            Some(session) if session.expires_at > Utc::now() => Some(session.clone()),
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    /// Close a session. Returns whether a session existed for the token.
    pub fn destroy(&self, token: &str) -> bool {
        super::lock(&self.sessions).remove(token).is_some()
    }

    /// Backdate a session's expiry for expiry-path tests.
    #[cfg(test)]
    pub(crate) fn force_expire(&self, token: &str) {
        if let Some(session) = super::lock(&self.sessions).get_mut(token) {
            session.expires_at = Utc::now() - Duration::seconds(1);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_resolve() {
        let store = SessionStore::new();
        let user_id = Uuid::new_v4();
        let session = store.create(user_id, "anna");

        let resolved = store.resolve(&session.token).unwrap();
        assert_eq!(resolved.user_id, user_id);
        assert_eq!(resolved.username, "anna");

        assert!(store.resolve("kein-solches-token").is_none());
    }

    #[test]
    fn test_token_is_opaque_hex() {
        let store = SessionStore::new();
        let session = store.create(Uuid::new_v4(), "anna");
        assert_eq!(session.token.len(), 32);
        assert!(session.token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_destroy() {
        let store = SessionStore::new();
        let session = store.create(Uuid::new_v4(), "anna");
        assert!(store.destroy(&session.token));
        assert!(store.resolve(&session.token).is_none());
        assert!(!store.destroy(&session.token));
    }

    #[test]
    fn test_expired_session_is_dropped_on_resolve() {
        let store = SessionStore::new();
        let session = store.create(Uuid::new_v4(), "anna");
        store.force_expire(&session.token);

        assert!(store.resolve(&session.token).is_none());
        // The entry is gone, not just hidden
        assert!(!store.destroy(&session.token));
    }

    #[test]
    fn test_sessions_are_independent() {
        let store = SessionStore::new();
        let a = store.create(Uuid::new_v4(), "anna");
        let b = store.create(Uuid::new_v4(), "bob");
        assert_ne!(a.token, b.token);

        store.destroy(&a.token);
        assert!(store.resolve(&b.token).is_some());
    }
}
