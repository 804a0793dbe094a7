//! # User Accounts
//!
//! Registered users with salted password hashes. Usernames are unique and
//! compared case-sensitively, matching what clients send at registration.

use serde::Serialize;
use std::sync::Mutex;
use uuid::Uuid;

use crate::auth;
use crate::errors::{ApiError, ApiResult};

// ============================================================================
// TYPES
// ============================================================================

/// A registered account. The password hash never serializes.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub(crate) password_hash: String,
}

/// Registry of all accounts.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Mutex<Vec<User>>,
}

// ============================================================================
// OPERATIONS
// ============================================================================

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account. The username must be unused.
    pub fn register(&self, username: &str, password: &str, email: &str) -> ApiResult<Uuid> {
        let mut users = super::lock(&self.users);
        if users.iter().any(|u| u.username == username) {
            return Err(ApiError::conflict("Benutzername ist bereits vergeben"));
        }
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_owned(),
            email: email.to_owned(),
            password_hash: auth::hash_password(password),
        };
        let id = user.id;
        users.push(user);
        Ok(id)
    }

    /// Check credentials, returning the account on success.
    ///
    /// Unknown username and wrong password are indistinguishable to the
    /// caller.
    pub fn verify(&self, username: &str, password: &str) -> Option<User> {
        let users = super::lock(&self.users);
        users
            .iter()
            .find(|u| u.username == username)
            .filter(|u| auth::verify_password(password, &u.password_hash))
            .cloned()
    }

    pub fn get(&self, id: Uuid) -> Option<User> {
        super::lock(&self.users).iter().find(|u| u.id == id).cloned()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_verify() {
        let store = UserStore::new();
        let id = store.register("anna", "passwort1", "anna@example.com").unwrap();

        let user = store.verify("anna", "passwort1").unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.email, "anna@example.com");

        assert!(store.verify("anna", "falsch").is_none());
        assert!(store.verify("unbekannt", "passwort1").is_none());
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let store = UserStore::new();
        store.register("anna", "erstes", "a@example.com").unwrap();
        let err = store.register("anna", "zweites", "b@example.com").unwrap_err();
        assert_eq!(err.status_code(), 400);

        // The original registration is untouched
        assert!(store.verify("anna", "erstes").is_some());
        assert!(store.verify("anna", "zweites").is_none());
    }

    #[test]
    fn test_get_by_id() {
        let store = UserStore::new();
        let id = store.register("bob", "pw", "bob@example.com").unwrap();
        assert_eq!(store.get(id).unwrap().username, "bob");
        assert!(store.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let store = UserStore::new();
        let id = store.register("carla", "pw", "c@example.com").unwrap();
        let json = serde_json::to_value(store.get(id).unwrap()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("username").is_some());
    }
}
