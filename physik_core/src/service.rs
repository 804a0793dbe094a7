//! # Service Facade
//!
//! [`PhysikService`] bundles the catalogs, the solver, and the mutable
//! stores behind one typed surface. Each method corresponds to one API
//! operation; an HTTP layer on top only parses the request, calls the
//! matching method, and maps [`crate::ApiError`] to a status code.
//!
//! ## Example
//!
//! ```
//! use physik_core::PhysikService;
//!
//! let service = PhysikService::new();
//! let session = service
//!     .register(&physik_core::service::RegisterRequest {
//!         username: "anna".into(),
//!         password: "geheim".into(),
//!         email: "anna@example.com".into(),
//!     })
//!     .and_then(|_| {
//!         service.login(&physik_core::service::LoginRequest {
//!             username: "anna".into(),
//!             password: "geheim".into(),
//!         })
//!     })
//!     .unwrap();
//! service.add_favorite(&session.token, "ohms-law").unwrap();
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::errors::{ApiError, ApiResult};
use crate::formulas::{self, FormulaDefinition};
use crate::search::{self, SearchResults};
use crate::solver::{self, SolveResult};
use crate::store::favorites::FavoritesStore;
use crate::store::forum::{ForumReply, ForumStore, ForumTopic};
use crate::store::sessions::{Session, SessionStore};
use crate::store::users::{User, UserStore};
use crate::topics::{self, TopicArticle};

// ============================================================================
// REQUEST / RESPONSE TYPES
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// A fresh thread, before the store assigns id and date.
#[derive(Debug, Clone, Deserialize)]
pub struct NewForumTopic {
    pub title: String,
    pub category: String,
    pub author: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewForumReply {
    pub author: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: Uuid,
}

/// Successful login: the account plus the bearer token for later calls.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: User,
    pub token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub is_logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

// ============================================================================
// SERVICE
// ============================================================================

/// The application behind the API: static catalogs plus mutable state.
#[derive(Debug, Default)]
pub struct PhysikService {
    users: UserStore,
    sessions: SessionStore,
    favorites: FavoritesStore,
    forum: ForumStore,
}

impl PhysikService {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Catalogs, search, solver
    // ------------------------------------------------------------------

    pub fn formulas(&self) -> &'static [FormulaDefinition] {
        formulas::all()
    }

    pub fn formula(&self, id: &str) -> ApiResult<&'static FormulaDefinition> {
        formulas::by_id(id).ok_or_else(|| ApiError::not_found("Formel nicht gefunden"))
    }

    pub fn topics(&self) -> &'static [TopicArticle] {
        topics::all()
    }

    pub fn topic(&self, id: &str) -> ApiResult<&'static TopicArticle> {
        topics::by_id(id).ok_or_else(|| ApiError::not_found("Thema nicht gefunden"))
    }

    pub fn search(&self, query: &str) -> ApiResult<SearchResults> {
        search::search(query)
    }

    /// Solve a formula for `target` from a partial string assignment.
    pub fn solve(
        &self,
        formula_id: &str,
        target: &str,
        known_values: &HashMap<String, String>,
    ) -> ApiResult<Option<SolveResult>> {
        solver::solve(formula_id, target, known_values)
    }

    // ------------------------------------------------------------------
    // Forum
    // ------------------------------------------------------------------

    pub fn forum_topics(&self) -> Vec<ForumTopic> {
        self.forum.list()
    }

    pub fn forum_topic(&self, id: u64) -> ApiResult<ForumTopic> {
        self.forum
            .get(id)
            .ok_or_else(|| ApiError::not_found("Topic not found"))
    }

    /// Open a thread. All four fields must be non-blank.
    pub fn create_forum_topic(&self, new: &NewForumTopic) -> ApiResult<ForumTopic> {
        if [&new.title, &new.category, &new.author, &new.content]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(ApiError::bad_request("All fields are required"));
        }
        Ok(self
            .forum
            .create(&new.title, &new.category, &new.author, &new.content))
    }

    pub fn add_forum_reply(&self, topic_id: u64, new: &NewForumReply) -> ApiResult<ForumReply> {
        if new.author.trim().is_empty() || new.content.trim().is_empty() {
            return Err(ApiError::bad_request("Author and content are required"));
        }
        self.forum.add_reply(topic_id, &new.author, &new.content)
    }

    // ------------------------------------------------------------------
    // Accounts and sessions
    // ------------------------------------------------------------------

    pub fn register(&self, request: &RegisterRequest) -> ApiResult<RegisterResponse> {
        if [&request.username, &request.password, &request.email]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(ApiError::bad_request("Alle Felder müssen ausgefüllt werden"));
        }
        let user_id = self
            .users
            .register(&request.username, &request.password, &request.email)?;
        self.favorites.init_user(user_id);
        Ok(RegisterResponse {
            message: "Registrierung erfolgreich".to_owned(),
            user_id,
        })
    }

    pub fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        let user = self
            .users
            .verify(&request.username, &request.password)
            .ok_or_else(|| ApiError::unauthorized("Ungültiger Benutzername oder Passwort"))?;
        let session = self.sessions.create(user.id, &user.username);
        Ok(LoginResponse {
            message: "Anmeldung erfolgreich".to_owned(),
            user,
            token: session.token,
        })
    }

    /// Close the session for a token. Unknown tokens are a no-op; logging
    /// out twice is not an error.
    pub fn logout(&self, token: &str) {
        self.sessions.destroy(token);
    }

    /// The account behind a live session token.
    pub fn current_user(&self, token: &str) -> ApiResult<User> {
        let session = self.authenticate(token)?;
        self.users
            .get(session.user_id)
            .ok_or_else(|| ApiError::not_found("Benutzer nicht gefunden"))
    }

    /// Login state for a maybe-present token. Never errors; an expired or
    /// bogus token reads as logged out.
    pub fn auth_status(&self, token: Option<&str>) -> AuthStatus {
        match token.and_then(|t| self.sessions.resolve(t)) {
            Some(session) => AuthStatus {
                is_logged_in: true,
                username: Some(session.username),
            },
            None => AuthStatus {
                is_logged_in: false,
                username: None,
            },
        }
    }

    fn authenticate(&self, token: &str) -> ApiResult<Session> {
        self.sessions
            .resolve(token)
            .ok_or_else(|| ApiError::unauthorized("Nicht angemeldet"))
    }

    // ------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------

    /// Bookmark a formula. The id must exist in the catalog.
    pub fn add_favorite(&self, token: &str, formula_id: &str) -> ApiResult<()> {
        let session = self.authenticate(token)?;
        let formula = self.formula(formula_id)?;
        self.favorites.add(session.user_id, formula.id)
    }

    pub fn remove_favorite(&self, token: &str, formula_id: &str) -> ApiResult<()> {
        let session = self.authenticate(token)?;
        self.favorites.remove(session.user_id, formula_id)
    }

    /// The user's bookmarked formulas, resolved against the catalog in
    /// catalog order. Ids that no longer resolve are dropped silently.
    pub fn favorites(&self, token: &str) -> ApiResult<Vec<&'static FormulaDefinition>> {
        let session = self.authenticate(token)?;
        let ids = self.favorites.list(session.user_id);
        Ok(formulas::all()
            .iter()
            .filter(|f| ids.iter().any(|id| id == f.id))
            .collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn register_and_login(service: &PhysikService, username: &str) -> String {
        service
            .register(&RegisterRequest {
                username: username.to_owned(),
                password: "geheim123".to_owned(),
                email: format!("{username}@example.com"),
            })
            .unwrap();
        service
            .login(&LoginRequest {
                username: username.to_owned(),
                password: "geheim123".to_owned(),
            })
            .unwrap()
            .token
    }

    #[test]
    fn test_catalog_lookups() {
        let service = PhysikService::new();
        assert_eq!(service.formulas().len(), 29);
        assert_eq!(service.formula("ohms-law").unwrap().name, "Ohmsches Gesetz");
        assert_eq!(service.formula("nope").unwrap_err().status_code(), 404);
        assert_eq!(service.topic("kinematik").unwrap().name, "Kinematik");
        assert_eq!(service.topic("nope").unwrap_err().status_code(), 404);
    }

    #[test]
    fn test_solve_through_service() {
        let service = PhysikService::new();
        let known = HashMap::from([
            ("U".to_owned(), "230".to_owned()),
            ("R".to_owned(), "100".to_owned()),
        ]);
        let result = service.solve("ohms-law", "I", &known).unwrap().unwrap();
        assert!((result.value - 2.3).abs() < 1e-12);
        assert_eq!(result.unit, "A");
    }

    #[test]
    fn test_registration_validation() {
        let service = PhysikService::new();
        let err = service
            .register(&RegisterRequest {
                username: "anna".to_owned(),
                password: "".to_owned(),
                email: "a@example.com".to_owned(),
            })
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_body()["message"], "Alle Felder müssen ausgefüllt werden");
    }

    #[test]
    fn test_duplicate_registration() {
        let service = PhysikService::new();
        register_and_login(&service, "anna");
        let err = service
            .register(&RegisterRequest {
                username: "anna".to_owned(),
                password: "anderes".to_owned(),
                email: "neu@example.com".to_owned(),
            })
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_body()["message"], "Benutzername ist bereits vergeben");
    }

    #[test]
    fn test_login_and_auth_status() {
        let service = PhysikService::new();
        let token = register_and_login(&service, "anna");

        let status = service.auth_status(Some(&token));
        assert!(status.is_logged_in);
        assert_eq!(status.username.as_deref(), Some("anna"));

        assert!(!service.auth_status(None).is_logged_in);
        assert!(!service.auth_status(Some("falsches-token")).is_logged_in);

        let user = service.current_user(&token).unwrap();
        assert_eq!(user.username, "anna");

        service.logout(&token);
        assert!(!service.auth_status(Some(&token)).is_logged_in);
        assert_eq!(service.current_user(&token).unwrap_err().status_code(), 401);
    }

    #[test]
    fn test_wrong_credentials() {
        let service = PhysikService::new();
        register_and_login(&service, "anna");
        let err = service
            .login(&LoginRequest {
                username: "anna".to_owned(),
                password: "falsch".to_owned(),
            })
            .unwrap_err();
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.to_body()["message"], "Ungültiger Benutzername oder Passwort");
    }

    #[test]
    fn test_favorites_flow() {
        let service = PhysikService::new();
        let token = register_and_login(&service, "anna");

        assert!(service.favorites(&token).unwrap().is_empty());

        service.add_favorite(&token, "kinetic-energy").unwrap();
        service.add_favorite(&token, "ohms-law").unwrap();

        // Listing resolves ids against the catalog, in catalog order
        let favs = service.favorites(&token).unwrap();
        let ids: Vec<_> = favs.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["ohms-law", "kinetic-energy"]);

        let err = service.add_favorite(&token, "ohms-law").unwrap_err();
        assert_eq!(err.to_body()["message"], "Formel ist bereits in Favoriten");

        let err = service.add_favorite(&token, "keine-formel").unwrap_err();
        assert_eq!(err.status_code(), 404);

        service.remove_favorite(&token, "ohms-law").unwrap();
        let ids: Vec<_> = service
            .favorites(&token)
            .unwrap()
            .iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec!["kinetic-energy"]);

        let err = service.remove_favorite(&token, "ohms-law").unwrap_err();
        assert_eq!(err.to_body()["message"], "Formel nicht in Favoriten gefunden");
    }

    #[test]
    fn test_favorites_require_authentication() {
        let service = PhysikService::new();
        for err in [
            service.add_favorite("kein-token", "ohms-law").unwrap_err(),
            service.remove_favorite("kein-token", "ohms-law").unwrap_err(),
            service.favorites("kein-token").unwrap_err(),
        ] {
            assert_eq!(err.status_code(), 401);
            assert_eq!(err.to_body()["message"], "Nicht angemeldet");
        }
    }

    #[test]
    fn test_forum_flow() {
        let service = PhysikService::new();
        assert_eq!(service.forum_topics().len(), 4);

        let topic = service
            .create_forum_topic(&NewForumTopic {
                title: "Impulserhaltung".to_owned(),
                category: "basic".to_owned(),
                author: "anna".to_owned(),
                content: "Wie wendet man die Impulserhaltung bei Stößen an?".to_owned(),
            })
            .unwrap();
        assert_eq!(topic.id, 5);

        let reply = service
            .add_forum_reply(
                topic.id,
                &NewForumReply {
                    author: "bob".to_owned(),
                    content: "Gesamtimpuls vorher gleich Gesamtimpuls nachher.".to_owned(),
                },
            )
            .unwrap();
        assert_eq!(reply.author, "bob");
        assert_eq!(service.forum_topic(topic.id).unwrap().replies.len(), 1);
    }

    #[test]
    fn test_forum_validation() {
        let service = PhysikService::new();

        let err = service
            .create_forum_topic(&NewForumTopic {
                title: "Titel".to_owned(),
                category: "".to_owned(),
                author: "anna".to_owned(),
                content: "Inhalt".to_owned(),
            })
            .unwrap_err();
        assert_eq!(err.to_body()["message"], "All fields are required");

        let err = service
            .add_forum_reply(
                1,
                &NewForumReply {
                    author: "anna".to_owned(),
                    content: "   ".to_owned(),
                },
            )
            .unwrap_err();
        assert_eq!(err.to_body()["message"], "Author and content are required");

        let err = service
            .add_forum_reply(
                99,
                &NewForumReply {
                    author: "anna".to_owned(),
                    content: "Inhalt".to_owned(),
                },
            )
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_body()["message"], "Topic not found");
    }
}
