//! # Favorites
//!
//! Per-user lists of bookmarked formula ids, kept in insertion order. The
//! store holds plain ids; resolving them against the formula catalog is the
//! caller's concern.

use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::errors::{ApiError, ApiResult};

#[derive(Debug, Default)]
pub struct FavoritesStore {
    favorites: Mutex<HashMap<Uuid, Vec<String>>>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give a freshly registered user an empty list.
    pub fn init_user(&self, user_id: Uuid) {
        super::lock(&self.favorites).entry(user_id).or_default();
    }

    /// Bookmark a formula id. Duplicates are rejected.
    pub fn add(&self, user_id: Uuid, formula_id: &str) -> ApiResult<()> {
        let mut favorites = super::lock(&self.favorites);
        let list = favorites.entry(user_id).or_default();
        if list.iter().any(|id| id == formula_id) {
            return Err(ApiError::conflict("Formel ist bereits in Favoriten"));
        }
        list.push(formula_id.to_owned());
        Ok(())
    }

    /// Remove a bookmarked id.
    pub fn remove(&self, user_id: Uuid, formula_id: &str) -> ApiResult<()> {
        let mut favorites = super::lock(&self.favorites);
        let list = favorites.entry(user_id).or_default();
        match list.iter().position(|id| id == formula_id) {
            Some(index) => {
                list.remove(index);
                Ok(())
            }
            None => Err(ApiError::not_found("Formel nicht in Favoriten gefunden")),
        }
    }

    /// The user's bookmarked ids in insertion order.
    pub fn list(&self, user_id: Uuid) -> Vec<String> {
        super::lock(&self.favorites)
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_list_remove() {
        let store = FavoritesStore::new();
        let user = Uuid::new_v4();
        store.init_user(user);

        store.add(user, "ohms-law").unwrap();
        store.add(user, "kinetic-energy").unwrap();
        assert_eq!(store.list(user), vec!["ohms-law", "kinetic-energy"]);

        store.remove(user, "ohms-law").unwrap();
        assert_eq!(store.list(user), vec!["kinetic-energy"]);
    }

    #[test]
    fn test_duplicate_add_rejected() {
        let store = FavoritesStore::new();
        let user = Uuid::new_v4();
        store.add(user, "ohms-law").unwrap();
        let err = store.add(user, "ohms-law").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(store.list(user).len(), 1);
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let store = FavoritesStore::new();
        let user = Uuid::new_v4();
        let err = store.remove(user, "ohms-law").unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_lists_are_per_user() {
        let store = FavoritesStore::new();
        let anna = Uuid::new_v4();
        let bob = Uuid::new_v4();
        store.add(anna, "momentum").unwrap();
        assert!(store.list(bob).is_empty());
        assert_eq!(store.list(anna), vec!["momentum"]);
    }
}
