//! # In-Memory Stores
//!
//! Mutable application state: user accounts, login sessions, per-user
//! favorites, and the discussion forum. Everything lives in memory and is
//! lost on restart; the catalogs in [`crate::formulas`] and [`crate::topics`]
//! are the only durable data.
//!
//! Each store guards its state behind a `Mutex` and hands out owned clones,
//! so no lock is held across caller code.

pub mod favorites;
pub mod forum;
pub mod sessions;
pub mod users;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a store mutex, recovering from poisoning.
///
/// Store state stays consistent under every early return, so a panic while
/// holding the lock leaves nothing half-written worth discarding.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
