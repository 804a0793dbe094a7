//! # physik_core - Physics Education Engine
//!
//! `physik_core` is the engine behind PhysikHub, a German-language physics
//! education service. It provides a hand-authored formula catalog, a
//! variable-driven solver, topic articles with full-text search, and the
//! in-memory community stores (users, sessions, favorites, forum). All inputs
//! and outputs are JSON-serializable, so the crate can sit directly behind any
//! HTTP transport layer.
//!
//! ## Design Philosophy
//!
//! - **Catalog-first**: Formulas and topics are immutable, hand-authored data
//! - **Variant dispatch**: "Solving" is first-match selection over declared
//!   solve variants, not symbolic algebra
//! - **JSON-First**: API-facing types implement Serialize with the wire names
//! - **Rich Errors**: Structured error types with an HTTP status mapping
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use physik_core::solver::solve;
//!
//! let known = HashMap::from([
//!     ("U".to_string(), "230".to_string()),
//!     ("R".to_string(), "100".to_string()),
//! ]);
//!
//! let result = solve("ohms-law", "I", &known).unwrap().unwrap();
//! assert_eq!(result.value, 2.3);
//! assert_eq!(result.unit, "A");
//! ```
//!
//! ## Modules
//!
//! - [`formulas`] - The formula registry (definitions, variables, variants)
//! - [`solver`] - Solve-variant dispatch and evaluation
//! - [`topics`] - Topic article catalog
//! - [`search`] - Substring search over formulas and topics
//! - [`auth`] - Password hashing
//! - [`store`] - In-memory stores (users, sessions, favorites, forum)
//! - [`service`] - The API facade mapping 1:1 onto the HTTP endpoints
//! - [`errors`] - Structured error types

pub mod auth;
pub mod errors;
pub mod formulas;
pub mod search;
pub mod service;
pub mod solver;
pub mod store;
pub mod topics;

// Re-export commonly used types at crate root for convenience
pub use errors::{ApiError, ApiResult};
pub use service::PhysikService;
pub use solver::{solve, SolveResult};
