//! # Search
//!
//! Case-insensitive substring search over the formula and topic catalogs.
//!
//! Formulas match on name and explanation, topics additionally on their short
//! description and introduction. The HTML article bodies are not indexed.
//!
//! ## Example
//!
//! ```
//! use physik_core::search;
//!
//! let results = search::search("ohmsche").unwrap();
//! assert!(results.formulas.iter().any(|f| f.id == "ohms-law"));
//! assert!(results.topics.iter().any(|t| t.id == "ohm"));
//! ```

use serde::Serialize;

use crate::errors::{ApiError, ApiResult};
use crate::formulas::{self, FormulaDefinition};
use crate::topics::{self, TopicArticle};

// ============================================================================
// TYPES
// ============================================================================

/// Matches across both catalogs, each in catalog order.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub formulas: Vec<&'static FormulaDefinition>,
    pub topics: Vec<&'static TopicArticle>,
}

// ============================================================================
// SEARCH
// ============================================================================

/// Run a substring search over both catalogs.
///
/// A query that is empty (after trimming) is rejected; a query that matches
/// nothing yields empty lists, not an error.
pub fn search(query: &str) -> ApiResult<SearchResults> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Err(ApiError::bad_request("Suchbegriff erforderlich"));
    }

    let formulas = formulas::all()
        .iter()
        .filter(|f| {
            f.name.to_lowercase().contains(&query)
                || f.explanation.to_lowercase().contains(&query)
        })
        .collect();

    let topics = topics::all()
        .iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&query)
                || t.short_description.to_lowercase().contains(&query)
                || t.introduction.to_lowercase().contains(&query)
        })
        .collect();

    Ok(SearchResults { formulas, topics })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_rejected() {
        for query in ["", "   ", "\t"] {
            let err = search(query).unwrap_err();
            assert_eq!(err.status_code(), 400);
        }
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let lower = search("gravitation").unwrap();
        let upper = search("GRAVITATION").unwrap();
        assert!(!lower.formulas.is_empty());
        assert_eq!(
            lower.formulas.iter().map(|f| f.id).collect::<Vec<_>>(),
            upper.formulas.iter().map(|f| f.id).collect::<Vec<_>>(),
        );
    }

    #[test]
    fn test_matches_formula_name_and_explanation() {
        // "Snellius" only occurs in the formula name
        let results = search("snellius").unwrap();
        assert!(results.formulas.iter().any(|f| f.id == "brechungsgesetz"));

        // "Solenoid" only occurs in an explanation
        let results = search("solenoid").unwrap();
        assert!(results.formulas.iter().any(|f| f.id == "magnetisches-feld-spule"));
    }

    #[test]
    fn test_matches_topic_teaser_and_introduction() {
        // "Gezeiten" occurs in the gravitationsfeld teaser
        let results = search("gezeiten").unwrap();
        assert!(results.topics.iter().any(|t| t.id == "gravitationsfeld"));

        // "Faraday" occurs in topic introductions
        let results = search("faraday").unwrap();
        assert!(results.topics.iter().any(|t| t.id == "elektromagnetische-induktion"));
    }

    #[test]
    fn test_miss_yields_empty_lists() {
        let results = search("xyzzy-kein-treffer").unwrap();
        assert!(results.formulas.is_empty());
        assert!(results.topics.is_empty());
    }

    #[test]
    fn test_results_keep_catalog_order() {
        let results = search("feld").unwrap();
        let positions: Vec<usize> = results
            .topics
            .iter()
            .map(|hit| {
                crate::topics::all()
                    .iter()
                    .position(|t| std::ptr::eq(t, *hit))
                    .unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
