//! # Topic Library
//!
//! Curated learning articles grouped by curriculum area. Each article carries
//! a short description and introduction (plain text, indexed by search) plus
//! HTML explanation and example sections that clients render as-is.
//!
//! ## Example
//!
//! ```
//! use physik_core::topics;
//!
//! let topic = topics::by_id("kinematik").unwrap();
//! assert_eq!(topic.name, "Kinematik");
//! assert!(topic.related_formulas.contains(&"geschwindigkeit"));
//! ```

pub mod catalog;

use serde::Serialize;

use crate::formulas::{Category, Level};

// ============================================================================
// TYPES
// ============================================================================

/// A learning article in the topic library.
///
/// Cross-references in `related_formulas` and `related_topics` are ids; some
/// point at entries that do not exist in the catalogs. Lookups tolerate that,
/// clients simply skip dangling links.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicArticle {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    /// Difficulty marker; older entries never carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    /// One-paragraph teaser, indexed by search.
    pub short_description: &'static str,
    /// Opening paragraph, indexed by search.
    pub introduction: &'static str,
    /// HTML body, passed through verbatim.
    pub explanation: &'static str,
    /// HTML worked examples, passed through verbatim.
    pub examples: &'static str,
    pub related_formulas: &'static [&'static str],
    pub related_topics: &'static [&'static str],
}

// ============================================================================
// REGISTRY
// ============================================================================

/// All topic articles in publication order.
pub fn all() -> &'static [TopicArticle] {
    catalog::TOPICS
}

/// Look up a topic by id.
///
/// The library historically contains entries sharing an id; the first one in
/// publication order wins, matching the list ordering clients see.
pub fn by_id(id: &str) -> Option<&'static TopicArticle> {
    catalog::TOPICS.iter().find(|t| t.id == id)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_id() {
        let topic = by_id("gravitationsfeld").unwrap();
        assert_eq!(topic.name, "Das Gravitationsfeld");
        assert_eq!(topic.level, Some(Level::Advanced));
        assert!(by_id("no-such-topic").is_none());
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first_entry() {
        // "elektrische-feld" appears twice in the library; by_id must return
        // the first (leveled) entry.
        let duplicates: Vec<_> = all().iter().filter(|t| t.id == "elektrische-feld").collect();
        assert_eq!(duplicates.len(), 2);
        let resolved = by_id("elektrische-feld").unwrap();
        assert!(std::ptr::eq(resolved, duplicates[0]));
        assert_eq!(resolved.level, Some(Level::Advanced));
    }

    #[test]
    fn test_publication_order_is_stable() {
        let ids: Vec<_> = all().iter().map(|t| t.id).collect();
        assert_eq!(ids[0], "gravitationsfeld");
        assert_eq!(ids[5], "kinematik");
        assert_eq!(*ids.last().unwrap(), "thermo");
        assert_eq!(ids.len(), 14);
    }

    #[test]
    fn test_search_indexed_fields_are_nonempty() {
        for topic in all() {
            assert!(!topic.name.is_empty());
            assert!(!topic.short_description.is_empty(), "{} lacks teaser", topic.id);
            assert!(!topic.introduction.is_empty(), "{} lacks introduction", topic.id);
        }
    }

    #[test]
    fn test_serialization_uses_wire_names() {
        let topic = by_id("kinematik").unwrap();
        let json = serde_json::to_value(topic).unwrap();
        assert_eq!(json["id"], "kinematik");
        assert_eq!(json["category"], "mechanics");
        assert_eq!(json["level"], "basic");
        assert!(json["shortDescription"].is_string());
        assert!(json["relatedFormulas"].is_array());
        assert!(json.get("short_description").is_none());
    }

    #[test]
    fn test_unleveled_entries_omit_level() {
        let topic = by_id("newton").unwrap();
        assert!(topic.level.is_none());
        let json = serde_json::to_value(topic).unwrap();
        assert!(json.get("level").is_none());
    }
}
