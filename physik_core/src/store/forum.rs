//! # Forum
//!
//! Discussion threads with flat reply lists. The store ships with a handful
//! of seeded threads so the forum is never empty on a fresh start.
//!
//! Thread ids come from an atomic counter seeded past the highest seeded id,
//! so concurrent creates can never collide.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::errors::{ApiError, ApiResult};

// ============================================================================
// TYPES
// ============================================================================

/// A reply within a thread. Replies have no ids of their own.
#[derive(Debug, Clone, Serialize)]
pub struct ForumReply {
    pub author: String,
    pub date: String,
    pub content: String,
}

/// A discussion thread.
#[derive(Debug, Clone, Serialize)]
pub struct ForumTopic {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub author: String,
    pub date: String,
    pub content: String,
    pub replies: Vec<ForumReply>,
}

#[derive(Debug)]
pub struct ForumStore {
    topics: Mutex<Vec<ForumTopic>>,
    next_id: AtomicU64,
}

// ============================================================================
// OPERATIONS
// ============================================================================

impl ForumStore {
    pub fn new() -> Self {
        let seeded = seed_topics();
        let next_id = seeded.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            topics: Mutex::new(seeded),
            next_id: AtomicU64::new(next_id),
        }
    }

    /// All threads in creation order.
    pub fn list(&self) -> Vec<ForumTopic> {
        super::lock(&self.topics).clone()
    }

    pub fn get(&self, id: u64) -> Option<ForumTopic> {
        super::lock(&self.topics).iter().find(|t| t.id == id).cloned()
    }

    /// Open a new thread, dated today.
    pub fn create(&self, title: &str, category: &str, author: &str, content: &str) -> ForumTopic {
        let topic = ForumTopic {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            title: title.to_owned(),
            category: category.to_owned(),
            author: author.to_owned(),
            date: today(),
            content: content.to_owned(),
            replies: Vec::new(),
        };
        super::lock(&self.topics).push(topic.clone());
        topic
    }

    /// Append a reply to an existing thread.
    pub fn add_reply(&self, topic_id: u64, author: &str, content: &str) -> ApiResult<ForumReply> {
        let mut topics = super::lock(&self.topics);
        let topic = topics
            .iter_mut()
            .find(|t| t.id == topic_id)
            .ok_or_else(|| ApiError::not_found("Topic not found"))?;
        let reply = ForumReply {
            author: author.to_owned(),
            date: today(),
            content: content.to_owned(),
        };
        topic.replies.push(reply.clone());
        Ok(reply)
    }
}

impl Default for ForumStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Calendar date in `YYYY-MM-DD`, the only precision the forum keeps.
fn today() -> String {
    chrono::Utc::now().date_naive().to_string()
}

// ============================================================================
// SEED DATA
// ============================================================================

fn seed_topics() -> Vec<ForumTopic> {
    fn topic(
        id: u64,
        title: &str,
        category: &str,
        author: &str,
        date: &str,
        content: &str,
        replies: Vec<ForumReply>,
    ) -> ForumTopic {
        ForumTopic {
            id,
            title: title.to_owned(),
            category: category.to_owned(),
            author: author.to_owned(),
            date: date.to_owned(),
            content: content.to_owned(),
            replies,
        }
    }
    fn reply(author: &str, date: &str, content: &str) -> ForumReply {
        ForumReply {
            author: author.to_owned(),
            date: date.to_owned(),
            content: content.to_owned(),
        }
    }

    vec![
        topic(
            1,
            "Gravitationskraft und Fallbeschleunigung",
            "basic",
            "PhysikFan",
            "2025-03-15",
            "Ich verstehe den Unterschied zwischen Gravitationskraft und Fallbeschleunigung \
             nicht ganz. Kann jemand das erklären?",
            vec![reply(
                "PhysikLehrer",
                "2025-03-16",
                "Die Gravitationskraft ist die Kraft, mit der zwei Massen sich gegenseitig \
                 anziehen (F = G * (m1*m2)/r²). Die Fallbeschleunigung (g ≈ 9,81 m/s²) hingegen \
                 ist die Beschleunigung, die ein Körper aufgrund dieser Kraft erfährt, wenn er \
                 im Gravitationsfeld fällt. Nach Newtons zweitem Gesetz gilt: F = m * a, wobei \
                 F die Gravitationskraft, m die Masse des Körpers und a die Beschleunigung ist.",
            )],
        ),
        topic(
            2,
            "Relativitätstheorie - Zeitdilatation verständlich erklärt",
            "advanced",
            "EinsteinFan",
            "2025-03-14",
            "Ich suche nach einer verständlichen Erklärung der Zeitdilatation in der speziellen \
             Relativitätstheorie. Hat jemand gute Ressourcen oder Erklärungen?",
            vec![],
        ),
        topic(
            3,
            "Hebelgesetz - Anwendungsbeispiele",
            "basic",
            "MechanikerIn",
            "2025-03-18",
            "Welche alltäglichen Beispiele gibt es für das Hebelgesetz? Ich suche nach \
             praktischen Anwendungen, die ich im Unterricht vorstellen kann.",
            vec![
                reply(
                    "PhysikProf",
                    "2025-03-18",
                    "Klassische Beispiele sind Schere, Nussknacker, Wippe, Flaschenöffner oder \
                     Brechstange. Auch ein Kugelschreiber, den man drückt, nutzt das Hebelgesetz!",
                ),
                reply(
                    "HobbyTüftler",
                    "2025-03-19",
                    "Vergiss nicht den menschlichen Körper! Unsere Muskeln und Knochen bilden \
                     Hebelsysteme. Ein einfaches Beispiel ist das Heben eines Gewichts mit dem \
                     Unterarm.",
                ),
            ],
        ),
        topic(
            4,
            "Quantenverschränkung - Frage zum EPR-Paradoxon",
            "advanced",
            "QuantenForscher",
            "2025-03-17",
            "Wie lässt sich das EPR-Paradoxon in Bezug auf die Quantenverschränkung am besten \
             verstehen? Ich habe Schwierigkeiten, die Nicht-Lokalität zu interpretieren.",
            vec![],
        ),
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_threads() {
        let store = ForumStore::new();
        let topics = store.list();
        assert_eq!(topics.len(), 4);
        assert_eq!(topics[0].id, 1);
        assert_eq!(topics[0].replies.len(), 1);
        assert_eq!(topics[2].replies.len(), 2);
        assert!(topics[1].replies.is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let store = ForumStore::new();
        let topic = store.get(2).unwrap();
        assert_eq!(topic.author, "EinsteinFan");
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let store = ForumStore::new();
        let first = store.create("Titel", "basic", "anna", "Inhalt");
        let second = store.create("Titel 2", "advanced", "bob", "Inhalt 2");
        assert_eq!(first.id, 5);
        assert_eq!(second.id, 6);
        assert!(first.replies.is_empty());
        assert_eq!(store.list().len(), 6);
    }

    #[test]
    fn test_created_topic_is_dated_today() {
        let store = ForumStore::new();
        let topic = store.create("Titel", "basic", "anna", "Inhalt");
        assert_eq!(topic.date, chrono::Utc::now().date_naive().to_string());
    }

    #[test]
    fn test_add_reply() {
        let store = ForumStore::new();
        let reply = store.add_reply(2, "carla", "Eine Antwort").unwrap();
        assert_eq!(reply.author, "carla");
        assert_eq!(store.get(2).unwrap().replies.len(), 1);
    }

    #[test]
    fn test_reply_to_missing_thread() {
        let store = ForumStore::new();
        let err = store.add_reply(42, "carla", "Antwort").unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_ids_survive_concurrent_creates() {
        use std::sync::Arc;

        let store = Arc::new(ForumStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store.create(&format!("Thread {i}"), "basic", "tester", "Inhalt").id
                })
            })
            .collect();
        let mut ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }
}
