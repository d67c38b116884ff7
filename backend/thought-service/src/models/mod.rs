/// Data models for thought-service
///
/// This module defines structures for:
/// - Thought: a submitted shower-thought with its reaction counters
/// - Reaction: the closed set of vote kinds a viewer may apply
/// - VoteCounts / VoteDelta: per-thought counter state and signed changes
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four reaction kinds a viewer may cast on a thought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    Approve,
    Affection,
    Surprise,
    Derision,
}

/// Per-thought reaction counters. Counters never go below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCounts {
    pub approve: i64,
    pub affection: i64,
    pub surprise: i64,
    pub derision: i64,
}

impl VoteCounts {
    /// Ranking score. Derision does not contribute.
    pub fn score(&self) -> i64 {
        self.approve + self.affection + self.surprise
    }
}

/// Signed counter changes produced by the vote reconciler and applied
/// atomically by the repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteDelta {
    pub approve: i64,
    pub affection: i64,
    pub surprise: i64,
    pub derision: i64,
}

impl VoteDelta {
    pub fn counter_mut(&mut self, reaction: Reaction) -> &mut i64 {
        match reaction {
            Reaction::Approve => &mut self.approve,
            Reaction::Affection => &mut self.affection,
            Reaction::Surprise => &mut self.surprise,
            Reaction::Derision => &mut self.derision,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.approve == 0 && self.affection == 0 && self.surprise == 0 && self.derision == 0
    }
}

/// A submitted shower-thought. Immutable after creation except for the
/// reaction counters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Thought {
    pub id: Uuid,
    pub content: String,
    pub username: String,
    pub twitter: Option<String>,
    pub votes: VoteCounts,
    pub background_tag: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_excludes_derision() {
        let votes = VoteCounts {
            approve: 2,
            affection: 3,
            surprise: 1,
            derision: 40,
        };
        assert_eq!(votes.score(), 6);
    }

    #[test]
    fn reaction_kinds_use_snake_case_on_the_wire() {
        let encoded = serde_json::to_string(&Reaction::Surprise).unwrap();
        assert_eq!(encoded, "\"surprise\"");

        let decoded: Reaction = serde_json::from_str("\"derision\"").unwrap();
        assert_eq!(decoded, Reaction::Derision);
    }

    #[test]
    fn thought_serializes_votes_as_nested_object() {
        let thought = Thought {
            id: Uuid::nil(),
            content: "wet water".to_string(),
            username: "ada".to_string(),
            twitter: None,
            votes: VoteCounts::default(),
            background_tag: "rgb(11 169 91)".to_string(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&thought).unwrap();
        assert_eq!(value["votes"]["approve"], 0);
        assert_eq!(value["votes"]["derision"], 0);
        assert!(value.get("backgroundTag").is_some());
        assert!(value.get("createdAt").is_some());
    }
}
