use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default bucket limit for the topic aggregation.
pub const MAX_TOPICS_TO_QUERY: usize = 50;

/// One user's interest score for one topic.
///
/// Serialized with the field names the vote documents have always used
/// (`user`, `title`, `interestPoints`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub user: String,
    #[serde(rename = "title")]
    pub topic: String,
    #[serde(rename = "interestPoints")]
    pub points: i64,
}

impl VoteRecord {
    pub fn new(user: &str, topic: &str, points: i64) -> Self {
        Self {
            user: user.to_string(),
            topic: topic.to_string(),
            points,
        }
    }
}

/// A distinct topic and the number of vote records carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicBucket {
    pub topic: String,
    pub votes: u64,
}

/// The two store calls the interactive flows depend on.
pub trait TopicStore {
    /// Distinct topic labels currently known to the store.
    fn list_topics(&self) -> Result<Vec<String>>;

    /// Upsert the score for (user, topic), keyed by
    /// [`VoteId`](crate::VoteId).
    fn record_vote(&self, user: &str, topic: &str, points: i64) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_record_uses_document_field_names() {
        let vote = VoteRecord::new("alice", "Rust async", 3);
        let json = serde_json::to_value(&vote).unwrap();

        assert_eq!(json["user"], "alice");
        assert_eq!(json["title"], "Rust async");
        assert_eq!(json["interestPoints"], 3);
    }

    #[test]
    fn vote_record_reads_document_field_names() {
        let raw = r#"{"user":"bob","title":"Tokio","interestPoints":-1}"#;
        let vote: VoteRecord = serde_json::from_str(raw).unwrap();

        assert_eq!(vote, VoteRecord::new("bob", "Tokio", -1));
    }
}
