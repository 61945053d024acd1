use std::{collections::HashMap, path::Path};

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};

use crate::{
    error::Result,
    store::{MAX_TOPICS_TO_QUERY, TopicBucket, TopicStore, VoteRecord},
    vote_id::VoteId,
};

/// Vote documents keyed by their [`VoteId`] token, stored as JSON.
const VOTES: TableDefinition<&str, &[u8]> = TableDefinition::new("votes");

pub struct VoteDb {
    db: Database,
}

impl VoteDb {
    pub fn open(path: &Path) -> Result<Self> {
        let db = Database::create(path)?;

        let txn = db.begin_write()?;
        txn.open_table(VOTES)?;
        txn.commit()?;

        Ok(Self { db })
    }

    /// Insert or overwrite the vote for (user, topic).
    pub fn record_vote(
        &self,
        user: &str,
        topic: &str,
        points: i64,
    ) -> Result<VoteId> {
        let id = VoteId::new(topic, user);
        let body = serde_json::to_vec(&VoteRecord::new(user, topic, points))?;

        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(VOTES)?;
            table.insert(id.as_str(), body.as_slice())?;
        }
        txn.commit()?;

        tracing::debug!(%id, user, topic, points, "recorded vote");
        Ok(id)
    }

    pub fn get_vote(&self, topic: &str, user: &str) -> Result<Option<VoteRecord>> {
        let id = VoteId::new(topic, user);
        let txn = self.db.begin_read()?;
        let table = txn.open_table(VOTES)?;
        match table.get(id.as_str())? {
            Some(v) => Ok(Some(serde_json::from_slice(v.value())?)),
            None => Ok(None),
        }
    }

    pub fn list_votes(&self) -> Result<Vec<VoteRecord>> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(VOTES)?;
        let mut result = Vec::new();
        for entry in table.iter()? {
            let (_k, v) = entry?;
            result.push(serde_json::from_slice(v.value())?);
        }
        Ok(result)
    }

    /// Terms aggregation over the topic field: distinct topics with their
    /// record counts, most voted first, ties broken by topic.
    pub fn topic_buckets(&self, limit: usize) -> Result<Vec<TopicBucket>> {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for vote in self.list_votes()? {
            *counts.entry(vote.topic).or_default() += 1;
        }

        let mut buckets: Vec<TopicBucket> = counts
            .into_iter()
            .map(|(topic, votes)| TopicBucket { topic, votes })
            .collect();
        buckets.sort_by(|a, b| {
            b.votes.cmp(&a.votes).then_with(|| a.topic.cmp(&b.topic))
        });
        buckets.truncate(limit);
        Ok(buckets)
    }
}

impl TopicStore for VoteDb {
    fn list_topics(&self) -> Result<Vec<String>> {
        Ok(self
            .topic_buckets(MAX_TOPICS_TO_QUERY)?
            .into_iter()
            .map(|b| b.topic)
            .collect())
    }

    fn record_vote(&self, user: &str, topic: &str, points: i64) -> Result<()> {
        VoteDb::record_vote(self, user, topic, points).map(|_| ())
    }
}

impl std::fmt::Debug for VoteDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoteDb").finish_non_exhaustive()
    }
}
