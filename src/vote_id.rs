use sha2::{Digest, Sha256};

/// Number of digest bytes kept in a vote token.
const TOKEN_BYTES: usize = 5;

/// A stable storage key derived from a (topic, user) pair.
///
/// The key is the first five bytes of `SHA-256(topic || user)` rendered as
/// ten lowercase hex characters. Points are not part of the key, so a user
/// voting on the same topic again overwrites the earlier score.
///
/// Two quirks are kept on purpose:
///
/// - The pair is concatenated without a separator, so topic `"ab"` with
///   user `"c"` and topic `"a"` with user `"bc"` share a key.
/// - Forty bits only make collisions unlikely for a small team's topic
///   list. A namespace of more than a few hundred thousand pairs should
///   widen the token.
///
/// ```
/// use topicrank::VoteId;
///
/// let id = VoteId::new("Rust async", "alice");
/// assert_eq!(id.as_str().len(), 10);
/// assert_eq!(id, VoteId::new("Rust async", "alice"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VoteId(String);

impl VoteId {
    pub fn new(topic: &str, user: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(topic.as_bytes());
        hasher.update(user.as_bytes());
        let digest = hasher.finalize();
        Self(hex::encode(&digest[..TOKEN_BYTES]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<VoteId> for String {
    fn from(id: VoteId) -> Self {
        id.0
    }
}

/// Storage token for a (topic, user) pair.
pub fn identity_for(topic: &str, user: &str) -> String {
    VoteId::new(topic, user).into()
}
