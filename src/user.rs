use crate::error::{Error, Result};

/// Environment variables consulted, in order, when no user is given.
const USER_VARS: [&str; 3] = ["TOPICRANK_USER", "USER", "USERNAME"];

/// Resolve the voting user from, in order of priority:
/// 1. An explicit name (from --user)
/// 2. The TOPICRANK_USER, USER and USERNAME environment variables
pub fn resolve_user(explicit: Option<&str>) -> Result<String> {
    resolve_with(explicit, |key| std::env::var(key).ok())
}

fn resolve_with(
    explicit: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String> {
    explicit
        .map(str::to_string)
        .into_iter()
        .chain(USER_VARS.iter().filter_map(|key| lookup(key)))
        .map(|name| name.trim().to_string())
        .find(|name| !name.is_empty())
        .ok_or(Error::UnknownUser)
}
