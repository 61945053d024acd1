use std::io::{BufRead, Write};

use crate::{
    error::{Error, Result},
    prompt::{Prompter, is_yes},
    store::TopicStore,
};

/// Score recorded for the person who suggests a topic.
pub const SUGGESTION_POINTS: i64 = 5;

/// Trim a raw topic label, rejecting blank input.
pub fn normalize_topic(raw: &str) -> Option<&str> {
    let topic = raw.trim();
    (!topic.is_empty()).then_some(topic)
}

/// Add a single topic on behalf of `user`.
pub fn add_topic<S: TopicStore + ?Sized>(
    store: &S,
    user: &str,
    raw: &str,
) -> Result<String> {
    let topic = normalize_topic(raw)
        .ok_or_else(|| Error::Config("topic must not be empty".into()))?;
    store.record_vote(user, topic, SUGGESTION_POINTS)?;
    tracing::info!(topic, user, "added topic");
    Ok(topic.to_string())
}

/// Ask for new topics until the user declines. Returns the topics added.
pub fn suggest_topics<S, R, W>(
    store: &S,
    user: &str,
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<String>>
where
    S: TopicStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut added = Vec::new();

    loop {
        prompter.say("Do you have another topic in mind [y/N]?")?;
        if !is_yes(&prompter.ask(">> ")?) {
            break;
        }

        prompter.say("Ok, type it now:")?;
        let line = prompter.ask(">> ")?;
        let Some(topic) = normalize_topic(&line) else {
            continue;
        };

        prompter.say(&format!("New topic: {topic}"))?;
        prompter.say("Looks good [y/N]?")?;
        if is_yes(&prompter.ask(">> ")?) {
            prompter.say("Ok, I will create it")?;
            added.push(add_topic(store, user, topic)?);
        } else {
            prompter.say(
                "Poof! Erased. We will pretend that you have never suggested it :)",
            )?;
        }
    }

    Ok(added)
}
