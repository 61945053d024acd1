use std::io::{BufRead, Write};

use crate::{
    error::Result,
    prompt::{Prompter, is_no},
    ranking::{Shuffler, rank_topics},
    store::{TopicStore, VoteRecord},
    suggest::suggest_topics,
};

/// What a full interactive pass did.
#[derive(Debug, Default)]
pub struct SessionSummary {
    pub added: Vec<String>,
    pub votes: Vec<VoteRecord>,
}

/// Print the known topics as `#NN topic` lines.
pub fn show_topics<R: BufRead, W: Write>(
    topics: &[String],
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    if topics.is_empty() {
        prompter.say("No topics available")?;
    } else {
        prompter.say("Existing suggestions:")?;
        for (i, topic) in topics.iter().enumerate() {
            prompter.say(&format!("#{:02} {topic}", i + 1))?;
        }
    }
    prompter.blank()
}

/// List existing topics, collect new ones, then rank everything.
pub fn run_session<S, R, W>(
    store: &S,
    user: &str,
    shuffler: &mut dyn Shuffler,
    prompter: &mut Prompter<R, W>,
) -> Result<SessionSummary>
where
    S: TopicStore + ?Sized,
    R: BufRead,
    W: Write,
{
    show_topics(&store.list_topics()?, prompter)?;

    let mut summary = SessionSummary {
        added: suggest_topics(store, user, prompter)?,
        ..Default::default()
    };

    prompter.say("Ready to rank the topics [Y/n]?")?;
    if is_no(&prompter.ask(">> ")?) {
        prompter.say("Ok, but please come back to do so. Your opinion matters!")?;
        return Ok(summary);
    }

    // Re-read: the suggestion step may have added topics.
    let topics = store.list_topics()?;
    summary.votes = rank_topics(store, user, topics, shuffler, prompter)?;
    prompter.blank()?;
    Ok(summary)
}
