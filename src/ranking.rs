//! Interactive preference ranking.
//!
//! A [`RankingSession`] starts from a shuffled copy of the topic list and
//! asks for the most interesting remaining topic until fewer than two are
//! left. Each confirmed pick is scored by its rank against the original
//! topic count and written to the [`TopicStore`] before the next question.
//!
//! Scoring for `total` topics:
//!
//! | pick            | points                     |
//! |-----------------|----------------------------|
//! | rank `r`        | `total - (r - 1)`          |
//! | last survivor   | `total - picks - 1`        |
//!
//! The survivor score sits one below the regular formula. Reports built
//! from stored votes already depend on it, so it stays.

use std::io::{BufRead, Write};

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{
    error::Result,
    prompt::{Prompter, is_no},
    store::{TopicStore, VoteRecord},
};

/// Produces the initial presentation order of a session.
pub trait Shuffler {
    fn shuffle(&mut self, topics: &mut [String]);
}

/// Uniform random permutation backed by [`StdRng`].
#[derive(Debug)]
pub struct RandomShuffler {
    rng: StdRng,
}

impl RandomShuffler {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Shuffler for RandomShuffler {
    fn shuffle(&mut self, topics: &mut [String]) {
        topics.shuffle(&mut self.rng);
    }
}

/// Parse a 1-based pick against `remaining` entries.
///
/// Returns the zero-based index, or `None` for anything that is not a
/// decimal integer in `1..=remaining`.
pub fn parse_pick(line: &str, remaining: usize) -> Option<usize> {
    let n: usize = line.trim().parse().ok()?;
    (1..=remaining).contains(&n).then(|| n - 1)
}

/// Answer to "Your #N pick is: ..., [Y/n]".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Leading `n` or `N`.
    Reject,
    /// Empty line or leading `y`/`Y`.
    Accept,
    /// Anything else. Still counts as acceptance.
    AcceptMalformed,
}

impl Confirmation {
    pub fn classify(line: &str) -> Self {
        if is_no(line) {
            return Self::Reject;
        }
        let answer = line.trim_end_matches(['\r', '\n']);
        if answer.is_empty() || answer.starts_with(['y', 'Y']) {
            Self::Accept
        } else {
            Self::AcceptMalformed
        }
    }

    pub fn is_accepted(self) -> bool {
        self != Self::Reject
    }
}

/// A topic and the points it earned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub topic: String,
    pub points: i64,
}

/// Working state of one ranking pass.
#[derive(Debug)]
pub struct RankingSession {
    remaining: Vec<String>,
    rank: usize,
    total: usize,
}

impl RankingSession {
    pub fn new(mut topics: Vec<String>, shuffler: &mut dyn Shuffler) -> Self {
        shuffler.shuffle(&mut topics);
        let total = topics.len();
        Self {
            remaining: topics,
            rank: 1,
            total,
        }
    }

    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    /// 1-based rank of the next decision.
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether another interactive pick is needed.
    pub fn is_open(&self) -> bool {
        self.remaining.len() >= 2
    }

    /// Points awarded to a pick confirmed at the current rank.
    pub fn current_points(&self) -> i64 {
        self.total as i64 - (self.rank as i64 - 1)
    }

    /// Confirm `remaining[index]` as the pick for the current rank.
    ///
    /// The candidate is swap-removed, so survivors may change order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn accept(&mut self, index: usize) -> Pick {
        let points = self.current_points();
        let topic = self.remaining.swap_remove(index);
        self.rank += 1;
        Pick { topic, points }
    }

    /// Take the last topic once the session has closed.
    pub fn take_survivor(&mut self) -> Option<Pick> {
        if self.is_open() {
            return None;
        }
        let topic = self.remaining.pop()?;
        let picks = self.rank as i64 - 1;
        Some(Pick {
            topic,
            points: self.total as i64 - picks - 1,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingPick,
    AwaitingConfirm(usize),
}

/// Rank `topics` interactively and persist one vote per topic for `user`.
///
/// Votes are written as soon as they are decided; a store failure ends the
/// pass and leaves earlier votes in place. Returns the emitted votes in
/// emission order (most interesting first).
pub fn rank_topics<S, R, W>(
    store: &S,
    user: &str,
    topics: Vec<String>,
    shuffler: &mut dyn Shuffler,
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<VoteRecord>>
where
    S: TopicStore + ?Sized,
    R: BufRead,
    W: Write,
{
    if topics.is_empty() {
        prompter.say("No topics available")?;
        return Ok(Vec::new());
    }

    prompter.say("Starting to rank topics (to your liking, of course)")?;
    let mut session = RankingSession::new(topics, shuffler);
    let mut emitted = Vec::with_capacity(session.total());
    let mut state = State::AwaitingPick;

    while session.is_open() {
        state = match state {
            State::AwaitingPick => {
                prompter.say(&format!(
                    "Lets determine your #{} pick:",
                    session.rank()
                ))?;
                for (i, topic) in session.remaining().iter().enumerate() {
                    prompter.say(&format!("#{:02} {topic}", i + 1))?;
                }
                let line = prompter.ask("[enter a number] >> ")?;
                match parse_pick(&line, session.remaining().len()) {
                    Some(index) => State::AwaitingConfirm(index),
                    None => {
                        prompter.say("There is no item with that number!")?;
                        prompter.say("Lets try again")?;
                        State::AwaitingPick
                    }
                }
            }
            State::AwaitingConfirm(index) => {
                prompter.blank()?;
                prompter.say(&format!(
                    "Your #{} pick is: {}, [Y/n]",
                    session.rank(),
                    session.remaining()[index]
                ))?;
                let line = prompter.ask(">> ")?;
                let answer = Confirmation::classify(&line);
                if answer.is_accepted() {
                    if answer == Confirmation::AcceptMalformed {
                        tracing::debug!(
                            answer = line.trim(),
                            "treating unrecognized answer as yes"
                        );
                    }
                    let pick = session.accept(index);
                    emitted.push(emit(store, user, pick)?);
                } else {
                    prompter.say("Ok, lets choose another one")?;
                }
                State::AwaitingPick
            }
        };
    }

    if let Some(pick) = session.take_survivor() {
        emitted.push(emit(store, user, pick)?);
    }

    prompter.say("Thanks for ranking all of the topics. The results are in!")?;
    Ok(emitted)
}

fn emit<S: TopicStore + ?Sized>(
    store: &S,
    user: &str,
    pick: Pick,
) -> Result<VoteRecord> {
    store.record_vote(user, &pick.topic, pick.points)?;
    tracing::info!(topic = %pick.topic, points = pick.points, "ranked");
    Ok(VoteRecord {
        user: user.to_string(),
        topic: pick.topic,
        points: pick.points,
    })
}
