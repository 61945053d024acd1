//! topicrank - collect discussion topics and rank them by interest.
//!
//! Topics live in an embedded [redb](https://github.com/cberner/redb)
//! database as vote documents. A ranking pass shuffles the known topics,
//! asks for the most interesting remaining one until a single topic is
//! left, and stores one score per (user, topic) pair.
//!
//! # Quick start
//!
//! ```no_run
//! use std::io;
//!
//! use topicrank::{DataDir, Prompter, RandomShuffler, TopicStore, VoteDb};
//!
//! let data_dir = DataDir::resolve(None).unwrap();
//! let db = VoteDb::open(&data_dir.votes_db()).unwrap();
//! let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
//!
//! let topics = db.list_topics().unwrap();
//! let votes = topicrank::ranking::rank_topics(
//!     &db,
//!     "alice",
//!     topics,
//!     &mut RandomShuffler::from_entropy(),
//!     &mut prompter,
//! )
//! .unwrap();
//! for v in &votes {
//!     println!("{}: {}", v.topic, v.points);
//! }
//! ```

pub mod cli;
pub mod data_dir;
pub mod error;
pub mod prompt;
pub mod ranking;
pub mod session;
pub mod store;
pub mod suggest;
pub mod user;
pub mod vote_db;
pub mod vote_id;

pub use data_dir::DataDir;
pub use error::{Error, Result};
pub use prompt::Prompter;
pub use ranking::{RandomShuffler, RankingSession, Shuffler};
pub use store::{TopicStore, VoteRecord};
pub use vote_db::VoteDb;
pub use vote_id::{VoteId, identity_for};
