use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::store::MAX_TOPICS_TO_QUERY;

#[derive(Debug, Parser)]
#[command(
    name = "topicrank",
    about = "Collect discussion topics and rank them from most to least interesting"
)]
pub struct Cli {
    /// Override the XDG data directory
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Vote as this user instead of the one reported by the environment
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Defaults to `session` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List topics, suggest new ones, then rank them
    Session(RankArgs),
    /// List known topics, most voted first
    Topics(TopicsArgs),
    /// Add a topic without prompting
    Add(AddArgs),
    /// Interactively suggest new topics
    Suggest,
    /// Rank all known topics
    Rank(RankArgs),
    /// Show stored votes
    Votes(VotesArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Topics --

#[derive(Debug, Parser)]
pub struct TopicsArgs {
    /// Maximum number of topics to list
    #[arg(short = 'n', long, default_value_t = MAX_TOPICS_TO_QUERY)]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Add --

#[derive(Debug, Parser)]
pub struct AddArgs {
    /// The topic label
    pub topic: String,
}

// -- Rank / Session --

#[derive(Debug, Default, Parser)]
pub struct RankArgs {
    /// Seed the presentation order for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,
}

// -- Votes --

#[derive(Debug, Parser)]
pub struct VotesArgs {
    /// Show votes from every user, not just the current one
    #[arg(long)]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "topicrank",
            &mut std::io::stdout(),
        );
    }
}
