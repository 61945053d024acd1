use std::io;

use clap::Parser;
use topicrank::{
    DataDir,
    Prompter,
    RandomShuffler,
    TopicStore,
    VoteDb,
    cli::{Cli, Command, RankArgs, TopicsArgs},
    error,
    ranking,
    session,
    suggest,
    user,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("TOPICRANK_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let open_db = || -> error::Result<VoteDb> {
        let data_dir = DataDir::resolve(cli.data_dir.as_deref())?;
        let path = data_dir.votes_db();
        tracing::debug!(path = %path.display(), "opening vote store");
        VoteDb::open(&path)
    };
    let current_user = || user::resolve_user(cli.user.as_deref());

    match cli.command.as_ref() {
        None => cmd_session(&open_db()?, &current_user()?, &RankArgs::default())?,
        Some(Command::Session(args)) => {
            cmd_session(&open_db()?, &current_user()?, args)?;
        }
        Some(Command::Topics(args)) => cmd_topics(&open_db()?, args)?,
        Some(Command::Add(args)) => {
            let topic =
                suggest::add_topic(&open_db()?, &current_user()?, &args.topic)?;
            println!("Added topic '{topic}'");
        }
        Some(Command::Suggest) => {
            let db = open_db()?;
            let added = suggest::suggest_topics(
                &db,
                &current_user()?,
                &mut stdio_prompter(),
            )?;
            println!("Added {} topic(s)", added.len());
        }
        Some(Command::Rank(args)) => {
            let db = open_db()?;
            let topics = db.list_topics()?;
            ranking::rank_topics(
                &db,
                &current_user()?,
                topics,
                &mut shuffler(args),
                &mut stdio_prompter(),
            )?;
        }
        Some(Command::Votes(args)) => {
            let user = if args.all { None } else { Some(current_user()?) };
            cmd_votes(&open_db()?, user.as_deref(), args.json)?;
        }
        Some(Command::Completions(args)) => args.generate(),
    }

    Ok(())
}

fn stdio_prompter() -> Prompter<io::StdinLock<'static>, io::Stdout> {
    Prompter::new(io::stdin().lock(), io::stdout())
}

fn shuffler(args: &RankArgs) -> RandomShuffler {
    match args.seed {
        Some(seed) => RandomShuffler::seeded(seed),
        None => RandomShuffler::from_entropy(),
    }
}

fn cmd_session(db: &VoteDb, user: &str, args: &RankArgs) -> error::Result<()> {
    let summary = session::run_session(
        db,
        user,
        &mut shuffler(args),
        &mut stdio_prompter(),
    )?;
    tracing::info!(
        added = summary.added.len(),
        ranked = summary.votes.len(),
        "session finished"
    );
    Ok(())
}

fn cmd_topics(db: &VoteDb, args: &TopicsArgs) -> error::Result<()> {
    let buckets = db.topic_buckets(args.limit)?;

    if args.json {
        println!("{}", serde_json::to_string(&buckets)?);
    } else if buckets.is_empty() {
        println!("No topics available");
    } else {
        for (i, bucket) in buckets.iter().enumerate() {
            println!("#{:02} {}\t{}", i + 1, bucket.topic, bucket.votes);
        }
    }
    Ok(())
}

/// Print stored votes, restricted to `user` when given.
fn cmd_votes(db: &VoteDb, user: Option<&str>, json: bool) -> error::Result<()> {
    let mut votes = db.list_votes()?;
    if let Some(user) = user {
        votes.retain(|v| v.user == user);
    }
    votes.sort_by(|a, b| {
        a.user
            .cmp(&b.user)
            .then_with(|| b.points.cmp(&a.points))
            .then_with(|| a.topic.cmp(&b.topic))
    });

    if json {
        println!("{}", serde_json::to_string(&votes)?);
    } else if votes.is_empty() {
        println!("No votes recorded.");
    } else {
        for v in &votes {
            println!("{}\t{}\t{}", v.user, v.points, v.topic);
        }
    }
    Ok(())
}
