use std::{
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use topicrank::{VoteDb, VoteRecord};

fn topicrank_bin() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(bin) = std::env::var("CARGO_BIN_EXE_topicrank") {
        return Ok(PathBuf::from(bin));
    }

    let mut path = std::env::current_exe()?;
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("topicrank");

    if cfg!(windows) {
        path.set_extension("exe");
    }

    Ok(path)
}

fn run(
    data_dir: &Path,
    args: &[&str],
    stdin: &str,
) -> Result<Output, Box<dyn std::error::Error>> {
    let mut child = Command::new(topicrank_bin()?)
        .args(args)
        .env("TOPICRANK_DATA_DIR", data_dir)
        .env("TOPICRANK_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    child
        .stdin
        .take()
        .ok_or("stdin not captured")?
        .write_all(stdin.as_bytes())?;

    Ok(child.wait_with_output()?)
}

fn votes_for(
    data_dir: &Path,
    user: &str,
) -> Result<Vec<VoteRecord>, Box<dyn std::error::Error>> {
    let db = VoteDb::open(&data_dir.join("votes.redb"))?;
    let mut votes: Vec<VoteRecord> = db
        .list_votes()?
        .into_iter()
        .filter(|v| v.user == user)
        .collect();
    votes.sort_by(|a, b| b.points.cmp(&a.points));
    Ok(votes)
}

#[test]
fn session_suggests_and_ranks() -> Result<(), Box<dyn std::error::Error>> {
    let tempdir = tempfile::tempdir()?;

    for topic in ["Tokio", "Serde"] {
        let out = run(tempdir.path(), &["--user", "dave", "add", topic], "")?;
        assert!(out.status.success());
    }

    // Suggest "Axum", then always take the first listed topic.
    let input = "y\nAxum\ny\nn\n\n1\n\n1\n\n";
    let out = run(tempdir.path(), &["--user", "erin", "session"], input)?;
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout)?;
    assert!(stdout.contains("Existing suggestions:"));
    assert!(stdout.contains("[enter a number] >> "));
    assert!(stdout.contains("The results are in!"));

    let votes = votes_for(tempdir.path(), "erin")?;
    let points: Vec<i64> = votes.iter().map(|v| v.points).collect();
    assert_eq!(points, vec![3, 2, 0]);

    let mut topics: Vec<&str> = votes.iter().map(|v| v.topic.as_str()).collect();
    topics.sort();
    assert_eq!(topics, vec!["Axum", "Serde", "Tokio"]);

    Ok(())
}

#[test]
fn rank_with_single_topic_needs_no_input()
-> Result<(), Box<dyn std::error::Error>> {
    let tempdir = tempfile::tempdir()?;
    run(tempdir.path(), &["--user", "dave", "add", "Solo"], "")?;

    let out = run(tempdir.path(), &["--user", "dave", "rank"], "")?;
    assert!(out.status.success());
    assert!(!String::from_utf8(out.stdout)?.contains(">>"));

    assert_eq!(
        votes_for(tempdir.path(), "dave")?,
        vec![VoteRecord::new("dave", "Solo", 0)]
    );
    Ok(())
}

#[test]
fn closed_input_exits_with_error() -> Result<(), Box<dyn std::error::Error>> {
    let tempdir = tempfile::tempdir()?;
    for topic in ["A", "B", "C"] {
        run(tempdir.path(), &["--user", "dave", "add", topic], "")?;
    }

    let out = run(
        tempdir.path(),
        &["--user", "erin", "rank", "--seed", "1"],
        "1\n\n",
    )?;
    assert!(!out.status.success());
    assert!(String::from_utf8(out.stderr)?.contains("InputClosed"));

    // The first pick was written before input ran out.
    let votes = votes_for(tempdir.path(), "erin")?;
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].points, 3);
    Ok(())
}

#[test]
fn topics_json_lists_buckets() -> Result<(), Box<dyn std::error::Error>> {
    let tempdir = tempfile::tempdir()?;
    run(tempdir.path(), &["--user", "dave", "add", "Tokio"], "")?;
    run(tempdir.path(), &["--user", "erin", "add", "Tokio"], "")?;
    run(tempdir.path(), &["--user", "erin", "add", "Serde"], "")?;

    let out = run(tempdir.path(), &["topics", "--json"], "")?;
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout)?;
    assert_eq!(
        json,
        serde_json::json!([
            {"topic": "Tokio", "votes": 2},
            {"topic": "Serde", "votes": 1},
        ])
    );
    Ok(())
}
