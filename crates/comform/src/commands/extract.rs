//! Extract command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use tracing::info;

use comform_commit::{ParsedMessage, Trailer};
use comform_git::Repository;

/// Arguments for the extract command.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Path to a Git repository
    #[arg(default_value = ".")]
    pub repository: PathBuf,

    /// Include the diff each commit introduces (expensive)
    #[arg(long)]
    pub with_diff: bool,
}

/// A commit as emitted by the extract command.
#[derive(Debug, Serialize)]
struct ExtractedCommit {
    hash: String,
    summary: String,
    body: String,
    trailers: Vec<Trailer>,
    author: String,
    email: String,
    date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diff: Option<String>,
}

/// Runs the extract command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ExtractArgs) -> Result<()> {
    let repo = Repository::discover(&args.repository).context("failed to open git repository")?;

    let commits = repo.commits().context("failed to read commit history")?;
    info!(count = commits.len(), "extracting commits");

    let mut extracted = Vec::with_capacity(commits.len());
    for commit in commits {
        let parsed = ParsedMessage::parse(&commit.message);

        let diff = if args.with_diff {
            repo.diff_with_parent(&commit.hash)
                .context("failed to diff commit")?
        } else {
            None
        };

        extracted.push(ExtractedCommit {
            hash: commit.hash,
            summary: parsed.summary,
            body: parsed.body,
            trailers: parsed.trailers,
            author: commit.author,
            email: commit.email,
            date: commit.date,
            diff,
        });
    }

    println!("{}", serde_json::to_string_pretty(&extracted)?);
    Ok(())
}
