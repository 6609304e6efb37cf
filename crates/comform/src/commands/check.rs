//! Check command.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::{error, info};

use comform_check::{Checker, PosTagger, WordlistTagger};
use comform_config::{load_rules, resolve_config_path};
use comform_git::Repository;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to a Git repository
    #[arg(default_value = ".")]
    pub repository: PathBuf,

    /// Path to the rule file (defaults to .comform.yaml at the repository root)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Runs the check command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: CheckArgs) -> Result<()> {
    let repo = Repository::discover(&args.repository).context("failed to open git repository")?;
    info!(root = %repo.root().display(), "found git repository");

    let config_path = match args.config {
        Some(path) => path,
        None => resolve_config_path(repo.root()).context("failed to locate the rule file")?,
    };
    let mut rules = load_rules(&config_path).context("failed to load the rule file")?;
    info!(path = %config_path.display(), "loaded rule file");

    // Normalize the adoption cut to a commit id before the checker sees it.
    if let Some(reference) = rules.starting_from.take() {
        let hash = repo
            .resolve_reference(&reference)
            .context("failed to resolve the starting-from reference")?;
        info!(reference, hash = %&hash[..7.min(hash.len())], "resolved starting-from");
        rules.starting_from = Some(hash);
    }

    let tagger = rules
        .summary
        .first_word_is_simple_verb
        .then(WordlistTagger::new);

    let commits = repo.commits().context("failed to read commit history")?;
    info!(count = commits.len(), "checking commits");

    let checker = Checker::new(&rules, tagger.as_ref().map(|t| t as &dyn PosTagger));
    let report = checker.check(&commits)?;

    let offending: Vec<_> = report.offending().collect();
    if !offending.is_empty() {
        println!("{}", serde_json::to_string_pretty(&offending)?);
    }

    if !report.conforms {
        error!(
            failed = offending.len(),
            total = report.commits.len(),
            "checks failed"
        );
        bail!(
            "{} of {} commits have violations",
            offending.iter().filter(|c| !c.is_clean()).count(),
            report.commits.len()
        );
    }

    if report.has_unevaluated() {
        bail!("some checks could not be evaluated; see the report above");
    }

    info!(total = report.commits.len(), "all commits conform");
    Ok(())
}
