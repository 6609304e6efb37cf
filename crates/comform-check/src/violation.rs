//! Violation value types.

use serde::{Deserialize, Serialize};

/// The closed set of checks a commit can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// The globally first commit must carry an empty message.
    FirstCommitEmpty,
    /// The summary's first word must be a base-form verb.
    SummaryFirstWordVerb,
    /// The summary's first word must start with the configured case.
    SummaryFirstWordCase,
    /// A configured trailer is mandatory.
    TrailerMandatory,
    /// A configured trailer may appear at most once.
    TrailerSingular,
    /// A trailer value must belong to the configured set.
    TrailerValue,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::FirstCommitEmpty => "first-commit-empty",
            Self::SummaryFirstWordVerb => "summary-first-word-verb",
            Self::SummaryFirstWordCase => "summary-first-word-case",
            Self::TrailerMandatory => "trailer-mandatory",
            Self::TrailerSingular => "trailer-singular",
            Self::TrailerValue => "trailer-value",
        };
        write!(f, "{name}")
    }
}

/// A single rule violation on a single commit.
///
/// Pure value object: created by the checker, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The offending commit.
    pub commit_hash: String,

    /// Which rule was violated.
    pub rule: Rule,

    /// Human-meaningful context: offending key or value, expected case, etc.
    pub detail: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(commit_hash: impl Into<String>, rule: Rule, detail: impl Into<String>) -> Self {
        Self {
            commit_hash: commit_hash.into(),
            rule,
            detail: detail.into(),
        }
    }
}

/// A check that could not be evaluated for a commit.
///
/// Kept separate from violations so callers can distinguish infrastructure
/// failure (e.g. the tagging backend being unavailable) from policy failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unevaluated {
    /// The commit the check was skipped for.
    pub commit_hash: String,

    /// Which rule could not be evaluated.
    pub rule: Rule,

    /// Why the check could not run.
    pub reason: String,
}

impl Unevaluated {
    /// Creates a new unevaluated entry.
    #[must_use]
    pub fn new(commit_hash: impl Into<String>, rule: Rule, reason: impl Into<String>) -> Self {
        Self {
            commit_hash: commit_hash.into(),
            rule,
            reason: reason.into(),
        }
    }
}
