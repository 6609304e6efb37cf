//! Conformance report assembly.

use serde::{Deserialize, Serialize};

use crate::{Unevaluated, Violation};

/// Check results for a single commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitReport {
    /// The commit hash.
    pub hash: String,

    /// The summary line, carried for presentation.
    pub summary: String,

    /// Violations in check order.
    pub violations: Vec<Violation>,

    /// Checks that could not be evaluated for this commit.
    pub unevaluated: Vec<Unevaluated>,
}

impl CommitReport {
    /// Returns true if this commit has no violations.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// The final conformance report for a check run.
///
/// Every commit seen appears exactly once, in history order, so consumers can
/// enumerate the checked range from the report itself. Built once per run and
/// not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Per-commit results, oldest first.
    pub commits: Vec<CommitReport>,

    /// True iff no commit has any violation.
    pub conforms: bool,
}

impl Report {
    /// Assembles a report from per-commit results.
    #[must_use]
    pub fn aggregate(commits: Vec<CommitReport>) -> Self {
        let conforms = commits.iter().all(CommitReport::is_clean);
        Self { commits, conforms }
    }

    /// Returns the commits with violations or unevaluated checks.
    pub fn offending(&self) -> impl Iterator<Item = &CommitReport> {
        self.commits
            .iter()
            .filter(|c| !c.violations.is_empty() || !c.unevaluated.is_empty())
    }

    /// Returns true if any check could not be evaluated.
    #[must_use]
    pub fn has_unevaluated(&self) -> bool {
        self.commits.iter().any(|c| !c.unevaluated.is_empty())
    }
}
