//! Check error types.

use thiserror::Error;

/// Fatal errors raised before or during a check run.
///
/// Per-commit conditions (violations, unevaluated checks) accumulate into the
/// report instead; only setup failures abort the run.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The `starting-from` commit does not appear in the history.
    #[error("starting-from commit '{0}' not found in the supplied history")]
    StartingFromNotFound(String),

    /// The `starting-from` prefix matches more than one commit.
    #[error("starting-from commit '{0}' is ambiguous in the supplied history")]
    StartingFromAmbiguous(String),

    /// The simple-verb rule is enabled but no tagger was supplied.
    #[error("the first-word-is-simple-verb rule requires a part-of-speech tagger")]
    TaggerMissing,
}

/// Result type for check operations.
pub type CheckResult<T> = Result<T, CheckError>;
