//! Git error types.

use thiserror::Error;

/// Git-related errors.
///
/// All fatal: a history that cannot be read produces no partial report.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository.
    #[error("not a git repository: {0}")]
    NotARepo(std::path::PathBuf),

    /// A reference could not be resolved to a commit.
    #[error("cannot resolve reference: {0}")]
    BadReference(String),

    /// A commit id does not exist in the repository.
    #[error("commit not found: {0}")]
    CommitNotFound(String),

    /// Git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_not_a_repo_display() {
        let err = GitError::NotARepo(PathBuf::from("/tmp/not-git"));
        assert_eq!(err.to_string(), "not a git repository: /tmp/not-git");
    }

    #[test]
    fn test_bad_reference_display() {
        let err = GitError::BadReference("no-such-branch".to_string());
        assert_eq!(err.to_string(), "cannot resolve reference: no-such-branch");
    }

    #[test]
    fn test_commit_not_found_display() {
        let err = GitError::CommitNotFound("abc123".to_string());
        assert_eq!(err.to_string(), "commit not found: abc123");
    }
}
