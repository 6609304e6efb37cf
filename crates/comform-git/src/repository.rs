//! Git repository wrapper.

use std::path::Path;

use chrono::{TimeZone, Utc};
use git2::{DiffFormat, Oid, Repository as Git2Repo, Sort};
use tracing::debug;

use comform_commit::RawCommit;

use crate::{GitError, GitResult};

/// A Git repository wrapper.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Opens a repository at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a valid Git repository.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner = Git2Repo::open(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Discovers the repository containing the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found at or above the path.
    pub fn discover(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner =
            Git2Repo::discover(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    /// Returns every commit reachable from HEAD, oldest first.
    ///
    /// The walk is topological with the root commit at position 0; each
    /// commit carries its position as `sequence_index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read.
    pub fn commits(&self) -> GitResult<Vec<RawCommit>> {
        let mut revwalk = self.inner.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;

        let mut commits = Vec::new();
        for (sequence_index, oid) in revwalk.enumerate() {
            let oid = oid?;
            let commit = self.inner.find_commit(oid)?;

            let message = commit.message().unwrap_or("").to_string();
            let author = commit.author();
            let time = commit.time();

            commits.push(RawCommit::new(
                oid.to_string(),
                sequence_index,
                message,
                author.name().unwrap_or("Unknown"),
                author.email().unwrap_or(""),
                Utc.timestamp_opt(time.seconds(), 0)
                    .single()
                    .unwrap_or_else(Utc::now),
            ));
        }

        debug!(count = commits.len(), "walked history");
        Ok(commits)
    }

    /// Resolves a human-given reference (branch, tag, hash) to a commit id.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference does not name a commit.
    pub fn resolve_reference(&self, name: &str) -> GitResult<String> {
        let object = self
            .inner
            .revparse_single(name)
            .map_err(|_| GitError::BadReference(name.to_string()))?;
        let commit = object
            .peel_to_commit()
            .map_err(|_| GitError::BadReference(name.to_string()))?;
        Ok(commit.id().to_string())
    }

    /// Returns the unified diff a commit introduces over its first parent.
    ///
    /// A root commit is diffed against the empty tree. Returns `None` when
    /// the commit changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit does not exist or the diff fails.
    pub fn diff_with_parent(&self, hash: &str) -> GitResult<Option<String>> {
        let oid = Oid::from_str(hash).map_err(|_| GitError::CommitNotFound(hash.to_string()))?;
        let commit = self
            .inner
            .find_commit(oid)
            .map_err(|_| GitError::CommitNotFound(hash.to_string()))?;

        let tree = commit.tree()?;
        let parent_tree = match commit.parent(0) {
            Ok(parent) => Some(parent.tree()?),
            Err(_) => None,
        };

        let diff = self
            .inner
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;

        if diff.deltas().len() == 0 {
            return Ok(None);
        }

        let mut out = String::new();
        diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
            match line.origin() {
                '+' | '-' | ' ' => out.push(line.origin()),
                _ => {}
            }
            out.push_str(&String::from_utf8_lossy(line.content()));
            true
        })?;

        Ok(Some(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository as Git2Repository, Signature};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, Repository) {
        let temp_dir = TempDir::new().unwrap();
        let git2_repo = Git2Repository::init(temp_dir.path()).unwrap();

        // Configure user for commits
        let mut config = git2_repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();

        let repo = Repository { inner: git2_repo };
        (temp_dir, repo)
    }

    fn create_commit(repo: &Repository, message: &str) -> git2::Oid {
        let sig = Signature::now("Test User", "test@example.com").unwrap();
        let tree_id = {
            let mut index = repo.inner.index().unwrap();
            index.write_tree().unwrap()
        };
        let tree = repo.inner.find_tree(tree_id).unwrap();

        let parent = repo.inner.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        repo.inner
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    fn commit_file(repo: &Repository, name: &str, content: &str, message: &str) -> git2::Oid {
        let workdir = repo.inner.workdir().unwrap().to_path_buf();
        std::fs::write(workdir.join(name), content).unwrap();

        let sig = Signature::now("Test User", "test@example.com").unwrap();
        let tree_id = {
            let mut index = repo.inner.index().unwrap();
            index.add_path(Path::new(name)).unwrap();
            index.write().unwrap();
            index.write_tree().unwrap()
        };
        let tree = repo.inner.find_tree(tree_id).unwrap();

        let parent = repo.inner.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        repo.inner
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    #[test]
    fn test_open_valid_repo() {
        let (temp_dir, _repo) = create_test_repo();
        let result = Repository::open(temp_dir.path());
        assert!(result.is_ok());
    }

    #[test]
    fn test_open_invalid_path() {
        let result = Repository::open("/nonexistent/path/to/repo");
        assert!(matches!(result, Err(GitError::NotARepo(_))));
    }

    #[test]
    fn test_open_not_a_repo() {
        let temp_dir = TempDir::new().unwrap();
        let result = Repository::open(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let (temp_dir, _repo) = create_test_repo();
        let subdir = temp_dir.path().join("src");
        std::fs::create_dir(&subdir).unwrap();

        let result = Repository::discover(&subdir);
        assert!(result.is_ok());
    }

    #[test]
    fn test_commits_oldest_first() {
        let (_temp_dir, repo) = create_test_repo();
        create_commit(&repo, "First commit");
        create_commit(&repo, "Second commit");
        create_commit(&repo, "Third commit");

        let commits = repo.commits().unwrap();
        assert_eq!(commits.len(), 3);
        assert_eq!(commits[0].summary(), "First commit");
        assert_eq!(commits[1].summary(), "Second commit");
        assert_eq!(commits[2].summary(), "Third commit");
        assert_eq!(commits[0].sequence_index, 0);
        assert_eq!(commits[2].sequence_index, 2);
    }

    #[test]
    fn test_commits_preserve_full_message() {
        let (_temp_dir, repo) = create_test_repo();
        create_commit(&repo, "Add feature\n\nSome body.\n\nCommit-type: feat\n");

        let commits = repo.commits().unwrap();
        assert_eq!(commits.len(), 1);
        assert!(commits[0].message.contains("Commit-type: feat"));
        assert_eq!(commits[0].author, "Test User");
        assert!(!commits[0].hash.is_empty());
    }

    #[test]
    fn test_resolve_reference_head() {
        let (_temp_dir, repo) = create_test_repo();
        create_commit(&repo, "First commit");
        let second = create_commit(&repo, "Second commit");

        let resolved = repo.resolve_reference("HEAD").unwrap();
        assert_eq!(resolved, second.to_string());
    }

    #[test]
    fn test_resolve_reference_short_hash() {
        let (_temp_dir, repo) = create_test_repo();
        let first = create_commit(&repo, "First commit");
        create_commit(&repo, "Second commit");

        let short = &first.to_string()[..7];
        let resolved = repo.resolve_reference(short).unwrap();
        assert_eq!(resolved, first.to_string());
    }

    #[test]
    fn test_resolve_reference_invalid() {
        let (_temp_dir, repo) = create_test_repo();
        create_commit(&repo, "First commit");

        let result = repo.resolve_reference("no-such-branch");
        assert!(matches!(result, Err(GitError::BadReference(_))));
    }

    #[test]
    fn test_diff_with_parent_contains_changes() {
        let (_temp_dir, repo) = create_test_repo();
        commit_file(&repo, "a.txt", "hello\n", "Add a.txt");
        let oid = commit_file(&repo, "a.txt", "hello\nworld\n", "Extend a.txt");

        let diff = repo.diff_with_parent(&oid.to_string()).unwrap();
        let diff = diff.expect("expected a diff");
        assert!(diff.contains("+world"));
    }

    #[test]
    fn test_diff_with_parent_root_commit() {
        let (_temp_dir, repo) = create_test_repo();
        let oid = commit_file(&repo, "a.txt", "hello\n", "Add a.txt");

        let diff = repo.diff_with_parent(&oid.to_string()).unwrap();
        let diff = diff.expect("expected a diff");
        assert!(diff.contains("+hello"));
    }

    #[test]
    fn test_diff_with_parent_empty_commit() {
        let (_temp_dir, repo) = create_test_repo();
        let oid = create_commit(&repo, "");

        let diff = repo.diff_with_parent(&oid.to_string()).unwrap();
        assert!(diff.is_none());
    }

    #[test]
    fn test_diff_with_parent_unknown_commit() {
        let (_temp_dir, repo) = create_test_repo();
        create_commit(&repo, "First commit");

        let result = repo.diff_with_parent("0000000000000000000000000000000000000000");
        assert!(matches!(result, Err(GitError::CommitNotFound(_))));
    }
}
