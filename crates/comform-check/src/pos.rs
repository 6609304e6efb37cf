//! Part-of-speech classification port.
//!
//! The checker only ever asks one question of a tagging backend: is this
//! word a base-form verb, as in "this commit will {word} ...". Backends can
//! be slow (model load, network round-trip) and can fail; failure must reach
//! the caller as an error, never as a silent pass or fail.

use std::collections::BTreeSet;

use thiserror::Error;

/// Errors raised by a tagging backend.
#[derive(Debug, Error)]
pub enum PosError {
    /// The backend could not be reached or failed to answer.
    #[error("tagging backend unavailable: {0}")]
    Backend(String),
}

/// A capability that classifies a single word.
pub trait PosTagger {
    /// Returns whether the word is a simple (base-form) verb.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot produce a classification.
    fn is_simple_verb(&self, word: &str) -> Result<bool, PosError>;
}

/// Deterministic tagger backed by a fixed word list.
///
/// Answers from a built-in list of base-form verbs common in commit
/// summaries; matching is case-insensitive. It never fails, which makes it
/// the default backend for offline runs and the reference implementation for
/// tests.
#[derive(Debug, Clone)]
pub struct WordlistTagger {
    words: BTreeSet<String>,
}

/// Base-form verbs commonly opening commit summaries.
const BUILTIN_VERBS: &[&str] = &[
    "add", "allow", "apply", "avoid", "bump", "change", "check", "clarify", "clean", "convert",
    "correct", "create", "define", "delete", "deprecate", "disable", "document", "drop", "enable",
    "enforce", "expand", "expose", "extend", "extract", "fix", "format", "guard", "handle",
    "hide", "implement", "improve", "include", "increase", "inline", "introduce", "make", "merge",
    "migrate", "move", "normalize", "optimize", "pin", "prepare", "prevent", "reduce", "refactor",
    "remove", "rename", "reorder", "replace", "require", "restore", "revert", "rework", "rewrite",
    "simplify", "skip", "sort", "split", "stop", "support", "switch", "test", "tidy", "track",
    "trim", "tweak", "unify", "update", "upgrade", "use", "validate", "verify",
];

impl WordlistTagger {
    /// Creates a tagger with the built-in verb list.
    #[must_use]
    pub fn new() -> Self {
        Self::from_words(BUILTIN_VERBS.iter().copied())
    }

    /// Creates a tagger from a custom word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl Default for WordlistTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl PosTagger for WordlistTagger {
    fn is_simple_verb(&self, word: &str) -> Result<bool, PosError> {
        Ok(self.words.contains(&word.to_lowercase()))
    }
}
