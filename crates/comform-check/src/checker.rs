//! Rule evaluation engine.
//!
//! A check run is a sequential fold over the commit history: each commit is
//! parsed, the enabled rules are applied, and the per-commit results are
//! assembled into a [`Report`]. Commits are independent of each other; the
//! only positional couplings are "is this the first commit" and "is this
//! commit past the starting-from cut".

use std::collections::HashMap;

use tracing::debug;

use comform_commit::{ParsedMessage, RawCommit};
use comform_config::{Capitalization, RuleSet};

use crate::{
    CheckError, CheckResult, CommitReport, PosTagger, Report, Rule, Unevaluated, Violation,
    did_you_mean,
};

/// Evaluates a rule set over a commit history.
pub struct Checker<'a> {
    rules: &'a RuleSet,
    tagger: Option<&'a dyn PosTagger>,
}

impl<'a> Checker<'a> {
    /// Creates a checker for the given rule set.
    ///
    /// The tagger is only consulted when the simple-verb rule is enabled, so
    /// it may be `None` otherwise.
    #[must_use]
    pub fn new(rules: &'a RuleSet, tagger: Option<&'a dyn PosTagger>) -> Self {
        Self { rules, tagger }
    }

    /// Checks the commits, supplied oldest first, and returns the report.
    ///
    /// `starting-from`, when set, must be a commit id (or unique prefix) from
    /// the supplied history; symbolic references are resolved by the history
    /// reader before the rule set reaches the checker.
    ///
    /// # Errors
    ///
    /// Returns an error if the simple-verb rule is enabled without a tagger,
    /// or if `starting-from` matches no commit or more than one.
    pub fn check(&self, commits: &[RawCommit]) -> CheckResult<Report> {
        if self.rules.summary.first_word_is_simple_verb && self.tagger.is_none() {
            return Err(CheckError::TaggerMissing);
        }

        let cut = self.cut_index(commits)?;

        // Tagger answers memoized per distinct lowercased first word.
        let mut verbs: HashMap<String, bool> = HashMap::new();
        let mut reports = Vec::with_capacity(commits.len());

        for (index, commit) in commits.iter().enumerate() {
            let parsed = ParsedMessage::parse(&commit.message);
            let mut violations = Vec::new();
            let mut unevaluated = Vec::new();

            // Anchors the history; deliberately ignores the adoption cut.
            if index == 0 {
                self.check_first_commit(commit, &mut violations);
            }

            // A commit required to be empty cannot satisfy summary or trailer
            // rules, so the anchor commit is exempt from them.
            let exempt = index == 0 && self.rules.first_commit_is_empty;

            if !exempt && cut.is_none_or(|c| index > c) {
                self.check_first_word_verb(
                    commit,
                    &parsed,
                    &mut verbs,
                    &mut violations,
                    &mut unevaluated,
                );
                self.check_first_word_case(commit, &parsed, &mut violations);
                self.check_trailers(commit, &parsed, &mut violations);
            }

            debug!(
                hash = %commit.short_hash(),
                violations = violations.len(),
                "checked commit"
            );

            reports.push(CommitReport {
                hash: commit.hash.clone(),
                summary: parsed.summary,
                violations,
                unevaluated,
            });
        }

        Ok(Report::aggregate(reports))
    }

    /// Locates the starting-from commit in the supplied sequence.
    fn cut_index(&self, commits: &[RawCommit]) -> CheckResult<Option<usize>> {
        let Some(reference) = self.rules.starting_from.as_deref() else {
            return Ok(None);
        };

        let mut matches = commits
            .iter()
            .enumerate()
            .filter(|(_, c)| c.hash.starts_with(reference));

        match (matches.next(), matches.next()) {
            (Some((index, _)), None) => Ok(Some(index)),
            (Some(_), Some(_)) => Err(CheckError::StartingFromAmbiguous(reference.to_string())),
            (None, _) => Err(CheckError::StartingFromNotFound(reference.to_string())),
        }
    }

    fn check_first_commit(&self, commit: &RawCommit, violations: &mut Vec<Violation>) {
        if self.rules.first_commit_is_empty && !commit.message.trim().is_empty() {
            violations.push(Violation::new(
                &commit.hash,
                Rule::FirstCommitEmpty,
                "expected the first commit to have an empty message",
            ));
        }
    }

    fn check_first_word_verb(
        &self,
        commit: &RawCommit,
        parsed: &ParsedMessage,
        verbs: &mut HashMap<String, bool>,
        violations: &mut Vec<Violation>,
        unevaluated: &mut Vec<Unevaluated>,
    ) {
        if !self.rules.summary.first_word_is_simple_verb {
            return;
        }
        let Some(tagger) = self.tagger else {
            return;
        };

        let Some(word) = parsed.first_word() else {
            violations.push(Violation::new(
                &commit.hash,
                Rule::SummaryFirstWordVerb,
                "summary has no first word",
            ));
            return;
        };

        let key = word.to_lowercase();
        let is_verb = if let Some(&cached) = verbs.get(&key) {
            cached
        } else {
            match tagger.is_simple_verb(&key) {
                Ok(answer) => {
                    verbs.insert(key, answer);
                    answer
                }
                Err(err) => {
                    unevaluated.push(Unevaluated::new(
                        &commit.hash,
                        Rule::SummaryFirstWordVerb,
                        err.to_string(),
                    ));
                    return;
                }
            }
        };

        if !is_verb {
            violations.push(Violation::new(
                &commit.hash,
                Rule::SummaryFirstWordVerb,
                format!("summary does not begin with a simple verb: '{word}'"),
            ));
        }
    }

    fn check_first_word_case(
        &self,
        commit: &RawCommit,
        parsed: &ParsedMessage,
        violations: &mut Vec<Violation>,
    ) {
        let Some(case) = self.rules.summary.first_word_capitalization else {
            return;
        };

        let first_char = parsed.first_word().and_then(|w| w.chars().next());
        let (satisfied, wanted) = match case {
            Capitalization::Upper => (
                first_char.is_some_and(char::is_uppercase),
                "an upper case letter",
            ),
            Capitalization::Lower => (
                first_char.is_some_and(char::is_lowercase),
                "a lower case letter",
            ),
        };

        if !satisfied {
            let detail = match first_char {
                Some(c) => format!("summary begins with '{c}', expected {wanted}"),
                None => format!("summary has no first word, expected {wanted}"),
            };
            violations.push(Violation::new(
                &commit.hash,
                Rule::SummaryFirstWordCase,
                detail,
            ));
        }
    }

    fn check_trailers(
        &self,
        commit: &RawCommit,
        parsed: &ParsedMessage,
        violations: &mut Vec<Violation>,
    ) {
        for (key, rule) in &self.rules.trailers {
            if rule.mandatory && parsed.values_for(key).next().is_none() {
                let present = parsed.trailers.iter().map(|t| t.key.as_str());
                let detail = match did_you_mean(key, present) {
                    Some(similar) => format!(
                        "mandatory trailer '{key}' is missing (found similar key: '{similar}')"
                    ),
                    None => format!("mandatory trailer '{key}' is missing"),
                };
                violations.push(Violation::new(&commit.hash, Rule::TrailerMandatory, detail));
            }
        }

        for (key, rule) in &self.rules.trailers {
            if rule.singular {
                let count = parsed.values_for(key).count();
                if count > 1 {
                    violations.push(Violation::new(
                        &commit.hash,
                        Rule::TrailerSingular,
                        format!("trailer '{key}' must appear at most once, found {count}"),
                    ));
                }
            }
        }

        // Trailers with keys absent from the rule set pass silently.
        for trailer in &parsed.trailers {
            let Some(rule) = self.rules.trailers.get(&trailer.key) else {
                continue;
            };
            if !rule.values.is_empty() && !rule.values.contains(&trailer.value) {
                violations.push(Violation::new(
                    &commit.hash,
                    Rule::TrailerValue,
                    format!(
                        "trailer '{}' has unconfigured value '{}'",
                        trailer.key, trailer.value
                    ),
                ));
            }
        }
    }
}
