//! Rule set schema.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

static TRAILER_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("invalid regex"));

/// The validated commit message policy for a check run.
///
/// Field names in the rule file are kebab-case and unknown fields are
/// rejected. The rule set is read-only for the duration of a run; it is
/// passed by argument, never held in global state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RuleSet {
    /// Require the globally first commit of the history to carry an empty
    /// message.
    #[serde(default)]
    pub first_commit_is_empty: bool,

    /// Commit reference marking the adoption cut: commits strictly after it
    /// are subject to the summary and trailer rules. The first-commit rule
    /// ignores this cut.
    #[serde(default)]
    pub starting_from: Option<String>,

    /// Rules applied to the summary line.
    #[serde(default)]
    pub summary: SummaryRules,

    /// Rules applied to trailers, keyed by trailer key.
    ///
    /// A `BTreeMap` so rule evaluation iterates keys in a stable order.
    #[serde(default)]
    pub trailers: BTreeMap<String, TrailerRule>,
}

/// Rules for the summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SummaryRules {
    /// Require the first word of the summary to be a base-form verb.
    #[serde(default)]
    pub first_word_is_simple_verb: bool,

    /// Require the first word of the summary to start with the given case.
    #[serde(default)]
    pub first_word_capitalization: Option<Capitalization>,
}

/// Required capitalization of the summary's first word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capitalization {
    /// The first character must be upper case.
    Upper,
    /// The first character must be lower case.
    Lower,
}

/// Rules for a single trailer key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TrailerRule {
    /// Every checked commit must carry this trailer.
    #[serde(default)]
    pub mandatory: bool,

    /// The trailer may appear at most once per commit.
    #[serde(default)]
    pub singular: bool,

    /// Closed set of acceptable values; empty means unrestricted.
    #[serde(default)]
    pub values: BTreeSet<String>,
}

impl RuleSet {
    /// Validates the rule set.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured trailer key does not match the
    /// trailer key grammar (letters, digits and `-`).
    pub fn validate(&self) -> ConfigResult<()> {
        for key in self.trailers.keys() {
            if !TRAILER_KEY_RE.is_match(key) {
                return Err(ConfigError::Invalid(format!(
                    "trailer key '{key}' is not a valid trailer token"
                )));
            }
        }
        Ok(())
    }
}
