//! Conformance checking engine for Comform.
//!
//! This crate evaluates a [`comform_config::RuleSet`] against a sequence of
//! commits and produces a [`Report`]: one entry per commit, each carrying the
//! violations found and any checks that could not be evaluated.

mod checker;
mod error;
mod pos;
mod report;
mod suggest;
mod violation;

pub use checker::Checker;
pub use error::{CheckError, CheckResult};
pub use pos::{PosError, PosTagger, WordlistTagger};
pub use report::{CommitReport, Report};
pub use suggest::did_you_mean;
pub use violation::{Rule, Unevaluated, Violation};
