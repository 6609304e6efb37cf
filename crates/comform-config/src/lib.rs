//! Rule set management for Comform.
//!
//! This crate handles locating, loading and validating the `.comform.yaml`
//! rule file that describes the commit message policy.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, CONFIG_FILE_NAME_ALT, load_rules, resolve_config_path};
pub use schema::{Capitalization, RuleSet, SummaryRules, TrailerRule};
