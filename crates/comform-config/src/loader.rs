//! Rule file loader.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{ConfigError, ConfigResult, RuleSet};

/// Default rule file name.
pub const CONFIG_FILE_NAME: &str = ".comform.yaml";

/// Alternate rule file name.
pub const CONFIG_FILE_NAME_ALT: &str = ".comform.yml";

/// Resolves the rule file path at the given repository root.
///
/// Exactly one of the two recognized filename variants must exist.
///
/// # Errors
///
/// Returns [`ConfigError::Ambiguous`] if both variants exist (which file
/// should win is not guessable, so this is a hard error rather than a
/// precedence rule) and [`ConfigError::NotFound`] if neither does.
pub fn resolve_config_path(root: impl AsRef<Path>) -> ConfigResult<PathBuf> {
    let root = root.as_ref();
    let yaml = root.join(CONFIG_FILE_NAME);
    let yml = root.join(CONFIG_FILE_NAME_ALT);

    match (yaml.exists(), yml.exists()) {
        (true, false) => Ok(yaml),
        (false, true) => Ok(yml),
        (true, true) => Err(ConfigError::Ambiguous(
            CONFIG_FILE_NAME.to_string(),
            CONFIG_FILE_NAME_ALT.to_string(),
        )),
        (false, false) => Err(ConfigError::NotFound(yaml)),
    }
}

/// Loads and validates a rule set from the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid YAML for the
/// rule schema, or fails validation.
pub fn load_rules(path: impl AsRef<Path>) -> ConfigResult<RuleSet> {
    let path = path.as_ref();
    debug!(?path, "loading rule file");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let rules: RuleSet = serde_yaml::from_str(&content)?;
    rules.validate()?;

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_names() {
        assert_eq!(CONFIG_FILE_NAME, ".comform.yaml");
        assert_eq!(CONFIG_FILE_NAME_ALT, ".comform.yml");
    }

    #[test]
    fn test_resolve_yaml_variant() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "{}").unwrap();

        let path = resolve_config_path(temp_dir.path()).unwrap();
        assert!(path.ends_with(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_resolve_yml_variant() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME_ALT), "{}").unwrap();

        let path = resolve_config_path(temp_dir.path()).unwrap();
        assert!(path.ends_with(CONFIG_FILE_NAME_ALT));
    }

    #[test]
    fn test_resolve_both_variants_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "{}").unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME_ALT), "{}").unwrap();

        let result = resolve_config_path(temp_dir.path());
        assert!(matches!(result, Err(ConfigError::Ambiguous(_, _))));
    }

    #[test]
    fn test_resolve_missing_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = resolve_config_path(temp_dir.path());
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_rules_not_found() {
        let result = load_rules("/nonexistent/path/.comform.yaml");
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_rules_valid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "first-commit-is-empty: true\ntrailers:\n  Commit-type:\n    mandatory: true\n",
        )
        .unwrap();

        let rules = load_rules(&path).unwrap();
        assert!(rules.first_commit_is_empty);
        assert!(rules.trailers["Commit-type"].mandatory);
    }

    #[test]
    fn test_load_rules_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "this is not valid yaml [[[").unwrap();

        let result = load_rules(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_rules_invalid_trailer_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "trailers:\n  'no spaces allowed': {}\n").unwrap();

        let result = load_rules(&path);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
