//! Configuration for the pseudocode pipeline.
//!
//! Parses an optional `psdoc.toml` with serde. Every field has a default,
//! so a missing file means default configuration rather than an error.

use std::path::Path;

use serde::Deserialize;

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "psdoc.toml";

/// Pipeline configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Fence info string that marks a pseudocode region.
    pub syntax: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            syntax: "pseudocode".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration from a specific file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `psdoc.toml` from `dir`, falling back to defaults when absent.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_syntax() {
        assert_eq!(Config::default().syntax, "pseudocode");
    }

    #[test]
    fn test_parse_overrides_syntax() {
        let config: Config = toml::from_str(r#"syntax = "algo""#).unwrap();
        assert_eq!(config.syntax, "algo");
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_discover_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_discover_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "syntax = \"ps\"\n").unwrap();
        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.syntax, "ps");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "syntax = [not toml").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }
}
