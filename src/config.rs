//! Configuration loaded from `.pymodscan.toml`.
//!
//! Lookup order: an explicit file, then `./.pymodscan.toml`, then the user
//! config dir, then built-in defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ConfigError;
use crate::types::DEFAULT_SUFFIXES;

pub const CONFIG_FILE_NAME: &str = ".pymodscan.toml";
const USER_CONFIG_DIR: &str = "pymodscan";
const USER_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Recognized module suffixes, tried in order
    pub suffixes: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json: bool,
    pub sort: bool,
}

impl Config {
    /// Load from an explicit file, or from the first implicit location found
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        for candidate in implicit_locations() {
            if candidate.is_file() {
                return Self::from_file(&candidate);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.suffixes.iter().any(|s| s.is_empty()) {
            return Err(ConfigError::EmptySuffix);
        }
        Ok(())
    }

    /// Apply command-line overrides; an empty `suffixes` keeps the config list
    pub fn merge_cli(&mut self, suffixes: Vec<String>, json: bool, sort: bool) {
        if !suffixes.is_empty() {
            self.scan.suffixes = suffixes;
        }
        self.output.json |= json;
        self.output.sort |= sort;
    }
}

fn implicit_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE));
    }
    locations
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.scan.suffixes, vec![".py", ".pyc"]);
        assert!(!config.output.json);
        assert!(!config.output.sort);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            r#"
[scan]
suffixes = [".pyx", ".py"]

[output]
json = true
"#,
        )
        .unwrap();

        assert_eq!(config.scan.suffixes, vec![".pyx", ".py"]);
        assert!(config.output.json);
        assert!(!config.output.sort);
    }

    #[test]
    fn test_parse_rejects_wrong_type() {
        assert!(Config::parse("[scan]\nsuffixes = \".py\"\n").is_err());
    }

    #[test]
    fn test_empty_suffix_rejected() {
        let mut config = Config::default();
        config.scan.suffixes.push(String::new());
        assert!(matches!(config.validate(), Err(ConfigError::EmptySuffix)));
    }

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[output]\nsort = true\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(config.output.sort);
        assert_eq!(config.scan.suffixes, vec![".py", ".pyc"]);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(&dir.path().join("nope.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[scan\n").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_merge_cli_overrides() {
        let mut config = Config::default();
        config.merge_cli(vec![".ext1".to_string()], true, false);
        assert_eq!(config.scan.suffixes, vec![".ext1"]);
        assert!(config.output.json);
        assert!(!config.output.sort);

        config.merge_cli(Vec::new(), false, true);
        assert_eq!(config.scan.suffixes, vec![".ext1"]);
        assert!(config.output.json);
        assert!(config.output.sort);
    }
}
