// Harness configuration: defaults, optionally overlaid by a JSON file, then by the CLI
use crate::error::{HarnessError, Result};
use crate::suite::SuiteFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SUITE_PATH: &str = "tests/argument/tests.csv";
pub const DEFAULT_TITLE: &str = "ARGUMENT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    pub suite: PathBuf,
    /// Base directory for program resolution; the process cwd when unset
    pub working_dir: Option<PathBuf>,
    pub delimiter: char,
    pub has_headers: bool,
    pub title: String,
    pub filter: Option<String>,
    pub report: Option<PathBuf>,
    pub fail_on_mismatch: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            suite: PathBuf::from(DEFAULT_SUITE_PATH),
            working_dir: None,
            delimiter: ',',
            has_headers: false,
            title: DEFAULT_TITLE.to_string(),
            filter: None,
            report: None,
            fail_on_mismatch: false,
        }
    }
}

impl HarnessConfig {
    /// Load a JSON config file. Missing keys keep their defaults.
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Err(HarnessError::Config(format!(
                "config file not found: {}",
                config_path.display()
            )));
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            HarnessError::Config(format!("failed to read {}: {}", config_path.display(), e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            HarnessError::Config(format!("failed to parse {}: {}", config_path.display(), e))
        })
    }

    pub fn suite_format(&self) -> Result<SuiteFormat> {
        if !self.delimiter.is_ascii() {
            return Err(HarnessError::Config(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }
        Ok(SuiteFormat {
            delimiter: self.delimiter as u8,
            has_headers: self.has_headers,
        })
    }

    /// The directory programs are resolved against and children run in.
    pub fn resolve_working_dir(&self) -> Result<PathBuf> {
        match &self.working_dir {
            Some(dir) if dir.is_dir() => Ok(dir.clone()),
            Some(dir) => Err(HarnessError::Config(format!(
                "working directory does not exist: {}",
                dir.display()
            ))),
            None => std::env::current_dir().map_err(|e| {
                HarnessError::Config(format!("cannot determine current directory: {}", e))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::default();
        assert_eq!(config.suite, PathBuf::from("tests/argument/tests.csv"));
        assert_eq!(config.title, "ARGUMENT");
        assert_eq!(config.suite_format().unwrap(), SuiteFormat::default());
        assert!(!config.fail_on_mismatch);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exitcheck.json");
        fs::write(&path, r#"{ "delimiter": ";", "title": "SMOKE" }"#).unwrap();

        let config = HarnessConfig::load(&path).unwrap();
        assert_eq!(config.delimiter, ';');
        assert_eq!(config.title, "SMOKE");
        assert_eq!(config.suite, PathBuf::from(DEFAULT_SUITE_PATH));
        assert!(config.filter.is_none());
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exitcheck.json");
        fs::write(&path, r#"{ "timeout_ms": 100 }"#).unwrap();

        assert!(matches!(HarnessConfig::load(&path), Err(HarnessError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = HarnessConfig::load(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(HarnessError::Config(msg)) if msg.contains("not found")));
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let config = HarnessConfig {
            delimiter: '§',
            ..Default::default()
        };
        assert!(config.suite_format().is_err());
    }

    #[test]
    fn test_working_dir_explicit_and_missing() {
        let dir = tempdir().unwrap();
        let config = HarnessConfig {
            working_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        assert_eq!(config.resolve_working_dir().unwrap(), dir.path());

        let missing = HarnessConfig {
            working_dir: Some(dir.path().join("missing")),
            ..Default::default()
        };
        assert!(missing.resolve_working_dir().is_err());
    }
}
