//! Configuration loading: .mentorrc.json plus environment overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".mentorrc.json";

/// Key prefix that marks a usable Anthropic credential
const API_KEY_PREFIX: &str = "sk-ant-";

/// Runtime configuration for the analyzer service
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Anthropic API key; remote analysis is only attempted with a valid key
    pub api_key: Option<String>,
    /// Model for remote requests
    pub model: String,
    /// Remote request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: crate::remote::DEFAULT_MODEL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Overlay environment variables onto the config. Env wins over file
    /// values: ANTHROPIC_API_KEY, MENTOR_MODEL, MENTOR_TIMEOUT_SECS.
    pub fn apply_env(mut self) -> Self {
        if let Ok(key) = std::env::var("ANTHROPIC_API_KEY") {
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }
        if let Ok(model) = std::env::var("MENTOR_MODEL") {
            if !model.is_empty() {
                self.model = model;
            }
        }
        if let Ok(secs) = std::env::var("MENTOR_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                self.timeout_secs = secs;
            }
        }
        self
    }

    /// The configured key, if it looks like a real Anthropic credential.
    /// Anything else leaves the service in heuristic-only mode.
    pub fn remote_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|key| key.starts_with(API_KEY_PREFIX))
    }
}

/// Find and load config. Searches `work_dir` then its parents; a missing
/// file yields defaults, an explicit `custom_path` that doesn't exist is
/// an error.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        Some(path)
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in config: {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

/// Search for .mentorrc.json in directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_config_file() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, crate::remote::DEFAULT_MODEL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn loads_file_with_partial_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, r#"{{ "model": "claude-haiku-4", "timeoutSecs": 5 }}"#).unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.model, "claude-haiku-4");
        assert_eq!(config.timeout_secs, 5);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = load_config(dir.path(), Some(Path::new("nope.json")));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "not json").unwrap();
        assert!(load_config(dir.path(), None).is_err());
    }

    #[test]
    fn remote_key_requires_prefix() {
        let mut config = Config::default();
        assert!(config.remote_api_key().is_none());

        config.api_key = Some("not-a-real-key".to_string());
        assert!(config.remote_api_key().is_none());

        config.api_key = Some("sk-ant-abc123".to_string());
        assert_eq!(config.remote_api_key(), Some("sk-ant-abc123"));
    }
}
