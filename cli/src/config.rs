//! User configuration.
//!
//! Read from `~/.crossnorm/config.json`. The environment overrides the cookie,
//! and command-line flags override the rest.

use crate::VariantArg;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the configured cookie.
pub const COOKIE_ENV: &str = "NYT_S_COOKIE";

/// Error type for configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine home directory")]
    NoHomeDir,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Where documents are written when no `--output` is given.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    /// Subscriber `NYT-S` cookie used by `fetch`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nyt_cookie: Option<String>,
    #[serde(default)]
    pub default_variant: VariantArg,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("puzzle.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            nyt_cookie: None,
            default_variant: VariantArg::default(),
        }
    }
}

impl Config {
    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_cookie_override(std::env::var(COOKIE_ENV).ok())
    }

    /// A non-blank cookie from the environment replaces the configured one.
    fn with_cookie_override(mut self, from_env: Option<String>) -> Self {
        if let Some(cookie) = from_env.filter(|c| !c.trim().is_empty()) {
            self.nyt_cookie = Some(cookie);
        }
        self
    }
}

/// Get the config file path (`~/.crossnorm/config.json`).
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".crossnorm").join("config.json"))
}

/// Load the configuration from disk and apply environment overrides.
///
/// Falls back to defaults if the file doesn't exist or can't be read.
pub fn load_config() -> Config {
    let config = match config_path() {
        Ok(path) => load_config_from(&path),
        Err(_) => Config::default(),
    };
    config.with_env_overrides()
}

pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(path = %path.display(), "could not read config: {e}");
            return Config::default();
        }
    };

    serde_json::from_str(&contents).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), "ignoring invalid config: {e}");
        Config::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.json"));

        assert_eq!(config, Config::default());
        assert_eq!(config.output_path, PathBuf::from("puzzle.json"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "default_variant": "mini" }"#).unwrap();

        let config = load_config_from(&path);
        assert_eq!(config.default_variant, VariantArg::Mini);
        assert_eq!(config.output_path, default_output_path());
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ oops").unwrap();

        assert_eq!(load_config_from(&path), Config::default());
    }

    #[test]
    fn test_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "output_path": "out/today.json", "nyt_cookie": "abc", "default_variant": "mini" }"#,
        )
        .unwrap();

        let expected = Config {
            output_path: PathBuf::from("out/today.json"),
            nyt_cookie: Some("abc".to_string()),
            default_variant: VariantArg::Mini,
        };
        assert_eq!(load_config_from(&path), expected);
    }

    #[test]
    fn test_cookie_precedence() {
        let config = || Config {
            nyt_cookie: Some("from-file".to_string()),
            ..Config::default()
        };
        let cookie = |config: Config, env: Option<&str>| {
            config.with_cookie_override(env.map(str::to_string)).nyt_cookie
        };

        assert_eq!(cookie(config(), Some("from-env")).as_deref(), Some("from-env"));
        assert_eq!(cookie(config(), Some(" ")).as_deref(), Some("from-file"));
        assert_eq!(cookie(config(), None).as_deref(), Some("from-file"));
        assert_eq!(cookie(Config::default(), Some("from-env")).as_deref(), Some("from-env"));
        assert_eq!(cookie(Config::default(), None), None);
    }
}
