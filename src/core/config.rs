//! Configuration management for duostory
//!
//! Options come from CLI flags, an optional JSON config file, environment
//! variables, and built-in defaults — in that order of precedence. The
//! config file is a flat JSON object with the same keys as the flags.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::error::{BotError, Result};

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Chrome user data directory (holds the logged-in profile)
    pub user_data_dir: PathBuf,
    /// Profile directory name inside the user data dir (e.g. "Default")
    pub profile_name: String,
    /// Run Chrome headless
    pub headless: bool,
    /// Story path (e.g. "/en/es-juan-1") or full URL; None opens the grid
    pub story_path: Option<String>,
    /// Maximum number of click/fill actions per run
    pub max_steps: u32,
    /// Seconds to keep polling when expected elements are absent
    pub wait_secs: u64,
    /// Fixed delay between step-loop ticks, in milliseconds
    pub poll_interval_ms: u64,
    /// chromedriver endpoint
    pub webdriver_url: String,
    /// Duolingo username or email
    pub username: Option<String>,
    /// Duolingo password; None means prompt if a login is needed
    pub password: Option<String>,
}

/// Partial configuration used both as the JSON config-file schema and as
/// the carrier for CLI flag values. Unset fields fall through to the next
/// source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Overrides {
    pub user_data_dir: Option<PathBuf>,
    pub profile_name: Option<String>,
    pub headless: Option<bool>,
    pub story_path: Option<String>,
    pub max_steps: Option<u32>,
    pub wait_secs: Option<u64>,
    pub poll_interval_ms: Option<u64>,
    pub webdriver_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_data_dir: default_user_data_dir(),
            profile_name: "Default".to_string(),
            headless: env::var("DUOSTORY_HEADLESS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            story_path: None,
            max_steps: 200,
            wait_secs: 20,
            poll_interval_ms: 500,
            webdriver_url: env::var("DUOSTORY_WEBDRIVER_URL")
                .unwrap_or_else(|_| "http://localhost:9515".to_string()),
            username: env::var("DUOSTORY_USERNAME").ok(),
            password: env::var("DUOSTORY_PASSWORD").ok(),
        }
    }
}

impl Overrides {
    /// Load overrides from a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| BotError::config(format!("Failed to read {}: {}", path.display(), e)))?;

        serde_json::from_str(&content)
            .map_err(|e| BotError::config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Fill unset fields from a lower-precedence source
    pub fn or(self, lower: Overrides) -> Overrides {
        Overrides {
            user_data_dir: self.user_data_dir.or(lower.user_data_dir),
            profile_name: self.profile_name.or(lower.profile_name),
            headless: self.headless.or(lower.headless),
            story_path: self.story_path.or(lower.story_path),
            max_steps: self.max_steps.or(lower.max_steps),
            wait_secs: self.wait_secs.or(lower.wait_secs),
            poll_interval_ms: self.poll_interval_ms.or(lower.poll_interval_ms),
            webdriver_url: self.webdriver_url.or(lower.webdriver_url),
            username: self.username.or(lower.username),
            password: self.password.or(lower.password),
        }
    }
}

impl Config {
    /// Resolve the final configuration.
    ///
    /// Priority: CLI flags > config file > env vars > defaults. The env and
    /// default layers come from `Config::default()`.
    pub fn resolve(cli: Overrides, file: Option<Overrides>) -> Self {
        // Pick up a .env file if one is present
        let _ = dotenvy::dotenv();

        let merged = match file {
            Some(f) => cli.or(f),
            None => cli,
        };

        let base = Config::default();
        Config {
            user_data_dir: merged.user_data_dir.unwrap_or(base.user_data_dir),
            profile_name: merged.profile_name.unwrap_or(base.profile_name),
            headless: merged.headless.unwrap_or(base.headless),
            story_path: merged.story_path.or(base.story_path),
            max_steps: merged.max_steps.unwrap_or(base.max_steps),
            wait_secs: merged.wait_secs.unwrap_or(base.wait_secs),
            poll_interval_ms: merged.poll_interval_ms.unwrap_or(base.poll_interval_ms),
            webdriver_url: merged.webdriver_url.unwrap_or(base.webdriver_url),
            username: merged.username.or(base.username),
            password: merged.password.or(base.password),
        }
    }

    /// Polling budget for absent elements
    pub fn wait(&self) -> Duration {
        Duration::from_secs(self.wait_secs)
    }

    /// Delay between step-loop ticks
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Default Chrome user data directory for the current platform
fn default_user_data_dir() -> PathBuf {
    let base = if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        dirs::config_dir()
    }
    .unwrap_or_else(|| PathBuf::from("."));

    if cfg!(target_os = "windows") {
        base.join("Google").join("Chrome").join("User Data")
    } else if cfg!(target_os = "macos") {
        base.join("Google").join("Chrome")
    } else {
        base.join("google-chrome")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::resolve(Overrides::default(), None);
        assert_eq!(config.profile_name, "Default");
        assert_eq!(config.max_steps, 200);
        assert_eq!(config.wait_secs, 20);
        assert_eq!(config.poll_interval_ms, 500);
        assert!(config.story_path.is_none());
    }

    #[test]
    fn test_flag_precedence_over_file() {
        let cli = Overrides {
            max_steps: Some(5),
            ..Default::default()
        };
        let file = Overrides {
            max_steps: Some(50),
            wait_secs: Some(3),
            ..Default::default()
        };

        let config = Config::resolve(cli, Some(file));
        // Explicit flag wins, file fills the rest
        assert_eq!(config.max_steps, 5);
        assert_eq!(config.wait_secs, 3);
    }

    #[test]
    fn test_file_fills_unset_flags_only() {
        let cli = Overrides {
            profile_name: Some("Profile 1".to_string()),
            ..Default::default()
        };
        let file = Overrides {
            profile_name: Some("Default".to_string()),
            story_path: Some("/en/es-juan-1".to_string()),
            ..Default::default()
        };

        let config = Config::resolve(cli, Some(file));
        assert_eq!(config.profile_name, "Profile 1");
        assert_eq!(config.story_path.as_deref(), Some("/en/es-juan-1"));
    }

    #[test]
    fn test_omitted_password_stays_unset() {
        // No plaintext default may ever stand in for a missing password;
        // the authenticator prompts instead.
        if env::var("DUOSTORY_PASSWORD").is_ok() {
            return;
        }
        let config = Config::resolve(Overrides::default(), None);
        assert!(config.password.is_none());
    }

    #[test]
    fn test_config_file_json() {
        let json = r#"{"max_steps": 3, "headless": true, "story_path": "/en/fr-lily-2"}"#;
        let file: Overrides = serde_json::from_str(json).unwrap();

        let config = Config::resolve(Overrides::default(), Some(file));
        assert_eq!(config.max_steps, 3);
        assert!(config.headless);
        assert_eq!(config.story_path.as_deref(), Some("/en/fr-lily-2"));
    }

    #[test]
    fn test_durations() {
        let config = Config::resolve(
            Overrides {
                wait_secs: Some(2),
                poll_interval_ms: Some(100),
                ..Default::default()
            },
            None,
        );
        assert_eq!(config.wait(), Duration::from_secs(2));
        assert_eq!(config.poll_interval(), Duration::from_millis(100));
    }
}
