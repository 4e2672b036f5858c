//! Optional TOML configuration file
//!
//! Every value may also come from a flag or environment variable; those
//! take precedence over the file.
//!
//! ```toml
//! database_url = "sqlite://scripthub.db"
//! log_level = "debug"
//! sample_secs = 10
//! history_file = "/home/me/.scripthub_history"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::sampler::DEFAULT_PERIOD;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HubConfig {
    pub database_url: Option<String>,
    pub log_level: Option<String>,
    pub sample_secs: Option<u64>,
    pub history_file: Option<PathBuf>,
}

impl HubConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Effective settings after merging flags, environment and file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: Option<String>,
    pub log_level: String,
    pub sample_period: Duration,
    pub history_file: Option<PathBuf>,
}

impl Settings {
    pub fn merge(
        database_url: Option<String>,
        log_level: Option<String>,
        sample_secs: Option<u64>,
        file: HubConfig,
    ) -> Self {
        let sample_period = sample_secs
            .or(file.sample_secs)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_PERIOD);

        Self {
            database_url: database_url.or(file.database_url),
            log_level: log_level
                .or(file.log_level)
                .unwrap_or_else(|| "info".into()),
            sample_period,
            history_file: file.history_file.or_else(default_history_file),
        }
    }
}

fn default_history_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".scripthub_history"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full() {
        let config = HubConfig::parse(
            r#"
            database_url = "postgres://hub@localhost/hub"
            log_level = "debug"
            sample_secs = 10
            "#,
        )
        .unwrap();

        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://hub@localhost/hub")
        );
        assert_eq!(config.sample_secs, Some(10));
        assert!(config.history_file.is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(HubConfig::parse("databse_url = \"x\"").is_err());
        assert_eq!(HubConfig::parse("").unwrap(), HubConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let file = HubConfig {
            database_url: Some("sqlite://file.db".into()),
            log_level: Some("warn".into()),
            sample_secs: Some(30),
            history_file: Some("/tmp/history".into()),
        };

        let settings = Settings::merge(
            Some("postgres://flag/hub".into()),
            None,
            Some(0),
            file,
        );
        assert_eq!(settings.database_url.as_deref(), Some("postgres://flag/hub"));
        assert_eq!(settings.log_level, "warn");
        // Zero falls back to the default
        assert_eq!(settings.sample_period, DEFAULT_PERIOD);
        assert_eq!(settings.history_file, Some(PathBuf::from("/tmp/history")));
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::merge(None, None, None, HubConfig::default());
        assert_eq!(settings.database_url, None);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.sample_period, Duration::from_secs(5));
        assert_eq!(
            settings.history_file,
            dirs::home_dir().map(|home| home.join(".scripthub_history"))
        );
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sample_secs = 2").unwrap();

        let config = HubConfig::load(file.path()).unwrap();
        assert_eq!(config.sample_secs, Some(2));

        assert!(HubConfig::load(Path::new("/nonexistent/scripthub.toml")).is_err());
    }
}
