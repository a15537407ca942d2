use crate::error::Result;
use crate::retry::RetryConfig;
use crate::traversal::MirrorOptions;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

pub mod dump;
pub mod formats;

pub const DEFAULT_OUTPUT_ROOT: &str = "downloaded";

/// Settings of a `dump` run. Every key is optional in the JSON file.
#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(default)]
pub struct Config {
    pub output_root: PathBuf,
    pub jobs: usize,
    pub list_attempts: u32,
    pub fetch_attempts: u32,
    pub retry_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        let listing = RetryConfig::listing();
        let fetch = RetryConfig::fetch();
        Config {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            jobs: 1,
            list_attempts: listing.max_attempts,
            fetch_attempts: fetch.max_attempts,
            retry_delay_ms: listing.delay.as_millis() as u64,
        }
    }
}

/// Command-line values; `None` keeps whatever the config file said.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub output_root: Option<PathBuf>,
    pub jobs: Option<usize>,
    pub list_attempts: Option<u32>,
    pub fetch_attempts: Option<u32>,
}

impl Config {
    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(output_root) = overrides.output_root {
            self.output_root = output_root;
        }
        if let Some(jobs) = overrides.jobs {
            self.jobs = jobs;
        }
        if let Some(n) = overrides.list_attempts {
            self.list_attempts = n;
        }
        if let Some(n) = overrides.fetch_attempts {
            self.fetch_attempts = n;
        }
    }

    pub fn options(&self) -> MirrorOptions {
        let delay = Duration::from_millis(self.retry_delay_ms);
        MirrorOptions {
            list_retry: RetryConfig::new(self.list_attempts, delay),
            fetch_retry: RetryConfig::new(self.fetch_attempts, delay),
            jobs: self.jobs.max(1),
        }
    }
}

pub async fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let data = fs::read(path.as_ref()).await?;
    Ok(serde_json::from_slice(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_retry_policy() {
        let options = Config::default().options();
        assert_eq!(options.list_retry.max_attempts, 5);
        assert_eq!(options.fetch_retry.max_attempts, 2);
        assert_eq!(options.jobs, 1);
    }

    #[tokio::test]
    async fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drive-dump.json");
        std::fs::write(&path, r#"{"jobs": 4, "output_root": "/tmp/mirror"}"#).unwrap();

        let config = load_config(&path).await.unwrap();
        assert_eq!(config.jobs, 4);
        assert_eq!(config.output_root, PathBuf::from("/tmp/mirror"));
        assert_eq!(config.list_attempts, 5);
    }

    #[tokio::test]
    async fn broken_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drive-dump.json");
        std::fs::write(&path, "{ jobs: ").unwrap();
        assert!(matches!(
            load_config(&path).await,
            Err(crate::Error::Json(_))
        ));
    }

    #[tokio::test]
    async fn flags_beat_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drive-dump.json");
        std::fs::write(
            &path,
            r#"{"jobs": 4, "output_root": "/tmp/mirror", "fetch_attempts": 7}"#,
        )
        .unwrap();

        let mut config = load_config(&path).await.unwrap();
        config.apply_overrides(Overrides {
            jobs: Some(2),
            list_attempts: Some(9),
            ..Overrides::default()
        });

        assert_eq!(config.jobs, 2);
        assert_eq!(config.list_attempts, 9);
        assert_eq!(config.output_root, PathBuf::from("/tmp/mirror"));
        assert_eq!(config.fetch_attempts, 7);
    }

    #[test]
    fn no_flags_change_nothing() {
        let mut config = Config::default();
        config.apply_overrides(Overrides::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn zero_jobs_means_one() {
        let config = Config {
            jobs: 0,
            ..Config::default()
        };
        assert_eq!(config.options().jobs, 1);
    }
}
