use crate::core::worker_pool::{
    DEFAULT_JOBS, DEFAULT_JOB_DELAY_MS, DEFAULT_QUEUE_CAPACITY, DEFAULT_WORKERS,
    MAX_QUEUE_CAPACITY, MAX_WORKERS,
};
use crate::core::{Section, SettingsProvider};
use crate::utils::error::{PracticeError, Result};
use crate::utils::validation::{validate_capacity, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_JOBS: u64 = 1_000;
pub const MAX_JOB_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub worker_pool: WorkerPoolConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    pub sections: Option<Vec<Section>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkerPoolConfig {
    pub workers: Option<usize>,
    pub jobs: Option<u64>,
    pub job_delay_ms: Option<u64>,
    pub queue_capacity: Option<usize>,
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PracticeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PracticeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders from the environment. Unset variables stay as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PracticeError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.run.sections = Some(sections);
    }
}

impl SettingsProvider for TomlConfig {
    fn sections(&self) -> Vec<Section> {
        match &self.run.sections {
            Some(sections) if !sections.is_empty() => sections.clone(),
            _ => Section::ALL.to_vec(),
        }
    }

    fn workers(&self) -> usize {
        self.worker_pool.workers.unwrap_or(DEFAULT_WORKERS)
    }

    fn jobs(&self) -> u64 {
        self.worker_pool.jobs.unwrap_or(DEFAULT_JOBS)
    }

    fn job_delay_ms(&self) -> u64 {
        self.worker_pool.job_delay_ms.unwrap_or(DEFAULT_JOB_DELAY_MS)
    }

    fn queue_capacity(&self) -> usize {
        self.worker_pool.queue_capacity.unwrap_or(DEFAULT_QUEUE_CAPACITY)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_range("worker_pool.workers", self.workers(), 1, MAX_WORKERS)?;
        validate_range(
            "worker_pool.queue_capacity",
            self.queue_capacity(),
            1,
            MAX_QUEUE_CAPACITY,
        )?;
        validate_range("worker_pool.jobs", self.jobs(), 1, MAX_JOBS)?;
        validate_range("worker_pool.job_delay_ms", self.job_delay_ms(), 0, MAX_JOB_DELAY_MS)?;
        // jobs is capped at MAX_JOBS above, so the cast cannot truncate
        validate_capacity(
            "worker_pool.queue_capacity",
            self.queue_capacity(),
            self.jobs() as usize,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.sections(), Section::ALL.to_vec());
        assert_eq!(config.workers(), 3);
        assert_eq!(config.jobs(), 5);
        assert_eq!(config.job_delay_ms(), 100);
        assert_eq!(config.queue_capacity(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[run]
sections = ["errors", "basics"]

[worker_pool]
workers = 4
jobs = 8
job_delay_ms = 20
queue_capacity = 8
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.sections(), vec![Section::Errors, Section::Basics]);
        assert_eq!(config.workers(), 4);
        assert_eq!(config.jobs(), 8);
        assert_eq!(config.job_delay_ms(), 20);
        assert_eq!(config.queue_capacity(), 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_section_is_config_error() {
        let err = TomlConfig::from_toml_str("[run]\nsections = [\"generics\"]\n").unwrap_err();
        assert!(matches!(err, PracticeError::ConfigError { .. }));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LANG_PRACTICE_TEST_WORKERS", "6");
        let config =
            TomlConfig::from_toml_str("[worker_pool]\nworkers = ${LANG_PRACTICE_TEST_WORKERS}\n")
                .unwrap();
        assert_eq!(config.workers(), 6);
        std::env::remove_var("LANG_PRACTICE_TEST_WORKERS");
    }

    #[test]
    fn test_unset_env_var_left_in_place() {
        let processed =
            TomlConfig::substitute_env_vars("value = \"${LANG_PRACTICE_SURELY_UNSET}\"").unwrap();
        assert_eq!(processed, "value = \"${LANG_PRACTICE_SURELY_UNSET}\"");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = TomlConfig::default();
        config.worker_pool.workers = Some(0);
        assert!(config.validate().is_err());

        let mut config = TomlConfig::default();
        config.worker_pool.jobs = Some(12);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("worker_pool.queue_capacity"));

        let mut config = TomlConfig::default();
        config.worker_pool.job_delay_ms = Some(MAX_JOB_DELAY_MS + 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_pool() {
        let config = TomlConfig::from_toml_str(
            "[worker_pool]\nqueue_capacity = 9223372036854775807\n",
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("worker_pool.queue_capacity"));

        let config =
            TomlConfig::from_toml_str("[worker_pool]\nworkers = 9223372036854775807\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("worker_pool.workers"));

        let mut config = TomlConfig::default();
        config.worker_pool.workers = Some(MAX_WORKERS);
        config.worker_pool.queue_capacity = Some(MAX_QUEUE_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_sections_override_file() {
        let mut config = TomlConfig::from_toml_str("[run]\nsections = [\"basics\"]\n").unwrap();
        config.set_sections(vec![Section::Concurrency]);
        assert_eq!(config.sections(), vec![Section::Concurrency]);
    }
}
