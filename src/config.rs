// src/config.rs
use std::env;
use thiserror::Error;

pub const CONTRIBUTOR_THRESHOLD_VAR: &str = "PERIODICAL_CONTRIBUTOR_THRESHOLD";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    // an author contributes to a magazine with strictly more articles than this
    contributor_threshold: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const fn default_contributor_threshold() -> usize {
    2
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            contributor_threshold: default_contributor_threshold(),
        }
    }
}

impl RegistryConfig {
    /// Build configuration from environment variables, falling back to the
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let contributor_threshold = match lookup(CONTRIBUTOR_THRESHOLD_VAR) {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                ConfigError::Invalid(format!(
                    "{CONTRIBUTOR_THRESHOLD_VAR} must be a non-negative integer, got '{raw}'"
                ))
            })?,
            None => default_contributor_threshold(),
        };

        Ok(Self {
            contributor_threshold,
        })
    }

    pub fn with_contributor_threshold(mut self, threshold: usize) -> Self {
        self.contributor_threshold = threshold;
        self
    }

    pub fn contributor_threshold(&self) -> usize {
        self.contributor_threshold
    }
}
