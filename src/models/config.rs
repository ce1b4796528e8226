use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

/// Matching configuration loaded from a YAML file.
///
/// ```yaml
/// threshold: 30
/// count: 8
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MatchConfig {
    /// Maximum distance at which a candidate still counts as a match
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Number of results for multi-match queries
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_threshold() -> f64 {
    50.0
}

fn default_count() -> usize {
    5
}

impl MatchConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration if a path is given, falling back to defaults on
    /// any error.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    threshold = config.threshold,
                    count = config.count,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "threshold must be a non-negative number, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            count: default_count(),
        }
    }
}
