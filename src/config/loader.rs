//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading lifecycle
//! policy and seed templates from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{LifecycleError, LifecycleResult};

use super::types::{LifecycleConfig, LifecyclePolicy, TemplateSeed, TemplatesConfig};

/// Loads and provides access to the lifecycle configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/lifecycle/
/// ├── policy.yaml     # Probation/extension/window durations
/// └── templates.yaml  # Seed offboarding templates
/// ```
///
/// # Example
///
/// ```no_run
/// use lifecycle_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/lifecycle").unwrap();
/// assert_eq!(loader.policy().default_probation_days, 90);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: LifecycleConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or contains invalid
    /// YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> LifecycleResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<LifecyclePolicy>(&path.join("policy.yaml"))?;
        let templates = Self::load_yaml::<TemplatesConfig>(&path.join("templates.yaml"))?;

        Ok(Self {
            config: LifecycleConfig {
                policy,
                templates: templates.templates,
            },
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> LifecycleResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LifecycleError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| LifecycleError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the duration policy.
    pub fn policy(&self) -> LifecyclePolicy {
        self.config.policy
    }

    /// Returns the seed offboarding templates.
    pub fn templates(&self) -> &[TemplateSeed] {
        &self.config.templates
    }
}
