//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration and the employee roster from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::models::Roster;

use super::types::{EngineConfig, OrganizationConfig, PolicyConfig, RosterConfig};

/// Loads and provides access to the engine configuration and roster.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── organization.yaml   # Organization name for report titles
/// ├── policy.yaml         # Rest day, status bands, attendance rate rule
/// └── roster.yaml         # Employees in report order
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Loaded {} employees for {}", loader.roster().len(), loader.organization().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
    roster: Roster,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The status probabilities are out of range
    /// - Two roster entries share an id
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();

        let organization = Self::load_yaml::<OrganizationConfig>(&path.join("organization.yaml"))?;
        let policy = Self::load_yaml::<PolicyConfig>(&path.join("policy.yaml"))?;
        let roster_config = Self::load_yaml::<RosterConfig>(&path.join("roster.yaml"))?;

        policy.status_probabilities.validate()?;
        let roster = Roster::new(roster_config.employees)?;

        debug!(
            path = %path.display(),
            organization = %organization.name,
            employees = roster.len(),
            "Loaded configuration"
        );

        Ok(Self {
            config: EngineConfig::new(organization, policy),
            roster,
        })
    }

    /// Builds a loader from values already in memory.
    pub fn from_parts(config: EngineConfig, roster: Roster) -> ReportResult<Self> {
        config.policy().status_probabilities.validate()?;
        Ok(Self { config, roster })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ReportResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReportError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ReportError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the organization settings.
    pub fn organization(&self) -> &OrganizationConfig {
        self.config.organization()
    }

    /// Returns the attendance policy.
    pub fn policy(&self) -> &PolicyConfig {
        self.config.policy()
    }

    /// Returns the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}
