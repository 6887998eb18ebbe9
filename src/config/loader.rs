//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a pharmacy's
//! seed data from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Pharmacy, Snapshot};

use super::types::{AbsencesConfig, PharmacyConfig, RosterConfig, ScheduleConfig, SeedConfig};

/// Loads and provides access to a pharmacy's seed data.
///
/// # Directory Structure
///
/// ```text
/// config/pharmacie-des-lilas/
/// ├── pharmacy.yaml   # Identity and coverage rate
/// ├── roster.yaml     # Employees
/// ├── schedule.yaml   # Current week
/// └── absences.yaml   # Recorded absences
/// ```
///
/// # Example
///
/// ```no_run
/// use pharmacy_compliance::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pharmacie-des-lilas").unwrap();
/// let employee = loader.get_employee("Sophie Martin").unwrap();
/// println!("{} ({})", employee.name, employee.role);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SeedConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any of the four files is missing
    /// (`ConfigNotFound`) or contains invalid YAML (`ConfigParseError`).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let pharmacy = Self::load_yaml::<PharmacyConfig>(&path.join("pharmacy.yaml"))?;
        let roster = Self::load_yaml::<RosterConfig>(&path.join("roster.yaml"))?;
        let schedule = Self::load_yaml::<ScheduleConfig>(&path.join("schedule.yaml"))?;
        let absences = Self::load_yaml::<AbsencesConfig>(&path.join("absences.yaml"))?;

        debug!(
            path = %path.display(),
            employees = roster.employees.len(),
            absences = absences.absences.len(),
            "Loaded pharmacy configuration"
        );

        let config = SeedConfig::new(
            pharmacy,
            roster.employees,
            schedule.schedule,
            absences.absences,
        );

        Ok(Self { config })
    }

    /// Wraps an already-built seed configuration.
    pub fn from_config(config: SeedConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying seed configuration.
    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Returns the pharmacy identity.
    pub fn pharmacy(&self) -> &Pharmacy {
        self.config.pharmacy()
    }

    /// Returns the roster in configuration order.
    pub fn roster(&self) -> &[Employee] {
        self.config.roster()
    }

    /// Gets a roster employee by exact name.
    pub fn get_employee(&self, name: &str) -> EngineResult<&Employee> {
        self.roster()
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                name: name.to_string(),
            })
    }

    /// Gets a roster employee by name, ignoring case.
    pub fn find_employee(&self, name: &str) -> EngineResult<&Employee> {
        let wanted = name.trim().to_lowercase();
        self.roster()
            .iter()
            .find(|e| e.name.to_lowercase() == wanted)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                name: name.to_string(),
            })
    }

    /// Builds an evaluation snapshot from the seed data as configured.
    pub fn snapshot(&self) -> Snapshot {
        self.config.snapshot()
    }
}
