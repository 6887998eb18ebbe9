//! Configuration types for the pharmacy seed data.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML files of a pharmacy configuration directory.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Absence, Employee, Pharmacy, ScheduleWeek, Snapshot};

/// Structure of `pharmacy.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PharmacyConfig {
    /// Identity of the pharmacy.
    pub pharmacy: Pharmacy,
    /// Weekly coverage rate reported by the staffing dashboard, in percent.
    pub coverage_rate: Decimal,
}

/// Structure of `roster.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Employees in roster order.
    pub employees: Vec<Employee>,
}

/// Structure of `schedule.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// The current week.
    pub schedule: ScheduleWeek,
}

/// Structure of `absences.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AbsencesConfig {
    /// Recorded absences.
    #[serde(default)]
    pub absences: Vec<Absence>,
}

/// The complete seed configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pharmacy: Pharmacy,
    coverage_rate: Decimal,
    roster: Vec<Employee>,
    schedule: ScheduleWeek,
    absences: Vec<Absence>,
}

impl SeedConfig {
    /// Creates a new SeedConfig from its component parts.
    pub fn new(
        pharmacy: PharmacyConfig,
        roster: Vec<Employee>,
        schedule: ScheduleWeek,
        absences: Vec<Absence>,
    ) -> Self {
        Self {
            pharmacy: pharmacy.pharmacy,
            coverage_rate: pharmacy.coverage_rate,
            roster,
            schedule,
            absences,
        }
    }

    /// Returns the pharmacy identity.
    pub fn pharmacy(&self) -> &Pharmacy {
        &self.pharmacy
    }

    /// Returns the configured coverage rate.
    pub fn coverage_rate(&self) -> Decimal {
        self.coverage_rate
    }

    /// Returns the roster in configuration order.
    pub fn roster(&self) -> &[Employee] {
        &self.roster
    }

    /// Returns the seed schedule.
    pub fn schedule(&self) -> &ScheduleWeek {
        &self.schedule
    }

    /// Returns the seed absences.
    pub fn absences(&self) -> &[Absence] {
        &self.absences
    }

    /// Builds an evaluation snapshot from the seed data as configured.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pharmacy: self.pharmacy.clone(),
            roster: self.roster.clone(),
            schedule: self.schedule.clone(),
            absences: self.absences.clone(),
            coverage_rate: self.coverage_rate,
        }
    }
}
