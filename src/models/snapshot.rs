//! Evaluation snapshot.
//!
//! A [`Snapshot`] bundles everything one evaluation pass reads: the pharmacy
//! identity, the roster, the week schedule, the absences and the externally
//! computed coverage rate. The engine only ever borrows it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Absence, Employee, ScheduleWeek};

/// Identity of the pharmacy being evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pharmacy {
    /// Trading name.
    pub name: String,
    /// City.
    #[serde(default)]
    pub city: String,
    /// Opening hours, free text.
    #[serde(default)]
    pub opening_hours: String,
}

/// Read-only input of one evaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The pharmacy being evaluated.
    #[serde(default)]
    pub pharmacy: Pharmacy,
    /// Staff roster, in a fixed order.
    #[serde(default)]
    pub roster: Vec<Employee>,
    /// Schedule of the evaluated week.
    #[serde(default)]
    pub schedule: ScheduleWeek,
    /// Recorded absences.
    #[serde(default)]
    pub absences: Vec<Absence>,
    /// Weekly coverage rate, as a percentage.
    pub coverage_rate: Decimal,
}

impl Snapshot {
    /// Looks up a roster employee by exact name.
    pub fn employee(&self, name: &str) -> Option<&Employee> {
        self.roster.iter().find(|e| e.name == name)
    }

    /// Returns true if `name` is a qualified roster employee.
    ///
    /// Names missing from the roster are never qualified.
    pub fn is_qualified(&self, name: &str) -> bool {
        self.employee(name).is_some_and(Employee::is_qualified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_snapshot() {
        let json = r#"{"coverage_rate": 94}"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.roster.is_empty());
        assert!(snapshot.schedule.is_empty());
        assert!(snapshot.absences.is_empty());
        assert_eq!(snapshot.coverage_rate, Decimal::from(94));
    }

    #[test]
    fn test_is_qualified_for_unknown_name_is_false() {
        let json = r#"{
            "roster": [{
                "name": "Sophie Martin",
                "role": "Pharmacienne diplômée (PDE)",
                "qualified": true,
                "contracted_hours": 35,
                "remaining_leave_days": 12
            }],
            "coverage_rate": 100
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.is_qualified("Sophie Martin"));
        assert!(!snapshot.is_qualified("Unknown"));
        assert!(snapshot.employee("Unknown").is_none());
    }
}
