//! Employee model.
//!
//! This module defines the [`Employee`] struct for representing pharmacy
//! staff, including the pharmacist-diploma (PDE) qualification that most
//! rules depend on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Day;

/// Represents a member of the pharmacy staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Full name, unique within the roster.
    pub name: String,
    /// Role label (e.g., "Préparatrice en pharmacie").
    pub role: String,
    /// Whether the employee holds the state pharmacist diploma (PDE).
    pub qualified: bool,
    /// Contracted weekly hours.
    pub contracted_hours: Decimal,
    /// Remaining paid-leave days.
    pub remaining_leave_days: u32,
    /// Days on which the employee declared availability.
    #[serde(default)]
    pub availability: Vec<Day>,
}

impl Employee {
    /// Returns true if the employee holds the PDE qualification.
    ///
    /// This is the single qualification predicate used by the PDE presence
    /// check, the absence coverage check and the replacement ranker.
    ///
    /// # Examples
    ///
    /// ```
    /// use pharmacy_compliance::models::{Day, Employee};
    /// use rust_decimal::Decimal;
    ///
    /// let pharmacist = Employee {
    ///     name: "Sophie Martin".to_string(),
    ///     role: "Pharmacienne diplômée (PDE)".to_string(),
    ///     qualified: true,
    ///     contracted_hours: Decimal::from(35),
    ///     remaining_leave_days: 12,
    ///     availability: vec![Day::Monday, Day::Tuesday],
    /// };
    /// assert!(pharmacist.is_qualified());
    /// assert!(pharmacist.is_available_on(Day::Monday));
    /// assert!(!pharmacist.is_available_on(Day::Saturday));
    /// ```
    pub fn is_qualified(&self) -> bool {
        self.qualified
    }

    /// Returns true if the employee declared availability on `day`.
    pub fn is_available_on(&self, day: Day) -> bool {
        self.availability.contains(&day)
    }
}
