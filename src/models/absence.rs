//! Absence model and related types.
//!
//! An absence is created pending and moves exactly once to either approved
//! or rejected. The rule checks only read absences; status changes belong to
//! the workflow module.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of absence requested.
///
/// Serialized with the labels used by the pharmacy staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbsenceType {
    /// Sick leave.
    #[serde(rename = "Maladie")]
    Sickness,
    /// Paid leave, deducted from the leave balance on approval.
    #[serde(rename = "Congé payé")]
    PaidLeave,
    /// Unpaid leave.
    #[serde(rename = "Congé sans solde")]
    UnpaidLeave,
    /// Training day.
    #[serde(rename = "Formation")]
    Training,
    /// Anything else.
    #[serde(rename = "Autre")]
    Other,
}

impl AbsenceType {
    /// Returns the label of the absence type.
    pub fn label(self) -> &'static str {
        match self {
            AbsenceType::Sickness => "Maladie",
            AbsenceType::PaidLeave => "Congé payé",
            AbsenceType::UnpaidLeave => "Congé sans solde",
            AbsenceType::Training => "Formation",
            AbsenceType::Other => "Autre",
        }
    }
}

impl fmt::Display for AbsenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle status of an absence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceStatus {
    /// Waiting for a manager decision.
    #[default]
    #[serde(alias = "En attente")]
    Pending,
    /// Approved (terminal).
    #[serde(alias = "Validée")]
    Approved,
    /// Rejected (terminal).
    #[serde(alias = "Refusée")]
    Rejected,
}

impl AbsenceStatus {
    /// Returns the serialized name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            AbsenceStatus::Pending => "pending",
            AbsenceStatus::Approved => "approved",
            AbsenceStatus::Rejected => "rejected",
        }
    }

    /// Returns true for approved and rejected absences.
    pub fn is_terminal(self) -> bool {
        self != AbsenceStatus::Pending
    }
}

impl fmt::Display for AbsenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded absence of one employee on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Absence {
    /// Name of the absent employee.
    pub employee: String,
    /// Date of the absence.
    pub date: NaiveDate,
    /// Kind of absence.
    #[serde(rename = "type")]
    pub absence_type: AbsenceType,
    /// Current status.
    #[serde(default)]
    pub status: AbsenceStatus,
    /// Name of the assigned replacement, if any.
    #[serde(default)]
    pub replacement: Option<String>,
    /// Reason given when the absence was rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl Absence {
    /// Creates a pending absence with no replacement.
    ///
    /// # Example
    ///
    /// ```
    /// use pharmacy_compliance::models::{Absence, AbsenceStatus, AbsenceType};
    /// use chrono::NaiveDate;
    ///
    /// let absence = Absence::pending(
    ///     "Karim Benali",
    ///     NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
    ///     AbsenceType::PaidLeave,
    /// );
    /// assert_eq!(absence.status, AbsenceStatus::Pending);
    /// assert!(absence.replacement.is_none());
    /// ```
    pub fn pending(employee: impl Into<String>, date: NaiveDate, absence_type: AbsenceType) -> Self {
        Self {
            employee: employee.into(),
            date,
            absence_type,
            status: AbsenceStatus::Pending,
            replacement: None,
            rejection_reason: None,
        }
    }

    /// Returns true if this absence concerns `employee` on `date`.
    pub fn concerns(&self, employee: &str, date: NaiveDate) -> bool {
        self.employee == employee && self.date == date
    }
}
