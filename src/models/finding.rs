//! Finding model.
//!
//! A [`Finding`] is one result emitted by a rule check: either a violation
//! or a conformant observation, with a stable code that other collaborators
//! match on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a finding reports a problem or a conformant state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// A rule is breached.
    Violation,
    /// A rule is satisfied.
    Ok,
}

/// Severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Critical: the pharmacy is out of compliance.
    Red,
    /// Minor: needs attention.
    Orange,
    /// Conformant.
    Green,
}

/// One structured evaluation result.
///
/// # Example
///
/// ```
/// use pharmacy_compliance::models::{Finding, FindingKind, Severity};
///
/// let finding = Finding::violation(
///     "CONGES_EPUISES",
///     "Julie Bernard n'a plus de jours de congés disponibles",
///     Severity::Red,
///     serde_json::json!({"employe": "Julie Bernard", "solde": 0}),
/// );
/// assert_eq!(finding.kind, FindingKind::Violation);
/// assert!(finding.is_critical());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Violation or conformant.
    pub kind: FindingKind,
    /// Stable code identifying the rule outcome (e.g., "PDE_ABSENT").
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Severity level.
    pub severity: Severity,
    /// Structured details about the evaluated subject.
    pub details: serde_json::Value,
    /// When the finding was generated.
    pub timestamp: DateTime<Utc>,
}

impl Finding {
    /// Creates a violation finding.
    pub fn violation(
        code: &str,
        message: impl Into<String>,
        severity: Severity,
        details: serde_json::Value,
    ) -> Self {
        Self {
            kind: FindingKind::Violation,
            code: code.to_string(),
            message: message.into(),
            severity,
            details,
            timestamp: Utc::now(),
        }
    }

    /// Creates a conformant finding. Conformant findings are always green.
    pub fn ok(code: &str, message: impl Into<String>, details: serde_json::Value) -> Self {
        Self {
            kind: FindingKind::Ok,
            code: code.to_string(),
            message: message.into(),
            severity: Severity::Green,
            details,
            timestamp: Utc::now(),
        }
    }

    /// Red violation.
    pub fn is_critical(&self) -> bool {
        self.kind == FindingKind::Violation && self.severity == Severity::Red
    }

    /// Orange violation.
    pub fn is_minor(&self) -> bool {
        self.kind == FindingKind::Violation && self.severity == Severity::Orange
    }

    /// Returns true for conformant findings.
    pub fn is_conformant(&self) -> bool {
        self.kind == FindingKind::Ok
    }
}
