//! Compliance report model.
//!
//! This module contains the [`ComplianceReport`] type that aggregates every
//! finding of one evaluation pass into severity buckets and a score.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Finding;

/// Counts per category of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Total number of findings.
    pub checks: usize,
    /// Number of red violations.
    pub critical: usize,
    /// Number of orange violations.
    pub minor: usize,
    /// Number of conformant findings.
    pub conformant: usize,
}

/// The complete result of one compliance evaluation.
///
/// Derived data: a report is rebuilt on every evaluation and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Unique identifier of this evaluation.
    pub report_id: Uuid,
    /// Name of the evaluated pharmacy.
    pub pharmacy: String,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Conformity score, 0 to 100.
    pub score: u8,
    /// Counts per category.
    pub totals: ReportTotals,
    /// Red violations, in evaluation order.
    pub critical_violations: Vec<Finding>,
    /// Orange violations, in evaluation order.
    pub minor_violations: Vec<Finding>,
    /// Conformant findings, in evaluation order.
    pub conformant_findings: Vec<Finding>,
    /// Every finding, in evaluation order.
    pub all_findings: Vec<Finding>,
}

impl ComplianceReport {
    /// Partitions `findings` and computes the score.
    pub fn from_findings(pharmacy: impl Into<String>, findings: Vec<Finding>) -> Self {
        let critical_violations: Vec<Finding> =
            findings.iter().filter(|f| f.is_critical()).cloned().collect();
        let minor_violations: Vec<Finding> =
            findings.iter().filter(|f| f.is_minor()).cloned().collect();
        let conformant_findings: Vec<Finding> =
            findings.iter().filter(|f| f.is_conformant()).cloned().collect();

        let totals = ReportTotals {
            checks: findings.len(),
            critical: critical_violations.len(),
            minor: minor_violations.len(),
            conformant: conformant_findings.len(),
        };

        Self {
            report_id: Uuid::new_v4(),
            pharmacy: pharmacy.into(),
            generated_at: Utc::now(),
            score: Self::score_for(totals.conformant, totals.checks),
            totals,
            critical_violations,
            minor_violations,
            conformant_findings,
            all_findings: findings,
        }
    }

    /// Computes the conformity score `round(100 * conformant / total)`.
    ///
    /// An empty evaluation is a vacuous pass and scores 100. Exact halves
    /// round to the nearest even integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use pharmacy_compliance::models::ComplianceReport;
    ///
    /// assert_eq!(ComplianceReport::score_for(0, 0), 100);
    /// assert_eq!(ComplianceReport::score_for(2, 3), 67);
    /// assert_eq!(ComplianceReport::score_for(1, 8), 12);
    /// assert_eq!(ComplianceReport::score_for(7, 8), 88);
    /// ```
    pub fn score_for(conformant: usize, total: usize) -> u8 {
        if total == 0 {
            return 100;
        }

        let ratio = Decimal::from(conformant as u64 * 100) / Decimal::from(total as u64);
        ratio
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            .to_u8()
            .unwrap_or(100)
    }

    /// Returns true when no violation of any severity was found.
    pub fn is_fully_compliant(&self) -> bool {
        self.totals.critical == 0 && self.totals.minor == 0
    }
}
