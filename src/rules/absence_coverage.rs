//! Absence coverage check.

use serde_json::json;

use crate::models::{Finding, Severity, Snapshot};

use super::codes;

/// Checks that every recorded absence has a suitable replacement.
///
/// Every absence is inspected regardless of its status:
/// - no replacement → red `ABSENCE_NON_COUVERTE`
/// - a qualified employee replaced by an unqualified one → red `REMPLACANT_NON_QUALIFIE`
/// - otherwise → green `ABSENCE_COUVERTE`
///
/// Absent employees and replacements missing from the roster count as unqualified.
pub fn check_absence_coverage(snapshot: &Snapshot) -> Vec<Finding> {
    snapshot
        .absences
        .iter()
        .map(|absence| {
            let requires_pde = snapshot.is_qualified(&absence.employee);

            match &absence.replacement {
                None => Finding::violation(
                    codes::ABSENCE_NON_COUVERTE,
                    format!(
                        "{} absent(e) le {} ({}) — aucun remplaçant assigné",
                        absence.employee, absence.date, absence.absence_type
                    ),
                    Severity::Red,
                    json!({
                        "employe": absence.employee,
                        "date": absence.date,
                        "type_absence": absence.absence_type,
                        "statut": absence.status,
                        "pde_requis": requires_pde,
                    }),
                ),
                Some(replacement) if requires_pde && !snapshot.is_qualified(replacement) => {
                    Finding::violation(
                        codes::REMPLACANT_NON_QUALIFIE,
                        format!(
                            "Remplacement invalide : {} n'est pas PDE pour remplacer {} (PDE) le {}",
                            replacement, absence.employee, absence.date
                        ),
                        Severity::Red,
                        json!({
                            "employe_absent": absence.employee,
                            "remplacant": replacement,
                            "date": absence.date,
                        }),
                    )
                }
                Some(replacement) => Finding::ok(
                    codes::ABSENCE_COUVERTE,
                    format!(
                        "Absence de {} le {} couverte par {}",
                        absence.employee, absence.date, replacement
                    ),
                    json!({
                        "employe": absence.employee,
                        "remplacant": replacement,
                        "date": absence.date,
                    }),
                ),
            }
        })
        .collect()
}
