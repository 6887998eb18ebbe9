//! Absence request lifecycle: create, approve, reject, list.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{Absence, AbsenceStatus, AbsenceType, Day};
use crate::rules::suggest_replacements;
use crate::store::{BROADCAST_RECIPIENT, NotificationKind, PharmacyStore};

/// Result of approving an absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalOutcome {
    /// The absence after approval.
    pub absence: Absence,
    /// Weekday of the absence.
    pub day: Day,
    /// Whether an urgent broadcast was raised because a pharmacist is
    /// absent without replacement.
    pub urgent_alert: bool,
}

/// Records a new pending absence request.
///
/// The employee is matched case-insensitively against the roster and the
/// absence is stored under the roster spelling.
pub fn create_absence(
    store: &mut PharmacyStore,
    config: &ConfigLoader,
    employee: &str,
    date: NaiveDate,
    absence_type: AbsenceType,
) -> EngineResult<Absence> {
    let name = config.find_employee(employee)?.name.clone();

    if let Some(existing) = store.absences.iter().find(|a| a.concerns(&name, date)) {
        return Err(EngineError::DuplicateAbsence {
            employee: name,
            date,
            status: existing.status,
        });
    }

    if absence_type == AbsenceType::PaidLeave {
        let balance = store.leave_balance(&name);
        if balance == 0 {
            return Err(EngineError::LeaveExhausted {
                employee: name,
                balance,
            });
        }
    }

    let absence = Absence::pending(name, date, absence_type);
    store.absences.push(absence.clone());
    store.log_action(
        "create_absence",
        json!({
            "employe": absence.employee,
            "date": absence.date.to_string(),
            "type": absence.absence_type.label(),
        }),
    );

    info!(
        employee = %absence.employee,
        date = %absence.date,
        absence_type = %absence.absence_type,
        "Absence request created"
    );
    Ok(absence)
}

/// Approves a pending absence and assigns the best available replacement.
///
/// Paid leave deducts one day from the employee's balance. The employee
/// and the replacement are notified; a pharmacist left without replacement
/// raises an urgent broadcast.
pub fn approve_absence(
    store: &mut PharmacyStore,
    config: &ConfigLoader,
    employee: &str,
    date: NaiveDate,
) -> EngineResult<ApprovalOutcome> {
    let index = pending_absence_index(store, config, employee, date)?;
    let name = store.absences[index].employee.clone();
    let absence_type = store.absences[index].absence_type;

    if absence_type == AbsenceType::PaidLeave && !store.deduct_leave(&name, 1) {
        return Err(EngineError::LeaveExhausted {
            balance: store.leave_balance(&name),
            employee: name,
        });
    }

    let day = Day::from(date.weekday());
    let snapshot = store.snapshot(config);
    let replacement = suggest_replacements(&snapshot, &name, day)
        .into_iter()
        .next()
        .map(|candidate| candidate.name);
    let absent_is_qualified = snapshot.is_qualified(&name);

    let absence = &mut store.absences[index];
    absence.status = AbsenceStatus::Approved;
    absence.replacement = replacement.clone();
    let absence = absence.clone();

    store.notify(
        &name,
        format!("Votre absence du {} ({}) a été validée.", date, absence_type),
        NotificationKind::Success,
    );

    let urgent_alert = match &replacement {
        Some(substitute) => {
            store.notify(
                substitute,
                format!("Vous remplacez {} le {} {}.", name, day, date),
                NotificationKind::Info,
            );
            false
        }
        None if absent_is_qualified => {
            store.notify(
                BROADCAST_RECIPIENT,
                format!(
                    "URGENT : aucun PDE disponible pour remplacer {} le {} {}. Contacter un remplaçant externe.",
                    name, day, date
                ),
                NotificationKind::Urgent,
            );
            warn!(employee = %name, date = %date, "Pharmacist absence approved without replacement");
            true
        }
        None => false,
    };

    store.log_action(
        "approve_absence",
        json!({
            "employe": name,
            "date": date.to_string(),
            "remplacant": replacement,
        }),
    );

    info!(
        employee = %name,
        date = %date,
        replacement = replacement.as_deref().unwrap_or("-"),
        "Absence approved"
    );
    Ok(ApprovalOutcome {
        absence,
        day,
        urgent_alert,
    })
}

/// Rejects a pending absence, recording the reason if one is given.
pub fn reject_absence(
    store: &mut PharmacyStore,
    config: &ConfigLoader,
    employee: &str,
    date: NaiveDate,
    reason: Option<&str>,
) -> EngineResult<Absence> {
    let index = pending_absence_index(store, config, employee, date)?;
    let reason = reason.map(str::trim).filter(|r| !r.is_empty());

    let absence = &mut store.absences[index];
    absence.status = AbsenceStatus::Rejected;
    absence.rejection_reason = reason.map(str::to_string);
    let absence = absence.clone();

    let mut message = format!("Votre demande d'absence du {} a été refusée.", date);
    if let Some(reason) = reason {
        message.push_str(&format!(" Motif : {}", reason));
    }
    store.notify(&absence.employee, message, NotificationKind::Warning);

    store.log_action(
        "reject_absence",
        json!({
            "employe": absence.employee,
            "date": date.to_string(),
            "motif": reason,
        }),
    );

    info!(employee = %absence.employee, date = %date, "Absence rejected");
    Ok(absence)
}

/// Lists recorded absences, optionally filtered by status.
pub fn list_absences(store: &PharmacyStore, status: Option<AbsenceStatus>) -> Vec<&Absence> {
    store
        .absences
        .iter()
        .filter(|a| status.is_none_or(|s| a.status == s))
        .collect()
}

/// Finds the absence of `employee` on `date` and checks it is still pending.
fn pending_absence_index(
    store: &PharmacyStore,
    config: &ConfigLoader,
    employee: &str,
    date: NaiveDate,
) -> EngineResult<usize> {
    let name = config
        .find_employee(employee)
        .map(|e| e.name.as_str())
        .unwrap_or(employee);

    let index = store
        .absences
        .iter()
        .position(|a| a.concerns(name, date))
        .ok_or_else(|| EngineError::AbsenceNotFound {
            employee: name.to_string(),
            date,
        })?;

    let status = store.absences[index].status;
    if status.is_terminal() {
        return Err(EngineError::InvalidAbsenceTransition {
            employee: name.to_string(),
            date,
            status,
        });
    }
    Ok(index)
}
