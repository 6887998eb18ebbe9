//! Paid-leave balance check.

use serde_json::json;

use crate::models::{Finding, Severity, Snapshot};

use super::codes;

/// Balance at or below which the paid-leave balance is flagged as low.
pub const LOW_LEAVE_BALANCE_DAYS: u32 = 3;

/// Checks the remaining paid-leave balance of every roster employee.
///
/// A balance of zero is a red `CONGES_EPUISES`, a balance up to
/// [`LOW_LEAVE_BALANCE_DAYS`] an orange `CONGES_CRITIQUES`, anything above a
/// green `CONGES_OK`.
pub fn check_leave_balance(snapshot: &Snapshot) -> Vec<Finding> {
    snapshot
        .roster
        .iter()
        .map(|employee| {
            let balance = employee.remaining_leave_days;
            let details = json!({
                "employe": employee.name,
                "solde": balance,
            });

            if balance == 0 {
                Finding::violation(
                    codes::CONGES_EPUISES,
                    format!("{} n'a plus de jours de congés disponibles", employee.name),
                    Severity::Red,
                    details,
                )
            } else if balance <= LOW_LEAVE_BALANCE_DAYS {
                Finding::violation(
                    codes::CONGES_CRITIQUES,
                    format!(
                        "{} a un solde de congés très bas : {} jour(s) restant(s)",
                        employee.name, balance
                    ),
                    Severity::Orange,
                    details,
                )
            } else {
                Finding::ok(
                    codes::CONGES_OK,
                    format!("{} : {} jour(s) de congés restants", employee.name, balance),
                    details,
                )
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::{employee, snapshot_with};

    fn finding_for_balance(balance: u32) -> Finding {
        let mut e = employee("Julie Bernard", false);
        e.remaining_leave_days = balance;
        check_leave_balance(&snapshot_with(vec![e])).remove(0)
    }

    #[test]
    fn test_zero_balance_is_red() {
        let finding = finding_for_balance(0);
        assert_eq!(finding.code, "CONGES_EPUISES");
        assert_eq!(finding.severity, Severity::Red);
        assert_eq!(finding.details["solde"], 0);
    }

    #[test]
    fn test_three_days_is_orange() {
        let finding = finding_for_balance(3);
        assert_eq!(finding.code, "CONGES_CRITIQUES");
        assert_eq!(finding.severity, Severity::Orange);
        assert_eq!(
            finding.message,
            "Julie Bernard a un solde de congés très bas : 3 jour(s) restant(s)"
        );
    }

    #[test]
    fn test_one_day_is_orange() {
        assert_eq!(finding_for_balance(1).code, "CONGES_CRITIQUES");
    }

    #[test]
    fn test_four_days_is_green() {
        let finding = finding_for_balance(4);
        assert_eq!(finding.code, "CONGES_OK");
        assert_eq!(finding.severity, Severity::Green);
        assert_eq!(finding.message, "Julie Bernard : 4 jour(s) de congés restants");
    }

    #[test]
    fn test_one_finding_per_employee() {
        let snapshot = snapshot_with(vec![
            employee("A", true),
            employee("B", false),
            employee("C", false),
        ]);
        assert_eq!(check_leave_balance(&snapshot).len(), 3);
    }
}
