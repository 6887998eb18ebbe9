//! Rule evaluation for the pharmacy compliance engine.
//!
//! This module contains the six rule checks (PDE presence, weekly hours,
//! absence coverage, leave balance, declared availability and coverage
//! rate), the aggregator that folds their findings into a report, the
//! plain-text summary renderer, and the replacement ranker used when an
//! absence is approved.
//!
//! Every function here is pure: it borrows a [`Snapshot`](crate::models::Snapshot)
//! and never mutates or caches anything.

pub mod codes;

mod absence_coverage;
mod aggregator;
mod availability;
mod coverage_rate;
mod leave_balance;
mod pde_presence;
mod replacement;
mod summary;
mod weekly_hours;

pub use absence_coverage::check_absence_coverage;
pub use aggregator::{RULE_CHECKS, RuleCheck, evaluate_all, run_all_checks};
pub use availability::check_availability;
pub use coverage_rate::{
    CRITICAL_COVERAGE_THRESHOLD, RECOMMENDED_COVERAGE_THRESHOLD, check_coverage_rate,
};
pub use leave_balance::{LOW_LEAVE_BALANCE_DAYS, check_leave_balance};
pub use pde_presence::check_pde_presence;
pub use replacement::{
    LEAVE_RESERVE_BONUS, LEAVE_RESERVE_DAYS, QUALIFIED_BONUS, ReplacementCandidate,
    WIDE_AVAILABILITY_BONUS, WIDE_AVAILABILITY_DAYS, suggest_replacements,
};
pub use summary::render_summary;
pub use weekly_hours::{LEGAL_WEEKLY_HOURS, UNDER_SCHEDULED_RATIO, check_weekly_hours};
