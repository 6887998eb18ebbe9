//! Stable finding codes.
//!
//! These strings are an external contract: the dashboard, the PDF export and
//! the conversational agent all match on them.

/// No qualified pharmacist on a shift.
pub const PDE_ABSENT: &str = "PDE_ABSENT";
/// At least one qualified pharmacist on a shift.
pub const PDE_PRESENT: &str = "PDE_PRESENT";

/// Planned weekly hours above the legal maximum.
pub const DEPASSEMENT_HEURES: &str = "DEPASSEMENT_HEURES";
/// Planned weekly hours well below the contract.
pub const SOUS_PLANIFIE: &str = "SOUS_PLANIFIE";
/// Planned weekly hours within bounds.
pub const HEURES_OK: &str = "HEURES_OK";

/// Absence without a replacement.
pub const ABSENCE_NON_COUVERTE: &str = "ABSENCE_NON_COUVERTE";
/// Qualified employee replaced by an unqualified one.
pub const REMPLACANT_NON_QUALIFIE: &str = "REMPLACANT_NON_QUALIFIE";
/// Absence covered by a suitable replacement.
pub const ABSENCE_COUVERTE: &str = "ABSENCE_COUVERTE";

/// No paid-leave day left.
pub const CONGES_EPUISES: &str = "CONGES_EPUISES";
/// Paid-leave balance running low.
pub const CONGES_CRITIQUES: &str = "CONGES_CRITIQUES";
/// Paid-leave balance healthy.
pub const CONGES_OK: &str = "CONGES_OK";

/// Employee scheduled on a day outside declared availability.
pub const HORS_DISPONIBILITE: &str = "HORS_DISPONIBILITE";

/// Coverage rate below the critical threshold.
pub const COUVERTURE_CRITIQUE: &str = "COUVERTURE_CRITIQUE";
/// Coverage rate below the recommended threshold.
pub const COUVERTURE_INSUFFISANTE: &str = "COUVERTURE_INSUFFISANTE";
/// Coverage rate satisfactory.
pub const COUVERTURE_OK: &str = "COUVERTURE_OK";
