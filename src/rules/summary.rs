//! Plain-text report summary.
//!
//! The summary is injected into the assistant's prompt context and printed
//! by the CLI: a header block, then the critical violations, then the minor
//! ones.

use crate::models::{ComplianceReport, Finding};

/// Renders a report as plain text.
///
/// Each violation block is omitted when empty; each violation is listed as
/// `  [CODE] message`.
pub fn render_summary(report: &ComplianceReport) -> String {
    let totals = &report.totals;
    let mut lines = vec![
        format!("=== RAPPORT DE CONFORMITÉ RH — {} ===", report.pharmacy),
        format!("Date : {}", report.generated_at.format("%d/%m/%Y %H:%M")),
        format!("Score de conformité : {}%", report.score),
        format!(
            "Vérifications : {} | ✅ {} OK | 🔴 {} critiques | 🟠 {} mineures",
            totals.checks, totals.conformant, totals.critical, totals.minor
        ),
        String::new(),
    ];

    push_block(&mut lines, "🔴 VIOLATIONS CRITIQUES :", &report.critical_violations);
    push_block(&mut lines, "🟠 VIOLATIONS MINEURES :", &report.minor_violations);

    lines.join("\n")
}

fn push_block(lines: &mut Vec<String>, title: &str, findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }
    lines.push(title.to_string());
    lines.extend(findings.iter().map(|f| format!("  [{}] {}", f.code, f.message)));
    lines.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use serde_json::json;

    #[test]
    fn test_critical_block_precedes_minor_block() {
        let report = ComplianceReport::from_findings(
            "Pharmacie des Lilas",
            vec![
                Finding::violation("SOUS_PLANIFIE", "minor one", Severity::Orange, json!({})),
                Finding::violation("PDE_ABSENT", "critical one", Severity::Red, json!({})),
                Finding::ok("CONGES_OK", "fine", json!({})),
            ],
        );

        let summary = render_summary(&report);

        assert!(summary.starts_with("=== RAPPORT DE CONFORMITÉ RH — Pharmacie des Lilas ==="));
        assert!(summary.contains("Score de conformité : 33%"));
        assert!(summary.contains("Vérifications : 3 | ✅ 1 OK | 🔴 1 critiques | 🟠 1 mineures"));
        let critical = summary.find("  [PDE_ABSENT] critical one").unwrap();
        let minor = summary.find("  [SOUS_PLANIFIE] minor one").unwrap();
        assert!(summary.find("🔴 VIOLATIONS CRITIQUES :").unwrap() < critical);
        assert!(critical < minor);
        assert!(!summary.contains("fine"));
    }

    #[test]
    fn test_empty_blocks_are_omitted() {
        let report = ComplianceReport::from_findings(
            "Pharmacie des Lilas",
            vec![Finding::ok("COUVERTURE_OK", "good", json!({}))],
        );

        let summary = render_summary(&report);

        assert!(!summary.contains("VIOLATIONS CRITIQUES"));
        assert!(!summary.contains("VIOLATIONS MINEURES"));
        assert_eq!(summary.lines().count(), 4);
    }
}
