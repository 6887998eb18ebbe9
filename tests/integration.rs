//! End-to-end tests for the pharmacy compliance engine.
//!
//! This test suite evaluates the Pharmacie des Lilas seed data and drives
//! the workflows through the HTTP API:
//! - Seed report totals, score and violation order
//! - Plain-text summary
//! - Absence approval and its effect on the report
//! - Schedule generation and its effect on the report
//! - Store persistence across restarts, and failed saves
//! - Notification read state
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use pharmacy_compliance::api::{AppState, create_router};
use pharmacy_compliance::config::ConfigLoader;
use pharmacy_compliance::models::{AbsenceStatus, ComplianceReport};
use pharmacy_compliance::rules::{codes, evaluate_all, render_summary};
use pharmacy_compliance::store::PharmacyStore;

// =============================================================================
// Test Helpers
// =============================================================================

const CONFIG_DIR: &str = "./config/pharmacie-des-lilas";

fn load_config() -> ConfigLoader {
    ConfigLoader::load(CONFIG_DIR).expect("Failed to load config")
}

fn create_test_state() -> AppState {
    let config = load_config();
    let store = PharmacyStore::from_seed(config.config());
    AppState::new(config, store)
}

fn codes_of(findings: &[pharmacy_compliance::models::Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.code.as_str()).collect()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn current_report(state: &AppState) -> ComplianceReport {
    let (status, body) = get(create_router(state.clone()), "/compliance").await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_value(body).unwrap()
}

// =============================================================================
// Seed report
// =============================================================================

#[test]
fn test_seed_report_totals_and_score() {
    let config = load_config();
    let report = evaluate_all(&config.snapshot());

    // 12 shifts + 6 employees (hours) + 2 absences + 6 employees (leave)
    // + 1 availability breach + 1 coverage rate
    assert_eq!(report.totals.checks, 28);
    assert_eq!(report.totals.critical, 1);
    assert_eq!(report.totals.minor, 5);
    assert_eq!(report.totals.conformant, 22);
    // 22 / 28 = 78.57 %
    assert_eq!(report.score, 79);
}

#[test]
fn test_seed_report_violations_in_evaluation_order() {
    let config = load_config();
    let report = evaluate_all(&config.snapshot());

    assert_eq!(
        codes_of(&report.critical_violations),
        vec![codes::ABSENCE_NON_COUVERTE]
    );
    assert_eq!(
        codes_of(&report.minor_violations),
        vec![
            codes::SOUS_PLANIFIE,
            codes::SOUS_PLANIFIE,
            codes::SOUS_PLANIFIE,
            codes::HORS_DISPONIBILITE,
            codes::COUVERTURE_INSUFFISANTE,
        ]
    );

    let under_scheduled: Vec<&str> = report
        .minor_violations
        .iter()
        .filter(|f| f.code == codes::SOUS_PLANIFIE)
        .map(|f| f.details["employe"].as_str().unwrap())
        .collect();
    assert_eq!(
        under_scheduled,
        vec!["Sophie Martin", "Thomas Dupont", "Pierre Moreau"]
    );

    let availability = &report.minor_violations[3];
    assert_eq!(availability.details["employe"], "Karim Benali");
    assert_eq!(availability.details["jour"], "lundi");
}

#[test]
fn test_every_seed_shift_has_a_pharmacist() {
    let config = load_config();
    let report = evaluate_all(&config.snapshot());

    let pde_findings: Vec<_> = report
        .all_findings
        .iter()
        .filter(|f| f.code == codes::PDE_PRESENT || f.code == codes::PDE_ABSENT)
        .collect();
    assert_eq!(pde_findings.len(), 12);
    assert!(pde_findings.iter().all(|f| f.code == codes::PDE_PRESENT));
    assert_eq!(
        report.all_findings[0].message,
        "PDE présent le lundi — matin : Sophie Martin"
    );
}

#[test]
fn test_seed_summary() {
    let config = load_config();
    let summary = render_summary(&evaluate_all(&config.snapshot()));

    assert!(summary.contains("Score de conformité : 79%"));
    assert!(summary.contains("Vérifications : 28 | ✅ 22 OK | 🔴 1 critiques | 🟠 5 mineures"));
    assert!(summary.contains("  [ABSENCE_NON_COUVERTE] Karim Benali absent(e) le 2025-03-10"));
    assert!(summary.contains(
        "  [COUVERTURE_INSUFFISANTE] Taux de couverture insuffisant : 94% (recommandé : ≥ 95%)"
    ));
}

// =============================================================================
// Workflows through the API
// =============================================================================

#[tokio::test]
async fn test_approving_pending_absence_clears_critical_violation() {
    let state = create_test_state();

    let (status, body) = post(
        create_router(state.clone()),
        "/absences/approve",
        json!({"employee": "Karim Benali", "date": "2025-03-10"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["absence"]["replacement"], "Thomas Dupont");

    let report = current_report(&state).await;
    assert_eq!(report.totals.critical, 0);
    assert_eq!(report.totals.conformant, 23);
    // 23 / 28 = 82.14 %
    assert_eq!(report.score, 82);

    let leave = report
        .all_findings
        .iter()
        .find(|f| f.code == codes::CONGES_OK && f.details["employe"] == "Karim Benali")
        .unwrap();
    assert_eq!(leave.details["solde"], 9);
}

#[tokio::test]
async fn test_generated_schedule_removes_availability_breach() {
    let state = create_test_state();

    let (status, body) = post(
        create_router(state.clone()),
        "/schedule/generate",
        json!({"replace_existing": true}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["applied"], true);
    assert!(body.get("uncovered").is_none());

    let report = current_report(&state).await;
    assert!(report.all_findings.iter().all(|f| f.code != codes::HORS_DISPONIBILITE));
    assert!(report.all_findings.iter().all(|f| f.code != codes::PDE_ABSENT));
    // 12 shifts + 6 hours + 2 absences + 6 leave + 1 coverage
    assert_eq!(report.totals.checks, 27);
    // Three pharmacists and Marie Leroy stay under 80 % of their contract.
    assert_eq!(
        report
            .minor_violations
            .iter()
            .filter(|f| f.code == codes::SOUS_PLANIFIE)
            .count(),
        4
    );
}

#[tokio::test]
async fn test_new_absence_appears_in_report() {
    let state = create_test_state();

    let (status, body) = post(
        create_router(state.clone()),
        "/absences",
        json!({"employee": "Sophie Martin", "date": "2025-03-12", "type": "Maladie"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");

    let report = current_report(&state).await;
    let uncovered: Vec<_> = report
        .critical_violations
        .iter()
        .filter(|f| f.code == codes::ABSENCE_NON_COUVERTE)
        .collect();
    assert_eq!(uncovered.len(), 2);
    assert_eq!(uncovered[1].details["pde_requis"], true);
}

#[tokio::test]
async fn test_pharmacist_absence_without_replacement_broadcasts() {
    let state = create_test_state();

    post(
        create_router(state.clone()),
        "/absences",
        json!({"employee": "Sophie Martin", "date": "2025-03-12", "type": "Maladie"}),
    )
    .await;
    let (status, body) = post(
        create_router(state.clone()),
        "/absences/approve",
        json!({"employee": "Sophie Martin", "date": "2025-03-12"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["urgent_alert"], true);
    assert!(body["absence"]["replacement"].is_null());

    let (_, body) = get(
        create_router(state.clone()),
        "/notifications?employee=Karim%20Benali",
    )
    .await;
    assert_eq!(body["notifications"][0]["kind"], "urgent");
    assert_eq!(body["notifications"][0]["recipient"], "TOUS");
}

#[tokio::test]
async fn test_paid_leave_refused_when_balance_is_empty() {
    let config = load_config();
    let mut store = PharmacyStore::from_seed(config.config());
    assert!(store.deduct_leave("Julie Bernard", 5));
    let state = AppState::new(config, store);

    let (status, body) = post(
        create_router(state),
        "/absences",
        json!({"employee": "Julie Bernard", "date": "2025-03-14", "type": "Congé payé"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "LEAVE_EXHAUSTED");
}

#[tokio::test]
async fn test_unknown_employee_returns_404() {
    let (status, body) = post(
        create_router(create_test_state()),
        "/absences",
        json!({"employee": "Jean Valjean", "date": "2025-03-14", "type": "Autre"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn test_unknown_absence_type_returns_400() {
    let (status, body) = post(
        create_router(create_test_state()),
        "/absences",
        json!({"employee": "Marie Leroy", "date": "2025-03-14", "type": "Vacances"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

// =============================================================================
// Persistence
// =============================================================================

#[tokio::test]
async fn test_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let config = load_config();
    let store = PharmacyStore::load(&path, config.config()).unwrap();
    let state = AppState::new(config, store).with_store_path(&path);

    let (status, _) = post(
        create_router(state),
        "/absences/reject",
        json!({"employee": "Karim Benali", "date": "2025-03-10", "reason": "Inventaire"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let config = load_config();
    let reloaded = PharmacyStore::load(&path, config.config()).unwrap();
    let karim = reloaded
        .absences()
        .iter()
        .find(|a| a.employee == "Karim Benali")
        .unwrap();
    assert_eq!(karim.status, AbsenceStatus::Rejected);
    assert_eq!(karim.rejection_reason.as_deref(), Some("Inventaire"));
    assert_eq!(reloaded.history().len(), 1);
    assert_eq!(reloaded.notifications_for("Karim Benali").len(), 1);
}

#[tokio::test]
async fn test_failed_request_does_not_write_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let config = load_config();
    let store = PharmacyStore::from_seed(config.config());
    let state = AppState::new(config, store).with_store_path(&path);

    let (status, _) = post(
        create_router(state),
        "/absences/approve",
        json!({"employee": "Marie Leroy", "date": "2025-03-05"}),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(!path.exists());
}

#[tokio::test]
async fn test_failed_save_leaves_state_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("store.json");

    let config = load_config();
    let store = PharmacyStore::from_seed(config.config());
    let state = AppState::new(config, store).with_store_path(&path);
    let request = json!({"employee": "Marie Leroy", "date": "2025-03-06", "type": "Formation"});

    let (status, body) = post(create_router(state.clone()), "/absences", request.clone()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "STORE_ERROR");
    {
        let store = state.store().read().await;
        assert_eq!(store.absences().len(), 2);
        assert!(store.history().is_empty());
    }

    // Retrying hits the same save failure, not a duplicate of the lost write.
    let (status, body) = post(create_router(state.clone()), "/absences", request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "STORE_ERROR");
}

#[tokio::test]
async fn test_failed_save_keeps_leave_balance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("store.json");

    let config = load_config();
    let store = PharmacyStore::from_seed(config.config());
    let state = AppState::new(config, store).with_store_path(&path);

    let (status, _) = post(
        create_router(state.clone()),
        "/absences/approve",
        json!({"employee": "Karim Benali", "date": "2025-03-10"}),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let store = state.store().read().await;
    assert_eq!(store.leave_balance("Karim Benali"), 10);
    assert!(store.notifications_for("Karim Benali").is_empty());
    let karim = store
        .absences()
        .iter()
        .find(|a| a.employee == "Karim Benali")
        .unwrap();
    assert_eq!(karim.status, AbsenceStatus::Pending);
    assert!(karim.replacement.is_none());
}

// =============================================================================
// Notifications
// =============================================================================

#[tokio::test]
async fn test_marking_notifications_read_clears_unread_count() {
    let state = create_test_state();

    post(
        create_router(state.clone()),
        "/absences/approve",
        json!({"employee": "Karim Benali", "date": "2025-03-10"}),
    )
    .await;

    let (_, body) = get(
        create_router(state.clone()),
        "/notifications?employee=Karim%20Benali",
    )
    .await;
    assert_eq!(body["unread"], 1);

    let (status, body) = post(
        create_router(state.clone()),
        "/notifications/read",
        json!({"employee": "Karim Benali"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["marked"], 1);
    assert_eq!(body["unread"], 0);

    let (_, body) = get(
        create_router(state.clone()),
        "/notifications?employee=Karim%20Benali",
    )
    .await;
    assert_eq!(body["unread"], 0);
    assert_eq!(body["notifications"][0]["read"], true);

    // The replacement's notification is untouched.
    let (_, body) = get(
        create_router(state),
        "/notifications?employee=Thomas%20Dupont",
    )
    .await;
    assert_eq!(body["unread"], 1);
}
