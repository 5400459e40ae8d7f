//! Tests for the projection summary
//!
//! Minimum and final balances, chronological critical months, the
//! zero-balance boundary, and the support figure.

use study_cost_core_rs::{build_projection, Catalog, Projection, ScenarioParams};

/// Helper to create a Lisbon scenario whose balance goes negative in May
fn slides_negative() -> ScenarioParams {
    ScenarioParams {
        country: "Portugal".to_string(),
        city: "Lisbon".to_string(),
        rent_type: "shared".to_string(),
        has_job: true,
        weekly_hours: 15.0,
        hourly_wage: 8.0,
        initial_deposit: 5000.0,
        tuition_total: 5000.0,
        tuition_payment: "installment".to_string(),
    }
}

/// Helper to create a scenario that dips in September and then recovers
fn dips_then_recovers() -> ScenarioParams {
    ScenarioParams {
        country: "Portugal".to_string(),
        city: "Lisbon".to_string(),
        rent_type: "shared".to_string(),
        has_job: true,
        weekly_hours: 40.0,
        hourly_wage: 10.0,
        initial_deposit: 0.0,
        tuition_total: 2000.0,
        tuition_payment: "lumpSum".to_string(),
    }
}

/// Helper to create a scenario that stays comfortably solvent
fn stays_solvent() -> ScenarioParams {
    ScenarioParams {
        country: "Portugal".to_string(),
        city: "Porto".to_string(),
        rent_type: "dorm".to_string(),
        has_job: false,
        weekly_hours: 0.0,
        hourly_wage: 0.0,
        initial_deposit: 20000.0,
        tuition_total: 6000.0,
        tuition_payment: "lumpSum".to_string(),
    }
}

fn project(params: ScenarioParams) -> Projection {
    build_projection(params, Catalog::global()).unwrap()
}

// ============================================================================
// Test Group 1: Balance extremes
// ============================================================================

#[test]
fn test_min_balance_is_the_lowest_row() {
    let projection = project(dips_then_recovers());

    let lowest = projection
        .ledger
        .iter()
        .map(|row| row.balance)
        .fold(f64::INFINITY, f64::min);
    assert_eq!(projection.summary.min_balance, lowest);
    assert_eq!(projection.summary.min_balance, -868.0); // 0 + 1732 - 2600
}

#[test]
fn test_final_balance_is_the_august_row() {
    let projection = project(dips_then_recovers());

    assert_eq!(
        projection.summary.final_balance,
        projection.ledger[11].balance
    );
    // Recovers 1132 per month after the September dip
    assert_eq!(projection.summary.final_balance, 11584.0);
}

#[test]
fn test_min_and_final_coincide_when_the_slide_is_monotonic() {
    let projection = project(slides_negative());

    assert_eq!(projection.summary.min_balance, -964.8);
    assert_eq!(projection.summary.final_balance, -964.8);
}

// ============================================================================
// Test Group 2: Critical months
// ============================================================================

#[test]
fn test_critical_months_are_chronological() {
    let projection = project(slides_negative());

    assert_eq!(
        projection.summary.critical_months,
        vec!["May", "Jun", "Jul", "Aug"]
    );
}

#[test]
fn test_single_dip_flags_one_month() {
    let projection = project(dips_then_recovers());

    assert_eq!(projection.summary.critical_months, vec!["Sep"]);
}

#[test]
fn test_solvent_year_flags_nothing() {
    let projection = project(stays_solvent());

    assert!(projection.summary.critical_months.is_empty());
    assert_eq!(projection.summary.min_balance, 6800.0); // 20000 - 6600 - 11 * 600
}

#[test]
fn test_critical_rows_match_the_summary_labels() {
    let projection = project(slides_negative());

    let labels: Vec<&str> = projection
        .critical_rows()
        .map(|row| row.month.as_str())
        .collect();
    assert_eq!(labels, projection.summary.critical_months);
}

#[test]
fn test_zero_balance_is_not_critical() {
    // 600 deposit, no income, 600/month expense: September closes at
    // exactly 0.00 and every later month is negative.
    let params = ScenarioParams {
        country: "Portugal".to_string(),
        city: "Lisbon".to_string(),
        rent_type: "shared".to_string(),
        has_job: false,
        weekly_hours: 0.0,
        hourly_wage: 0.0,
        initial_deposit: 600.0,
        tuition_total: 0.0,
        tuition_payment: "installment".to_string(),
    };
    let projection = project(params);

    assert_eq!(projection.ledger[0].balance, 0.0);
    assert!(!projection.ledger[0].is_critical());
    assert_eq!(projection.summary.critical_months.len(), 11);
    assert_eq!(
        projection.summary.critical_months.first().map(String::as_str),
        Some("Oct")
    );
    assert_eq!(projection.summary.need_support, 6600.0);
}

// ============================================================================
// Test Group 3: Support figure
// ============================================================================

#[test]
fn test_need_support_covers_the_worst_dip() {
    let projection = project(dips_then_recovers());
    assert_eq!(projection.summary.need_support, 868.0);

    let projection = project(slides_negative());
    assert_eq!(projection.summary.need_support, 964.8);
}

#[test]
fn test_need_support_is_zero_when_solvent() {
    let projection = project(stays_solvent());
    assert_eq!(projection.summary.need_support, 0.0);
}

// ============================================================================
// Test Group 4: Reported monthly figures
// ============================================================================

#[test]
fn test_summary_echoes_the_monthly_figures() {
    let projection = project(slides_negative());
    let summary = &projection.summary;

    assert_eq!(summary.monthly_income, 519.6); // 15 * 4.33 * 8
    assert_eq!(summary.monthly_base_expense, 600.0); // 250 rent + 350 living
    assert_eq!(summary.monthly_tuition_share, 500.0); // 5000 / 10

    let projection = project(stays_solvent());
    let summary = &projection.summary;

    assert_eq!(summary.monthly_income, 0.0);
    assert_eq!(summary.monthly_base_expense, 600.0); // 280 rent + 320 living
    assert_eq!(summary.monthly_tuition_share, 0.0); // lump sum has no share
}
