//! Tests for scenario validation
//!
//! Every rejection rule, the fixed check order (first failure wins), the
//! no-job hours coercion, and the resolved figures on the success path.

use study_cost_core_rs::{
    build_projection, Catalog, InvalidInput, ProjectionError, Projector, RentType, ScenarioParams,
    TuitionSchedule,
};

/// Helper to create a scenario that passes every check
fn valid_params() -> ScenarioParams {
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

/// Helper to run validation and unwrap the expected input error
fn reject(params: ScenarioParams) -> InvalidInput {
    match Projector::new(params, Catalog::global()) {
        Err(ProjectionError::Input(input)) => input,
        Err(other) => panic!("expected an input error, got {:?}", other),
        Ok(_) => panic!("expected rejection, scenario passed validation"),
    }
}

// ============================================================================
// Test Group 1: Catalog membership
// ============================================================================

#[test]
fn test_unknown_country_rejected_with_choices() {
    let mut params = valid_params();
    params.country = "Atlantis".to_string();

    match reject(params) {
        InvalidInput::UnknownCountry { given, available } => {
            assert_eq!(given, "Atlantis");
            assert_eq!(available.len(), 18);
            assert_eq!(available.first().map(String::as_str), Some("Australia"));
            assert!(available.contains(&"Portugal".to_string()));
        }
        other => panic!("expected UnknownCountry, got {:?}", other),
    }
}

#[test]
fn test_unknown_city_rejected_with_choices() {
    let mut params = valid_params();
    params.city = "Faro".to_string();

    match reject(params) {
        InvalidInput::UnknownCity {
            given,
            country,
            available,
        } => {
            assert_eq!(given, "Faro");
            assert_eq!(country, "Portugal");
            assert_eq!(available, vec!["Aveiro", "Coimbra", "Lisbon", "Porto"]);
        }
        other => panic!("expected UnknownCity, got {:?}", other),
    }
}

#[test]
fn test_country_and_city_matching_is_case_sensitive() {
    let mut params = valid_params();
    params.country = "portugal".to_string();
    assert!(matches!(reject(params), InvalidInput::UnknownCountry { .. }));

    let mut params = valid_params();
    params.city = "lisbon".to_string();
    assert!(matches!(reject(params), InvalidInput::UnknownCity { .. }));
}

#[test]
fn test_unknown_country_message_lists_support() {
    let mut params = valid_params();
    params.country = "Atlantis".to_string();

    let message = reject(params).to_string();
    assert!(message.starts_with("Unknown country 'Atlantis'"));
    assert!(message.contains("supported countries"));
    assert!(message.contains("Portugal"));
}

// ============================================================================
// Test Group 2: Closed tag sets
// ============================================================================

#[test]
fn test_unknown_rent_type_rejected() {
    let mut params = valid_params();
    params.rent_type = "penthouse".to_string();

    let err = reject(params);
    assert!(matches!(
        err,
        InvalidInput::UnknownRentType { ref given } if given == "penthouse"
    ));
    assert_eq!(
        err.to_string(),
        "Unknown rent type 'penthouse'; valid types: single, shared, dorm"
    );
}

#[test]
fn test_rent_type_tags_are_lowercase_only() {
    for bad in ["Shared", "SHARED", "Single", "Dorm", ""] {
        let mut params = valid_params();
        params.rent_type = bad.to_string();
        assert!(
            matches!(reject(params), InvalidInput::UnknownRentType { .. }),
            "'{}' should be rejected",
            bad
        );
    }
}

#[test]
fn test_unknown_tuition_payment_rejected() {
    let mut params = valid_params();
    params.tuition_payment = "monthly".to_string();

    let err = reject(params);
    assert!(matches!(
        err,
        InvalidInput::UnknownTuitionPayment { ref given } if given == "monthly"
    ));
    assert_eq!(
        err.to_string(),
        "Unknown tuition payment mode 'monthly'; valid modes: lumpSum, installment"
    );
}

#[test]
fn test_tuition_payment_spelling_is_exact() {
    for bad in ["lumpsum", "LumpSum", "lump_sum", "Installment", ""] {
        let mut params = valid_params();
        params.tuition_payment = bad.to_string();
        assert!(
            matches!(reject(params), InvalidInput::UnknownTuitionPayment { .. }),
            "'{}' should be rejected",
            bad
        );
    }
}

// ============================================================================
// Test Group 3: Numeric bounds
// ============================================================================

#[test]
fn test_deposit_must_be_finite_and_non_negative() {
    for bad in [-0.01, -5000.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let mut params = valid_params();
        params.initial_deposit = bad;
        assert!(
            matches!(reject(params), InvalidInput::InvalidDeposit { .. }),
            "{} should be rejected",
            bad
        );
    }

    let mut params = valid_params();
    params.initial_deposit = 0.0; // penniless is allowed
    assert!(Projector::new(params, Catalog::global()).is_ok());
}

#[test]
fn test_tuition_total_must_be_finite_and_non_negative() {
    for bad in [-1.0, f64::NAN, f64::INFINITY] {
        let mut params = valid_params();
        params.tuition_total = bad;
        assert!(
            matches!(reject(params), InvalidInput::InvalidTuitionTotal { .. }),
            "{} should be rejected",
            bad
        );
    }

    let mut params = valid_params();
    params.tuition_total = 0.0; // full scholarship
    assert!(Projector::new(params, Catalog::global()).is_ok());
}

#[test]
fn test_weekly_hours_range() {
    for bad in [-0.5, 40.5, 168.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let mut params = valid_params();
        params.weekly_hours = bad;
        assert!(
            matches!(reject(params), InvalidInput::WeeklyHoursOutOfRange { .. }),
            "{} should be rejected",
            bad
        );
    }
}

#[test]
fn test_weekly_hours_bounds_are_inclusive() {
    let mut params = valid_params();
    params.weekly_hours = 0.0;
    let projector = Projector::new(params, Catalog::global()).unwrap();
    assert_eq!(projector.scenario().monthly_income, 0.0);

    let mut params = valid_params();
    params.weekly_hours = 40.0;
    let projector = Projector::new(params, Catalog::global()).unwrap();
    assert_eq!(projector.scenario().monthly_income, 1385.6); // 40 * 4.33 * 8
}

#[test]
fn test_hourly_wage_must_be_finite_and_non_negative() {
    for bad in [-1.0, f64::NAN, f64::NEG_INFINITY] {
        let mut params = valid_params();
        params.hourly_wage = bad;
        assert!(
            matches!(reject(params), InvalidInput::InvalidHourlyWage { .. }),
            "{} should be rejected",
            bad
        );
    }

    let mut params = valid_params();
    params.hourly_wage = 0.0; // unpaid internship
    let projector = Projector::new(params, Catalog::global()).unwrap();
    assert_eq!(projector.scenario().monthly_income, 0.0);
}

#[test]
fn test_bound_violation_messages_carry_the_value() {
    let mut params = valid_params();
    params.initial_deposit = -0.01;
    assert_eq!(
        reject(params).to_string(),
        "Initial deposit must be a finite value >= 0, got -0.01"
    );

    let mut params = valid_params();
    params.weekly_hours = f64::NAN;
    assert_eq!(
        reject(params).to_string(),
        "Weekly hours must be between 0 and 40, got NaN"
    );
}

// ============================================================================
// Test Group 4: Check order (first failure wins)
// ============================================================================

#[test]
fn test_country_check_runs_before_rent_type() {
    let mut params = valid_params();
    params.country = "Atlantis".to_string();
    params.rent_type = "penthouse".to_string();
    assert!(matches!(reject(params), InvalidInput::UnknownCountry { .. }));
}

#[test]
fn test_city_check_runs_before_deposit() {
    let mut params = valid_params();
    params.city = "Faro".to_string();
    params.initial_deposit = -5.0;
    assert!(matches!(reject(params), InvalidInput::UnknownCity { .. }));
}

#[test]
fn test_rent_type_check_runs_before_hours() {
    let mut params = valid_params();
    params.rent_type = "penthouse".to_string();
    params.weekly_hours = 99.0;
    assert!(matches!(reject(params), InvalidInput::UnknownRentType { .. }));
}

#[test]
fn test_deposit_check_runs_before_tuition() {
    let mut params = valid_params();
    params.initial_deposit = -1.0;
    params.tuition_total = -1.0;
    assert!(matches!(reject(params), InvalidInput::InvalidDeposit { .. }));
}

#[test]
fn test_tuition_check_runs_before_hours() {
    let mut params = valid_params();
    params.tuition_total = -1.0;
    params.weekly_hours = 99.0;
    assert!(matches!(
        reject(params),
        InvalidInput::InvalidTuitionTotal { .. }
    ));
}

#[test]
fn test_hours_check_runs_before_wage() {
    let mut params = valid_params();
    params.weekly_hours = 50.0;
    params.hourly_wage = -1.0;
    assert!(matches!(
        reject(params),
        InvalidInput::WeeklyHoursOutOfRange { .. }
    ));
}

#[test]
fn test_wage_check_runs_before_payment_mode() {
    let mut params = valid_params();
    params.hourly_wage = f64::NAN;
    params.tuition_payment = "weekly".to_string();
    assert!(matches!(
        reject(params),
        InvalidInput::InvalidHourlyWage { .. }
    ));
}

// ============================================================================
// Test Group 5: No-job coercion
// ============================================================================

#[test]
fn test_hours_are_bounds_checked_even_without_a_job() {
    let mut params = valid_params();
    params.has_job = false;
    params.weekly_hours = 50.0;
    assert!(matches!(
        reject(params),
        InvalidInput::WeeklyHoursOutOfRange { .. }
    ));
}

#[test]
fn test_in_range_hours_are_zeroed_without_a_job() {
    let mut params = valid_params();
    params.has_job = false;
    params.weekly_hours = 12.0;
    params.hourly_wage = 20.0;

    let projector = Projector::new(params, Catalog::global()).unwrap();
    let scenario = projector.scenario();
    assert_eq!(scenario.weekly_hours, 0.0);
    assert_eq!(scenario.monthly_income, 0.0);
}

// ============================================================================
// Test Group 6: Success-path resolution
// ============================================================================

#[test]
fn test_valid_scenario_resolves_catalog_figures() {
    let projector = Projector::new(valid_params(), Catalog::global()).unwrap();
    let scenario = projector.scenario();

    assert_eq!(scenario.country, "Portugal");
    assert_eq!(scenario.city, "Lisbon");
    assert_eq!(scenario.rent_type, RentType::Shared);
    assert_eq!(scenario.tuition_schedule, TuitionSchedule::Installment);
    assert_eq!(scenario.monthly_rent, 250.0);
    assert_eq!(scenario.monthly_living_cost, 350.0);
    assert_eq!(scenario.monthly_base_expense(), 600.0);
    assert_eq!(scenario.currency, "EUR");
    assert!(!scenario.sources.is_empty());
}

#[test]
fn test_valid_scenario_derives_monthly_figures() {
    let projector = Projector::new(valid_params(), Catalog::global()).unwrap();
    let scenario = projector.scenario();

    assert_eq!(scenario.monthly_income, 519.6); // 15 * 4.33 * 8
    assert_eq!(scenario.monthly_tuition_share, 500.0); // 5000 / 10
}

#[test]
fn test_lump_sum_has_no_monthly_share() {
    let mut params = valid_params();
    params.tuition_payment = "lumpSum".to_string();

    let projector = Projector::new(params, Catalog::global()).unwrap();
    assert_eq!(projector.scenario().monthly_tuition_share, 0.0);
}

#[test]
fn test_build_projection_propagates_rejection() {
    let mut params = valid_params();
    params.country = "Narnia".to_string();

    let err = build_projection(params, Catalog::global()).unwrap_err();
    assert!(matches!(
        err,
        ProjectionError::Input(InvalidInput::UnknownCountry { .. })
    ));
}
