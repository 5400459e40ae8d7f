//! Projection Engine
//!
//! Turns a validated scenario into a 12-month cash-flow ledger plus
//! summary:
//! - Input validation (field by field, first failure wins)
//! - Catalog resolution (country, city, housing type -> cost entry)
//! - Derived monthly figures (income, base expense, tuition share)
//! - Ledger fold (running balance over stored, rounded values)
//! - Summary scan (min balance, critical months, support needed)
//!
//! # Algorithm
//!
//! ```text
//! For each month i in 0..12 (Sep..Aug):
//! 1. income[i]  = monthly_income (constant)
//! 2. tuition(i) = share for i < 10 under installments,
//!                 full bill at i == 0 under lump sum, else 0
//! 3. expense[i] = round2(rent + living + tuition(i))
//! 4. balance[i] = round2(balance[i-1] + income[i] - expense[i])
//!                 (balance[-1] is the initial deposit)
//! Then one scan over the rows yields min balance, critical months,
//! final balance, and the support amount.
//! ```
//!
//! # Example
//!
//! ```rust
//! use study_cost_core_rs::{build_projection, Catalog, ScenarioParams};
//!
//! let params = ScenarioParams {
//!     country: "Portugal".to_string(),
//!     city: "Lisbon".to_string(),
//!     rent_type: "shared".to_string(),
//!     has_job: true,
//!     weekly_hours: 15.0,
//!     hourly_wage: 8.0,
//!     initial_deposit: 5000.0,
//!     tuition_total: 5000.0,
//!     tuition_payment: "installment".to_string(),
//! };
//!
//! let projection = build_projection(params, Catalog::global()).unwrap();
//! assert_eq!(projection.ledger.len(), 12);
//! assert_eq!(projection.summary.monthly_income, 519.60);
//! assert_eq!(projection.ledger[0].balance, 4419.60);
//! ```

use thiserror::Error;

use crate::catalog::{CostEntry, CostSource};
use crate::models::{
    LedgerRow, Projection, ProjectionSummary, RentType, ResolvedScenario, ScenarioParams,
    TuitionSchedule, ACADEMIC_MONTHS,
};

// ============================================================================
// Constants
// ============================================================================

/// Working weeks per month used for income estimation (52 / 12)
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Installments cover the first ten of the twelve months (Sep through Jun)
pub const TUITION_INSTALLMENT_MONTHS: usize = 10;

/// Legal part-time cap for student work, hours per week
pub const MAX_WEEKLY_HOURS: f64 = 40.0;

/// Round to two decimals, half away from zero
///
/// Every amount the engine stores has passed through this; the ledger
/// fold reads the rounded values back, so replaying rows reproduces the
/// balances exactly.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Errors
// ============================================================================

/// Rejected caller input
///
/// One variant per validation rule; messages name the field, the given
/// value, and where a closed set exists, the valid choices.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    /// Country is not in the catalog
    #[error("Unknown country '{given}'; supported countries: {}", .available.join(", "))]
    UnknownCountry {
        given: String,
        available: Vec<String>,
    },

    /// City is not listed for the (known) country
    #[error("Unknown city '{given}' in {country}; supported cities: {}", .available.join(", "))]
    UnknownCity {
        given: String,
        country: String,
        available: Vec<String>,
    },

    /// Housing type tag is not one of the known tags
    #[error("Unknown rent type '{given}'; valid types: single, shared, dorm")]
    UnknownRentType { given: String },

    /// Deposit must be a finite amount, zero or more
    #[error("Initial deposit must be a finite value >= 0, got {given}")]
    InvalidDeposit { given: f64 },

    /// Tuition must be a finite amount, zero or more
    #[error("Tuition total must be a finite value >= 0, got {given}")]
    InvalidTuitionTotal { given: f64 },

    /// Weekly hours outside the legal part-time range
    #[error("Weekly hours must be between 0 and 40, got {given}")]
    WeeklyHoursOutOfRange { given: f64 },

    /// Wage must be a finite amount, zero or more
    #[error("Hourly wage must be a finite value >= 0, got {given}")]
    InvalidHourlyWage { given: f64 },

    /// Payment mode tag is not one of the known tags
    #[error("Unknown tuition payment mode '{given}'; valid modes: lumpSum, installment")]
    UnknownTuitionPayment { given: String },
}

/// Internal computation failure
///
/// Raised for problems the caller cannot fix by editing the scenario:
/// a catalog entry with unusable figures, or arithmetic that left the
/// finite range while building the ledger.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// The resolved cost entry carries an unusable amount
    #[error("Cost entry for {city}, {country} is unusable: {detail}")]
    MalformedEntry {
        country: String,
        city: String,
        detail: String,
    },

    /// An amount left the finite range during computation
    #[error("Non-finite result while computing {what}")]
    NonFinite { what: String },
}

/// Any failure a projection call can produce
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// The scenario was rejected by validation
    #[error(transparent)]
    Input(#[from] InvalidInput),

    /// The computation itself failed
    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

// ============================================================================
// Projector
// ============================================================================

/// Builds 12-month projections for one validated scenario
///
/// Construction validates and resolves the scenario against a cost
/// source; nothing is borrowed afterwards. [`Projector::project`] then
/// produces the complete ledger and summary. Both steps are pure: equal
/// inputs give bit-identical outputs.
///
/// # Example
///
/// ```rust
/// use study_cost_core_rs::{Catalog, Projector, ScenarioParams};
///
/// let params = ScenarioParams {
///     country: "Portugal".to_string(),
///     city: "Porto".to_string(),
///     rent_type: "dorm".to_string(),
///     has_job: false,
///     weekly_hours: 0.0,
///     hourly_wage: 0.0,
///     initial_deposit: 10000.0,
///     tuition_total: 6000.0,
///     tuition_payment: "lumpSum".to_string(),
/// };
///
/// let projector = Projector::new(params, Catalog::global()).unwrap();
/// assert_eq!(projector.scenario().monthly_rent, 280.0);
///
/// let projection = projector.project().unwrap();
/// assert_eq!(projection.ledger[0].expense, 6600.0);
/// ```
#[derive(Debug)]
pub struct Projector {
    /// Validated scenario with its derived monthly figures
    scenario: ResolvedScenario,
}

impl Projector {
    /// Validate a scenario and resolve it against a cost source
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// country, city, rent type, deposit, tuition total, weekly hours,
    /// hourly wage, payment mode. Weekly hours are bounds-checked even
    /// without a job, then coerced to 0. An unusable cost entry behind a
    /// structurally valid input is a [`CalculationError`], not an
    /// [`InvalidInput`].
    pub fn new(params: ScenarioParams, catalog: &dyn CostSource) -> Result<Self, ProjectionError> {
        let (rent_type, schedule) = Self::validate(&params, catalog)?;

        // Both lists contained the keys, so a miss here means the source
        // contradicts its own listings.
        let entry = catalog.entry(&params.country, &params.city).ok_or_else(|| {
            CalculationError::MalformedEntry {
                country: params.country.clone(),
                city: params.city.clone(),
                detail: "listed but has no cost entry".to_string(),
            }
        })?;
        Self::check_entry(&params.country, &params.city, entry, rent_type)?;

        let weekly_hours = if params.has_job { params.weekly_hours } else { 0.0 };
        let monthly_income = if params.has_job {
            round2(weekly_hours * WEEKS_PER_MONTH * params.hourly_wage)
        } else {
            0.0
        };
        let monthly_tuition_share = match schedule {
            TuitionSchedule::Installment => {
                round2(params.tuition_total / TUITION_INSTALLMENT_MONTHS as f64)
            }
            TuitionSchedule::LumpSum => 0.0,
        };

        if !monthly_income.is_finite() {
            return Err(CalculationError::NonFinite {
                what: "monthly income".to_string(),
            }
            .into());
        }

        Ok(Self {
            scenario: ResolvedScenario {
                country: params.country,
                city: params.city,
                rent_type,
                tuition_schedule: schedule,
                monthly_rent: entry.rent(rent_type),
                monthly_living_cost: entry.living_cost(),
                currency: entry.currency().to_string(),
                sources: entry.sources().to_vec(),
                weekly_hours,
                hourly_wage: params.hourly_wage,
                initial_deposit: params.initial_deposit,
                tuition_total: params.tuition_total,
                monthly_income,
                monthly_tuition_share,
            },
        })
    }

    /// Validate raw input against the cost source and numeric bounds
    fn validate(
        params: &ScenarioParams,
        catalog: &dyn CostSource,
    ) -> Result<(RentType, TuitionSchedule), InvalidInput> {
        let countries = catalog.countries();
        if !countries.iter().any(|c| *c == params.country) {
            return Err(InvalidInput::UnknownCountry {
                given: params.country.clone(),
                available: countries.iter().map(|c| c.to_string()).collect(),
            });
        }

        let cities = catalog.cities(&params.country);
        if !cities.iter().any(|c| *c == params.city) {
            return Err(InvalidInput::UnknownCity {
                given: params.city.clone(),
                country: params.country.clone(),
                available: cities.iter().map(|c| c.to_string()).collect(),
            });
        }

        let rent_type = RentType::from_tag(&params.rent_type).ok_or_else(|| {
            InvalidInput::UnknownRentType {
                given: params.rent_type.clone(),
            }
        })?;

        if !(params.initial_deposit.is_finite() && params.initial_deposit >= 0.0) {
            return Err(InvalidInput::InvalidDeposit {
                given: params.initial_deposit,
            });
        }

        if !(params.tuition_total.is_finite() && params.tuition_total >= 0.0) {
            return Err(InvalidInput::InvalidTuitionTotal {
                given: params.tuition_total,
            });
        }

        // RangeInclusive::contains is false for NaN and both infinities
        if !(0.0..=MAX_WEEKLY_HOURS).contains(&params.weekly_hours) {
            return Err(InvalidInput::WeeklyHoursOutOfRange {
                given: params.weekly_hours,
            });
        }

        if !(params.hourly_wage.is_finite() && params.hourly_wage >= 0.0) {
            return Err(InvalidInput::InvalidHourlyWage {
                given: params.hourly_wage,
            });
        }

        let schedule = TuitionSchedule::from_tag(&params.tuition_payment).ok_or_else(|| {
            InvalidInput::UnknownTuitionPayment {
                given: params.tuition_payment.clone(),
            }
        })?;

        Ok((rent_type, schedule))
    }

    /// Reject cost entries whose figures the projection cannot use
    fn check_entry(
        country: &str,
        city: &str,
        entry: &CostEntry,
        rent_type: RentType,
    ) -> Result<(), CalculationError> {
        let rent = entry.rent(rent_type);
        if !(rent.is_finite() && rent >= 0.0) {
            return Err(CalculationError::MalformedEntry {
                country: country.to_string(),
                city: city.to_string(),
                detail: format!("{} rent is {}", rent_type.tag(), rent),
            });
        }

        let living = entry.living_cost();
        if !(living.is_finite() && living >= 0.0) {
            return Err(CalculationError::MalformedEntry {
                country: country.to_string(),
                city: city.to_string(),
                detail: format!("living cost is {}", living),
            });
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The validated scenario this projector computes from
    pub fn scenario(&self) -> &ResolvedScenario {
        &self.scenario
    }

    // ========================================================================
    // Projection
    // ========================================================================

    /// Build the 12-row ledger and its summary
    ///
    /// Either a complete projection comes back or an error; there is no
    /// partial form.
    pub fn project(&self) -> Result<Projection, CalculationError> {
        let s = &self.scenario;
        let base_expense = round2(s.monthly_base_expense());

        let mut ledger = Vec::with_capacity(ACADEMIC_MONTHS.len());
        let mut balance = s.initial_deposit;
        for (i, label) in ACADEMIC_MONTHS.iter().enumerate() {
            let expense = round2(base_expense + self.tuition_component(i));
            if !expense.is_finite() {
                return Err(CalculationError::NonFinite {
                    what: format!("expense for {}", label),
                });
            }

            balance = round2(balance + s.monthly_income - expense);
            if !balance.is_finite() {
                return Err(CalculationError::NonFinite {
                    what: format!("balance for {}", label),
                });
            }

            ledger.push(LedgerRow {
                month_index: i,
                month: label.to_string(),
                income: s.monthly_income,
                expense,
                balance,
            });
        }

        let summary = self.summarize(base_expense, &ledger);
        Ok(Projection {
            scenario: s.clone(),
            ledger,
            summary,
        })
    }

    /// Tuition charged in a given month
    fn tuition_component(&self, month_index: usize) -> f64 {
        match self.scenario.tuition_schedule {
            TuitionSchedule::Installment if month_index < TUITION_INSTALLMENT_MONTHS => {
                self.scenario.monthly_tuition_share
            }
            TuitionSchedule::LumpSum if month_index == 0 => self.scenario.tuition_total,
            _ => 0.0,
        }
    }

    /// Derive the summary in a single pass over the rows
    fn summarize(&self, base_expense: f64, ledger: &[LedgerRow]) -> ProjectionSummary {
        debug_assert_eq!(ledger.len(), ACADEMIC_MONTHS.len());

        let mut min_balance = f64::INFINITY;
        let mut final_balance = 0.0;
        let mut critical_months = Vec::new();
        for row in ledger {
            if row.balance < min_balance {
                min_balance = row.balance;
            }
            if row.is_critical() {
                critical_months.push(row.month.clone());
            }
            final_balance = row.balance;
        }

        let need_support = if min_balance < 0.0 { min_balance.abs() } else { 0.0 };

        ProjectionSummary {
            monthly_income: self.scenario.monthly_income,
            monthly_base_expense: base_expense,
            monthly_tuition_share: self.scenario.monthly_tuition_share,
            final_balance,
            min_balance,
            critical_months,
            need_support,
        }
    }
}

/// Validate, resolve, and project in one call
///
/// The convenience form hosts reach for first; equivalent to
/// [`Projector::new`] followed by [`Projector::project`].
pub fn build_projection(
    params: ScenarioParams,
    catalog: &dyn CostSource,
) -> Result<Projection, ProjectionError> {
    let projector = Projector::new(params, catalog)?;
    projector.project().map_err(ProjectionError::from)
}
