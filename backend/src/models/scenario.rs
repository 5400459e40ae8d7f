//! Scenario model
//!
//! Describes one student's situation for a projection:
//! - Destination (country, city) resolved against the cost catalog
//! - Housing choice (single room, shared flat, dormitory)
//! - Optional part-time work (weekly hours, hourly wage)
//! - Starting deposit and the year's tuition bill with its payment mode
//!
//! `ScenarioParams` is the raw caller input (tags as strings, exactly as a
//! form or FFI dict delivers them). `ResolvedScenario` is the validated,
//! catalog-resolved form the engine computes from.

use serde::{Deserialize, Serialize};

/// Housing type selecting which rent column of a catalog entry applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentType {
    /// Private single room or studio
    Single,

    /// Room in a shared flat
    Shared,

    /// University dormitory place
    Dorm,
}

impl RentType {
    /// All housing types, in display order
    pub const ALL: [RentType; 3] = [RentType::Single, RentType::Shared, RentType::Dorm];

    /// Wire tag for this housing type
    pub fn tag(&self) -> &'static str {
        match self {
            RentType::Single => "single",
            RentType::Shared => "shared",
            RentType::Dorm => "dorm",
        }
    }

    /// Parse a wire tag (case-sensitive)
    ///
    /// # Example
    /// ```
    /// use study_cost_core_rs::RentType;
    ///
    /// assert_eq!(RentType::from_tag("shared"), Some(RentType::Shared));
    /// assert_eq!(RentType::from_tag("Shared"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "single" => Some(RentType::Single),
            "shared" => Some(RentType::Shared),
            "dorm" => Some(RentType::Dorm),
            _ => None,
        }
    }
}

/// How the year's tuition bill is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TuitionSchedule {
    /// Entire bill due in the first month (September)
    LumpSum,

    /// Bill split evenly over the first ten months (September through June)
    Installment,
}

impl TuitionSchedule {
    /// Both payment modes, in display order
    pub const ALL: [TuitionSchedule; 2] = [TuitionSchedule::LumpSum, TuitionSchedule::Installment];

    /// Wire tag for this payment mode
    pub fn tag(&self) -> &'static str {
        match self {
            TuitionSchedule::LumpSum => "lumpSum",
            TuitionSchedule::Installment => "installment",
        }
    }

    /// Parse a wire tag (case-sensitive)
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "lumpSum" => Some(TuitionSchedule::LumpSum),
            "installment" => Some(TuitionSchedule::Installment),
            _ => None,
        }
    }
}

/// Raw projection input, as delivered by a form, CLI, or FFI dict
///
/// Tag fields (`rent_type`, `tuition_payment`) stay strings here so the
/// engine can reject unknown tags with an error that lists the valid
/// choices. Validation rules live in the projection engine.
///
/// # Example
/// ```
/// use study_cost_core_rs::ScenarioParams;
///
/// let params = ScenarioParams {
///     country: "Portugal".to_string(),
///     city: "Lisbon".to_string(),
///     rent_type: "shared".to_string(),
///     has_job: true,
///     weekly_hours: 15.0,
///     hourly_wage: 8.0,
///     initial_deposit: 5000.0,
///     tuition_total: 5000.0,
///     tuition_payment: "installment".to_string(),
/// };
/// assert_eq!(params.city, "Lisbon");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    /// Destination country (catalog key, exact match)
    pub country: String,

    /// Destination city (catalog key, exact match)
    pub city: String,

    /// Housing type tag: "single", "shared", or "dorm"
    pub rent_type: String,

    /// Whether the student works part-time
    pub has_job: bool,

    /// Part-time hours per week; bounds-checked even without a job,
    /// ignored (treated as 0) when `has_job` is false
    pub weekly_hours: f64,

    /// Wage per hour, local currency
    pub hourly_wage: f64,

    /// Savings at the start of September, local currency
    pub initial_deposit: f64,

    /// Full-year tuition bill, local currency
    pub tuition_total: f64,

    /// Payment mode tag: "lumpSum" or "installment"
    pub tuition_payment: String,
}

/// Validated, catalog-resolved scenario with its derived monthly figures
///
/// Produced by the projection engine after validation; every amount has
/// already been rounded to two decimals where the derivation calls for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedScenario {
    /// Destination country
    pub country: String,

    /// Destination city
    pub city: String,

    /// Parsed housing type
    pub rent_type: RentType,

    /// Parsed tuition payment mode
    pub tuition_schedule: TuitionSchedule,

    /// Monthly rent for the chosen housing type, local currency
    pub monthly_rent: f64,

    /// Monthly non-rent living cost, local currency
    pub monthly_living_cost: f64,

    /// ISO 4217 currency code of the destination
    pub currency: String,

    /// Citations for the catalog figures backing this scenario
    pub sources: Vec<String>,

    /// Weekly work hours after coercion (0 when `has_job` was false)
    pub weekly_hours: f64,

    /// Wage per hour
    pub hourly_wage: f64,

    /// Starting deposit
    pub initial_deposit: f64,

    /// Full-year tuition bill
    pub tuition_total: f64,

    /// Constant monthly income, `round2(weekly_hours * 4.33 * hourly_wage)`
    pub monthly_income: f64,

    /// Per-month tuition share under installments, 0 under lump sum
    pub monthly_tuition_share: f64,
}

impl ResolvedScenario {
    /// Rent plus living cost: the tuition-free monthly outflow
    pub fn monthly_base_expense(&self) -> f64 {
        self.monthly_rent + self.monthly_living_cost
    }
}
