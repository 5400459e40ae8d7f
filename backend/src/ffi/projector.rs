//! PyO3 wrapper for Projector
//!
//! This module provides the Python interface to the Rust projection
//! engine.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{parse_scenario_params, projection_error_to_py, projection_to_py};
use crate::catalog::Catalog;
use crate::projection::Projector as RustProjector;

/// Python wrapper for the Rust Projector
///
/// Validates a scenario on construction and builds the 12-month
/// projection on demand.
///
/// # Example (from Python)
///
/// ```python
/// from study_cost_core_rs import Projector
///
/// scenario = {
///     "country": "Portugal",
///     "city": "Lisbon",
///     "rent_type": "shared",
///     "has_job": True,
///     "weekly_hours": 15,
///     "hourly_wage": 8.0,
///     "initial_deposit": 5000,
///     "tuition_total": 5000,
///     "tuition_payment": "installment",
/// }
///
/// projector = Projector.new(scenario)
/// result = projector.project()
/// print(f"Need support: {result['summary']['need_support']}")
/// ```
#[pyclass(name = "Projector")]
pub struct PyProjector {
    inner: RustProjector,
}

#[pymethods]
impl PyProjector {
    /// Create a projector from a scenario dict
    ///
    /// # Arguments
    ///
    /// * `scenario` - Dictionary with the scenario fields; `has_job`,
    ///   `weekly_hours`, and `hourly_wage` may be omitted for a no-job
    ///   scenario
    ///
    /// # Errors
    ///
    /// Raises ValueError when a field is missing, has the wrong type, or
    /// fails validation (the message lists the valid choices where the
    /// field has a closed set)
    #[staticmethod]
    fn new(scenario: &Bound<'_, PyDict>) -> PyResult<Self> {
        let params = parse_scenario_params(scenario)?;
        let inner =
            RustProjector::new(params, Catalog::global()).map_err(projection_error_to_py)?;
        Ok(PyProjector { inner })
    }

    /// Build the full projection
    ///
    /// # Returns
    ///
    /// Dictionary containing:
    /// - `ledger`: list of 12 row dicts (month_index, month, income,
    ///   expense, balance)
    /// - `summary`: dict (monthly_income, monthly_base_expense,
    ///   monthly_tuition_share, final_balance, min_balance,
    ///   critical_months, need_support)
    /// - resolved scenario fields: country, city, rent_type,
    ///   tuition_payment, currency, currency_symbol, monthly_rent,
    ///   monthly_living_cost, sources
    fn project(&self, py: Python) -> PyResult<Py<PyDict>> {
        let projection = self
            .inner
            .project()
            .map_err(|e| projection_error_to_py(e.into()))?;
        projection_to_py(py, &projection)
    }

    /// Constant monthly income of the validated scenario
    fn monthly_income(&self) -> f64 {
        self.inner.scenario().monthly_income
    }

    /// Rent plus living cost per month, tuition excluded
    fn monthly_base_expense(&self) -> f64 {
        self.inner.scenario().monthly_base_expense()
    }

    /// ISO 4217 currency code of the destination
    fn currency(&self) -> String {
        self.inner.scenario().currency.clone()
    }
}
