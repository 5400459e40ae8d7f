//! FFI type conversions
//!
//! Dict-shaped scenarios come in, dict-shaped projections go out. All
//! conversion lives here so the wrapper classes stay thin.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::catalog::currency_symbol;
use crate::models::{LedgerRow, Projection, ProjectionSummary, ScenarioParams};
use crate::projection::ProjectionError;

/// Extract a required field from a Python dict
///
/// # Errors
///
/// Raises ValueError naming the field when it is missing or has the
/// wrong type.
pub fn extract_required<'py, T: FromPyObject<'py>>(
    dict: &Bound<'py, PyDict>,
    key: &str,
) -> PyResult<T> {
    match dict.get_item(key)? {
        Some(value) => value
            .extract::<T>()
            .map_err(|e| PyValueError::new_err(format!("Invalid value for '{}': {}", key, e))),
        None => Err(PyValueError::new_err(format!(
            "Missing required field '{}'",
            key
        ))),
    }
}

/// Extract an optional field, falling back to a default
pub fn extract_with_default<'py, T: FromPyObject<'py>>(
    dict: &Bound<'py, PyDict>,
    key: &str,
    default: T,
) -> PyResult<T> {
    match dict.get_item(key)? {
        Some(value) => value
            .extract::<T>()
            .map_err(|e| PyValueError::new_err(format!("Invalid value for '{}': {}", key, e))),
        None => Ok(default),
    }
}

/// Parse a scenario dict into `ScenarioParams`
///
/// Destination and tuition fields are required; the work fields default
/// to no job. Tag values stay strings - the engine validates them and
/// its errors list the valid choices.
pub fn parse_scenario_params(dict: &Bound<'_, PyDict>) -> PyResult<ScenarioParams> {
    Ok(ScenarioParams {
        country: extract_required(dict, "country")?,
        city: extract_required(dict, "city")?,
        rent_type: extract_required(dict, "rent_type")?,
        has_job: extract_with_default(dict, "has_job", false)?,
        weekly_hours: extract_with_default(dict, "weekly_hours", 0.0)?,
        hourly_wage: extract_with_default(dict, "hourly_wage", 0.0)?,
        initial_deposit: extract_required(dict, "initial_deposit")?,
        tuition_total: extract_required(dict, "tuition_total")?,
        tuition_payment: extract_required(dict, "tuition_payment")?,
    })
}

/// Map library errors onto Python exceptions
///
/// Rejected input becomes ValueError (the caller can fix the scenario);
/// computation failures become RuntimeError.
pub fn projection_error_to_py(err: ProjectionError) -> PyErr {
    match err {
        ProjectionError::Input(e) => PyValueError::new_err(e.to_string()),
        ProjectionError::Calculation(e) => PyRuntimeError::new_err(e.to_string()),
    }
}

/// Convert one ledger row to a Python dict
pub fn ledger_row_to_py(py: Python<'_>, row: &LedgerRow) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("month_index", row.month_index)?;
    dict.set_item("month", &row.month)?;
    dict.set_item("income", row.income)?;
    dict.set_item("expense", row.expense)?;
    dict.set_item("balance", row.balance)?;
    Ok(dict.into())
}

/// Convert a projection summary to a Python dict
pub fn summary_to_py(py: Python<'_>, summary: &ProjectionSummary) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("monthly_income", summary.monthly_income)?;
    dict.set_item("monthly_base_expense", summary.monthly_base_expense)?;
    dict.set_item("monthly_tuition_share", summary.monthly_tuition_share)?;
    dict.set_item("final_balance", summary.final_balance)?;
    dict.set_item("min_balance", summary.min_balance)?;
    dict.set_item("critical_months", summary.critical_months.clone())?;
    dict.set_item("need_support", summary.need_support)?;
    Ok(dict.into())
}

/// Convert a complete projection to a Python dict
///
/// Carries the ledger and summary plus the resolved scenario fields a
/// host renders directly (currency, symbol, rent, living cost, data
/// citations).
pub fn projection_to_py(py: Python<'_>, projection: &Projection) -> PyResult<Py<PyDict>> {
    let ledger = PyList::empty(py);
    for row in &projection.ledger {
        ledger.append(ledger_row_to_py(py, row)?)?;
    }

    let scenario = &projection.scenario;
    let dict = PyDict::new(py);
    dict.set_item("country", &scenario.country)?;
    dict.set_item("city", &scenario.city)?;
    dict.set_item("rent_type", scenario.rent_type.tag())?;
    dict.set_item("tuition_payment", scenario.tuition_schedule.tag())?;
    dict.set_item("currency", &scenario.currency)?;
    dict.set_item("currency_symbol", currency_symbol(&scenario.currency))?;
    dict.set_item("monthly_rent", scenario.monthly_rent)?;
    dict.set_item("monthly_living_cost", scenario.monthly_living_cost)?;
    dict.set_item("sources", scenario.sources.clone())?;
    dict.set_item("ledger", ledger)?;
    dict.set_item("summary", summary_to_py(py, &projection.summary)?)?;
    Ok(dict.into())
}
