//! Python bindings (feature `pyo3`)
//!
//! The hosting app talks to the core through one class and four module
//! functions; everything crosses the boundary as plain dicts, lists,
//! and scalars.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::catalog::Catalog;

pub mod projector;
pub mod types;

pub use projector::PyProjector;

/// Supported countries, ascending order
#[pyfunction]
pub fn list_countries() -> Vec<String> {
    Catalog::global()
        .countries()
        .iter()
        .map(|c| c.to_string())
        .collect()
}

/// Cities for a country, ascending order; empty for an unknown country
#[pyfunction]
pub fn list_cities(country: &str) -> Vec<String> {
    Catalog::global()
        .cities(country)
        .iter()
        .map(|c| c.to_string())
        .collect()
}

/// Display symbol for an ISO 4217 currency code
#[pyfunction]
#[pyo3(name = "currency_symbol")]
pub fn currency_symbol_for(code: &str) -> String {
    crate::catalog::currency_symbol(code).to_string()
}

/// Validate, resolve, and project a scenario dict in one call
#[pyfunction]
pub fn build_projection(py: Python<'_>, scenario: &Bound<'_, PyDict>) -> PyResult<Py<PyDict>> {
    let params = types::parse_scenario_params(scenario)?;
    let projection = crate::projection::build_projection(params, Catalog::global())
        .map_err(types::projection_error_to_py)?;
    types::projection_to_py(py, &projection)
}
