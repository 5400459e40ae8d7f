//! Study Cost Planner - Rust Core
//!
//! Deterministic 12-month cash-flow projection for students heading
//! abroad: validate a scenario against a static cost-of-living catalog,
//! fold a September-to-August ledger, and summarize where the year gets
//! tight.
//!
//! # Architecture
//!
//! - **catalog**: Static destination table (rents, living costs, currency, citations)
//! - **models**: Domain types (ScenarioParams, LedgerRow, ProjectionSummary)
//! - **projection**: Validation, ledger fold, summary scan
//!
//! # Critical Invariants
//!
//! 1. All money values are f64 rounded to two decimals at every stored step
//! 2. A projection is a pure fold: same inputs, bit-identical outputs
//! 3. Validation is all-or-nothing; no partial ledgers ever escape
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod catalog;
pub mod models;
pub mod projection;

// Re-exports for convenience
pub use catalog::{currency_symbol, Catalog, CostEntry, CostSource};
pub use models::{
    ledger::{LedgerRow, ACADEMIC_MONTHS},
    scenario::{RentType, ResolvedScenario, ScenarioParams, TuitionSchedule},
    summary::{Projection, ProjectionSummary},
};
pub use projection::{
    build_projection, round2, CalculationError, InvalidInput, ProjectionError, Projector,
    MAX_WEEKLY_HOURS, TUITION_INSTALLMENT_MONTHS, WEEKS_PER_MONTH,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn study_cost_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::projector::PyProjector>()?;
    m.add_function(wrap_pyfunction!(ffi::list_countries, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::list_cities, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::currency_symbol_for, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::build_projection, m)?)?;
    Ok(())
}
