//! Projection summary model
//!
//! The summary condenses a 12-row ledger into the figures an adviser
//! actually discusses: the constant monthly income, the baseline expense,
//! the tuition share, where the year ends up, how low it gets, which
//! months run negative, and how much support would cover the worst dip.

use serde::{Deserialize, Serialize};

use super::ledger::LedgerRow;
use super::scenario::ResolvedScenario;

/// Derived figures for a complete projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    /// Constant income credited each month
    pub monthly_income: f64,

    /// Monthly rent + living cost, tuition excluded
    pub monthly_base_expense: f64,

    /// Per-month tuition share under installments, 0 under lump sum
    pub monthly_tuition_share: f64,

    /// Balance after August closes
    pub final_balance: f64,

    /// Lowest balance of the year
    pub min_balance: f64,

    /// Labels of months closing below zero, in chronological order
    pub critical_months: Vec<String>,

    /// Support needed to stay solvent: `abs(min_balance)` when the year
    /// dips below zero, otherwise 0
    pub need_support: f64,
}

/// Complete projection result: resolved inputs, ledger, and summary
///
/// Always carries exactly twelve ledger rows in month order. There is no
/// partial form; the engine either produces the whole projection or an
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Validated scenario the projection was built from
    pub scenario: ResolvedScenario,

    /// The twelve monthly rows, September through August
    pub ledger: Vec<LedgerRow>,

    /// Figures derived from the ledger in a single scan
    pub summary: ProjectionSummary,
}

impl Projection {
    /// Rows that close below zero, in month order
    pub fn critical_rows(&self) -> impl Iterator<Item = &LedgerRow> {
        self.ledger.iter().filter(|row| row.is_critical())
    }
}
