//! Monthly ledger model
//!
//! A projection covers one academic year: twelve months starting in
//! September. Each row records the month's income, its expense, and the
//! running balance after the month closes.
//!
//! CRITICAL: every stored amount has been rounded to two decimals; the
//! running balance folds over the stored (rounded) values, so replaying
//! the ledger row by row reproduces it exactly.

use serde::{Deserialize, Serialize};

/// Month labels of the academic year, in projection order
pub const ACADEMIC_MONTHS: [&str; 12] = [
    "Sep", "Oct", "Nov", "Dec", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug",
];

/// One month of the projection
///
/// # Example
/// ```
/// use study_cost_core_rs::LedgerRow;
///
/// let row = LedgerRow {
///     month_index: 0,
///     month: "Sep".to_string(),
///     income: 519.60,
///     expense: 1100.00,
///     balance: 4419.60,
/// };
/// assert!(!row.is_critical());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// Position in the academic year, 0 (September) through 11 (August)
    pub month_index: usize,

    /// Month label from `ACADEMIC_MONTHS`
    pub month: String,

    /// Income credited this month
    pub income: f64,

    /// Expense debited this month (rent + living + any tuition component)
    pub expense: f64,

    /// Running balance after this month closes
    pub balance: f64,
}

impl LedgerRow {
    /// Whether this month closes below zero
    ///
    /// A balance of exactly 0.0 is solvent, not critical.
    pub fn is_critical(&self) -> bool {
        self.balance < 0.0
    }
}
