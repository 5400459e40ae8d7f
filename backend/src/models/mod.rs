//! Domain models for the cash-flow projection

pub mod ledger;
pub mod scenario;
pub mod summary;

// Re-exports
pub use ledger::{LedgerRow, ACADEMIC_MONTHS};
pub use scenario::{RentType, ResolvedScenario, ScenarioParams, TuitionSchedule};
pub use summary::{Projection, ProjectionSummary};
