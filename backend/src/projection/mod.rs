//! Projection engine - validation, ledger fold, summary scan
//!
//! See `engine.rs` for the full implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{
    build_projection, round2, CalculationError, InvalidInput, ProjectionError, Projector,
    MAX_WEEKLY_HOURS, TUITION_INSTALLMENT_MONTHS, WEEKS_PER_MONTH,
};
