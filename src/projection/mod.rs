//! Projection engine for yearly compound interest balances

mod state;
mod engine;
mod schedule;

pub use state::{BalanceState, MONTHS_PER_YEAR};
pub use engine::{project, project_checked, project_inputs, ProjectionEngine, ProjectionConfig};
pub use schedule::{round_to_whole, ProjectionResult, ProjectionSummary, YearRow};
