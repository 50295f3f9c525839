//! Interest Projector - compound interest growth with and without monthly contributions
//!
//! This library provides:
//! - Yearly balance projections with monthly deposits and monthly compounding
//! - A closed-form annual-compounding baseline without deposits
//! - Optional strict input validation
//! - Batch scenario runs loaded from CSV

pub mod error;
pub mod inputs;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use inputs::{ProjectionInputs, MAX_PROJECTION_YEARS};
pub use projection::{
    project, project_checked, ProjectionConfig, ProjectionEngine, ProjectionResult,
};
pub use scenario::ScenarioRunner;
