//! Scenario runner for batch projections
//!
//! Loads many input sets (from CSV or built in code) and projects them in
//! parallel with a shared configuration.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use rayon::prelude::*;

use crate::error::Result;
use crate::inputs::ProjectionInputs;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Batch projection runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let scenarios = ScenarioRunner::from_csv_path(Path::new("scenarios.csv"))?;
/// let results = runner.run_batch(&scenarios);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the permissive default config
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Read scenarios from a CSV file with a header row
    pub fn from_csv_path(path: &Path) -> Result<Vec<ProjectionInputs>> {
        let file = File::open(path)?;
        let scenarios = Self::load_scenarios(file)?;
        debug!("loaded {} scenarios from {}", scenarios.len(), path.display());
        Ok(scenarios)
    }

    /// Read scenarios from any CSV source
    ///
    /// Expected columns: `principal,annual_rate,years,monthly_contribution`.
    /// The contribution column may be omitted.
    pub fn load_scenarios<R: Read>(reader: R) -> Result<Vec<ProjectionInputs>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut scenarios = Vec::new();
        for record in reader.deserialize::<ProjectionInputs>() {
            scenarios.push(record?);
        }
        Ok(scenarios)
    }

    /// Run a single projection
    pub fn run(&self, inputs: &ProjectionInputs) -> Result<ProjectionResult> {
        self.engine.project(inputs)
    }

    /// Run projections in parallel, preserving input order
    pub fn run_batch(&self, scenarios: &[ProjectionInputs]) -> Vec<Result<ProjectionResult>> {
        debug!("running {} scenarios", scenarios.len());
        scenarios
            .par_iter()
            .map(|inputs| self.engine.project(inputs))
            .collect()
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.engine.config()
    }
}
