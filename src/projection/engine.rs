//! Core projection engine for yearly compound interest balances

use log::{debug, warn};

use crate::error::Result;
use crate::inputs::ProjectionInputs;
use super::schedule::ProjectionResult;
use super::state::BalanceState;

/// Configuration for a projection run
#[derive(Debug, Clone, Default)]
pub struct ProjectionConfig {
    /// Reject non-finite inputs, out-of-range horizons and rates at or below -100%
    /// instead of letting them flow through the arithmetic
    pub validate_inputs: bool,
}

impl ProjectionConfig {
    pub fn strict() -> Self {
        Self { validate_inputs: true }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run a projection; only fails when input validation is enabled
    pub fn project(&self, inputs: &ProjectionInputs) -> Result<ProjectionResult> {
        if self.config.validate_inputs {
            if let Err(e) = inputs.validate() {
                warn!("rejected projection inputs {:?}: {}", inputs, e);
                return Err(e);
            }
        }

        Ok(project_inputs(inputs))
    }
}

/// Project balances without any validation
///
/// The contribution path compounds a running total monthly at `annual_rate / 12`,
/// depositing before each month's interest. The other path is the closed form
/// `principal * (1 + annual_rate)^year`, computed fresh for every year.
pub fn project_inputs(inputs: &ProjectionInputs) -> ProjectionResult {
    let years = inputs.horizon();
    let mut result = ProjectionResult::new(inputs.principal, inputs.monthly_contribution, years);
    let mut state = BalanceState::from_inputs(inputs);

    for year in 1..=years {
        state.advance_year();

        let without_contribution = inputs.principal * (1.0 + inputs.annual_rate).powf(year as f64);
        result.add_year(state.total, without_contribution);
    }
    result.total_contributed = state.contributed;

    debug!(
        "projected {} years: principal={} rate={} monthly={}",
        years, inputs.principal, inputs.annual_rate, inputs.monthly_contribution
    );

    result
}

/// Yearly balances with and without a monthly contribution
///
/// Returns `(with_contribution, without_contribution)`, both of length
/// `max(years, 0)` and rounded to whole units. Never fails: invalid numbers
/// propagate as whatever the arithmetic yields.
pub fn project(
    principal: f64,
    annual_rate: f64,
    years: i64,
    monthly_contribution: f64,
) -> (Vec<f64>, Vec<f64>) {
    project_inputs(&ProjectionInputs::new(principal, annual_rate, years, monthly_contribution))
        .into_sequences()
}

/// Validate inputs, then project
pub fn project_checked(inputs: &ProjectionInputs) -> Result<ProjectionResult> {
    ProjectionEngine::new(ProjectionConfig::strict()).project(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;

    #[test]
    fn test_zero_rate_zero_contribution_is_flat() {
        let (with, without) = project(1000.0, 0.0, 5, 0.0);
        assert_eq!(with, vec![1000.0; 5]);
        assert_eq!(without, vec![1000.0; 5]);
    }

    #[test]
    fn test_annual_closed_form() {
        let (with, without) = project(1000.0, 0.12, 1, 0.0);
        assert_eq!(without, vec![1120.0]);
        // Monthly compounding of the same rate: 1000 * 1.01^12 = 1126.83
        assert_eq!(with, vec![1127.0]);
    }

    #[test]
    fn test_closed_form_ignores_contributions() {
        let (_, without) = project(1000.0, 0.10, 3, 500.0);
        assert_eq!(without, vec![1100.0, 1210.0, 1331.0]);
    }

    #[test]
    fn test_contributions_at_zero_rate_accumulate() {
        let (with, without) = project(0.0, 0.0, 3, 100.0);
        assert_eq!(with, vec![1200.0, 2400.0, 3600.0]);
        assert_eq!(without, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_deposit_compounds_in_its_month() {
        // A single year of 100/month at 12%: sum over k=1..12 of 100 * 1.01^k
        let expected: f64 = (1..=12).map(|k| 100.0 * 1.01_f64.powi(k)).sum();
        let (with, _) = project(0.0, 0.12, 1, 100.0);
        assert_eq!(with, vec![expected.round()]);
        assert_eq!(with, vec![1281.0]);
    }

    #[test]
    fn test_zero_and_negative_years_are_empty() {
        let (with, without) = project(1000.0, 0.05, 0, 100.0);
        assert!(with.is_empty());
        assert!(without.is_empty());

        let (with, without) = project(1000.0, 0.05, -3, 100.0);
        assert!(with.is_empty());
        assert!(without.is_empty());
    }

    #[test]
    fn test_lengths_match_horizon() {
        for years in 0..40 {
            let (with, without) = project(2500.0, 0.07, years, 75.0);
            assert_eq!(with.len(), years as usize);
            assert_eq!(without.len(), years as usize);
        }
    }

    #[test]
    fn test_non_decreasing_for_non_negative_rates() {
        for rate in [0.0, 0.01, 0.05, 0.2] {
            let (with, _) = project(1234.0, rate, 30, 0.0);
            assert!(with.windows(2).all(|w| w[0] <= w[1]), "rate {}", rate);
        }
    }

    #[test]
    fn test_entries_are_whole_numbers() {
        let (with, without) = project(987.65, 0.0437, 25, 33.33);
        for value in with.iter().chain(&without) {
            assert_eq!(value.fract(), 0.0);
        }
    }

    #[test]
    fn test_repeat_calls_are_identical() {
        let first = project(10_000.0, 0.065, 20, 250.0);
        let second = project(10_000.0, 0.065, 20, 250.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_permissive_path_propagates_nan() {
        let (with, without) = project(f64::NAN, 0.05, 2, 0.0);
        assert_eq!(with.len(), 2);
        assert!(with.iter().all(|v| v.is_nan()));
        assert!(without.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_rate_of_minus_one_does_not_panic() {
        let (with, without) = project(1000.0, -1.0, 2, 10.0);
        assert_eq!(without, vec![0.0, 0.0]);
        assert_eq!(with.len(), 2);
    }

    #[test]
    fn test_total_contributed_tracked() {
        let result = project_inputs(&ProjectionInputs::new(1000.0, 0.05, 4, 50.0));
        assert_eq!(result.total_contributed, 2400.0);
        let summary = result.summary();
        assert_eq!(summary.years, 4);
        assert_eq!(summary.interest_earned, summary.final_balance - 1000.0 - 2400.0);
        assert!(summary.interest_earned > 0.0);
    }

    #[test]
    fn test_engine_default_is_permissive() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&ProjectionInputs::new(100.0, 0.05, -1, 0.0)).unwrap();
        assert_eq!(result.years(), 0);
    }

    #[test]
    fn test_checked_rejects_invalid() {
        let err = project_checked(&ProjectionInputs::new(100.0, 0.05, -1, 0.0)).unwrap_err();
        assert!(matches!(err, ProjectionError::NegativeYears(-1)));

        let err = project_checked(&ProjectionInputs::new(1.0, 0.0, i64::MAX, 0.0)).unwrap_err();
        assert!(matches!(err, ProjectionError::HorizonTooLong(i64::MAX)));

        let ok = project_checked(&ProjectionInputs::new(1000.0, 0.12, 1, 0.0)).unwrap();
        assert_eq!(ok.without_contribution, vec![1120.0]);
    }
}
