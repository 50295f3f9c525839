//! Yearly balance output structures for projections

use serde::{Deserialize, Serialize};

/// Upper bound on up-front allocation for the balance series
const MAX_PREALLOCATED_YEARS: usize = 1_024;

/// Round a balance to whole currency units, half away from zero
///
/// Non-finite balances pass through untouched.
pub fn round_to_whole(value: f64) -> f64 {
    value.round()
}

/// One projection year, as shown in a year-by-year table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    pub year: u64,
    pub with_contribution: f64,
    pub without_contribution: f64,
    pub total_contributed: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Starting balance the projection grew from
    pub principal: f64,

    /// Monthly deposit used by the contribution path
    pub monthly_contribution: f64,

    /// Rounded balance after each year, monthly compounding with deposits
    pub with_contribution: Vec<f64>,

    /// Rounded balance after each year, annual compounding without deposits
    pub without_contribution: Vec<f64>,

    /// Sum of all deposits over the horizon
    pub total_contributed: f64,
}

impl ProjectionResult {
    pub fn new(principal: f64, monthly_contribution: f64, years: usize) -> Self {
        Self {
            principal,
            monthly_contribution,
            with_contribution: Vec::with_capacity(years.min(MAX_PREALLOCATED_YEARS)),
            without_contribution: Vec::with_capacity(years.min(MAX_PREALLOCATED_YEARS)),
            total_contributed: 0.0,
        }
    }

    /// Record the balances at the end of a year
    pub fn add_year(&mut self, with_contribution: f64, without_contribution: f64) {
        self.with_contribution.push(round_to_whole(with_contribution));
        self.without_contribution.push(round_to_whole(without_contribution));
    }

    /// Number of projected years
    pub fn years(&self) -> usize {
        self.with_contribution.len()
    }

    /// Split into the two balance sequences
    pub fn into_sequences(self) -> (Vec<f64>, Vec<f64>) {
        (self.with_contribution, self.without_contribution)
    }

    /// Per-year rows with cumulative deposits
    pub fn rows(&self) -> Vec<YearRow> {
        self.with_contribution
            .iter()
            .zip(&self.without_contribution)
            .enumerate()
            .map(|(i, (&with, &without))| {
                let year = i as u64 + 1;
                YearRow {
                    year,
                    with_contribution: with,
                    without_contribution: without,
                    total_contributed: self.monthly_contribution * 12.0 * year as f64,
                }
            })
            .collect()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let final_balance = self
            .with_contribution
            .last()
            .copied()
            .unwrap_or(self.principal);
        let final_balance_without_contribution = self
            .without_contribution
            .last()
            .copied()
            .unwrap_or(self.principal);

        ProjectionSummary {
            years: self.years() as u64,
            final_balance,
            final_balance_without_contribution,
            total_contributed: self.total_contributed,
            interest_earned: final_balance - self.principal - self.total_contributed,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u64,
    pub final_balance: f64,
    pub final_balance_without_contribution: f64,
    pub total_contributed: f64,
    pub interest_earned: f64,
}
