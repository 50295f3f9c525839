//! Running balance state for the contribution path

use crate::inputs::ProjectionInputs;

/// Months compounded per projection year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Balance of the contribution path at a point in time
#[derive(Debug, Clone)]
pub struct BalanceState {
    /// Unrounded running balance
    pub total: f64,

    /// Sum of all deposits made so far
    pub contributed: f64,

    monthly_contribution: f64,
    monthly_rate: f64,
}

impl BalanceState {
    /// Initialize state at projection start
    pub fn from_inputs(inputs: &ProjectionInputs) -> Self {
        Self {
            total: inputs.principal,
            contributed: 0.0,
            monthly_contribution: inputs.monthly_contribution,
            monthly_rate: inputs.annual_rate / MONTHS_PER_YEAR as f64,
        }
    }

    /// Deposit at month start, then compound the month including the deposit
    pub fn advance_month(&mut self) {
        self.total += self.monthly_contribution;
        self.contributed += self.monthly_contribution;
        self.total *= 1.0 + self.monthly_rate;
    }

    /// Advance through a full year of months
    pub fn advance_year(&mut self) {
        for _ in 0..MONTHS_PER_YEAR {
            self.advance_month();
        }
    }
}
