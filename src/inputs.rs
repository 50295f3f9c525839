//! Projection inputs and their validation

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// Longest horizon accepted by validation
pub const MAX_PROJECTION_YEARS: i64 = 1_000;

/// The four scalar inputs of a projection
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionInputs {
    /// Starting balance
    pub principal: f64,

    /// Yearly fractional rate (0.05 = 5%)
    #[serde(alias = "annualRate", alias = "rate")]
    pub annual_rate: f64,

    /// Projection horizon; zero or negative projects nothing
    pub years: i64,

    /// Deposited at the start of every month, before that month compounds
    #[serde(default, alias = "monthlyContribution")]
    pub monthly_contribution: f64,
}

impl ProjectionInputs {
    pub fn new(principal: f64, annual_rate: f64, years: i64, monthly_contribution: f64) -> Self {
        Self {
            principal,
            annual_rate,
            years,
            monthly_contribution,
        }
    }

    /// Reject inputs that would only produce non-finite or meaningless balances
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("principal", self.principal),
            ("annual_rate", self.annual_rate),
            ("monthly_contribution", self.monthly_contribution),
        ] {
            if !value.is_finite() {
                return Err(ProjectionError::NonFinite { field, value });
            }
        }

        if self.years < 0 {
            return Err(ProjectionError::NegativeYears(self.years));
        }

        if self.years > MAX_PROJECTION_YEARS {
            return Err(ProjectionError::HorizonTooLong(self.years));
        }

        if self.annual_rate <= -1.0 {
            return Err(ProjectionError::RateBelowFloor(self.annual_rate));
        }

        Ok(())
    }

    /// Number of whole years that will be projected
    pub fn horizon(&self) -> usize {
        usize::try_from(self.years.max(0)).unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_inputs_pass() {
        assert!(ProjectionInputs::new(1000.0, 0.05, 10, 100.0).validate().is_ok());
        assert!(ProjectionInputs::new(0.0, 0.0, 0, 0.0).validate().is_ok());
        assert!(ProjectionInputs::new(1000.0, -0.5, 3, 0.0).validate().is_ok());
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = ProjectionInputs::new(f64::NAN, 0.05, 1, 0.0).validate().unwrap_err();
        assert!(matches!(err, ProjectionError::NonFinite { field: "principal", .. }));

        let err = ProjectionInputs::new(1.0, 0.05, 1, f64::INFINITY).validate().unwrap_err();
        assert!(matches!(err, ProjectionError::NonFinite { field: "monthly_contribution", .. }));
    }

    #[test]
    fn test_rejects_negative_years_and_low_rate() {
        let err = ProjectionInputs::new(1.0, 0.05, -2, 0.0).validate().unwrap_err();
        assert!(matches!(err, ProjectionError::NegativeYears(-2)));

        let err = ProjectionInputs::new(1.0, -1.0, 2, 0.0).validate().unwrap_err();
        assert!(matches!(err, ProjectionError::RateBelowFloor(_)));
    }

    #[test]
    fn test_rejects_horizon_past_limit() {
        assert!(ProjectionInputs::new(1.0, 0.0, MAX_PROJECTION_YEARS, 0.0).validate().is_ok());

        let err = ProjectionInputs::new(1.0, 0.0, MAX_PROJECTION_YEARS + 1, 0.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ProjectionError::HorizonTooLong(_)));

        let err = ProjectionInputs::new(1.0, 0.0, i64::MAX, 0.0).validate().unwrap_err();
        assert!(matches!(err, ProjectionError::HorizonTooLong(i64::MAX)));
    }

    #[test]
    fn test_horizon_clamps_negative() {
        assert_eq!(ProjectionInputs::new(1.0, 0.0, -5, 0.0).horizon(), 0);
        assert_eq!(ProjectionInputs::new(1.0, 0.0, 7, 0.0).horizon(), 7);
    }

    #[test]
    fn test_deserializes_camel_case() {
        let json = r#"{"principal":1000,"annualRate":0.07,"years":3,"monthlyContribution":50}"#;
        let inputs: ProjectionInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs, ProjectionInputs::new(1000.0, 0.07, 3, 50.0));

        let json = r#"{"principal":1000,"annual_rate":0.07,"years":3}"#;
        let inputs: ProjectionInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.monthly_contribution, 0.0);
    }
}
