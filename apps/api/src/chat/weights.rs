//! Priority weights the HR user sets before scoring.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four weights must add up to exactly this before scoring is allowed.
pub const REQUIRED_TOTAL: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightError {
    #[error("{field} weight must be between 0 and 100, got {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("weights must sum to 100, got {total}")]
    BadTotal { total: f64 },
}

/// Percentage weights per scoring dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    pub skills: f64,
    pub education: f64,
    pub experience: f64,
    pub certifications: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            skills: 50.0,
            education: 20.0,
            experience: 20.0,
            certifications: 10.0,
        }
    }
}

impl WeightConfig {
    pub fn total(&self) -> f64 {
        self.skills + self.education + self.experience + self.certifications
    }

    fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("skills", self.skills),
            ("education", self.education),
            ("experience", self.experience),
            ("certifications", self.certifications),
        ]
    }

    /// Each weight must be a finite value in [0, 100]. Checked on every edit.
    pub fn check_ranges(&self) -> Result<(), WeightError> {
        for (field, value) in self.fields() {
            if !value.is_finite() || !(0.0..=REQUIRED_TOTAL).contains(&value) {
                return Err(WeightError::OutOfRange { field, value });
            }
        }
        Ok(())
    }

    /// Full gate for scoring: ranges plus a total of exactly 100.
    pub fn validate(&self) -> Result<(), WeightError> {
        self.check_ranges()?;
        let total = self.total();
        if total != REQUIRED_TOTAL {
            return Err(WeightError::BadTotal { total });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(skills: f64, education: f64, experience: f64, certifications: f64) -> WeightConfig {
        WeightConfig {
            skills,
            education,
            experience,
            certifications,
        }
    }

    #[test]
    fn test_default_weights_sum_to_100() {
        let w = WeightConfig::default();
        assert_eq!(w.total(), 100.0);
        assert!(w.validate().is_ok());
    }

    #[test]
    fn test_total_below_100_rejected() {
        let err = weights(50.0, 20.0, 20.0, 0.0).validate().unwrap_err();
        assert_eq!(err, WeightError::BadTotal { total: 90.0 });
    }

    #[test]
    fn test_total_above_100_rejected_not_normalised() {
        let w = weights(60.0, 20.0, 20.0, 10.0);
        assert!(matches!(w.validate(), Err(WeightError::BadTotal { .. })));
        assert_eq!(w.skills, 60.0);
    }

    #[test]
    fn test_fractional_weights_that_sum_to_100_pass() {
        assert!(weights(33.3, 33.3, 33.4, 0.0).validate().is_ok());
    }

    #[test]
    fn test_total_near_100_is_not_rounded() {
        let err = weights(50.0, 20.0, 20.0, 9.999_999_999_5).validate().unwrap_err();
        assert!(matches!(err, WeightError::BadTotal { .. }));
    }

    #[test]
    fn test_negative_weight_out_of_range() {
        let err = weights(110.0, -10.0, 0.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, WeightError::OutOfRange { field: "skills", .. }));
    }

    #[test]
    fn test_nan_weight_out_of_range() {
        let w = weights(f64::NAN, 50.0, 50.0, 0.0);
        assert!(matches!(
            w.check_ranges(),
            Err(WeightError::OutOfRange { field: "skills", .. })
        ));
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert!(weights(100.0, 0.0, 0.0, 0.0).validate().is_ok());
    }
}
