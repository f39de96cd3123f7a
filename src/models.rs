//! Input and result models for the volume calculation

use std::fmt;

use serde::Serialize;

use crate::error::{CalcError, Result};

pub const PERCENTAGE_MIN: f64 = 0.1;
pub const PERCENTAGE_MAX: f64 = 100.0;
pub const PERCENTAGE_DEFAULT: f64 = 5.0;

pub const GRAMS_MIN: f64 = 0.1;
pub const GRAMS_MAX: f64 = 200.0;
pub const GRAMS_DEFAULT: f64 = 20.0;

/// Increment used by the number inputs on the form
pub const INPUT_STEP: f64 = 0.1;

/// Alcohol by volume of a beverage, in percent
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct AlcoholPercentage(f64);

impl AlcoholPercentage {
    /// Validate a raw percentage against [`PERCENTAGE_MIN`, `PERCENTAGE_MAX`]
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(CalcError::NotFinite {
                field: "alcohol percentage",
            });
        }
        if !(PERCENTAGE_MIN..=PERCENTAGE_MAX).contains(&value) {
            return Err(CalcError::PercentageOutOfRange { value });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for AlcoholPercentage {
    fn default() -> Self {
        Self(PERCENTAGE_DEFAULT)
    }
}

impl fmt::Display for AlcoholPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", Decimal(self.0))
    }
}

/// Desired intake of pure ethanol, in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct TargetGrams(f64);

impl TargetGrams {
    /// Validate a raw gram amount against [`GRAMS_MIN`, `GRAMS_MAX`]
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(CalcError::NotFinite {
                field: "target alcohol",
            });
        }
        if !(GRAMS_MIN..=GRAMS_MAX).contains(&value) {
            return Err(CalcError::GramsOutOfRange { value });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for TargetGrams {
    fn default() -> Self {
        Self(GRAMS_DEFAULT)
    }
}

impl fmt::Display for TargetGrams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} g", Decimal(self.0))
    }
}

/// Echoes an input value, keeping one decimal place on whole numbers (`5.0`, `12.25`)
struct Decimal(f64);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Result of a volume calculation, echoing the inputs it was computed from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Calculation {
    pub alcohol_percentage: AlcoholPercentage,
    pub target_grams: TargetGrams,
    pub volume_ml: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_bounds_inclusive() {
        assert!(AlcoholPercentage::new(PERCENTAGE_MIN).is_ok());
        assert!(AlcoholPercentage::new(PERCENTAGE_MAX).is_ok());
        assert_eq!(
            AlcoholPercentage::new(0.0),
            Err(CalcError::PercentageOutOfRange { value: 0.0 })
        );
        assert!(AlcoholPercentage::new(-5.0).is_err());
        assert!(AlcoholPercentage::new(100.5).is_err());
    }

    #[test]
    fn test_grams_bounds_inclusive() {
        assert!(TargetGrams::new(GRAMS_MIN).is_ok());
        assert!(TargetGrams::new(GRAMS_MAX).is_ok());
        assert_eq!(
            TargetGrams::new(200.1),
            Err(CalcError::GramsOutOfRange { value: 200.1 })
        );
        assert!(TargetGrams::new(0.0).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            AlcoholPercentage::new(f64::NAN),
            Err(CalcError::NotFinite { .. })
        ));
        assert!(matches!(
            TargetGrams::new(f64::INFINITY),
            Err(CalcError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_defaults_and_display() {
        assert_eq!(AlcoholPercentage::default().to_string(), "5.0%");
        assert_eq!(TargetGrams::default().to_string(), "20.0 g");
        assert_eq!(AlcoholPercentage::new(12.5).unwrap().to_string(), "12.5%");
        assert_eq!(TargetGrams::new(12.25).unwrap().to_string(), "12.25 g");
        assert_eq!(AlcoholPercentage::new(100.0).unwrap().to_string(), "100.0%");
    }
}
