//! Drink volume calculator logic

use std::fmt;

use crate::error::Result;
use crate::models::{AlcoholPercentage, Calculation, TargetGrams};

/// Density of ethanol at room temperature, g/mL
pub const ETHANOL_DENSITY_G_PER_ML: f64 = 0.789;

/// Volume of a beverage (mL) that contains `grams` of pure ethanol.
///
/// `percentage` must be non-zero; callers go through [`AlcoholPercentage`]
/// or [`calculate_raw`] to guarantee that.
pub fn compute_volume_ml(percentage: f64, grams: f64) -> f64 {
    (grams * 100.0) / (percentage * ETHANOL_DENSITY_G_PER_ML)
}

/// Grams of pure ethanol contained in `volume_ml` of a beverage
pub fn pure_alcohol_grams(percentage: f64, volume_ml: f64) -> f64 {
    volume_ml * percentage / 100.0 * ETHANOL_DENSITY_G_PER_ML
}

/// Calculate the recommended volume for validated inputs
pub fn calculate(percentage: AlcoholPercentage, grams: TargetGrams) -> Calculation {
    let volume_ml = compute_volume_ml(percentage.value(), grams.value());
    tracing::debug!(%percentage, %grams, volume_ml, "calculated drink volume");

    Calculation {
        alcohol_percentage: percentage,
        target_grams: grams,
        volume_ml,
    }
}

/// Validate raw inputs, then calculate
pub fn calculate_raw(percentage: f64, grams: f64) -> Result<Calculation> {
    let percentage = AlcoholPercentage::new(percentage)?;
    let grams = TargetGrams::new(grams)?;
    Ok(calculate(percentage, grams))
}

/// Format a volume the way results are shown to the user
pub fn format_volume(volume_ml: f64) -> String {
    format!("{:.1} mL", volume_ml)
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Calculation Result ===")?;
        writeln!(f, "Recommended volume: {}", format_volume(self.volume_ml))?;
        writeln!(f)?;

        writeln!(f, "Details:")?;
        writeln!(f, "  Alcohol percentage: {}", self.alcohol_percentage)?;
        writeln!(f, "  Target alcohol:     {}", self.target_grams)?;
        writeln!(f, "  Ethanol density:    {} g/mL", ETHANOL_DENSITY_G_PER_ML)?;

        Ok(())
    }
}
