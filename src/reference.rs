//! Static reference information shown next to a result

use std::fmt;

use crate::calculator::ETHANOL_DENSITY_G_PER_ML;

/// Typical alcohol percentage range of a kind of beverage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeverageRange {
    pub name: &'static str,
    pub min_percent: f64,
    pub max_percent: f64,
}

impl fmt::Display for BeverageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}%", self.min_percent, self.max_percent)
    }
}

pub const BEVERAGES: &[BeverageRange] = &[
    BeverageRange { name: "Beer", min_percent: 4.0, max_percent: 6.0 },
    BeverageRange { name: "Wine", min_percent: 11.0, max_percent: 15.0 },
    BeverageRange { name: "Sake", min_percent: 15.0, max_percent: 16.0 },
    BeverageRange { name: "Shochu", min_percent: 20.0, max_percent: 25.0 },
    BeverageRange { name: "Whisky", min_percent: 40.0, max_percent: 43.0 },
    BeverageRange { name: "Vodka", min_percent: 40.0, max_percent: 50.0 },
];

/// Source of the daily intake guidance
pub const GUIDANCE_SOURCE: &str = "Ministry of Health, Labour and Welfare (Japan)";

/// Daily intake guidance as (group, amount) rows
pub const INTAKE_GUIDANCE: &[(&str, &str)] = &[
    ("Men", "about 20 g per day on average"),
    ("Women", "about 1/2 to 2/3 of the amount for men"),
];

pub const GUIDANCE_NOTE: &str = "Tolerance varies between individuals. \
    Physical condition and medication change what a moderate amount is.";

/// Notes shown at the bottom of every page
pub const CAUTIONS: &[&str] = &[
    "These results are reference values only",
    "Take your own constitution and health into account",
    "Drink in moderation",
    "Drinking under the age of 20 is prohibited by law",
];

pub const FORMULA: &str =
    "volume (mL) = target alcohol (g) x 100 / (alcohol percentage (%) x ethanol density (g/mL))";

pub fn density_note() -> String {
    format!("Ethanol density: {} g/mL", ETHANOL_DENSITY_G_PER_ML)
}

/// Terminal rendering of the reference tables
pub struct ReferenceTables;

impl fmt::Display for ReferenceTables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Typical alcohol percentages:")?;
        for b in BEVERAGES {
            writeln!(f, "  {:<10} {:>8}", b.name, b.to_string())?;
        }
        writeln!(f)?;

        writeln!(f, "Moderate intake ({}):", GUIDANCE_SOURCE)?;
        for (group, amount) in INTAKE_GUIDANCE {
            writeln!(f, "  {:<10} {}", group, amount)?;
        }
        writeln!(f, "  Note: {}", GUIDANCE_NOTE)?;

        Ok(())
    }
}

/// Terminal rendering of the closing cautions
pub struct Cautions;

impl fmt::Display for Cautions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cautions:")?;
        for c in CAUTIONS {
            writeln!(f, "  - {}", c)?;
        }
        Ok(())
    }
}
