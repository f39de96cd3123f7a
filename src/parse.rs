//! Parsing of quantities typed by the user
//!
//! Accepts a plain decimal number with an optional unit suffix, so that
//! `5`, `5.0%`, `12.5 %`, `20g` and `20 g` all read as numbers. Exponent
//! notation (`5e0`) is accepted as browsers submit it from number inputs.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CalcError, Result};

static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:e[+-]?\d+)?)\s*(%|g|grams?|ml)?\s*$")
        .expect("quantity pattern is valid")
});

/// Parse an alcohol percentage such as `5`, `5.5%` or `40 %`
pub fn parse_percentage(input: &str) -> Result<f64> {
    parse_quantity(input, "alcohol percentage", &["%"])
}

/// Parse a gram amount such as `20`, `20g` or `12.5 grams`
pub fn parse_grams(input: &str) -> Result<f64> {
    parse_quantity(input, "target alcohol", &["g", "gram", "grams"])
}

/// Parse a volume such as `350`, `350ml` or `500 mL`; must be positive and finite
pub fn parse_volume_ml(input: &str) -> Result<f64> {
    let value = parse_quantity(input, "volume", &["ml"])?;
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::InvalidVolume { value });
    }
    Ok(value)
}

fn parse_quantity(input: &str, field: &'static str, units: &[&str]) -> Result<f64> {
    let invalid = || CalcError::InvalidNumber {
        field,
        input: input.to_string(),
    };

    let cap = QUANTITY_RE.captures(input).ok_or_else(invalid)?;

    if let Some(unit) = cap.get(2) {
        let unit = unit.as_str().to_lowercase();
        if !units.contains(&unit.as_str()) {
            return Err(invalid());
        }
    }

    cap[1].parse::<f64>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_forms() {
        assert_eq!(parse_percentage("5").unwrap(), 5.0);
        assert_eq!(parse_percentage("5.5%").unwrap(), 5.5);
        assert_eq!(parse_percentage(" 40 % ").unwrap(), 40.0);
        assert_eq!(parse_percentage(".5").unwrap(), 0.5);
    }

    #[test]
    fn test_grams_forms() {
        assert_eq!(parse_grams("20").unwrap(), 20.0);
        assert_eq!(parse_grams("20g").unwrap(), 20.0);
        assert_eq!(parse_grams("12.5 grams").unwrap(), 12.5);
        assert_eq!(parse_grams("1 G").unwrap(), 1.0);
    }

    #[test]
    fn test_volume_forms() {
        assert_eq!(parse_volume_ml("350ml").unwrap(), 350.0);
        assert_eq!(parse_volume_ml("500 mL").unwrap(), 500.0);
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(parse_percentage("5e0").unwrap(), 5.0);
        assert_eq!(parse_grams("2e1").unwrap(), 20.0);
        assert_eq!(parse_grams("2.5E-1 g").unwrap(), 0.25);
        assert!(parse_percentage("5e").is_err());
    }

    #[test]
    fn test_volume_must_be_positive_and_finite() {
        let huge = format!("1{}", "0".repeat(400));
        assert!(matches!(
            parse_volume_ml(&huge),
            Err(CalcError::InvalidVolume { value }) if value.is_infinite()
        ));
        assert!(matches!(
            parse_volume_ml("1e999ml"),
            Err(CalcError::InvalidVolume { .. })
        ));
        assert_eq!(
            parse_volume_ml("0ml"),
            Err(CalcError::InvalidVolume { value: 0.0 })
        );
    }

    #[test]
    fn test_wrong_unit_rejected() {
        assert_eq!(
            parse_percentage("20g"),
            Err(CalcError::InvalidNumber {
                field: "alcohol percentage",
                input: "20g".to_string(),
            })
        );
        assert!(parse_grams("5%").is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(parse_percentage("").is_err());
        assert!(parse_percentage("abc").is_err());
        assert!(parse_grams("1.2.3").is_err());
        assert!(parse_grams("NaN").is_err());
    }

    #[test]
    fn test_negative_parses_for_range_check() {
        assert_eq!(parse_percentage("-3").unwrap(), -3.0);
    }
}
