//! Error types for input validation

use thiserror::Error;

use crate::models::{GRAMS_MAX, GRAMS_MIN, PERCENTAGE_MAX, PERCENTAGE_MIN};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("alcohol percentage must be between {}% and {}%, got {value}", PERCENTAGE_MIN, PERCENTAGE_MAX)]
    PercentageOutOfRange { value: f64 },

    #[error("target alcohol must be between {} g and {} g, got {value}", GRAMS_MIN, GRAMS_MAX)]
    GramsOutOfRange { value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("could not read {field} from '{input}'")]
    InvalidNumber { field: &'static str, input: String },

    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("volume must be a positive number of mL, got {value}")]
    InvalidVolume { value: f64 },

    #[error("invalid query: {0}")]
    BadQuery(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
