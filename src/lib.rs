//! Alcohol Intake Calculator
//!
//! Converts a target amount of pure alcohol and a drink's alcohol
//! percentage into the volume of that drink to pour.

pub mod calculator;
pub mod error;
pub mod logging;
pub mod models;
pub mod parse;
pub mod reference;
pub mod web;

pub use calculator::{calculate, calculate_raw, compute_volume_ml};
pub use error::CalcError;
pub use models::{AlcoholPercentage, Calculation, TargetGrams};
