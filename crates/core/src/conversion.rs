//! Conversion Arithmetic
//!
//! Turns the two numeric slot parts a user speaks ("two point five") into an
//! `Amount` and applies a unit price to it, in either direction.

use crate::price::{CryptoAsset, FiatCurrency};
use std::fmt;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),
    #[error("unit price must be positive, got {0}")]
    NonPositivePrice(f64),
}

/// A non-negative, finite quantity as spoken by the user.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    /// Builds an amount from the integer and decimal parts of a spoken number.
    ///
    /// The parts are joined with a literal `.`, so `("2", "5")` is `2.5` and
    /// `("2", "05")` is `2.05`. A missing or blank part counts as `"0"`.
    pub fn from_parts(integer: Option<&str>, decimal: Option<&str>) -> Result<Self, ConversionError> {
        let integer = non_blank(integer).unwrap_or("0");
        let decimal = non_blank(decimal).unwrap_or("0");
        let text = format!("{integer}.{decimal}");

        match text.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(Self(value)),
            _ => Err(ConversionError::InvalidAmount(text)),
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(self.0))
    }
}

fn non_blank(part: Option<&str>) -> Option<&str> {
    part.map(str::trim).filter(|s| !s.is_empty())
}

/// Everything needed to answer one conversion question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub amount: Amount,
    pub asset: CryptoAsset,
    pub currency: FiatCurrency,
}

impl ConversionRequest {
    /// Fiat value of `amount` units of the asset.
    pub fn worth(&self, unit_price: f64) -> Result<f64, ConversionError> {
        convert(self.amount, unit_price)
    }

    /// Units of the asset that `amount` of fiat buys.
    pub fn affordable(&self, unit_price: f64) -> Result<f64, ConversionError> {
        affordable_quantity(self.amount, unit_price)
    }
}

fn check_price(unit_price: f64) -> Result<f64, ConversionError> {
    if unit_price.is_nan() || unit_price <= 0.0 {
        return Err(ConversionError::NonPositivePrice(unit_price));
    }
    Ok(unit_price)
}

pub fn convert(amount: Amount, unit_price: f64) -> Result<f64, ConversionError> {
    Ok(amount.value() * check_price(unit_price)?)
}

pub fn affordable_quantity(fiat: Amount, unit_price: f64) -> Result<f64, ConversionError> {
    Ok(fiat.value() / check_price(unit_price)?)
}

/// Shortest text that reads back as the same `f64`, never in exponent form,
/// always with a decimal point for whole numbers (`25000.0`, `2.5`, `0.00005`).
pub fn format_number(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}
