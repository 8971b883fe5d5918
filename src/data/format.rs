//! Number formatting shared by the terminal and web front ends

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

const MAGNITUDES: [&str; 9] = ["", "k", "M", "B", "T", "P", "E", "Z", "Y"];

/// Human readable magnitude: 1234567 -> "1.23M", 1000 -> "1k".
/// Trailing zeros after the decimal point are dropped.
pub fn millify(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let idx = if value == 0.0 {
        0
    } else {
        (value.abs().log10() / 3.0).floor().clamp(0.0, (MAGNITUDES.len() - 1) as f64) as usize
    };

    let scaled = value / 10f64.powi(3 * idx as i32);
    let rounded = format!("{:.*}", precision, scaled);
    let trimmed = Decimal::from_str(&rounded)
        .map(|d| d.normalize().to_string())
        .unwrap_or(rounded);

    format!("{}{}", trimmed, MAGNITUDES[idx])
}

pub fn millify_decimal(value: Decimal, precision: usize) -> String {
    millify(value.to_f64().unwrap_or(0.0), precision)
}

/// Rate against USD, rounded to three decimals
pub fn rate(value: Decimal) -> String {
    format!("{:.3}", round(value, 3))
}

pub fn percent(value: Decimal) -> String {
    format!("{:.2} %", round(value, 2))
}

// Decimal's `{:.N}` truncates
fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
}
