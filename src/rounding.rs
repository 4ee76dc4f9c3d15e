//! Decimal rounding shared by team strengths, odds and currency amounts.

/// Round `value` to `decimals` places, halves away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Round to one decimal place (odds).
pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Round to two decimal places (strengths, currency).
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// True if `value` carries no more than `decimals` places.
#[cfg(test)]
pub(crate) fn has_at_most_decimals(value: f64, decimals: u32) -> bool {
    (round_to(value, decimals) - value).abs() < 1e-9
}
