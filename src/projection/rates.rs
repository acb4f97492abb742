//! Rate conversions used by the curve simulator

/// Default nominal annual return rate
pub const DEFAULT_ANNUAL_RATE: f64 = 0.04;

/// Effective monthly rate equivalent to a nominal annual rate
///
/// monthly = (1 + annual)^(1/12) - 1, so twelve compounding steps reproduce
/// exactly one year of growth at the annual rate.
pub fn effective_monthly_rate(annual_rate: f64) -> f64 {
    (1.0 + annual_rate).powf(1.0 / 12.0) - 1.0
}

/// Round to 2 decimal places (cents for amounts, hundredths for percentages)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
