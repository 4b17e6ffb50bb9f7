//! Rounding helpers shared by every money-producing calculation
//!
//! All calculators round half away from zero (`f64::round`). Dependent fields
//! are always derived from the already-rounded upstream value, so a loan's
//! total payment is `round2(rounded_emi * months)`, never the unrounded EMI.

/// Round to 2 decimal places (currency amounts)
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round to 4 decimal places (cross-rate conversions)
pub fn round4(value: f64) -> f64 {
    round_to(value, 4)
}

/// Round to an arbitrary number of decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
