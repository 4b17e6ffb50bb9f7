//! Heuristic credit score estimator
//!
//! This is a lightweight demo heuristic for education and what-if exploration.
//! It is NOT a regulatory or bureau scoring model and must not be used for
//! lending decisions. It maps five inputs to the familiar 300–850 range.

use serde::{Deserialize, Serialize};

/// Lowest possible score
pub const MIN_SCORE: u16 = 300;
/// Highest possible score
pub const MAX_SCORE: u16 = 850;

const WEIGHT_PAYMENT_HISTORY: f64 = 0.35;
const WEIGHT_UTILIZATION: f64 = 0.30;
const WEIGHT_CREDIT_AGE: f64 = 0.15;
const WEIGHT_INQUIRIES: f64 = 0.10;
const WEIGHT_DTI: f64 = 0.10;

/// Inputs to the estimator. Out-of-range values are clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditScoreInput {
    /// Share of on-time payments, 0–100
    pub payment_history_pct: f64,
    /// Revolving credit utilization, 0–100
    pub utilization_pct: f64,
    /// Age of the oldest account in years
    pub credit_age_years: f64,
    /// Hard inquiries in the recent window
    pub inquiries: i64,
    /// Debt-to-income ratio, 0–100
    pub dti_pct: f64,
}

/// Qualitative band for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl CreditBand {
    /// Inclusive lower bounds checked from the top: 750, 700, 650
    pub fn from_score(score: u16) -> Self {
        if score >= 750 {
            CreditBand::Excellent
        } else if score >= 700 {
            CreditBand::Good
        } else if score >= 650 {
            CreditBand::Fair
        } else {
            CreditBand::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CreditBand::Excellent => "Excellent",
            CreditBand::Good => "Good",
            CreditBand::Fair => "Fair",
            CreditBand::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for CreditBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditScoreResult {
    pub score: u16,
    pub band: CreditBand,
}

fn clamp_pct(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Weighted 0–100 composite of the five subscores
fn composite_score(input: &CreditScoreInput) -> f64 {
    let payment = clamp_pct(input.payment_history_pct);
    let utilization = clamp_pct(input.utilization_pct);
    let age = input.credit_age_years.max(0.0);
    let inquiries = input.inquiries.max(0) as f64;
    let dti = clamp_pct(input.dti_pct);

    let s_payment = payment;
    let s_util = (100.0 - utilization).max(0.0);
    let s_age = (age * 10.0).min(100.0); // saturates at 10 years
    let s_inquiries = (100.0 - inquiries * 10.0).max(0.0);
    let s_dti = (100.0 - dti).max(0.0);

    WEIGHT_PAYMENT_HISTORY * s_payment
        + WEIGHT_UTILIZATION * s_util
        + WEIGHT_CREDIT_AGE * s_age
        + WEIGHT_INQUIRIES * s_inquiries
        + WEIGHT_DTI * s_dti
}

/// Estimate a 300–850 score and its band
pub fn estimate_credit_score(input: &CreditScoreInput) -> CreditScoreResult {
    let score_100 = composite_score(input);
    let span = (MAX_SCORE - MIN_SCORE) as f64;
    let raw = MIN_SCORE as f64 + (score_100 / 100.0) * span;
    let score = (raw.round() as u16).clamp(MIN_SCORE, MAX_SCORE);

    CreditScoreResult {
        score,
        band: CreditBand::from_score(score),
    }
}
