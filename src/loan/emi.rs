//! Equated monthly installment and loan summary

use log::debug;
use serde::{Deserialize, Serialize};

use crate::rounding::round2;

/// EMI and totals for an amortizing loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub emi: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Principal, annual rate and term of a loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub months: i64,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate_percent: f64, months: i64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            months,
        }
    }

    pub fn summary(&self) -> LoanSummary {
        compute_loan_summary(self.principal, self.annual_rate_percent, self.months)
    }
}

/// Two loans evaluated side by side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanComparison {
    #[serde(rename = "loanA")]
    pub loan_a: LoanSummary,
    #[serde(rename = "loanB")]
    pub loan_b: LoanSummary,
}

/// Monthly rate from an annual percentage
pub(crate) fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Calculate the equated monthly installment, rounded to 2 decimals
///
/// Returns 0.0 when `principal <= 0` or `months <= 0`. A zero rate divides the
/// principal evenly; otherwise the amortizing formula is evaluated as
/// `P·r / (1 − (1+r)^−n)`, which stays finite for very long terms.
pub fn compute_emi(principal: f64, annual_rate_percent: f64, months: i64) -> f64 {
    if principal <= 0.0 || months <= 0 {
        return 0.0;
    }

    let r = monthly_rate(annual_rate_percent);
    let n = months as f64;

    if r == 0.0 {
        return round2(principal / n);
    }

    let discount = (1.0 + r).powf(-n);
    round2(principal * r / (1.0 - discount))
}

/// Calculate EMI, total payment and total interest
///
/// Totals are derived from the rounded EMI:
/// `total_payment = round2(emi * months)`, `total_interest = round2(total_payment - principal)`.
pub fn compute_loan_summary(principal: f64, annual_rate_percent: f64, months: i64) -> LoanSummary {
    let emi = compute_emi(principal, annual_rate_percent, months);
    let total_payment = round2(emi * months as f64);
    let total_interest = round2(total_payment - principal);

    debug!(
        "loan summary: principal={} rate={}% months={} -> emi={}",
        principal, annual_rate_percent, months, emi
    );

    LoanSummary {
        emi,
        total_payment,
        total_interest,
    }
}

/// Evaluate two loans with the same rounding policy
pub fn compare_loans(a: &LoanTerms, b: &LoanTerms) -> LoanComparison {
    LoanComparison {
        loan_a: a.summary(),
        loan_b: b.summary(),
    }
}
