//! Month-by-month amortization schedule

use serde::{Deserialize, Serialize};

use super::emi::{compute_emi, monthly_rate};
use crate::error::CalcError;
use crate::rounding::round2;

/// Longest schedule that will be built (100 years of monthly rows)
pub const MAX_SCHEDULE_MONTHS: i64 = 1200;

/// A single month of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub opening_balance: f64,
    pub emi: f64,
    pub interest: f64,
    pub principal: f64,
    pub closing_balance: f64,
}

/// Build the amortization schedule for a loan
///
/// Uses the rounded EMI from [`compute_emi`]. Each month's interest is
/// `round2(opening_balance * r)`. The final month pays off whatever balance
/// remains, so its installment can differ from the EMI by the accumulated
/// rounding and the closing balance is exactly zero.
///
/// Degenerate loans (no principal or no term) have an empty schedule. Terms
/// longer than [`MAX_SCHEDULE_MONTHS`] are rejected.
pub fn amortization_schedule(
    principal: f64,
    annual_rate_percent: f64,
    months: i64,
) -> Result<Vec<AmortizationRow>, CalcError> {
    if months > MAX_SCHEDULE_MONTHS {
        return Err(CalcError::ScheduleTooLong {
            months,
            max: MAX_SCHEDULE_MONTHS,
        });
    }

    let emi = compute_emi(principal, annual_rate_percent, months);
    if emi == 0.0 {
        return Ok(Vec::new());
    }

    let r = monthly_rate(annual_rate_percent);
    // 1..=MAX_SCHEDULE_MONTHS here, always fits
    let months = months as u32;
    let mut rows = Vec::with_capacity(months as usize);
    let mut balance = round2(principal);

    for month in 1..=months {
        let interest = round2(balance * r);
        let (installment, principal_paid) = if month == months {
            (round2(balance + interest), balance)
        } else {
            (emi, round2(emi - interest))
        };
        let closing = round2(balance - principal_paid);

        rows.push(AmortizationRow {
            month,
            opening_balance: balance,
            emi: installment,
            interest,
            principal: principal_paid,
            closing_balance: closing,
        });

        balance = closing;
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_schedule_closes_at_zero() {
        let rows = amortization_schedule(100_000.0, 10.0, 12).unwrap();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].opening_balance, 100_000.0);
        assert_eq!(rows[0].interest, 833.33);
        assert_eq!(rows[0].principal, 7958.26);
        assert_eq!(rows.last().unwrap().closing_balance, 0.0);
    }

    #[test]
    fn test_schedule_principal_sums_to_loan() {
        let rows = amortization_schedule(250_000.0, 8.5, 60).unwrap();
        let repaid: f64 = rows.iter().map(|r| r.principal).sum();
        assert_abs_diff_eq!(repaid, 250_000.0, epsilon = 0.01);

        // Balance is non-increasing
        for pair in rows.windows(2) {
            assert!(pair[1].opening_balance <= pair[0].opening_balance);
        }
    }

    #[test]
    fn test_zero_rate_schedule() {
        let rows = amortization_schedule(1_000.0, 0.0, 3).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.interest == 0.0));
        assert_eq!(rows[2].emi, 333.34);
        assert_eq!(rows[2].closing_balance, 0.0);
    }

    #[test]
    fn test_degenerate_schedule_is_empty() {
        assert!(amortization_schedule(0.0, 10.0, 12).unwrap().is_empty());
        assert!(amortization_schedule(10_000.0, 10.0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_schedule_term_cap() {
        let rows = amortization_schedule(1_000.0, 10.0, MAX_SCHEDULE_MONTHS).unwrap();
        assert_eq!(rows.len(), MAX_SCHEDULE_MONTHS as usize);

        for months in [MAX_SCHEDULE_MONTHS + 1, 5_000_000_000, i64::MAX] {
            let err = amortization_schedule(1_000.0, 10.0, months).unwrap_err();
            assert_eq!(
                err,
                CalcError::ScheduleTooLong {
                    months,
                    max: MAX_SCHEDULE_MONTHS
                }
            );
        }
    }
}
