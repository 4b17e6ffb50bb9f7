//! Recurring deposit maturity

use log::debug;

use super::DepositResult;
use crate::rounding::round2;

/// Maturity of equal monthly installments at a monthly rate `i = rate/12`
///
/// Installments are made at the start of each month (annuity due):
/// `M = R · ((1+i)^n − 1) / i · (1+i)`.
///
/// Returns a zero result when `monthly_installment <= 0` or `months <= 0`.
/// A zero rate returns the sum of installments with no interest.
pub fn compute_rd_maturity(
    monthly_installment: f64,
    annual_rate_percent: f64,
    months: i64,
) -> DepositResult {
    if monthly_installment <= 0.0 || months <= 0 {
        return DepositResult::zero();
    }

    let i = annual_rate_percent / 100.0 / 12.0;
    let n = months as f64;
    let deposited = monthly_installment * n;

    if i == 0.0 {
        return DepositResult {
            maturity: round2(deposited),
            interest: 0.0,
        };
    }

    let factor = ((1.0 + i).powf(n) - 1.0) / i;
    let maturity = monthly_installment * factor * (1.0 + i);
    let interest = maturity - deposited;

    debug!(
        "rd: installment={} rate={}% months={} -> maturity={}",
        monthly_installment, annual_rate_percent, months, maturity
    );

    DepositResult {
        maturity: round2(maturity),
        interest: round2(interest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate() {
        let r = compute_rd_maturity(1_500.0, 0.0, 24);
        assert_eq!(r.maturity, 36_000.0);
        assert_eq!(r.interest, 0.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(compute_rd_maturity(0.0, 7.0, 12), DepositResult::zero());
        assert_eq!(compute_rd_maturity(-10.0, 7.0, 12), DepositResult::zero());
        assert_eq!(compute_rd_maturity(1_000.0, 7.0, 0), DepositResult::zero());
        assert_eq!(compute_rd_maturity(1_000.0, 7.0, -6), DepositResult::zero());
    }

    #[test]
    fn test_single_month_is_annuity_due() {
        // One installment earns a full month of interest
        let r = compute_rd_maturity(1_000.0, 12.0, 1);
        assert_eq!(r.maturity, 1_010.0);
        assert_eq!(r.interest, 10.0);
    }

    #[test]
    fn test_twelve_months() {
        let r = compute_rd_maturity(1_000.0, 12.0, 12);
        // 1000 * ((1.01^12 - 1) / 0.01) * 1.01
        let expected = 1_000.0 * ((1.01f64.powi(12) - 1.0) / 0.01) * 1.01;
        assert_relative_eq!(r.maturity, round2(expected));
        assert_eq!(r.maturity, 12_809.33);
        assert_eq!(r.interest, 809.33);
    }
}
