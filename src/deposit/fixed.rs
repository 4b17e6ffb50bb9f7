//! Fixed deposit maturity

use log::debug;

use super::DepositResult;
use crate::rounding::round2;

/// Compound a lump sum: `P · (1 + r/n)^(n·t)`
///
/// Inputs are not clamped. Zero or negative principal, rate or term flow
/// straight through the formula, so `years == 0` returns the principal.
/// `compounding_per_year` must be positive; the HTTP layer rejects zero.
pub fn compute_fd_maturity(
    principal: f64,
    annual_rate_percent: f64,
    years: f64,
    compounding_per_year: u32,
) -> DepositResult {
    let r = annual_rate_percent / 100.0;
    let n = compounding_per_year as f64;

    let maturity = principal * (1.0 + r / n).powf(n * years);
    let interest = maturity - principal;

    debug!(
        "fd: principal={} rate={}% years={} n={} -> maturity={}",
        principal, annual_rate_percent, years, compounding_per_year, maturity
    );

    DepositResult {
        maturity: round2(maturity),
        interest: round2(interest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deposit::DEFAULT_COMPOUNDING_PER_YEAR;

    #[test]
    fn test_reference_quarterly() {
        let r = compute_fd_maturity(10_000.0, 7.0, 1.0, DEFAULT_COMPOUNDING_PER_YEAR);
        assert_eq!(r.maturity, 10_718.59);
        assert_eq!(r.interest, 718.59);
    }

    #[test]
    fn test_zero_years_no_growth() {
        for n in [1, 2, 4, 12, 365] {
            let r = compute_fd_maturity(25_000.0, 6.5, 0.0, n);
            assert_eq!(r.maturity, 25_000.0);
            assert_eq!(r.interest, 0.0);
        }
    }

    #[test]
    fn test_more_frequent_compounding_earns_more() {
        let annual = compute_fd_maturity(10_000.0, 8.0, 5.0, 1);
        let monthly = compute_fd_maturity(10_000.0, 8.0, 5.0, 12);
        assert!(monthly.maturity > annual.maturity);
        assert_eq!(annual.maturity, 14_693.28);
    }

    #[test]
    fn test_negative_principal_is_not_clamped() {
        let r = compute_fd_maturity(-1_000.0, 10.0, 1.0, 1);
        assert_eq!(r.maturity, -1_100.0);
        assert_eq!(r.interest, -100.0);
    }

    #[test]
    fn test_fractional_years() {
        let r = compute_fd_maturity(10_000.0, 12.0, 0.5, 12);
        // 10000 * 1.01^6
        assert_eq!(r.maturity, 10_615.2);
    }
}
